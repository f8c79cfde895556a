use crate::api::{handle_request, parse_body, HandsignResponse};
use crate::classifier::Classifier;
use crate::error::SsResult;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// One CSV row per input line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchRecord {
    pub line: usize,
    pub success: bool,
    pub sign: String,
    pub confidence: f64,
    /// Reason on success, error code otherwise (empty for pinch).
    pub code: String,
}

impl BatchRecord {
    fn from_response(line: usize, resp: &HandsignResponse) -> Self {
        match resp {
            HandsignResponse::Success {
                sign,
                confidence,
                debug,
                ..
            } => Self {
                line,
                success: true,
                sign: sign.to_string(),
                confidence: *confidence,
                code: debug
                    .error
                    .map(|e| e.to_string())
                    .or_else(|| debug.reason.map(|r| r.to_string()))
                    .unwrap_or_default(),
            },
            HandsignResponse::Failure { error, .. } => Self {
                line,
                success: false,
                sign: String::new(),
                confidence: 0.0,
                code: error.to_string(),
            },
        }
    }
}

/// Reads JSON Lines request bodies and classifies them in parallel.
/// Blank lines are skipped; line numbers are 1-based.
pub fn run<R: BufRead>(classifier: &Classifier, reader: R) -> SsResult<Vec<BatchRecord>> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push((i + 1, line));
    }

    info!("Classifying {} frames", lines.len());

    let records: Vec<BatchRecord> = lines
        .par_iter()
        .map(|(n, raw)| {
            let resp = handle_request(classifier, &parse_body(raw.as_bytes()));
            if !resp.is_success() {
                warn!("line {}: no landmarks", n);
            }
            BatchRecord::from_response(*n, &resp)
        })
        .collect();

    Ok(records)
}

pub fn write_csv<W: Write>(records: &[BatchRecord], writer: W) -> SsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Count per label; failed lines are grouped under the error code.
pub fn summarize(records: &[BatchRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in records {
        let key = if r.success {
            r.sign.clone()
        } else {
            r.code.clone()
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
