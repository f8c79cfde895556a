use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use signsense::config::ClassifierConfig;
use signsense::rules::{self, Gesture};
use std::collections::BTreeMap;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_rule_table(config: &ClassifierConfig) {
    let mut table = new_table();

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Gesture").add_attribute(Attribute::Bold),
        Cell::new("Conf").fg(Color::Cyan),
        Cell::new("Reason"),
    ]);

    for (i, rule) in rules::table().enumerate() {
        let reason = match (rule.reason, rule.gesture) {
            (Some(r), _) => r.to_string(),
            (None, Gesture::Pinch) => format!("pinch < {:.3}", config.pinch_threshold),
            (None, _) => "-".to_string(),
        };
        let gesture = Cell::new(rule.gesture.label());
        let gesture = if rule.gesture == Gesture::Unknown {
            gesture.fg(Color::Red)
        } else {
            gesture
        };

        table.add_row(vec![
            Cell::new(i + 1),
            gesture,
            Cell::new(format!("{:.2}", rule.confidence)).fg(Color::Cyan),
            Cell::new(reason),
        ]);
    }

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n📜 === RULE TABLE (first match wins) === 📜");
    println!(
        "extension margin: {:.3}   min landmarks: {}",
        config.extension_margin, config.min_landmarks
    );
    println!("{}", table);
}

pub fn print_summary(counts: &BTreeMap<String, usize>, total: usize) {
    let mut table = new_table();

    table.set_header(vec![
        Cell::new("Sign").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Share").fg(Color::Green),
    ]);

    for (sign, &count) in counts {
        let share = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(sign),
            Cell::new(count),
            Cell::new(format!("{:.1}%", share)).fg(Color::Green),
        ]);
    }

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    // Summary goes to stderr so a CSV on stdout stays clean
    eprintln!("\n📊 === BATCH SUMMARY ({} frames) === 📊", total);
    eprintln!("{}", table);
}
