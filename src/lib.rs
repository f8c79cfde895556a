pub mod api;
pub mod batch;
pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod geometry;
pub mod landmark;
pub mod resolver;
pub mod rules;
pub mod server;
// cmd and reports belong to the binary (main.rs).

pub use classifier::{classify, Classification, Classifier, DebugInfo, ErrorCode};
pub use landmark::Landmark;
pub use rules::{Gesture, Reason};
