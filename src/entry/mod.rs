//! Annotation entries shared by all tiers.

mod types;

pub use types::{Interval, LogEntry, Phone, Word, WordKind, MISSING};
