pub mod record_analyzer;

pub use record_analyzer::{RecordAnalyzer, RecordDay, RecordSummary};
