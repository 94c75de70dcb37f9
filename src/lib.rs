pub mod client;
pub mod config;
pub mod error;
pub mod importer;
pub mod listings;
pub mod logging;
pub mod report;

pub use client::{HttpJobSink, ImportSummary, JobSink};
pub use error::ImportError;
pub use importer::{Importer, Outcome};
pub use listings::{BulkPayload, ImportRecord, Section};
