use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::client::{ImportSummary, JobSink};
use crate::error::ImportError;
use crate::listings::{BulkPayload, build_payload, load_document};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No listing had a usable `url`; nothing was sent.
    NoJobs,
    /// Payload was built but deliberately not sent.
    DryRun(BulkPayload),
    /// Endpoint accepted the payload.
    Imported { jobs: usize, summary: ImportSummary },
}

/// Drives one import: report file in, one bulk request out.
pub struct Importer {
    sink: Arc<dyn JobSink>,
    dry_run: bool,
}

impl Importer {
    pub fn new(sink: Arc<dyn JobSink>) -> Self {
        Self {
            sink,
            dry_run: false,
        }
    }

    /// Build the payload but skip the request.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.sink.endpoint()
    }

    /// Load `path` and reshape its listings into a bulk payload.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn prepare(&self, path: &Path) -> Result<BulkPayload, ImportError> {
        let document = load_document(path)?;
        let payload = build_payload(&document);
        info!(jobs = payload.len(), "Payload built");
        Ok(payload)
    }

    /// Submit a prepared payload in a single request.
    ///
    /// Never retries. An empty payload returns `Outcome::NoJobs` without
    /// touching the sink.
    pub async fn send(&self, payload: BulkPayload) -> Result<Outcome, ImportError> {
        if payload.is_empty() {
            info!("No eligible listings, skipping request");
            return Ok(Outcome::NoJobs);
        }

        if self.dry_run {
            info!(jobs = payload.len(), "Dry run, payload not sent");
            return Ok(Outcome::DryRun(payload));
        }

        let summary = self.sink.submit(&payload).await?;
        info!(
            added = %summary.added,
            skipped = %summary.skipped,
            "Import accepted"
        );

        Ok(Outcome::Imported {
            jobs: payload.len(),
            summary,
        })
    }

    /// `prepare` then `send`.
    pub async fn run(&self, path: &Path) -> Result<Outcome, ImportError> {
        let payload = self.prepare(path)?;
        self.send(payload).await
    }
}
