use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::Section;

/// One listing reshaped for the import endpoint.
///
/// `job_data` is the listing as found in the report, every field passed
/// through untouched, with `source` set to the section it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub job_id: String,
    pub job_data: Map<String, Value>,
}

impl ImportRecord {
    /// Build a record from a raw listing, or None if it has no usable `url`.
    pub fn from_listing(listing: &Value, section: Section) -> Option<Self> {
        let fields = listing.as_object()?;
        let url = fields
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())?;

        let mut job_data = fields.clone();
        job_data.insert(
            "source".to_string(),
            Value::String(section.as_str().to_string()),
        );

        Some(Self {
            job_id: url.to_string(),
            job_data,
        })
    }

    pub fn source(&self) -> Option<&str> {
        self.job_data.get("source").and_then(Value::as_str)
    }
}

/// Body of the single bulk import request: `{"jobs": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkPayload {
    pub jobs: Vec<ImportRecord>,
}

impl BulkPayload {
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Collect import records from a parsed jobs report.
///
/// Sections are visited in `Section::ALL` order and listings in array order.
/// Absent sections, non-array sections and listings without a non-empty
/// string `url` contribute nothing.
pub fn build_payload(document: &Value) -> BulkPayload {
    let Some(sections) = document.as_object() else {
        warn!("Jobs report is not a JSON object, nothing to import");
        return BulkPayload::default();
    };

    let mut jobs = Vec::new();

    for section in Section::ALL {
        let Some(value) = sections.get(section.as_str()) else {
            debug!(section = %section, "Section not present");
            continue;
        };

        let Some(listings) = value.as_array() else {
            warn!(section = %section, "Section is not an array, skipping");
            continue;
        };

        let before = jobs.len();
        jobs.extend(
            listings
                .iter()
                .filter_map(|listing| ImportRecord::from_listing(listing, section)),
        );

        let eligible = jobs.len() - before;
        debug!(
            section = %section,
            listings = listings.len(),
            eligible,
            skipped = listings.len() - eligible,
            "Collected listings"
        );
    }

    BulkPayload { jobs }
}
