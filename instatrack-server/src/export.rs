use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use instatrack_types::Dataset;
use thiserror::Error;

/// Header of the flattened dataset, one column per [`instatrack_types::ExportRow`] field
pub const CSV_COLUMNS: [&str; 17] = [
    "username",
    "followers",
    "following",
    "posts_count",
    "engagement_rate",
    "verified",
    "date",
    "timestamp",
    "hour",
    "day_of_week",
    "likes",
    "comments",
    "engagement",
    "content_type",
    "posted_time",
    "hashtags_count",
    "hashtags",
];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    Writer(String),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for export formats
pub trait Exporter {
    fn content_type(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn export(&self, dataset: &Dataset) -> Result<String, ExportError>;
}

/// Download name, e.g. `instagram_competitor_analysis_20240615_120000.csv`
pub fn export_filename(extension: &str, at: DateTime<Utc>) -> String {
    format!(
        "instagram_competitor_analysis_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        extension
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for CsvExporter {
    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn export(&self, dataset: &Dataset) -> Result<String, ExportError> {
        // Header is written by hand so an empty dataset still gets one
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(vec![]);
        wtr.write_record(CSV_COLUMNS)?;

        let rows = dataset.rows();
        for row in &rows {
            wtr.serialize(row)?;
        }

        let data = wtr
            .into_inner()
            .map_err(|e| ExportError::Writer(e.to_string()))?;

        tracing::info!("Exported {} rows as CSV", rows.len());
        Ok(String::from_utf8(data)?)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for JsonExporter {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn export(&self, dataset: &Dataset) -> Result<String, ExportError> {
        let rows = dataset.rows();
        tracing::info!("Exported {} rows as JSON", rows.len());
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}
