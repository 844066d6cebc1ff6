use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiocalcError {
    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred while writing a report: {0}")]
    ReportError(#[from] anyhow::Error),
}
