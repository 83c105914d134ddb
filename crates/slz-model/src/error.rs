use thiserror::Error;

/// Errors surfaced by the extraction run.
///
/// Every variant's `Display` output is the exact message reported to the
/// consuming service inside the `[{"error":{"message":...}}]` payload, so the
/// wording here is part of the output contract.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The input parameter was missing, empty, or the `#` placeholder.
    #[error("The input zip file is required")]
    InputRequired,

    /// The input path does not point at a readable file.
    #[error("The input is not a zip file")]
    NotZip,

    /// The input file exists but is not a well-formed zip container.
    #[error("The input is wrong file format")]
    WrongFormat,

    /// One or more required datasets were absent after discovery.
    #[error("The required layer does not exist in zipped fgdb")]
    MissingLayer,

    /// The join produced no usable result.
    #[error("No output is generated")]
    NoOutput,

    /// A zone row carries a reference id with no matching reference record.
    #[error("zone {zone_id} references unknown rca zone {reference_id}")]
    UnknownReference {
        zone_id: String,
        reference_id: String,
    },

    /// Archive extraction failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// A dataset table could not be read.
    #[error("table error: {0}")]
    Table(String),

    /// I/O error during file operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a geometry payload or while serializing output.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::ExtractError;

    #[test]
    fn messages_match_output_contract() {
        assert_eq!(
            ExtractError::InputRequired.to_string(),
            "The input zip file is required"
        );
        assert_eq!(
            ExtractError::NotZip.to_string(),
            "The input is not a zip file"
        );
        assert_eq!(
            ExtractError::WrongFormat.to_string(),
            "The input is wrong file format"
        );
        assert_eq!(
            ExtractError::MissingLayer.to_string(),
            "The required layer does not exist in zipped fgdb"
        );
        assert_eq!(
            ExtractError::NoOutput.to_string(),
            "No output is generated"
        );
    }

    #[test]
    fn unknown_reference_names_both_ids() {
        let err = ExtractError::UnknownReference {
            zone_id: "Z1".to_string(),
            reference_id: "R9".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Z1"));
        assert!(message.contains("R9"));
    }
}
