//! The extraction pipeline: validate -> discover -> join -> serialize.

use std::path::Path;

use tracing::{info, info_span, warn};

use slz_ingest::{discover_datasets, extract_archive, load_container, validate_zip};
use slz_model::{ExtractConfig, ExtractError, Result};
use slz_report::render_features;
use slz_transform::join_records;

/// Run one extraction and return the JSON output parameter.
///
/// Every failure short-circuits; the caller renders it as the error payload.
/// There is no partial success: the result is the full feature array or
/// nothing.
pub fn run_extract(input: Option<&Path>, config: &ExtractConfig) -> Result<String> {
    let span = info_span!("extract");
    let _guard = span.enter();

    // =====================================================================
    // Stage 1: Validate the input parameter
    // =====================================================================
    let input = required_input(input)?;
    info!(input = %input.display(), "processing input archive");

    // =====================================================================
    // Stage 2: Validate the archive format
    // =====================================================================
    validate_zip(input)?;

    // =====================================================================
    // Stage 3: Extract and discover the required datasets
    // =====================================================================
    let root = extract_archive(input)?;
    let required = config.datasets.required();
    let found = discover_datasets(&root, &required, &config.metadata)?;
    if !found.is_complete(&required) {
        for name in found.missing(&required) {
            warn!(dataset = name, "required dataset not found in zipped fgdb");
        }
        return Err(ExtractError::MissingLayer);
    }

    // =====================================================================
    // Stage 4: Load rows and metadata, run the join
    // =====================================================================
    let container = load_container(&found, config)?;
    let features = join_records(
        &container.zones,
        &container.geometries,
        &container.references,
        &container.zone_schema,
        &container.domains,
        config,
    )?;

    // =====================================================================
    // Stage 5: Serialize. An empty feature list is the NoOutput error, never
    // an empty array.
    // =====================================================================
    if features.is_empty() {
        return Err(ExtractError::NoOutput);
    }
    info!(features = features.len(), "join complete");
    render_features(&features)
}

/// Reject a missing, empty, or `#` placeholder input parameter.
fn required_input(input: Option<&Path>) -> Result<&Path> {
    let Some(path) = input else {
        return Err(ExtractError::InputRequired);
    };
    let raw = path.as_os_str();
    if raw.is_empty() || raw == "#" {
        return Err(ExtractError::InputRequired);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::required_input;
    use slz_model::ExtractError;
    use std::path::Path;

    #[test]
    fn placeholder_inputs_are_rejected() {
        assert!(matches!(
            required_input(None),
            Err(ExtractError::InputRequired)
        ));
        assert!(matches!(
            required_input(Some(Path::new(""))),
            Err(ExtractError::InputRequired)
        ));
        assert!(matches!(
            required_input(Some(Path::new("#"))),
            Err(ExtractError::InputRequired)
        ));
    }

    #[test]
    fn real_paths_pass_through() {
        let path = Path::new("/data/upload.zip");
        assert_eq!(required_input(Some(path)).unwrap(), path);
    }
}
