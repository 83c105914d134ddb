//! Dataset discovery inside an extracted geodatabase tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use slz_model::{ExtractError, MetadataTableNames, Result};

/// Everything one walk of the extracted tree turned up.
#[derive(Debug, Clone, Default)]
pub struct DiscoveredDatasets {
    /// Required dataset name (canonical casing) -> table path.
    pub datasets: BTreeMap<String, PathBuf>,
    /// Schema metadata table, when the export carries one.
    pub fields_table: Option<PathBuf>,
    /// Coded-domain metadata table, when the export carries one.
    pub domains_table: Option<PathBuf>,
}

impl DiscoveredDatasets {
    /// Required names with no discovered table, in the given order.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .filter(|name| !self.datasets.contains_key(**name))
            .copied()
            .collect()
    }

    pub fn is_complete(&self, required: &[&str]) -> bool {
        self.missing(required).is_empty()
    }
}

/// Walk the extracted tree once, collecting every required dataset table and
/// the metadata tables, at any depth.
///
/// Matching is by file stem, case-insensitive; the first hit for a name wins
/// (the walk visits entries in sorted order, so duplicates resolve
/// deterministically).
pub fn discover_datasets(
    root: &Path,
    required: &[&str],
    metadata: &MetadataTableNames,
) -> Result<DiscoveredDatasets> {
    if !root.is_dir() {
        return Err(ExtractError::Archive(format!(
            "extraction root is not a directory: {}",
            root.display()
        )));
    }

    let mut found = DiscoveredDatasets::default();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| ExtractError::Archive(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_table_file(path) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        if let Some(name) = required
            .iter()
            .find(|name| name.eq_ignore_ascii_case(stem))
        {
            debug!(dataset = name, path = %path.display(), "discovered dataset");
            found
                .datasets
                .entry((*name).to_string())
                .or_insert_with(|| path.to_path_buf());
        } else if metadata.fields.eq_ignore_ascii_case(stem) {
            found.fields_table.get_or_insert_with(|| path.to_path_buf());
        } else if metadata.domains.eq_ignore_ascii_case(stem) {
            found
                .domains_table
                .get_or_insert_with(|| path.to_path_buf());
        }
    }
    Ok(found)
}

fn is_table_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::discover_datasets;
    use slz_model::MetadataTableNames;

    const REQUIRED: [&str; 3] = [
        "SpeedLimitZone",
        "SpeedLimitZoneGeometryDraft",
        "RCAZoneReference",
    ];

    fn touch(path: &std::path::Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "header\nrow").unwrap();
    }

    #[test]
    fn finds_datasets_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("export.gdb/SpeedLimitZone.csv"));
        touch(&root.join("export.gdb/nested/SpeedLimitZoneGeometryDraft.csv"));
        touch(&root.join("RCAZoneReference.csv"));
        touch(&root.join("export.gdb/Fields.csv"));
        touch(&root.join("export.gdb/Domains.csv"));

        let found =
            discover_datasets(root, &REQUIRED, &MetadataTableNames::default()).unwrap();

        assert!(found.is_complete(&REQUIRED));
        assert!(found.fields_table.is_some());
        assert!(found.domains_table.is_some());
    }

    #[test]
    fn stem_matching_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("speedlimitzone.CSV"));

        let found =
            discover_datasets(root, &REQUIRED, &MetadataTableNames::default()).unwrap();

        assert!(found.datasets.contains_key("SpeedLimitZone"));
    }

    #[test]
    fn reports_missing_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("SpeedLimitZone.csv"));
        touch(&root.join("notes.txt"));

        let found =
            discover_datasets(root, &REQUIRED, &MetadataTableNames::default()).unwrap();

        assert!(!found.is_complete(&REQUIRED));
        assert_eq!(
            found.missing(&REQUIRED),
            vec!["SpeedLimitZoneGeometryDraft", "RCAZoneReference"]
        );
    }

    #[test]
    fn non_table_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("SpeedLimitZone.txt"));

        let found =
            discover_datasets(root, &REQUIRED, &MetadataTableNames::default()).unwrap();

        assert!(found.datasets.is_empty());
    }
}
