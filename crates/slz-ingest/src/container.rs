//! Materialized view of one extracted geodatabase.

use tracing::{info, warn};

use slz_model::{
    DomainSet, ExtractConfig, ExtractError, GeometryRecord, ReferenceRecord, Result, TableSchema,
    ZoneRecord,
};

use crate::discovery::DiscoveredDatasets;
use crate::metadata::{load_domains, load_table_schema};
use crate::table::{read_geometry_records, read_reference_records, read_zone_records};

/// Everything the join needs, loaded once per run.
#[derive(Debug, Clone)]
pub struct GdbContainer {
    pub zones: Vec<ZoneRecord>,
    pub geometries: Vec<GeometryRecord>,
    pub references: Vec<ReferenceRecord>,
    pub zone_schema: TableSchema,
    pub domains: DomainSet,
}

/// Load rows and metadata for the discovered datasets.
///
/// A missing metadata table degrades to an empty schema or domain set; the
/// transform then skips date typing and resolves domain labels to `""`.
pub fn load_container(
    found: &DiscoveredDatasets,
    config: &ExtractConfig,
) -> Result<GdbContainer> {
    let zone_path = found
        .datasets
        .get(&config.datasets.zone_table)
        .ok_or(ExtractError::MissingLayer)?;
    let geometry_path = found
        .datasets
        .get(&config.datasets.geometry_layer)
        .ok_or(ExtractError::MissingLayer)?;
    let reference_path = found
        .datasets
        .get(&config.datasets.reference_table)
        .ok_or(ExtractError::MissingLayer)?;

    let zone_schema = match &found.fields_table {
        Some(path) => load_table_schema(path, &config.datasets.zone_table)?,
        None => {
            warn!("no fields metadata table; date typing and domain lookups are disabled");
            TableSchema::default()
        }
    };
    let domains = match &found.domains_table {
        Some(path) => load_domains(path)?,
        None => DomainSet::default(),
    };

    let zones = read_zone_records(zone_path, &config.zone_fields, &zone_schema)?;
    info!(total = zones.len(), "read speed limit zone records");
    let geometries = read_geometry_records(geometry_path, &config.geometry_fields)?;
    info!(total = geometries.len(), "read draft geometries");
    let references = read_reference_records(reference_path, &config.reference_fields)?;
    info!(total = references.len(), "read rca reference records");

    Ok(GdbContainer {
        zones,
        geometries,
        references,
        zone_schema,
        domains,
    })
}
