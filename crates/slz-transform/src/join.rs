//! The three-way join producing the output feature records.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use slz_model::{
    CellValue, DomainSet, ExtractConfig, ExtractError, FeatureRecord, GeometryRecord,
    ReferenceRecord, Result, TableSchema, ZoneRecord, format_datetime,
};

use crate::resolve::resolve_domain_label;

/// Merge zone, geometry, and reference rows into output records.
///
/// Zone rows without a matching geometry are skipped silently; everything
/// else that goes wrong aborts the whole join. Output order follows zone
/// iteration order.
pub fn join_records(
    zones: &[ZoneRecord],
    geometries: &[GeometryRecord],
    references: &[ReferenceRecord],
    schema: &TableSchema,
    domains: &DomainSet,
    config: &ExtractConfig,
) -> Result<Vec<FeatureRecord>> {
    let mut geometry_by_key: BTreeMap<String, &Value> = BTreeMap::new();
    for geometry in geometries {
        if let Some(key) = geometry.zone_id.join_key() {
            geometry_by_key.insert(key, &geometry.shape);
        }
    }
    let mut reference_by_key: BTreeMap<String, &str> = BTreeMap::new();
    for reference in references {
        if let Some(key) = reference.reference_id.join_key() {
            reference_by_key.insert(key, reference.name.as_str());
        }
    }

    let mut features = Vec::new();
    for zone in zones {
        let Some(zone_key) = zone.zone_id.join_key() else {
            continue;
        };
        // Only rows with a draft geometry are published.
        let Some(shape) = geometry_by_key.get(&zone_key) else {
            debug!(zone = %zone_key, "no draft geometry; skipping zone");
            continue;
        };

        let mut record = FeatureRecord::default();
        for (name, value) in zone.fields(&config.zone_fields) {
            let json = if schema.is_date_field(name) && !value.is_null() {
                date_string(value)
            } else {
                value.to_json()
            };
            if !record.apply_zone_field(name, json) {
                warn!(field = name, "configured zone field has no output slot");
            }
        }

        record.rca_zone_reference_name = Some(match zone.reference_id.join_key() {
            None => String::new(),
            Some(reference_key) => match reference_by_key.get(&reference_key) {
                Some(name) => (*name).to_string(),
                None => {
                    return Err(ExtractError::UnknownReference {
                        zone_id: zone_key,
                        reference_id: reference_key,
                    });
                }
            },
        });
        record.speed_category_name = Some(resolve_domain_label(
            &config.zone_fields.category,
            &zone.category,
            schema,
            domains,
        ));
        record.speed_value_type_name = Some(resolve_domain_label(
            &config.zone_fields.value_type,
            &zone.value_type,
            schema,
            domains,
        ));
        record.speed_limit_zone_status_type_name = Some(resolve_domain_label(
            &config.zone_fields.status_type,
            &zone.status_type,
            schema,
            domains,
        ));

        let mut shape = (*shape).clone();
        match shape.as_object_mut() {
            Some(map) => {
                map.insert("type".to_string(), Value::String("polygon".to_string()));
            }
            None => {
                return Err(ExtractError::Table(format!(
                    "geometry payload for zone {zone_key} is not an object"
                )));
            }
        }
        record.geometry = Some(shape);

        features.push(record);
    }
    Ok(features)
}

/// String representation of a non-null value in a date-typed field.
fn date_string(value: &CellValue) -> Value {
    match value {
        CellValue::Date(parsed) => Value::String(format_datetime(parsed)),
        CellValue::Text(text) => Value::String(text.clone()),
        CellValue::Int(number) => Value::String(number.to_string()),
        CellValue::Float(number) => Value::String(number.to_string()),
        CellValue::Null => Value::Null,
    }
}
