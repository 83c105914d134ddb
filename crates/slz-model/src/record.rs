use serde_json::Value;

use crate::config::ZoneFieldNames;
use crate::value::CellValue;

/// One row of the zone attribute table, in cursor order.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRecord {
    pub object_id: CellValue,
    pub zone_id: CellValue,
    pub reference_id: CellValue,
    pub name: CellValue,
    pub category: CellValue,
    pub value_type: CellValue,
    pub status_type: CellValue,
    pub start_date: CellValue,
    pub end_date: CellValue,
}

impl ZoneRecord {
    /// Pair each field value with its configured output name, in the order
    /// values are copied onto the output record.
    pub fn fields<'a>(&'a self, names: &'a ZoneFieldNames) -> [(&'a str, &'a CellValue); 9] {
        [
            (names.object_id.as_str(), &self.object_id),
            (names.zone_id.as_str(), &self.zone_id),
            (names.reference_id.as_str(), &self.reference_id),
            (names.name.as_str(), &self.name),
            (names.category.as_str(), &self.category),
            (names.value_type.as_str(), &self.value_type),
            (names.status_type.as_str(), &self.status_type),
            (names.start_date.as_str(), &self.start_date),
            (names.end_date.as_str(), &self.end_date),
        ]
    }
}

/// One row of the geometry draft layer: the zone key and its parsed shape
/// payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryRecord {
    pub zone_id: CellValue,
    pub shape: Value,
}

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRecord {
    pub reference_id: CellValue,
    pub name: String,
}
