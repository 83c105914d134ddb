//! Immutable run configuration: the dataset and field names the extraction
//! reads. These were process-wide globals in earlier tooling; here they are
//! plain values constructed once and passed into the transform.

/// Names of the three required datasets inside the geodatabase.
#[derive(Debug, Clone)]
pub struct DatasetNames {
    pub zone_table: String,
    pub geometry_layer: String,
    pub reference_table: String,
}

impl Default for DatasetNames {
    fn default() -> Self {
        Self {
            zone_table: "SpeedLimitZone".to_string(),
            geometry_layer: "SpeedLimitZoneGeometryDraft".to_string(),
            reference_table: "RCAZoneReference".to_string(),
        }
    }
}

impl DatasetNames {
    /// The full required set, in processing order.
    pub fn required(&self) -> [&str; 3] {
        [
            self.zone_table.as_str(),
            self.geometry_layer.as_str(),
            self.reference_table.as_str(),
        ]
    }
}

/// Names of the schema and coded-domain metadata tables.
#[derive(Debug, Clone)]
pub struct MetadataTableNames {
    pub fields: String,
    pub domains: String,
}

impl Default for MetadataTableNames {
    fn default() -> Self {
        Self {
            fields: "Fields".to_string(),
            domains: "Domains".to_string(),
        }
    }
}

/// The zone-table fields read by the join, in cursor order.
#[derive(Debug, Clone)]
pub struct ZoneFieldNames {
    pub object_id: String,
    pub zone_id: String,
    pub reference_id: String,
    pub name: String,
    pub category: String,
    pub value_type: String,
    pub status_type: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for ZoneFieldNames {
    fn default() -> Self {
        Self {
            object_id: "OBJECTID".to_string(),
            zone_id: "speedLimitZoneId".to_string(),
            reference_id: "rcaZoneReferenceId".to_string(),
            name: "speedLimitZoneName".to_string(),
            category: "speedCategoryId".to_string(),
            value_type: "speedValueTypeId".to_string(),
            status_type: "speedLimitZoneStatusTypeId".to_string(),
            start_date: "speedLimitZoneStartDate".to_string(),
            end_date: "speedLimitZoneEndDate".to_string(),
        }
    }
}

impl ZoneFieldNames {
    /// Field list in the order rows are read and copied to output.
    pub fn as_list(&self) -> [&str; 9] {
        [
            self.object_id.as_str(),
            self.zone_id.as_str(),
            self.reference_id.as_str(),
            self.name.as_str(),
            self.category.as_str(),
            self.value_type.as_str(),
            self.status_type.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
        ]
    }
}

/// Fields read from the geometry draft layer.
#[derive(Debug, Clone)]
pub struct GeometryFieldNames {
    pub zone_id: String,
    /// Column holding the JSON-encoded shape payload.
    pub shape: String,
}

impl Default for GeometryFieldNames {
    fn default() -> Self {
        Self {
            zone_id: "speedLimitZoneId".to_string(),
            shape: "shape".to_string(),
        }
    }
}

/// Fields read from the reference table.
#[derive(Debug, Clone)]
pub struct ReferenceFieldNames {
    pub reference_id: String,
    pub name: String,
}

impl Default for ReferenceFieldNames {
    fn default() -> Self {
        Self {
            reference_id: "rcaZoneReferenceId".to_string(),
            name: "rcaZoneReferenceName".to_string(),
        }
    }
}

/// Everything one extraction run needs to know about its inputs.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub datasets: DatasetNames,
    pub metadata: MetadataTableNames,
    pub zone_fields: ZoneFieldNames,
    pub geometry_fields: GeometryFieldNames,
    pub reference_fields: ReferenceFieldNames,
}

#[cfg(test)]
mod tests {
    use super::ExtractConfig;

    #[test]
    fn default_config_matches_required_datasets() {
        let config = ExtractConfig::default();
        assert_eq!(
            config.datasets.required(),
            [
                "SpeedLimitZone",
                "SpeedLimitZoneGeometryDraft",
                "RCAZoneReference"
            ]
        );
        assert_eq!(config.zone_fields.as_list().len(), 9);
        assert_eq!(config.zone_fields.as_list()[1], "speedLimitZoneId");
    }
}
