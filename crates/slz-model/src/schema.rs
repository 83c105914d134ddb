use serde::{Deserialize, Serialize};

/// Storage type of a geodatabase field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Integer,
    Double,
    Text,
    Date,
    Guid,
}

impl FieldType {
    /// Parse a type name as written in schema metadata.
    ///
    /// Unknown names fold to `Text` so a schema exported by a newer runtime
    /// never blocks a run.
    pub fn from_name(name: &str) -> FieldType {
        let normalized = name.trim().to_uppercase();
        match normalized.as_str() {
            "INTEGER" | "LONG" | "SHORT" | "SMALLINTEGER" | "OID" | "OBJECTID" => {
                FieldType::Integer
            }
            "DOUBLE" | "FLOAT" | "SINGLE" => FieldType::Double,
            "DATE" | "DATETIME" => FieldType::Date,
            "GUID" | "GLOBALID" => FieldType::Guid,
            _ => FieldType::Text,
        }
    }
}

/// One field of a table schema, with its optional coded-domain association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    /// Name of the coded domain attached to this field, if any.
    pub domain: Option<String>,
}

/// Schema description of one table: field names, types, domain associations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSchema {
    fields: Vec<Field>,
}

impl TableSchema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Find a field by name, case-insensitively.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn is_date_field(&self, name: &str) -> bool {
        self.field(name)
            .map(|field| field.field_type == FieldType::Date)
            .unwrap_or(false)
    }

    /// Domain name attached to the named field, if the field exists and has
    /// a non-empty association.
    pub fn domain_name(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(|field| field.domain.as_deref())
            .filter(|domain| !domain.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldType, TableSchema};

    fn schema() -> TableSchema {
        TableSchema::new(vec![
            Field {
                name: "speedCategoryId".to_string(),
                field_type: FieldType::Integer,
                domain: Some("SpeedCategory".to_string()),
            },
            Field {
                name: "speedLimitZoneStartDate".to_string(),
                field_type: FieldType::Date,
                domain: None,
            },
        ])
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let schema = schema();
        assert!(schema.field("SPEEDCATEGORYID").is_some());
        assert!(schema.field("speedcategoryid").is_some());
        assert!(schema.field("unknown").is_none());
    }

    #[test]
    fn date_detection_uses_field_type() {
        let schema = schema();
        assert!(schema.is_date_field("speedLimitZoneStartDate"));
        assert!(!schema.is_date_field("speedCategoryId"));
        assert!(!schema.is_date_field("missing"));
    }

    #[test]
    fn unknown_type_names_fold_to_text() {
        assert_eq!(FieldType::from_name("Raster"), FieldType::Text);
        assert_eq!(FieldType::from_name("  long "), FieldType::Integer);
        assert_eq!(FieldType::from_name("GlobalID"), FieldType::Guid);
    }
}
