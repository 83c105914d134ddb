//! Schema and coded-domain metadata tables.
//!
//! Exports name these columns inconsistently, so each lookup accepts the
//! aliases seen in the wild.

use std::path::Path;

use tracing::debug;

use slz_model::{DomainSet, Field, FieldType, Result, TableSchema};

use crate::table::{CsvTable, read_csv_table};

const FIELDS_COLUMN_TABLE: &[&str] = &["Table", "TableName", "Dataset"];
const FIELDS_COLUMN_NAME: &[&str] = &["Name", "FieldName", "Field"];
const FIELDS_COLUMN_TYPE: &[&str] = &["Type", "FieldType", "DataType"];
const FIELDS_COLUMN_DOMAIN: &[&str] = &["Domain", "DomainName"];

const DOMAINS_COLUMN_NAME: &[&str] = &["Domain", "DomainName", "Name"];
const DOMAINS_COLUMN_CODE: &[&str] = &["Code", "CodeValue", "Value"];
const DOMAINS_COLUMN_LABEL: &[&str] = &["Description", "Label", "CodeText", "Text"];

fn find_column(table: &CsvTable, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| table.column(alias))
}

/// Load the schema rows describing `table_name` from a fields metadata table.
///
/// When the metadata has no table column, every row is taken to describe the
/// requested table.
pub fn load_table_schema(path: &Path, table_name: &str) -> Result<TableSchema> {
    let table = read_csv_table(path)?;
    let table_column = find_column(&table, FIELDS_COLUMN_TABLE);
    let name_column = find_column(&table, FIELDS_COLUMN_NAME);
    let type_column = find_column(&table, FIELDS_COLUMN_TYPE);
    let domain_column = find_column(&table, FIELDS_COLUMN_DOMAIN);

    let mut fields = Vec::new();
    for row in &table.rows {
        if table_column.is_some() {
            let owner = table.cell(row, table_column);
            if !owner.eq_ignore_ascii_case(table_name) {
                continue;
            }
        }
        let name = table.cell(row, name_column);
        if name.is_empty() {
            continue;
        }
        let domain = {
            let raw = table.cell(row, domain_column).trim();
            if raw.is_empty() {
                None
            } else {
                Some(raw.to_string())
            }
        };
        fields.push(Field {
            name: name.to_string(),
            field_type: FieldType::from_name(table.cell(row, type_column)),
            domain,
        });
    }
    debug!(table = table_name, fields = fields.len(), "loaded table schema");
    Ok(TableSchema::new(fields))
}

/// Load every coded-value domain from a domains metadata table.
pub fn load_domains(path: &Path) -> Result<DomainSet> {
    let table = read_csv_table(path)?;
    let name_column = find_column(&table, DOMAINS_COLUMN_NAME);
    let code_column = find_column(&table, DOMAINS_COLUMN_CODE);
    let label_column = find_column(&table, DOMAINS_COLUMN_LABEL);

    let mut domains = DomainSet::default();
    for row in &table.rows {
        let name = table.cell(row, name_column);
        if name.is_empty() {
            continue;
        }
        domains
            .entry(name)
            .insert(table.cell(row, code_column), table.cell(row, label_column));
    }
    debug!(domains = domains.len(), "loaded coded domains");
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::{load_domains, load_table_schema};
    use slz_model::FieldType;

    fn write_table(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn schema_rows_filter_by_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "Fields.csv",
            "Table,Name,Type,Domain\n\
             SpeedLimitZone,speedCategoryId,Integer,SpeedCategory\n\
             SpeedLimitZone,speedLimitZoneStartDate,Date,\n\
             RCAZoneReference,rcaZoneReferenceName,Text,\n",
        );

        let schema = load_table_schema(&path, "SpeedLimitZone").unwrap();

        assert!(schema.field("speedCategoryId").is_some());
        assert!(schema.field("rcaZoneReferenceName").is_none());
        assert_eq!(schema.domain_name("speedCategoryId"), Some("SpeedCategory"));
        assert!(schema.is_date_field("speedLimitZoneStartDate"));
    }

    #[test]
    fn schema_accepts_header_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "Fields.csv",
            "Dataset,FieldName,DataType,DomainName\n\
             SpeedLimitZone,speedValueTypeId,Long,SpeedValueType\n",
        );

        let schema = load_table_schema(&path, "speedlimitzone").unwrap();

        let field = schema.field("speedValueTypeId").unwrap();
        assert_eq!(field.field_type, FieldType::Integer);
        assert_eq!(field.domain.as_deref(), Some("SpeedValueType"));
    }

    #[test]
    fn domains_group_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "Domains.csv",
            "Domain,Code,Description\n\
             SpeedCategory,1,Rural\n\
             SpeedCategory,2,Urban\n\
             SpeedValueType,1,Permanent\n",
        );

        let domains = load_domains(&path).unwrap();

        assert_eq!(domains.len(), 2);
        let category = domains.get("SpeedCategory").unwrap();
        assert_eq!(category.label("2"), Some("Urban"));
    }
}
