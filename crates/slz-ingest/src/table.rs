//! CSV table reading with schema-driven cell typing.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use slz_model::{
    CellValue, ExtractError, FieldType, GeometryFieldNames, GeometryRecord, ReferenceFieldNames,
    ReferenceRecord, Result, TableSchema, ZoneFieldNames, ZoneRecord, parse_datetime,
};

/// A raw table: normalized headers plus string cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Column index for a header, case-insensitive.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell text at (row, column); absent cells read as empty.
    pub fn cell<'a>(&'a self, row: &'a [String], column: Option<usize>) -> &'a str {
        column
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a whole table into memory. The first record is the header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ExtractError::Table(format!("read csv {}: {e}", path.display())))?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| ExtractError::Table(format!("read record {}: {e}", path.display())))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        records.push(row);
    }

    let mut rows = records.into_iter();
    let headers = rows.next().unwrap_or_default();
    Ok(CsvTable {
        headers,
        rows: rows.collect(),
    })
}

/// Parse one cell into a typed value.
///
/// With no schema type the cell is inferred (integer, then float, then
/// text). A typed cell that fails to parse degrades to text rather than
/// failing the run.
fn parse_cell(raw: &str, field_type: Option<FieldType>) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    match field_type {
        Some(FieldType::Integer) => trimmed
            .parse::<i64>()
            .map(CellValue::Int)
            .unwrap_or_else(|_| CellValue::Text(trimmed.to_string())),
        Some(FieldType::Double) => trimmed
            .parse::<f64>()
            .map(CellValue::Float)
            .unwrap_or_else(|_| CellValue::Text(trimmed.to_string())),
        Some(FieldType::Date) => parse_datetime(trimmed)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(trimmed.to_string())),
        Some(FieldType::Text | FieldType::Guid) => CellValue::Text(trimmed.to_string()),
        None => {
            if let Ok(value) = trimmed.parse::<i64>() {
                CellValue::Int(value)
            } else if let Ok(value) = trimmed.parse::<f64>() {
                CellValue::Float(value)
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
    }
}

/// Read the zone attribute table, typing each cell per the table schema.
pub fn read_zone_records(
    path: &Path,
    names: &ZoneFieldNames,
    schema: &TableSchema,
) -> Result<Vec<ZoneRecord>> {
    let table = read_csv_table(path)?;
    let wanted = names.as_list();
    let columns: Vec<Option<usize>> = wanted.iter().map(|name| table.column(name)).collect();
    for (name, column) in wanted.iter().zip(&columns) {
        if column.is_none() {
            warn!(field = name, table = %path.display(), "zone field missing from table");
        }
    }
    let types: Vec<Option<FieldType>> = wanted
        .iter()
        .map(|name| schema.field(name).map(|field| field.field_type))
        .collect();

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut cells = wanted.iter().enumerate().map(|(idx, _)| {
            parse_cell(table.cell(row, columns[idx]), types[idx])
        });
        // Cursor order mirrors ZoneFieldNames::as_list.
        records.push(ZoneRecord {
            object_id: cells.next().unwrap_or(CellValue::Null),
            zone_id: cells.next().unwrap_or(CellValue::Null),
            reference_id: cells.next().unwrap_or(CellValue::Null),
            name: cells.next().unwrap_or(CellValue::Null),
            category: cells.next().unwrap_or(CellValue::Null),
            value_type: cells.next().unwrap_or(CellValue::Null),
            status_type: cells.next().unwrap_or(CellValue::Null),
            start_date: cells.next().unwrap_or(CellValue::Null),
            end_date: cells.next().unwrap_or(CellValue::Null),
        });
    }
    Ok(records)
}

/// Read the geometry draft layer, parsing each shape payload as JSON.
pub fn read_geometry_records(
    path: &Path,
    names: &GeometryFieldNames,
) -> Result<Vec<GeometryRecord>> {
    let table = read_csv_table(path)?;
    let zone_column = table.column(&names.zone_id);
    let shape_column = table.column(&names.shape);

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let zone_id = parse_cell(table.cell(row, zone_column), None);
        let raw_shape = table.cell(row, shape_column);
        if raw_shape.trim().is_empty() {
            return Err(ExtractError::Table(format!(
                "empty shape payload in {}",
                path.display()
            )));
        }
        let shape: serde_json::Value = serde_json::from_str(raw_shape).map_err(|e| {
            ExtractError::Table(format!("invalid shape json in {}: {e}", path.display()))
        })?;
        records.push(GeometryRecord { zone_id, shape });
    }
    Ok(records)
}

/// Read the reference table.
pub fn read_reference_records(
    path: &Path,
    names: &ReferenceFieldNames,
) -> Result<Vec<ReferenceRecord>> {
    let table = read_csv_table(path)?;
    let id_column = table.column(&names.reference_id);
    let name_column = table.column(&names.name);

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        records.push(ReferenceRecord {
            reference_id: parse_cell(table.cell(row, id_column), None),
            name: table.cell(row, name_column).to_string(),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{read_csv_table, read_geometry_records, read_reference_records, read_zone_records};
    use chrono::NaiveDate;
    use slz_model::{
        CellValue, ExtractError, Field, FieldType, GeometryFieldNames, ReferenceFieldNames,
        TableSchema, ZoneFieldNames,
    };

    fn write_table(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn zone_schema() -> TableSchema {
        TableSchema::new(vec![
            Field {
                name: "OBJECTID".to_string(),
                field_type: FieldType::Integer,
                domain: None,
            },
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
    fn reads_headers_and_skips_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "t.csv", "a,b\n1,2\n,,\n3,4\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.column("B"), Some(1));
    }

    #[test]
    fn zone_cells_type_per_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "SpeedLimitZone.csv",
            "OBJECTID,speedLimitZoneId,rcaZoneReferenceId,speedLimitZoneName,speedCategoryId,speedValueTypeId,speedLimitZoneStatusTypeId,speedLimitZoneStartDate,speedLimitZoneEndDate\n\
             1,Z1,R1,Main St,2,1,1,2021-09-15 00:00:00,\n",
        );

        let records =
            read_zone_records(&path, &ZoneFieldNames::default(), &zone_schema()).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.object_id, CellValue::Int(1));
        assert_eq!(record.zone_id, CellValue::Text("Z1".to_string()));
        assert_eq!(record.category, CellValue::Int(2));
        let start = NaiveDate::from_ymd_opt(2021, 9, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(record.start_date, CellValue::Date(start));
        assert_eq!(record.end_date, CellValue::Null);
    }

    #[test]
    fn missing_zone_column_yields_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "SpeedLimitZone.csv",
            "OBJECTID,speedLimitZoneId\n1,Z1\n",
        );

        let records =
            read_zone_records(&path, &ZoneFieldNames::default(), &TableSchema::default()).unwrap();

        assert_eq!(records[0].reference_id, CellValue::Null);
        assert_eq!(records[0].name, CellValue::Null);
    }

    #[test]
    fn geometry_shapes_parse_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "SpeedLimitZoneGeometryDraft.csv",
            "speedLimitZoneId,shape\nZ1,\"{\"\"rings\"\": [[[0, 0], [1, 0], [1, 1]]], \"\"type\"\": \"\"polygonZ\"\"}\"\n",
        );

        let records = read_geometry_records(&path, &GeometryFieldNames::default()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].zone_id, CellValue::Text("Z1".to_string()));
        assert_eq!(records[0].shape["type"], "polygonZ");
    }

    #[test]
    fn malformed_shape_fails_the_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "SpeedLimitZoneGeometryDraft.csv",
            "speedLimitZoneId,shape\nZ1,not json\n",
        );

        let result = read_geometry_records(&path, &GeometryFieldNames::default());
        assert!(matches!(result, Err(ExtractError::Table(_))));
    }

    #[test]
    fn reference_rows_read_id_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "RCAZoneReference.csv",
            "rcaZoneReferenceId,rcaZoneReferenceName\nR1,Wellington City Council\n",
        );

        let records = read_reference_records(&path, &ReferenceFieldNames::default()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Wellington City Council");
    }
}
