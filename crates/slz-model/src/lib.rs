pub mod config;
pub mod datetime;
pub mod domain;
pub mod error;
pub mod feature;
pub mod record;
pub mod schema;
pub mod value;

pub use config::{
    DatasetNames, ExtractConfig, GeometryFieldNames, MetadataTableNames, ReferenceFieldNames,
    ZoneFieldNames,
};
pub use datetime::{format_datetime, parse_datetime};
pub use domain::{CodedDomain, DomainSet};
pub use error::{ExtractError, Result};
pub use feature::{FeatureRecord, NIL_GUID, UNSET_DATE_MS};
pub use record::{GeometryRecord, ReferenceRecord, ZoneRecord};
pub use schema::{Field, FieldType, TableSchema};
pub use value::{CellValue, DATETIME_FORMAT};
