pub mod archive;
pub mod container;
pub mod discovery;
pub mod metadata;
pub mod table;

pub use archive::{extract_archive, validate_zip};
pub use container::{GdbContainer, load_container};
pub use discovery::{DiscoveredDatasets, discover_datasets};
pub use metadata::{load_domains, load_table_schema};
pub use table::{
    CsvTable, read_csv_table, read_geometry_records, read_reference_records, read_zone_records,
};
