pub mod join;
pub mod resolve;

pub use join::join_records;
pub use resolve::resolve_domain_label;
