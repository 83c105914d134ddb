//! Coded-domain resolution.

use slz_model::{CellValue, DomainSet, TableSchema};

/// Resolve a coded field value to its descriptive label.
///
/// Resolution is total: a null value, an unknown field, a field with no
/// domain association, an unknown domain, or an unknown code all yield the
/// empty string. Coded fields are nullable in practice and a failed lookup
/// must never abort the join.
pub fn resolve_domain_label(
    field_name: &str,
    value: &CellValue,
    schema: &TableSchema,
    domains: &DomainSet,
) -> String {
    if value.is_null() {
        return String::new();
    }
    let Some(domain_name) = schema.domain_name(field_name) else {
        return String::new();
    };
    let Some(domain) = domains.get(domain_name) else {
        return String::new();
    };
    let Some(code) = value.join_key() else {
        return String::new();
    };
    domain.label(&code).map(str::to_string).unwrap_or_default()
}
