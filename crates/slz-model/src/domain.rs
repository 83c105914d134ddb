use std::collections::BTreeMap;

/// A named coded-value domain: stored code -> display label.
#[derive(Debug, Clone)]
pub struct CodedDomain {
    pub name: String,
    coded_values: BTreeMap<String, String>,
}

impl CodedDomain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coded_values: BTreeMap::new(),
        }
    }

    /// Register a code/label pair. Blank codes and blank labels are dropped.
    pub fn insert(&mut self, code: &str, label: &str) {
        let code = code.trim();
        let label = label.trim();
        if code.is_empty() || label.is_empty() {
            return;
        }
        self.coded_values
            .insert(code.to_string(), label.to_string());
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.coded_values.get(code.trim()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.coded_values.is_empty()
    }
}

/// All coded-value domains of one geodatabase, keyed by domain name.
///
/// Loaded once per run and read-only during the join.
#[derive(Debug, Clone, Default)]
pub struct DomainSet {
    domains: BTreeMap<String, CodedDomain>,
}

impl DomainSet {
    pub fn insert(&mut self, domain: CodedDomain) {
        self.domains.insert(domain.name.clone(), domain);
    }

    /// Fetch a domain by exact name.
    pub fn get(&self, name: &str) -> Option<&CodedDomain> {
        self.domains.get(name)
    }

    /// Fetch or create the named domain, for use while loading.
    pub fn entry(&mut self, name: &str) -> &mut CodedDomain {
        self.domains
            .entry(name.to_string())
            .or_insert_with(|| CodedDomain::new(name))
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CodedDomain, DomainSet};

    #[test]
    fn lookup_by_code() {
        let mut domain = CodedDomain::new("SpeedCategory");
        domain.insert("1", "Rural");
        domain.insert("2", "Urban");
        assert_eq!(domain.label("2"), Some("Urban"));
        assert_eq!(domain.label(" 2 "), Some("Urban"));
        assert_eq!(domain.label("3"), None);
    }

    #[test]
    fn blank_entries_are_dropped() {
        let mut domain = CodedDomain::new("SpeedCategory");
        domain.insert("", "Urban");
        domain.insert("2", "  ");
        assert!(domain.is_empty());
    }

    #[test]
    fn set_lookup_is_exact() {
        let mut domains = DomainSet::default();
        let mut domain = CodedDomain::new("SpeedCategory");
        domain.insert("2", "Urban");
        domains.insert(domain);
        assert!(domains.get("SpeedCategory").is_some());
        assert!(domains.get("speedcategory").is_none());
    }
}
