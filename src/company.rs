//! Company registry - maps company names to their physical tables
//!
//! Each company owns one SQLite table whose name is derived from the company
//! name by replacing every character outside `[A-Za-z0-9_]` with `_`. The
//! registry is built once at startup from a fixed list; table names are
//! pre-computed and collision-checked there, and lookups reject companies
//! that were never registered. SQL never sees a table name that was derived
//! ad hoc from user input.

use crate::{Error, Result};
use std::collections::BTreeMap;

/// The built-in master list of companies.
pub const DEFAULT_COMPANIES: &[&str] = &[
    "Accenture", "Adobe", "Amazon", "AMD", "Apple", "Applied Materials",
    "Bosch", "Capgemini", "CGI", "Cisco", "Cognizant", "Dell", "Deloitte",
    "DXC Technology", "Ericsson", "EY", "Genpact", "Google", "HCLTech",
    "HP", "HTC", "Huawei", "IBM", "Infosys", "Intel", "Jio",
    "JPMorgan Chase", "KPMG", "Larsen & Toubro", "Lenovo", "LTIMindtree",
    "MediaTek", "Meta", "Microsoft", "Netflix", "Nokia", "Nvidia",
    "Oracle", "Persistent Systems", "PwC", "Qualcomm", "Reliance",
    "Samsung", "SAP", "Sony", "TCS", "Tech Mahindra", "Tesla",
    "Tiger Analytics", "Wipro", "Xiaomi", "Zoho", "Zomato", "ZS Associates",
];

/// Derive a table name from a company name.
///
/// Deterministic: any character that is not a letter, digit, or underscore
/// becomes an underscore. This is not a full identifier-safety guarantee
/// (reserved words and length limits are not checked); the registry's
/// collision check is what makes it safe for a given company list.
pub fn sanitize_table_name(company: &str) -> String {
    company
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Registry of known companies and their pre-validated table names.
#[derive(Debug, Clone)]
pub struct CompanyRegistry {
    // company -> table name, kept sorted by company
    tables: BTreeMap<String, String>,
}

impl CompanyRegistry {
    /// Build a registry from a list of company names.
    ///
    /// Fails if two distinct names sanitize to the same table name, since
    /// the store would otherwise silently merge their questions.
    pub fn new<I, S>(companies: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tables: BTreeMap<String, String> = BTreeMap::new();
        let mut owners: BTreeMap<String, String> = BTreeMap::new();

        for company in companies {
            let company = company.into();
            let table = sanitize_table_name(&company);
            if let Some(owner) = owners.get(&table) {
                if owner != &company {
                    return Err(Error::TableCollision {
                        first: owner.clone(),
                        second: company,
                        table,
                    });
                }
            } else {
                owners.insert(table.clone(), company.clone());
            }
            tables.insert(company, table);
        }

        Ok(Self { tables })
    }

    /// Build a registry from the built-in master list
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_COMPANIES.iter().copied())
    }

    /// Companies in sorted order
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Look up the table name for a company, rejecting unregistered names
    pub fn table_name(&self, company: &str) -> Result<&str> {
        self.tables
            .get(company)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownCompany(company.to_string()))
    }

    pub fn contains(&self, company: &str) -> bool {
        self.tables.contains_key(company)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_deterministic() {
        assert_eq!(sanitize_table_name("Larsen & Toubro"), "Larsen___Toubro");
        assert_eq!(sanitize_table_name("Larsen & Toubro"), sanitize_table_name("Larsen & Toubro"));
        assert_eq!(sanitize_table_name("DXC Technology"), "DXC_Technology");
        assert_eq!(sanitize_table_name("Google"), "Google");
    }

    #[test]
    fn test_default_list_is_collision_free() {
        let registry = CompanyRegistry::with_defaults().unwrap();
        assert_eq!(registry.len(), DEFAULT_COMPANIES.len());
    }

    #[test]
    fn test_collision_rejected() {
        let err = CompanyRegistry::new(["A&B", "A B"]).unwrap_err();
        match err {
            crate::Error::TableCollision { table, .. } => assert_eq!(table, "A_B"),
            other => panic!("expected TableCollision, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_company_rejected() {
        let registry = CompanyRegistry::with_defaults().unwrap();
        assert!(registry.table_name("Google").is_ok());
        assert!(matches!(
            registry.table_name("Globex"),
            Err(crate::Error::UnknownCompany(_))
        ));
        // No ad hoc derivation: a name that would sanitize cleanly is still rejected
        assert!(registry.table_name("questions; DROP TABLE Google").is_err());
    }

    #[test]
    fn test_companies_sorted() {
        let registry = CompanyRegistry::new(["Zoho", "Adobe", "Meta"]).unwrap();
        let names: Vec<&str> = registry.companies().collect();
        assert_eq!(names, vec!["Adobe", "Meta", "Zoho"]);
    }
}
