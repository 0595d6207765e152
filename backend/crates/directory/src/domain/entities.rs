//! Domain Entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Table the directory reads from
pub const COMPANIES_TABLE: &str = "companies";

/// A row of `companies`.
///
/// Only `id` and `company_handle` are interpreted; every other column is
/// carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_handle: Option<String>,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

/// `select=id` projection of a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: Value,
}
