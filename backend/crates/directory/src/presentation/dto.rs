//! Page Data

use auth::LayoutData;
use serde::Serialize;

use crate::domain::{Company, CompanyRef};

/// `GET /`
#[derive(Debug, Serialize)]
pub struct HomePage {
    #[serde(flatten)]
    pub layout: LayoutData,
    pub companies: Vec<Company>,
}

/// `GET /{company_handle}`
#[derive(Debug, Serialize)]
pub struct CompanyPage {
    #[serde(flatten)]
    pub layout: LayoutData,
    pub company: Vec<CompanyRef>,
}
