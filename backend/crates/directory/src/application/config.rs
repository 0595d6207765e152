//! Directory Configuration

/// Number of companies shown on the home page
pub const DEFAULT_LISTING_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub listing_limit: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            listing_limit: DEFAULT_LISTING_LIMIT,
        }
    }
}
