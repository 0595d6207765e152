//! Backend connection settings.

/// Header routing every request to the Supabase load balancer's full service set.
pub const ROUTING_MODE_HEADER: (&str, &str) = ("sb-lb-routing-mode", "alpha-all-services");

/// Supabase connection configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    pub url: String,
    /// Public anon key sent as `apikey` on every request
    pub anon_key: String,
    /// Project reference used in the auth cookie name
    pub project_ref: String,
    /// Extra headers sent with every backend request
    pub global_headers: Vec<(String, String)>,
}

impl BackendConfig {
    pub fn new(
        url: impl Into<String>,
        anon_key: impl Into<String>,
        project_ref: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            project_ref: project_ref.into(),
            global_headers: vec![(
                ROUTING_MODE_HEADER.0.to_string(),
                ROUTING_MODE_HEADER.1.to_string(),
            )],
        }
    }

    /// Name of the cookie holding the auth session
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.url.trim_end_matches('/'), path)
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table)
    }
}
