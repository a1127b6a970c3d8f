use serde::Serialize;

/// Placeholder public-profile payload returned by the lookup endpoint.
///
/// The lookup is an integration point for an approved external data source;
/// until one is wired in, every username answers with this fixed private
/// profile and no case data is read.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfile {
    pub username: String,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub external_url: Option<String>,
    pub is_private: bool,
}

impl PublicProfile {
    pub fn placeholder(username: String) -> Self {
        Self {
            username,
            full_name: None,
            bio: None,
            external_url: None,
            is_private: true,
        }
    }
}
