use serde::Serialize;

pub mod case;
pub mod evidence;
pub mod profile;

// Re-export commonly used types
pub use case::*;
pub use evidence::*;
pub use profile::*;

/// Response for create endpoints: the new document's public id.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Response for the partial-update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    pub updated: bool,
}
