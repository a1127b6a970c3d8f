use crate::error::ApiError;
use mongodb::bson::oid::ObjectId;

/// Render a store-native identifier in its public string form.
pub fn public_id(id: &ObjectId) -> String {
    id.to_hex()
}

/// Parse a public identifier back into its native form.
///
/// Syntactically invalid input fails with [`ApiError::InvalidIdentifier`].
/// A well-formed id that matches no document surfaces later as a not-found
/// result, never as a parse failure.
pub fn parse_public_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id)
        .map_err(|_| ApiError::invalid_identifier(format!("'{}' is not a valid document id", id)))
}
