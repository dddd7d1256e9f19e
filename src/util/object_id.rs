use bson::oid::ObjectId;

use crate::util::error::HandlerError;

/// Well-formedness check for identifiers arriving from callers.
///
/// Identifiers are opaque strings at the API boundary; a string that does not
/// parse as an ObjectId must never reach a persistence filter.
pub fn parse_object_id(raw: &str, entity: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(raw)
        .map_err(|_| HandlerError::bad_request(format!("Invalid {} id", entity)))
}
