//! Wire serialization for plan messages.
//!
//! Every serialization entry point in the crate funnels through this
//! module so there is exactly one wire policy: snake_case keys, absent
//! optional fields omitted (never `null`), enums as their fixed
//! lowercase tokens, object keys in declaration order, and sequence
//! elements in insertion order. Indentation is cosmetic and changes
//! nothing about the document's structure.

use serde_json::Value;

use crate::{error::Result, models::Plan};

/// Serializes a plan to its wire JSON string.
///
/// `indented` selects pretty-printing; compact and indented output parse
/// to the same document.
///
/// # Errors
///
/// Returns [`crate::PlanError::Serialization`] if JSON encoding fails.
pub fn to_json(plan: &Plan, indented: bool) -> Result<String> {
    if indented {
        Ok(serde_json::to_string_pretty(plan)?)
    } else {
        Ok(serde_json::to_string(plan)?)
    }
}

/// Serializes a plan to an in-memory JSON value under the same policy
/// as [`to_json`].
///
/// # Errors
///
/// Returns [`crate::PlanError::Serialization`] if JSON encoding fails.
pub fn to_value(plan: &Plan) -> Result<Value> {
    Ok(serde_json::to_value(plan)?)
}
