//! Data models for orchestrated plan messages.
//!
//! This module contains the entity graph of a plan message: the [`Plan`]
//! root, its [`ActionCall`]s, diagnostics ([`Issue`], [`PartialResult`]),
//! the interactive [`AskRequest`] substructure, and [`SafetyInfo`] risk
//! metadata, together with the three closed token enumerations.
//!
//! The structs double as the wire contract: serde derives pin snake_case
//! keys, lowercase enum tokens, and omit-if-absent optional fields, so
//! serializing a model value with the [`crate::payload`] facade yields the
//! exact wire document. Display implementations for terminal rendering
//! live in [`crate::display`] to keep data and presentation apart.

mod action;
mod ask;
mod issue;
mod partial;
mod plan;
mod safety;
mod status;

#[cfg(test)]
mod tests;

pub use action::ActionCall;
pub use ask::{AskField, AskRequest};
pub use issue::Issue;
pub use partial::PartialResult;
pub use plan::{Plan, PLAN_KIND};
pub use safety::SafetyInfo;
pub use status::{AskFieldType, PartialOutcome, PlanStatus};
