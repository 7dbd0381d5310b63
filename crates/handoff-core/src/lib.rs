//! Core library for orchestrated plan messages.
//!
//! A plan message is a machine-readable contract exchanged between an
//! orchestrating process and a tool-executing process: what to do next,
//! why, and what could go wrong. This crate provides the three pieces
//! that make up that contract:
//!
//! - **Data model** ([`models`]): the plan entity graph and its closed
//!   token enumerations, doubling as the serde wire contract
//! - **Builder** ([`builder`]): a single-owner fluent assembler whose
//!   mutators normalize input at mutation time and never fail
//! - **Serialization** ([`payload`]): the one fixed wire policy —
//!   snake_case keys, omit-if-absent optionals, lowercase enum tokens
//!
//! Free-form tool arguments are normalized by [`args`], and every model
//! implements [`std::fmt::Display`] (see [`display`]) rendering markdown
//! for terminal output. The builder never interprets the actions it
//! records; tool semantics belong to the consumer.
//!
//! # Quick Start
//!
//! ```rust
//! use handoff_core::PlanBuilder;
//! use serde_json::json;
//!
//! # fn example() -> handoff_core::Result<()> {
//! let json = PlanBuilder::new()
//!     .with_instruction("Scaffold Payroll screen and components.")
//!     .add_next_action(
//!         "create_screen",
//!         Some(json!({"screen": "Payroll"})),
//!         None,
//!         None,
//!     )
//!     .with_follow_up("Wire the new components to the API now?")
//!     .with_safety(Some(true), Some(vec!["src/modules/payroll/**".into()]))
//!     .build_json(false)?;
//!
//! assert!(json.starts_with("{\"kind\":\"orchestrated_plan\""));
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod builder;
pub mod display;
pub mod error;
pub mod models;
pub mod payload;

// Re-export commonly used types
pub use builder::PlanBuilder;
pub use error::{PlanError, Result};
pub use models::{
    ActionCall, AskField, AskFieldType, AskRequest, Issue, PartialOutcome, PartialResult, Plan,
    PlanStatus, SafetyInfo, PLAN_KIND,
};
