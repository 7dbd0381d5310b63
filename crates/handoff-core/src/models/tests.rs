//! Tests for the plan message models.

use std::str::FromStr;

use serde_json::json;

use crate::models::{
    ActionCall, AskField, AskFieldType, AskRequest, Issue, PartialOutcome, PartialResult, Plan,
    PlanStatus, SafetyInfo, PLAN_KIND,
};
use crate::PlanError;

fn sample_plan() -> Plan {
    let mut plan = Plan::new(PlanStatus::Partial, "1");
    plan.instruction = "Scaffold Payroll screen and components.".to_string();
    plan.next_actions.push(ActionCall {
        tool: "create_screen".to_string(),
        args: json!({"screen": "Payroll"}).as_object().cloned(),
        label: Some("Create the screen".to_string()),
        confirm: Some(true),
    });
    plan.warnings = Some(vec![Issue {
        code: "STYLE".to_string(),
        message: "Screen name is generic.".to_string(),
        field: None,
        hint: None,
        recoverable: None,
    }]);
    plan.partial_results = Some(vec![PartialResult {
        step: "lint".to_string(),
        outcome: PartialOutcome::Skipped,
        detail: Some("linter unavailable".to_string()),
    }]);
    plan.ask = Some(AskRequest {
        prompt: "Which module?".to_string(),
        fields: vec![AskField {
            name: "module".to_string(),
            field_type: AskFieldType::Select,
            required: Some(true),
            options: Some(vec!["payroll".to_string(), "billing".to_string()]),
        }],
    });
    plan.safety = Some(SafetyInfo {
        writes_code: Some(true),
        touches_files: Some(vec!["src/modules/payroll/**".to_string()]),
    });
    plan
}

#[test]
fn test_new_plan_carries_fixed_kind() {
    assert_eq!(Plan::new(PlanStatus::Ok, "1").kind, PLAN_KIND);
    assert_eq!(Plan::new(PlanStatus::Blocked, "2").kind, PLAN_KIND);
    assert_eq!(Plan::default().kind, "orchestrated_plan");
}

#[test]
fn test_plan_wire_field_names_are_snake_case() {
    let value = serde_json::to_value(sample_plan()).expect("serializes");

    assert!(value.get("next_actions").is_some());
    assert!(value.get("partial_results").is_some());
    assert_eq!(value["safety"]["writes_code"], json!(true));
    assert_eq!(
        value["safety"]["touches_files"],
        json!(["src/modules/payroll/**"])
    );
}

#[test]
fn test_plan_round_trips_through_json() {
    let plan = sample_plan();
    let json = serde_json::to_string(&plan).expect("serializes");
    let back: Plan = serde_json::from_str(&json).expect("parses");
    assert_eq!(plan, back);
}

#[test]
fn test_plan_deserializes_with_defaults() {
    // The empty document is a valid, fully defaulted plan
    let plan: Plan = serde_json::from_value(json!({})).expect("parses");

    assert_eq!(plan.kind, PLAN_KIND);
    assert_eq!(plan.version, "1");
    assert_eq!(plan.status, PlanStatus::Ok);
    assert_eq!(plan.instruction, "");
    assert!(plan.next_actions.is_empty());
    assert!(plan.errors.is_none());
    assert!(plan.ask.is_none());
}

#[test]
fn test_issue_optional_fields_omitted() {
    let issue = Issue {
        code: "NOT_FOUND".to_string(),
        message: "No match for 'bob'.".to_string(),
        field: Some("user".to_string()),
        hint: None,
        recoverable: Some(true),
    };
    let value = serde_json::to_value(issue).expect("serializes");
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

    assert_eq!(keys, ["code", "message", "field", "recoverable"]);
}

#[test]
fn test_ask_field_type_wire_key() {
    let field = AskField {
        name: "env".to_string(),
        field_type: AskFieldType::Select,
        required: None,
        options: None,
    };
    let value = serde_json::to_value(field).expect("serializes");

    assert_eq!(value["type"], json!("select"));
    assert!(value.get("field_type").is_none());
    assert!(value.get("required").is_none());
}

#[test]
fn test_action_call_confirm_tri_state() {
    let absent = serde_json::to_value(ActionCall {
        tool: "t".to_string(),
        ..ActionCall::default()
    })
    .expect("serializes");
    assert!(absent.get("confirm").is_none());

    let explicit_no = serde_json::to_value(ActionCall {
        tool: "t".to_string(),
        confirm: Some(false),
        ..ActionCall::default()
    })
    .expect("serializes");
    assert_eq!(explicit_no["confirm"], json!(false));
}

#[test]
fn test_status_tokens_round_trip() {
    for (status, token) in [
        (PlanStatus::Ok, "ok"),
        (PlanStatus::Error, "error"),
        (PlanStatus::Invalid, "invalid"),
        (PlanStatus::Blocked, "blocked"),
        (PlanStatus::Partial, "partial"),
    ] {
        assert_eq!(status.as_str(), token);
        assert_eq!(PlanStatus::from_str(token).expect("parses"), status);
        assert_eq!(serde_json::to_value(status).expect("serializes"), json!(token));
    }
}

#[test]
fn test_ask_field_type_tokens_round_trip() {
    for (field_type, token) in [
        (AskFieldType::String, "string"),
        (AskFieldType::Number, "number"),
        (AskFieldType::Select, "select"),
    ] {
        assert_eq!(field_type.as_str(), token);
        assert_eq!(AskFieldType::from_str(token).expect("parses"), field_type);
        assert_eq!(
            serde_json::to_value(field_type).expect("serializes"),
            json!(token)
        );
    }
}

#[test]
fn test_partial_outcome_tokens_round_trip() {
    for (outcome, token) in [
        (PartialOutcome::Ok, "ok"),
        (PartialOutcome::Skipped, "skipped"),
        (PartialOutcome::Failed, "failed"),
    ] {
        assert_eq!(outcome.as_str(), token);
        assert_eq!(PartialOutcome::from_str(token).expect("parses"), outcome);
        assert_eq!(serde_json::to_value(outcome).expect("serializes"), json!(token));
    }
}

#[test]
fn test_unknown_tokens_rejected() {
    assert!(matches!(
        PlanStatus::from_str("pending"),
        Err(PlanError::UnknownToken { .. })
    ));
    assert!(matches!(
        AskFieldType::from_str("date"),
        Err(PlanError::UnknownToken { .. })
    ));
    assert!(matches!(
        PartialOutcome::from_str("aborted"),
        Err(PlanError::UnknownToken { .. })
    ));
}

#[test]
fn test_token_parsing_is_case_insensitive() {
    assert_eq!(PlanStatus::from_str("Blocked").expect("parses"), PlanStatus::Blocked);
    assert_eq!(
        PartialOutcome::from_str("SKIPPED").expect("parses"),
        PartialOutcome::Skipped
    );
}

#[test]
fn test_enum_defaults() {
    assert_eq!(PlanStatus::default(), PlanStatus::Ok);
    assert_eq!(AskFieldType::default(), AskFieldType::String);
    assert_eq!(PartialOutcome::default(), PartialOutcome::Ok);
}
