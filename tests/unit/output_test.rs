//! Tests for output result structures

use tasktrack::output::{AssignmentInfo, ListResult, OperationResult, RemindResult, StatusResult};

fn info(name: &str, completed: bool) -> AssignmentInfo {
    AssignmentInfo {
        id: "aaaaaaaa-0000-0000-0000-000000000001".to_string(),
        short_id: "aaaaaaaa".to_string(),
        name: name.to_string(),
        class_name: "Math 201".to_string(),
        due_at: "2024-01-12T09:00:00+00:00".to_string(),
        due_display: "Friday, January 12, 2024 9:00 AM".to_string(),
        urgency: "upcoming".to_string(),
        label: "in 2 days".to_string(),
        style: "default",
        completed,
    }
}

#[test]
fn list_result_serializes_groups_and_total() {
    let result = ListResult {
        total: 2,
        pending: vec![info("Essay draft", false)],
        completed: vec![info("Lab report", true)],
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["pending"][0]["name"], "Essay draft");
    assert_eq!(json["completed"][0]["completed"], true);
    // Style tags are terminal-only concerns
    assert!(json["pending"][0].get("style").is_none());
}

#[test]
fn operation_result_omits_absent_id() {
    let result = OperationResult {
        success: true,
        message: "Assignment deleted".to_string(),
        id: None,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert!(json.get("id").is_none());
}

#[test]
fn operation_result_keeps_id_when_present() {
    let result = OperationResult {
        success: true,
        message: "Assignment created".to_string(),
        id: Some("mem-1".to_string()),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["id"], "mem-1");
}

#[test]
fn remind_result_serializes_scan_outcome() {
    let result = RemindResult {
        capability: "granted".to_string(),
        due_soon: 2,
        names: vec!["Essay draft".to_string(), "Lab report".to_string()],
        notified: true,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["capability"], "granted");
    assert_eq!(json["due_soon"], 2);
    assert_eq!(json["names"][1], "Lab report");
    assert_eq!(json["notified"], true);
}

#[test]
fn status_result_serializes_counts() {
    let result = StatusResult {
        total: 5,
        pending: 3,
        completed: 2,
        due_soon: 1,
    };

    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["total"], 5);
    assert_eq!(json["pending"], 3);
    assert_eq!(json["completed"], 2);
    assert_eq!(json["due_soon"], 1);
}
