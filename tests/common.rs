//! Common test utilities for building process snapshots.
use procflow::prelude::*;

/// Creates an activity with no stored position.
#[allow(dead_code)]
pub fn activity(id: &str, order: i64, activity_type: ActivityType) -> Activity {
    Activity {
        id: id.to_string(),
        process_id: "proc-1".to_string(),
        order,
        activity_type,
        name: Some(format!("Activity {}", id)),
        ..Default::default()
    }
}

/// Creates an activity with a stored layout position.
#[allow(dead_code)]
pub fn positioned(id: &str, order: i64, x: f64, y: f64) -> Activity {
    Activity {
        position_x: Some(x),
        position_y: Some(y),
        ..activity(id, order, ActivityType::Manual)
    }
}

/// Creates an explicit edge with no handles or label.
#[allow(dead_code)]
pub fn explicit_edge(id: &str, source: &str, target: &str) -> ExplicitEdge {
    ExplicitEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        ..Default::default()
    }
}

/// Wraps activities into an implicit-mode process.
#[allow(dead_code)]
pub fn implicit_process(activities: Vec<Activity>) -> Process {
    Process {
        id: "proc-1".to_string(),
        name: Some("Invoice approval".to_string()),
        activities,
        trigger: Some("Invoice received".to_string()),
        output: Some("Invoice paid".to_string()),
        ..Default::default()
    }
}

/// Wraps activities and edges into an explicit-mode process.
#[allow(dead_code)]
pub fn explicit_process(activities: Vec<Activity>, edges: Vec<ExplicitEdge>) -> Process {
    Process {
        use_explicit_flow: true,
        edges,
        ..implicit_process(activities)
    }
}

/// Three manual activities with orders 1, 2, 3 and no stored positions.
///
/// Listed out of order on purpose.
#[allow(dead_code)]
pub fn create_three_step_activities() -> Vec<Activity> {
    vec![
        activity("a3", 3, ActivityType::Manual),
        activity("a1", 1, ActivityType::Manual),
        activity("a2", 2, ActivityType::Manual),
    ]
}

/// The JSON shape the process-fetch layer delivers.
#[allow(dead_code)]
pub const EXPLICIT_PROCESS_JSON: &str = r#"{
    "id": "proc-42",
    "name": "Purchase request",
    "useExplicitFlow": true,
    "entryActivityId": "submit",
    "exitActivityId": "order",
    "trigger": "Employee needs equipment",
    "output": "Purchase order issued",
    "activities": [
        {"id": "review", "processId": "proc-42", "order": 2, "activityType": "decision",
         "positionX": 250, "positionY": 240},
        {"id": "submit", "processId": "proc-42", "order": 1, "activityType": "manual",
         "positionX": 250, "positionY": 120},
        {"id": "order", "processId": "proc-42", "order": 3, "activityType": "automated",
         "positionX": 250, "positionY": 360},
        {"id": "rework", "processId": "proc-42", "order": 4, "activityType": "handoff",
         "positionX": 0, "positionY": 0, "resourceIds": ["clerk"]}
    ],
    "edges": [
        {"id": "e1", "source": "submit", "target": "review", "edgeType": "smoothstep",
         "animated": false},
        {"id": "e2", "source": "review", "target": "order", "sourceHandle": "yes",
         "label": "Approved", "edgeType": "smoothstep", "animated": true},
        {"id": "e3", "source": "review", "target": "rework", "sourceHandle": "no",
         "label": "Rejected", "edgeType": "curvy"}
    ]
}"#;

/// Per-process scratch directory for tests that touch the filesystem.
#[allow(dead_code)]
pub fn setup_test_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("procflow_tests_{}", std::process::id()))
}
