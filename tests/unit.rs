//! Unit tests for supporting types: modes, configs, errors and artifacts.
mod common;
use common::*;
use procflow::prelude::*;

#[test]
fn test_mode_resolution_from_snapshot() {
    let mut process = implicit_process(vec![]);
    assert_eq!(process.mode(), FlowMode::Implicit);
    process.use_explicit_flow = true;
    assert_eq!(process.mode(), FlowMode::Explicit);
}

#[test]
fn test_activity_type_names_round_trip() {
    for name in ["manual", "automated", "hybrid", "decision", "handoff", "inspection"] {
        assert_eq!(ActivityType::from_name(name).as_str(), name);
    }
    assert_eq!(ActivityType::from_name("transportation"), ActivityType::Transport);
    assert_eq!(format!("{}", EdgeType::SimpleBezier), "simplebezier");
}

#[test]
fn test_default_layout_config() {
    let config = LayoutConfig::default();
    assert_eq!(config.center_x, 250.0);
    assert_eq!(config.vertical_spacing, 120.0);
    assert_eq!(config.side_column_x(), 550.0);
    assert_eq!(config.synthesized_edge_type, EdgeType::Smoothstep);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_layout_configs() {
    assert!(matches!(
        LayoutConfig::from_json("{ not json"),
        Err(ConfigError::JsonParseError(_))
    ));
    assert!(matches!(
        LayoutConfig::from_json(r#"{"nodeWidth": -3}"#),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        LayoutConfig::from_json(r#"{"axisTolerance": -1}"#),
        Err(ConfigError::InvalidValue { .. })
    ));

    let config = LayoutConfig {
        center_x: f64::INFINITY,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("center_x"));
}

#[test]
fn test_error_display() {
    let err = SnapshotError::Io {
        path: "p.json".to_string(),
        message: "denied".to_string(),
    };
    assert!(err.to_string().contains("p.json"));
    assert!(err.to_string().contains("denied"));

    let err = WritebackError::UnknownActivity("a9".to_string());
    assert!(err.to_string().contains("a9"));

    let err = ArtifactError::Generic("boom".to_string());
    assert_eq!(err.to_string(), "Artifact error: boom");

    let err = ArtifactError::Io {
        path: "graph.bin".to_string(),
        message: "disk full".to_string(),
    };
    assert!(err.to_string().contains("graph.bin"));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn test_builder_validates_geometry() {
    assert!(matches!(
        Synthesizer::builder().with_vertical_spacing(0.0).build(),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        Synthesizer::builder().with_center_x(f64::NAN).build(),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        Synthesizer::builder().with_node_width(-10.0).build(),
        Err(ConfigError::InvalidValue { .. })
    ));

    let synthesizer = Synthesizer::builder().with_center_x(40.0).build().unwrap();
    assert_eq!(synthesizer.config().center_x, 40.0);
}

#[test]
fn test_null_activity_fields_still_synthesize() {
    let json = r#"{
        "id": "proc-7",
        "activities": [
            {"id": "a1", "processId": null, "order": 1, "activityType": null,
             "resourceIds": null, "functionIds": null},
            {"id": "a2", "order": null, "activityType": "decision", "resourceIds": ["r1"]}
        ]
    }"#;
    let process = Process::from_json(json).expect("null fields should read as defaults");
    assert_eq!(process.activities[0].activity_type, ActivityType::Manual);
    assert!(process.activities[0].resource_ids.is_empty());
    assert_eq!(process.activities[1].order, 0);

    let graph = procflow::synthesize(&process);
    let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["start", "a2", "a1", "end"]);

    // The binary artifact still reads its own activity payloads back.
    let bytes = graph.to_bytes().unwrap();
    assert_eq!(FlowGraph::from_bytes(&bytes).unwrap(), graph);
}

#[test]
fn test_artifact_bytes_round_trip() {
    let graph = procflow::synthesize(&implicit_process(create_three_step_activities()));
    let bytes = graph.to_bytes().unwrap();
    assert_eq!(FlowGraph::from_bytes(&bytes).unwrap(), graph);
    assert!(FlowGraph::from_bytes(&bytes[..bytes.len() / 2]).is_err());
}

#[test]
fn test_malformed_snapshot_is_a_parse_error() {
    let err = Process::from_json(r#"{"activities": []}"#).unwrap_err();
    assert!(matches!(err, SnapshotError::JsonParseError(_)));
}
