//! Tests for edge synthesis in both authoring modes.
mod common;
use common::*;
use procflow::prelude::*;

#[test]
fn test_implicit_chain_for_three_manual_steps() {
    let process = implicit_process(create_three_step_activities());
    let graph = procflow::synthesize(&process);

    assert_eq!(
        graph.edge_pairs(),
        vec![("start", "a1"), ("a1", "a2"), ("a2", "a3"), ("a3", "end")]
    );
    assert_eq!(graph.nodes.len(), 5);
    assert!(graph.edges.iter().all(|e| e.label.is_none() && e.source_handle.is_none()));
}

#[test]
fn test_implicit_chain_labels_decision_branch() {
    let mut activities = create_three_step_activities();
    activities
        .iter_mut()
        .find(|a| a.id == "a2")
        .unwrap()
        .activity_type = ActivityType::Decision;
    let graph = procflow::synthesize(&implicit_process(activities));

    let plain = graph.edge("a1", "a2").unwrap();
    assert_eq!(plain.source_handle, None);
    assert_eq!(plain.label, None);

    let yes = graph.edge("a2", "a3").unwrap();
    assert_eq!(yes.source_handle.as_deref(), Some("yes"));
    assert_eq!(yes.label.as_deref(), Some("Yes"));
    assert_eq!(graph.node("a2").unwrap().kind, NodeKind::Decision);
}

#[test]
fn test_decision_as_last_step_keeps_plain_end_edge() {
    let activities = vec![
        activity("a1", 1, ActivityType::Manual),
        activity("a2", 2, ActivityType::Decision),
    ];
    let graph = procflow::synthesize(&implicit_process(activities));
    let to_end = graph.edge("a2", "end").unwrap();
    assert_eq!(to_end.label, None);
    assert_eq!(to_end.source_handle, None);
}

#[test]
fn test_implicit_mode_ignores_persisted_edges_and_pointers() {
    let mut process = implicit_process(create_three_step_activities());
    process.edges = vec![explicit_edge("x", "a3", "a1")];
    process.entry_activity_id = Some("a3".to_string());
    process.exit_activity_id = Some("a1".to_string());

    let graph = procflow::synthesize(&process);
    assert_eq!(graph.edges.len(), 4);
    assert!(graph.edge("a3", "a1").is_none());
}

#[test]
fn test_explicit_empty_edges_never_fall_back_to_chain() {
    let process = explicit_process(create_three_step_activities(), vec![]);
    let graph = procflow::synthesize(&process);

    assert!(graph.edges.is_empty());
    assert!(graph.start().is_some());
    assert!(graph.end().is_some());
    assert_eq!(graph.nodes.len(), 5);
}

#[test]
fn test_explicit_connectors_follow_entry_and_exit() {
    let mut process = explicit_process(
        create_three_step_activities(),
        vec![explicit_edge("e1", "a1", "a3")],
    );
    process.entry_activity_id = Some("a1".to_string());
    let graph = procflow::synthesize(&process);
    assert_eq!(graph.edge_pairs(), vec![("a1", "a3"), ("start", "a1")]);

    process.exit_activity_id = Some("a3".to_string());
    let graph = procflow::synthesize(&process);
    assert_eq!(
        graph.edge_pairs(),
        vec![("a1", "a3"), ("start", "a1"), ("a3", "end")]
    );
    assert_eq!(graph.edges[1].id, "e-start-a1");
    assert_eq!(graph.edges[2].id, "e-a3-end");
}

#[test]
fn test_connector_id_never_shadows_persisted_edge() {
    let mut process = explicit_process(
        create_three_step_activities(),
        vec![explicit_edge("e-start-a1", "a1", "a2")],
    );
    process.entry_activity_id = Some("a1".to_string());
    let graph = procflow::synthesize(&process);

    let ids: Vec<_> = graph.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e-start-a1", "e-start-a1-2"]);
    assert_eq!(graph.edges[0].source, "a1");
    assert_eq!(graph.edges[1].source, "start");
}

#[test]
fn test_repeated_chain_pairs_get_distinct_ids() {
    let process = implicit_process(vec![
        activity("a1", 1, ActivityType::Manual),
        activity("a2", 2, ActivityType::Manual),
        activity("a1", 3, ActivityType::Manual),
        activity("a2", 4, ActivityType::Manual),
    ]);
    let graph = procflow::synthesize(&process);

    let ids: Vec<_> = graph.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["e-start-a1", "e-a1-a2", "e-a2-a1", "e-a1-a2-2", "e-a2-end"]
    );
}

#[test]
fn test_synthesized_edges_follow_config_style() {
    let synthesizer = Synthesizer::builder()
        .with_edge_type(EdgeType::Straight)
        .with_animated_edges(true)
        .build()
        .unwrap();
    let graph = synthesizer.synthesize(&implicit_process(create_three_step_activities()));
    assert!(
        graph
            .edges
            .iter()
            .all(|e| e.edge_type == EdgeType::Straight && e.animated)
    );
}

#[test]
fn test_zero_activities_leaves_terminals_disconnected() {
    for use_explicit_flow in [false, true] {
        let process = Process {
            id: "empty".to_string(),
            use_explicit_flow,
            ..Default::default()
        };
        let graph = procflow::synthesize(&process);
        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["start", "end"]);
        assert!(graph.edges.is_empty());
    }
}
