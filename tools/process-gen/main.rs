use clap::Parser;
use procflow::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random process snapshots for the procflow synthesizer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_process.json")]
    output: String,

    /// The minimum number of activities to generate
    #[arg(long, default_value_t = 0)]
    min: usize,

    /// The maximum number of activities to generate
    #[arg(long, default_value_t = 12)]
    max: usize,

    /// Probability (0.0 - 1.0) that an activity is a decision step
    #[arg(long, default_value_t = 0.2)]
    decision_ratio: f64,

    /// Probability (0.0 - 1.0) that an activity already has a stored position
    #[arg(long, default_value_t = 0.5)]
    positioned_ratio: f64,

    /// Generate an explicit-mode process with random connections
    #[arg(long)]
    explicit: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    for (flag, value) in [
        ("--decision-ratio", cli.decision_ratio),
        ("--positioned-ratio", cli.positioned_ratio),
    ] {
        if !(0.0..=1.0).contains(&value) {
            eprintln!("Error: {} must be between 0 and 1, got {}", flag, value);
            std::process::exit(1);
        }
    }

    let count = rng.random_range(cli.min..=cli.max);
    log::info!(
        "Generating a {} process with {} activities...",
        if cli.explicit { "explicit" } else { "implicit" },
        count
    );

    let process_id = format!("proc-{:06}", rng.random_range(0..1_000_000));
    let activities = generate_activities(&mut rng, &process_id, count, &cli);
    let edges = if cli.explicit {
        generate_edges(&mut rng, &activities)
    } else {
        Vec::new()
    };

    let process = Process {
        entry_activity_id: cli
            .explicit
            .then(|| activities.first().map(|a| a.id.clone()))
            .flatten(),
        exit_activity_id: cli
            .explicit
            .then(|| activities.last().map(|a| a.id.clone()))
            .flatten(),
        id: process_id,
        name: Some("Generated process".to_string()),
        activities,
        edges,
        use_explicit_flow: cli.explicit,
        trigger: Some("Request received".to_string()),
        output: Some("Request fulfilled".to_string()),
    };

    let json_output = serde_json::to_string_pretty(&process)?;
    fs::write(&cli.output, json_output)?;

    log::info!("Successfully generated and saved process to '{}'", cli.output);
    Ok(())
}

const NON_DECISION_TYPES: [ActivityType; 10] = [
    ActivityType::Manual,
    ActivityType::Automated,
    ActivityType::Hybrid,
    ActivityType::Handoff,
    ActivityType::Operation,
    ActivityType::Transport,
    ActivityType::Inspection,
    ActivityType::Delay,
    ActivityType::Storage,
    ActivityType::Combined,
];

/// Generates activities with gapped, shuffled `order` values.
fn generate_activities(
    rng: &mut ThreadRng,
    process_id: &str,
    count: usize,
    cli: &Cli,
) -> Vec<Activity> {
    let mut activities: Vec<Activity> = (0..count)
        .map(|i| {
            let activity_type = if rng.random_bool(cli.decision_ratio) {
                ActivityType::Decision
            } else {
                NON_DECISION_TYPES[rng.random_range(0..NON_DECISION_TYPES.len())]
            };
            let (position_x, position_y) = if rng.random_bool(cli.positioned_ratio) {
                (
                    Some(rng.random_range(0.0..800.0_f64).round()),
                    Some(rng.random_range(40.0..1600.0_f64).round()),
                )
            } else {
                (None, None)
            };
            Activity {
                id: format!("act-{:03}", i + 1),
                process_id: process_id.to_string(),
                order: (i as i64 + 1) * 10,
                activity_type,
                name: Some(format!("Step {}", i + 1)),
                description: None,
                position_x,
                position_y,
                sub_process_id: None,
                resource_ids: Vec::new(),
                function_ids: Vec::new(),
            }
        })
        .collect();

    // Snapshots rarely arrive sorted.
    for i in (1..activities.len()).rev() {
        let j = rng.random_range(0..=i);
        activities.swap(i, j);
    }
    activities
}

/// Connects activities in order, adding a "no" branch for every decision.
fn generate_edges(rng: &mut ThreadRng, activities: &[Activity]) -> Vec<ExplicitEdge> {
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by_key(|a| a.order);

    let mut edges = Vec::new();
    for (i, pair) in sorted.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        let decision = current.activity_type == ActivityType::Decision;
        edges.push(ExplicitEdge {
            id: format!("edge-{:03}", i + 1),
            source: current.id.clone(),
            target: next.id.clone(),
            source_handle: decision.then(|| "yes".to_string()),
            target_handle: None,
            edge_type: EdgeType::Smoothstep,
            label: decision.then(|| "Yes".to_string()),
            animated: false,
        });
        if decision {
            let target = sorted[rng.random_range(0..sorted.len())];
            edges.push(ExplicitEdge {
                id: format!("edge-{:03}-no", i + 1),
                source: current.id.clone(),
                target: target.id.clone(),
                source_handle: Some("no".to_string()),
                target_handle: None,
                edge_type: EdgeType::Step,
                label: Some("No".to_string()),
                animated: true,
            });
        }
    }
    edges
}
