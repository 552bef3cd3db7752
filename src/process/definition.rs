use crate::mode::FlowMode;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treats an explicit JSON `null` the same as a missing attribute.
///
/// Binary formats such as the bincode graph artifact never encode a null here,
/// so they read the plain value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    if deserializer.is_human_readable() {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    } else {
        T::deserialize(deserializer)
    }
}

/// The kind of work an activity represents.
///
/// Unknown names never fail to parse; they fall back to `Manual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    #[default]
    Manual,
    Automated,
    Hybrid,
    Decision,
    Handoff,
    // Industrial-engineering process chart symbols
    Operation,
    Transport,
    Inspection,
    Delay,
    Storage,
    Combined,
}

impl ActivityType {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "manual" => Self::Manual,
            "automated" => Self::Automated,
            "hybrid" => Self::Hybrid,
            "decision" => Self::Decision,
            "handoff" => Self::Handoff,
            "operation" => Self::Operation,
            "transport" | "transportation" => Self::Transport,
            "inspection" => Self::Inspection,
            "delay" => Self::Delay,
            "storage" => Self::Storage,
            "combined" => Self::Combined,
            other => {
                log::debug!("Unknown activity type '{}', treating it as manual", other);
                Self::Manual
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automated => "automated",
            Self::Hybrid => "hybrid",
            Self::Decision => "decision",
            Self::Handoff => "handoff",
            Self::Operation => "operation",
            Self::Transport => "transport",
            Self::Inspection => "inspection",
            Self::Delay => "delay",
            Self::Storage => "storage",
            Self::Combined => "combined",
        }
    }
}

impl From<String> for ActivityType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ActivityType> for String {
    fn from(kind: ActivityType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual style of a connection. Unknown names fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EdgeType {
    #[default]
    Default,
    Straight,
    Step,
    Smoothstep,
    SimpleBezier,
}

impl EdgeType {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "bezier" => Self::Default,
            "straight" => Self::Straight,
            "step" => Self::Step,
            "smoothstep" => Self::Smoothstep,
            "simplebezier" => Self::SimpleBezier,
            other => {
                log::debug!("Unknown edge type '{}', using the default edge", other);
                Self::Default
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Straight => "straight",
            Self::Step => "step",
            Self::Smoothstep => "smoothstep",
            Self::SimpleBezier => "simplebezier",
        }
    }
}

impl From<String> for EdgeType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<EdgeType> for String {
    fn from(kind: EdgeType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point on the layout canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One step of a business process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(default, alias = "processId", deserialize_with = "null_as_default")]
    pub process_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default, alias = "activityType", deserialize_with = "null_as_default")]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "positionX")]
    pub position_x: Option<f64>,
    #[serde(default, alias = "positionY")]
    pub position_y: Option<f64>,
    #[serde(default, alias = "subProcessId")]
    pub sub_process_id: Option<String>,
    #[serde(default, alias = "resourceIds", deserialize_with = "null_as_default")]
    pub resource_ids: Vec<String>,
    #[serde(default, alias = "functionIds", deserialize_with = "null_as_default")]
    pub function_ids: Vec<String>,
}

impl Activity {
    /// The persisted layout position, if one was ever stored.
    ///
    /// `(0, 0)` is the "never positioned" sentinel, so it yields `None`, as do
    /// non-finite coordinates.
    pub fn stored_position(&self) -> Option<Position> {
        let x = self.position_x.unwrap_or(0.0);
        let y = self.position_y.unwrap_or(0.0);
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x != 0.0 || y != 0.0 {
            Some(Position { x, y })
        } else {
            None
        }
    }

    pub fn is_decision(&self) -> bool {
        self.activity_type == ActivityType::Decision
    }
}

/// A user-drawn connection between two activities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExplicitEdge {
    pub id: String,
    #[serde(alias = "sourceActivityId")]
    pub source: String,
    #[serde(alias = "targetActivityId")]
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
    #[serde(
        default,
        alias = "edgeType",
        alias = "type",
        deserialize_with = "null_as_default"
    )]
    pub edge_type: EdgeType,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub animated: bool,
}

/// An immutable snapshot of a persisted business process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Process {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<Activity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<ExplicitEdge>,
    #[serde(default, alias = "entryActivityId")]
    pub entry_activity_id: Option<String>,
    #[serde(default, alias = "exitActivityId")]
    pub exit_activity_id: Option<String>,
    /// Once set this stays set, even after every explicit edge is deleted.
    #[serde(default, alias = "useExplicitFlow", deserialize_with = "null_as_default")]
    pub use_explicit_flow: bool,
    /// Text shown on the Start node.
    #[serde(default)]
    pub trigger: Option<String>,
    /// Text shown on the End node.
    #[serde(default)]
    pub output: Option<String>,
}

impl Process {
    pub fn mode(&self) -> FlowMode {
        FlowMode::resolve(self.use_explicit_flow)
    }

    /// Activities in ascending `order`. Ties keep their snapshot order.
    pub fn sorted_activities(&self) -> Vec<&Activity> {
        self.activities
            .iter()
            .sorted_by_key(|activity| activity.order)
            .collect()
    }

    /// The entry pointer, ignoring blank ids.
    pub fn entry_id(&self) -> Option<&str> {
        self.entry_activity_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The exit pointer, ignoring blank ids.
    pub fn exit_id(&self) -> Option<&str> {
        self.exit_activity_id.as_deref().filter(|id| !id.is_empty())
    }
}
