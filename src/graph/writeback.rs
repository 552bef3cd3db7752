use super::model::{FlowGraph, FlowNode};
use crate::error::WritebackError;
use crate::process::{Position, Process};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single `(activityId, positionX, positionY)` triple sent to the position store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    #[serde(alias = "activityId")]
    pub activity_id: String,
    #[serde(alias = "positionX")]
    pub position_x: f64,
    #[serde(alias = "positionY")]
    pub position_y: f64,
}

impl PositionUpdate {
    pub fn position(&self) -> Position {
        Position::new(self.position_x, self.position_y)
    }
}

/// Persists user-adjusted activity positions in bulk.
///
/// Called by whatever owns drag handling; synthesis never writes positions
/// back on its own.
pub trait PositionStore {
    fn bulk_update(&mut self, updates: &[PositionUpdate]) -> Result<(), WritebackError>;
}

/// Collects the activity nodes in `dragged` whose position differs from the
/// one `previous` rendered them at.
///
/// Only nodes the user actually moved are reported. Layout-derived positions
/// that were never touched stay unstored, so they keep following the layout.
/// Start, End and nodes missing from `previous` are skipped.
pub fn position_updates(previous: &FlowGraph, dragged: &[FlowNode]) -> Vec<PositionUpdate> {
    let rendered: AHashMap<&str, Position> = previous
        .nodes
        .iter()
        .filter(|node| !node.is_terminal())
        .map(|node| (node.id.as_str(), node.position))
        .collect();

    dragged
        .iter()
        .filter(|node| !node.is_terminal())
        .filter_map(|node| {
            let before = rendered.get(node.id.as_str())?;
            if *before == node.position {
                return None;
            }
            if node.position == Position::default() {
                log::warn!(
                    "Activity '{}' moved to the origin; it will read back as unpositioned",
                    node.id
                );
            }
            Some(PositionUpdate {
                activity_id: node.id.clone(),
                position_x: node.position.x,
                position_y: node.position.y,
            })
        })
        .collect()
}

impl Process {
    /// Applies a batch of position updates to this snapshot.
    ///
    /// The batch is all-or-nothing: an unknown activity id rejects every update.
    pub fn apply_position_updates(
        &mut self,
        updates: &[PositionUpdate],
    ) -> Result<(), WritebackError> {
        let index: AHashMap<String, usize> = self
            .activities
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();

        let mut resolved = Vec::with_capacity(updates.len());
        for update in updates {
            let slot = index
                .get(&update.activity_id)
                .ok_or_else(|| WritebackError::UnknownActivity(update.activity_id.clone()))?;
            resolved.push((*slot, update));
        }

        for (slot, update) in resolved {
            let activity = &mut self.activities[slot];
            activity.position_x = Some(update.position_x);
            activity.position_y = Some(update.position_y);
        }
        Ok(())
    }
}

impl PositionStore for Process {
    fn bulk_update(&mut self, updates: &[PositionUpdate]) -> Result<(), WritebackError> {
        self.apply_position_updates(updates)
    }
}
