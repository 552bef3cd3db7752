use super::config::LayoutConfig;
use super::placement::PlacedActivity;
use crate::mode::FlowMode;
use crate::process::Process;

/// Y coordinate of the End node.
///
/// The first matching rule wins:
/// 1. explicit mode with a resolvable exit activity: below that activity;
/// 2. explicit mode otherwise: below the lowest *stored* position;
/// 3. implicit mode: below the lowest activity on the main column, else below
///    the last activity by order;
/// 4. nothing to anchor on: `empty_end_offset` below Start.
pub(crate) fn end_y(
    process: &Process,
    placed: &[PlacedActivity<'_>],
    mode: FlowMode,
    config: &LayoutConfig,
) -> f64 {
    let anchor = match mode {
        FlowMode::Explicit => explicit_anchor(process, placed),
        FlowMode::Implicit => implicit_anchor(placed, config),
    };
    match anchor {
        Some(y) => y + config.vertical_spacing,
        None => config.empty_end_offset,
    }
}

fn explicit_anchor(process: &Process, placed: &[PlacedActivity<'_>]) -> Option<f64> {
    if let Some(exit_id) = process.exit_id() {
        match placed.iter().find(|p| p.activity.id == exit_id) {
            Some(exit) => return Some(exit.position.y),
            None => log::warn!(
                "Exit activity '{}' is not part of process '{}'; anchoring End on stored positions",
                exit_id,
                process.id
            ),
        }
    }

    // Unpositioned activities must never push End down.
    placed
        .iter()
        .filter(|p| p.stored)
        .map(|p| p.position.y)
        .max_by(|a, b| a.total_cmp(b))
}

fn implicit_anchor(placed: &[PlacedActivity<'_>], config: &LayoutConfig) -> Option<f64> {
    placed
        .iter()
        .filter(|p| (p.position.x - config.center_x).abs() <= config.axis_tolerance)
        .map(|p| p.position.y)
        .max_by(|a, b| a.total_cmp(b))
        .or_else(|| placed.last().map(|p| p.position.y))
}
