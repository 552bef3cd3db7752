use super::config::LayoutConfig;
use crate::mode::FlowMode;
use crate::process::{Activity, Position};
use itertools::{Itertools, MinMaxResult};

/// An activity together with the position the layout resolved for it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacedActivity<'a> {
    pub activity: &'a Activity,
    pub position: Position,
    /// `true` when the position came from the snapshot rather than the layout.
    pub stored: bool,
}

/// Resolves a position for every activity, in the given (already sorted) order.
///
/// Stored positions are used verbatim. The rest are stacked on the main column
/// in implicit mode, or parked in a side column in explicit mode so they stay
/// clear of the user-drawn flow.
pub(crate) fn place_activities<'a>(
    sorted: &[&'a Activity],
    mode: FlowMode,
    config: &LayoutConfig,
) -> Vec<PlacedActivity<'a>> {
    let mut next_side_y = match mode {
        FlowMode::Explicit => side_column_start(sorted, config),
        FlowMode::Implicit => 0.0,
    };

    let mut placed = Vec::with_capacity(sorted.len());
    for (index, &activity) in sorted.iter().enumerate() {
        if let Some(position) = activity.stored_position() {
            log::trace!("'{}' keeps stored position {:?}", activity.id, position);
            placed.push(PlacedActivity {
                activity,
                position,
                stored: true,
            });
            continue;
        }

        let position = match mode {
            FlowMode::Implicit => Position::new(
                config.center_x,
                (index as f64 + 1.0) * config.vertical_spacing,
            ),
            FlowMode::Explicit => {
                let position = Position::new(config.side_column_x(), next_side_y);
                next_side_y += config.vertical_spacing;
                position
            }
        };
        log::trace!("'{}' placed at {:?}", activity.id, position);
        placed.push(PlacedActivity {
            activity,
            position,
            stored: false,
        });
    }
    placed
}

/// Midpoint of the vertical extent covered by stored positions.
fn side_column_start(sorted: &[&Activity], config: &LayoutConfig) -> f64 {
    let stored_ys = sorted
        .iter()
        .filter_map(|activity| activity.stored_position())
        .map(|position| position.y);

    match stored_ys.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => config.explicit_fallback_y,
        MinMaxResult::OneElement(y) => y,
        MinMaxResult::MinMax(min, max) => (min + max) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, order: i64, position: Option<(f64, f64)>) -> Activity {
        Activity {
            id: id.to_string(),
            order,
            position_x: position.map(|p| p.0),
            position_y: position.map(|p| p.1),
            ..Default::default()
        }
    }

    #[test]
    fn implicit_stacks_by_sorted_index() {
        let a = activity("a", 10, None);
        let b = activity("b", 20, Some((90.0, 500.0)));
        let c = activity("c", 30, None);
        let placed = place_activities(&[&a, &b, &c], FlowMode::Implicit, &LayoutConfig::default());

        assert_eq!(placed[0].position, Position::new(250.0, 120.0));
        assert_eq!(placed[1].position, Position::new(90.0, 500.0));
        assert!(placed[1].stored);
        assert_eq!(placed[2].position, Position::new(250.0, 360.0));
        assert!(!placed[2].stored);
    }

    #[test]
    fn explicit_parks_new_nodes_beside_the_stored_extent() {
        let a = activity("a", 1, Some((250.0, 100.0)));
        let b = activity("b", 2, Some((250.0, 500.0)));
        let c = activity("c", 3, None);
        let d = activity("d", 4, None);
        let placed = place_activities(&[&a, &b, &c, &d], FlowMode::Explicit, &LayoutConfig::default());

        assert_eq!(placed[2].position, Position::new(550.0, 300.0));
        assert_eq!(placed[3].position, Position::new(550.0, 420.0));
    }

    #[test]
    fn explicit_without_stored_positions_uses_fallback() {
        let a = activity("a", 1, None);
        let placed = place_activities(&[&a], FlowMode::Explicit, &LayoutConfig::default());
        assert_eq!(placed[0].position, Position::new(550.0, 120.0));
    }
}
