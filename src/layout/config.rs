use crate::error::ConfigError;
use crate::process::EdgeType;
use serde::{Deserialize, Serialize};
use std::fs;

/// Geometry and styling knobs used when synthesizing a flow graph.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// X coordinate of the main column. Start and End always sit here.
    #[serde(alias = "centerX")]
    pub center_x: f64,
    /// Vertical distance between stacked nodes.
    #[serde(alias = "verticalSpacing")]
    pub vertical_spacing: f64,
    /// Rendered node width, used to offset the side column in explicit mode.
    #[serde(alias = "nodeWidth")]
    pub node_width: f64,
    /// Max horizontal distance from `center_x` for an activity to count as on the main column.
    #[serde(alias = "axisTolerance")]
    pub axis_tolerance: f64,
    /// First Y used for unpositioned explicit-mode activities when nothing is stored yet.
    #[serde(alias = "explicitFallbackY")]
    pub explicit_fallback_y: f64,
    /// End node Y when no activity can anchor it.
    #[serde(alias = "emptyEndOffset")]
    pub empty_end_offset: f64,
    #[serde(alias = "synthesizedEdgeType")]
    pub synthesized_edge_type: EdgeType,
    #[serde(alias = "animateSynthesizedEdges")]
    pub animate_synthesized_edges: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 250.0,
            vertical_spacing: 120.0,
            node_width: 200.0,
            axis_tolerance: 100.0,
            explicit_fallback_y: 120.0,
            empty_end_offset: 240.0,
            synthesized_edge_type: EdgeType::Smoothstep,
            animate_synthesized_edges: false,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// X of the column unpositioned explicit-mode activities are parked in.
    pub fn side_column_x(&self) -> f64 {
        self.center_x + 1.5 * self.node_width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("center_x", self.center_x),
            ("vertical_spacing", self.vertical_spacing),
            ("node_width", self.node_width),
            ("axis_tolerance", self.axis_tolerance),
            ("explicit_fallback_y", self.explicit_fallback_y),
            ("empty_end_offset", self.empty_end_offset),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be a finite number, got {}", value)));
            }
        }
        if self.vertical_spacing <= 0.0 {
            return Err(invalid("vertical_spacing", "must be greater than zero".to_string()));
        }
        if self.node_width <= 0.0 {
            return Err(invalid("node_width", "must be greater than zero".to_string()));
        }
        if self.axis_tolerance < 0.0 {
            return Err(invalid("axis_tolerance", "must not be negative".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = LayoutConfig::from_json(r#"{"centerX": 400, "vertical_spacing": 80}"#).unwrap();
        assert_eq!(config.center_x, 400.0);
        assert_eq!(config.vertical_spacing, 80.0);
        assert_eq!(config.node_width, 200.0);
        assert_eq!(config.side_column_x(), 700.0);
    }

    #[test]
    fn rejects_non_positive_spacing() {
        let err = LayoutConfig::from_json(r#"{"verticalSpacing": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "vertical_spacing"));
    }
}
