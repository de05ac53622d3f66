//! Serializable figure view models
//!
//! Plain data shapes a rendering collaborator turns into actual charts.
//! Nothing here knows about axes, legends, colors, or drawing; figures
//! carry only titles and the values derived by the core queries.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::Serialize;

/// One slice of a pie figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSegment {
    /// Segment label (a site name, or an outcome label)
    pub label: String,

    /// Segment weight
    pub value: usize,
}

/// Pie figure view model.
///
/// An empty dataset never reaches a renderer as an empty figure: the
/// builders substitute the explicit no-data placeholder instead, so a
/// renderer can always draw what it is handed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    /// Chart title
    pub title: String,

    /// Segments in deterministic (label-sorted) order
    pub segments: Vec<PieSegment>,
}

impl PieFigure {
    /// The no-data placeholder: a single unit-weight segment, as the
    /// original dashboard renders for a site without records.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            segments: vec![PieSegment {
                label: "No Data".to_string(),
                value: 1,
            }],
        }
    }

    /// Whether this figure is the no-data placeholder
    pub fn is_placeholder(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].label == "No Data"
    }
}

/// One point of the payload-vs-outcome scatter figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// X value: payload mass in kilograms
    pub payload_mass_kg: f64,

    /// Y value: outcome class (1 = success, 0 = failure)
    pub outcome_class: u8,

    /// Color/grouping dimension
    pub booster_version_category: String,

    /// Hover dimension
    pub launch_site: String,
}

/// Scatter figure view model. An empty point set is valid; the
/// renderer simply has nothing to plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    /// Chart title
    pub title: String,

    /// Points in original dataset order
    pub points: Vec<ScatterPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shape() {
        let figure = PieFigure::placeholder("No launch data for site Z");
        assert!(figure.is_placeholder());
        assert_eq!(figure.segments.len(), 1);
        assert_eq!(figure.segments[0].value, 1);
    }

    #[test]
    fn test_real_figure_is_not_placeholder() {
        let figure = PieFigure {
            title: "t".to_string(),
            segments: vec![PieSegment {
                label: "Success".to_string(),
                value: 3,
            }],
        };
        assert!(!figure.is_placeholder());
    }
}
