// Chart specification domain model
//
// Declarative trace + layout documents in the shape plotly.js consumes.
// Specifications are output-only: each one is built from scratch for a
// single response and never mutated or cached.
use serde::Serialize;

use super::palette;

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        x: Vec<String>,
        y: Vec<Option<f64>>,
        name: String,
        marker: Marker,
    },
    Scatter3d {
        x: Vec<Option<f64>>,
        y: Vec<Option<f64>>,
        z: Vec<String>,
        mode: String,
        text: Vec<String>,
        name: String,
        marker: Marker,
    },
    Scattergeo {
        lat: Vec<Option<f64>>,
        lon: Vec<Option<f64>>,
        mode: String,
        hovertext: Vec<String>,
        marker: Marker,
    },
}

impl Trace {
    pub fn bar(x: Vec<String>, y: Vec<Option<f64>>, name: String, color: &str) -> Self {
        Trace::Bar {
            x,
            y,
            name,
            marker: Marker {
                color: Some(MarkerColor::Uniform(color.to_string())),
                ..Marker::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<MarkerSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

/// A fixed marker size or one size per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Fixed(f64),
    PerPoint(Vec<f64>),
}

/// A uniform marker color or one value per point on a continuous scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Uniform(String),
    PerPoint(Vec<Option<f64>>),
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

impl Layout {
    /// Base layout for the dashboard's dark theme.
    pub fn dark() -> Self {
        Self {
            title: None,
            plot_bgcolor: palette::BACKGROUND.to_string(),
            paper_bgcolor: palette::BACKGROUND.to_string(),
            font: Font {
                color: palette::TEXT.to_string(),
                size: None,
            },
            xaxis: None,
            yaxis: None,
            scene: None,
            geo: None,
            height: None,
            showlegend: None,
            legend: None,
            margin: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub projection: Projection,
    pub bgcolor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub orientation: String,
    pub yanchor: String,
    pub y: f64,
    pub xanchor: String,
    pub x: f64,
    pub bgcolor: String,
    pub font: Font,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}
