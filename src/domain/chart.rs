// Chart domain models - what the renderer hands to the chart library
use super::series::{SankeyFlow, Series};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Area,
    Bar,
    Box,
    Donut,
    Gauge,
    Combo,
    Sankey,
}

/// Kinds that draw x/y traces. Gauges and flows have their own data shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Area,
    Bar,
    Box,
    Donut,
    Combo,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub t: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub b: Option<u32>,
}

impl Margin {
    pub const fn all(t: u32, l: u32, r: u32, b: u32) -> Self {
        Self {
            t: Some(t),
            l: Some(l),
            r: Some(r),
            b: Some(b),
        }
    }

    pub const fn sides(l: u32, r: u32) -> Self {
        Self {
            t: None,
            l: Some(l),
            r: Some(r),
            b: None,
        }
    }
}

/// Text pinned to the centre of a chart (donut label).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub color: String,
    pub font_size: u32,
}

/// Static per-chart styling. Never derived from user input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStyle {
    pub template: &'static str,
    pub height: u32,
    pub margin: Option<Margin>,
    pub show_legend: bool,
    pub hide_x_title: bool,
    pub fill_color: Option<String>,
    pub hole: Option<f64>,
    pub annotation: Option<Annotation>,
    pub font_family: Option<&'static str>,
}

impl ChartStyle {
    pub fn new(height: u32) -> Self {
        Self {
            template: "plotly_white",
            height,
            margin: None,
            show_legend: true,
            hide_x_title: false,
            fill_color: None,
            hole: None,
            annotation: None,
            font_family: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub series: Series,
    /// One colour for the whole trace, or one per point (donut slices).
    pub colors: Vec<String>,
    pub secondary_axis: bool,
}

impl Trace {
    pub fn new(series: Series, color: &str) -> Self {
        Self {
            series,
            colors: vec![color.to_string()],
            secondary_axis: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeScale {
    pub min: f64,
    pub max: f64,
    pub bar_color: String,
    pub track_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledFlow {
    pub flow: SankeyFlow,
    pub node_colors: Vec<String>,
    pub link_colors: Vec<String>,
    pub pad: u32,
    pub thickness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartData {
    Traces { kind: TraceKind, traces: Vec<Trace> },
    Gauge { value: f64, scale: GaugeScale },
    Flow(StyledFlow),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: String,
    pub style: ChartStyle,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match &self.data {
            ChartData::Traces { kind, .. } => match kind {
                TraceKind::Area => ChartKind::Area,
                TraceKind::Bar => ChartKind::Bar,
                TraceKind::Box => ChartKind::Box,
                TraceKind::Donut => ChartKind::Donut,
                TraceKind::Combo => ChartKind::Combo,
            },
            ChartData::Gauge { .. } => ChartKind::Gauge,
            ChartData::Flow(_) => ChartKind::Sankey,
        }
    }
}
