// Dashboard domain model - the composed page layout
use super::chart::ChartSpec;
use super::indicator::Indicator;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardPage {
    pub title: String,
    pub subtitle: String,
    pub sidebar: Sidebar,
    pub bands: Vec<Band>,
    pub charts: Vec<ChartSpec>,
    pub footer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sidebar {
    pub header: String,
    pub controls: Vec<Control>,
    pub caption: Vec<String>,
}

/// A dropdown rendered in the sidebar. `name` is the query parameter it drives.
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<ControlOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlOption {
    pub value: String,
    pub selected: bool,
}

/// A full-width horizontal section of the page.
#[derive(Debug, Clone, Serialize)]
pub struct Band {
    pub header: Option<String>,
    pub panels: Vec<Panel>,
    pub separator_after: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub weight: u8,
    pub header: Option<String>,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub weight: u8,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tab {
    pub label: &'static str,
    pub chart_id: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Block {
    Card(Indicator),
    Chart(&'static str),
    Tabs(Vec<Tab>),
}
