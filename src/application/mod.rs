// Application layer - Generation, chart mapping and layout use cases
pub mod chart_renderer;
pub mod dashboard_service;
pub mod layout_composer;
pub mod metric_generator;
