// Infrastructure layer - Configuration and rendering adapters
pub mod config;
pub mod html_page;
pub mod plotly_mapper;
