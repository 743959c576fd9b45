// Domain layer - Dashboard value objects, recomputed on every render
pub mod chart;
pub mod dashboard;
pub mod indicator;
pub mod selection;
pub mod series;
