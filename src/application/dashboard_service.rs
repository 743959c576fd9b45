// Dashboard service - Use case for one selection -> generation -> render pass
use crate::application::chart_renderer::render_charts;
use crate::application::layout_composer::compose;
use crate::application::metric_generator::{generate, MetricSet};
use crate::domain::dashboard::DashboardPage;
use crate::domain::indicator::Indicator;
use crate::domain::selection::Selection;
use crate::domain::series::{SankeyFlow, Series};
use crate::infrastructure::config::{DashboardSettings, Theme};
use crate::infrastructure::plotly_mapper::figures_by_id;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON view of one render pass.
#[derive(Debug, Serialize)]
pub struct DashboardPayload {
    pub selection: Selection,
    pub indicators: Vec<Indicator>,
    pub series: BTreeMap<&'static str, Series>,
    pub sankey: SankeyFlow,
    pub charts: serde_json::Value,
}

impl DashboardPayload {
    fn new(metrics: MetricSet, charts: serde_json::Value) -> Self {
        let series = metrics
            .series_by_id()
            .into_iter()
            .map(|(id, series)| (id, series.clone()))
            .collect();
        Self {
            selection: metrics.selection,
            indicators: metrics.indicators,
            series,
            sankey: metrics.value_chain,
            charts,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    theme: Theme,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(theme: Theme, settings: DashboardSettings) -> Self {
        Self { theme, settings }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render with fresh entropy and today's date, as every live request does.
    pub fn get_dashboard(&self, selection: &Selection) -> DashboardPage {
        let mut rng = StdRng::from_entropy();
        let today = chrono::Local::now().date_naive();
        self.build_dashboard(selection, &mut rng, today)
    }

    pub fn build_dashboard<R: Rng + ?Sized>(
        &self,
        selection: &Selection,
        rng: &mut R,
        last_update: NaiveDate,
    ) -> DashboardPage {
        let metrics = generate(selection, rng);
        let charts = render_charts(&metrics, &self.theme);

        tracing::debug!(
            fiscal_year = %selection.fiscal_year,
            scope = %selection.scope,
            indicators = metrics.indicators.len(),
            charts = charts.len(),
            "Rendered dashboard"
        );

        compose(&metrics, charts, &self.settings, last_update)
    }

    pub fn get_payload(&self, selection: &Selection) -> DashboardPayload {
        let mut rng = StdRng::from_entropy();
        self.build_payload(selection, &mut rng)
    }

    pub fn build_payload<R: Rng + ?Sized>(&self, selection: &Selection, rng: &mut R) -> DashboardPayload {
        let metrics = generate(selection, rng);
        let charts = figures_by_id(&render_charts(&metrics, &self.theme));
        DashboardPayload::new(metrics, charts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::{FiscalYear, Scope};

    fn service() -> DashboardService {
        DashboardService::new(Theme::default(), DashboardSettings::default())
    }

    #[test]
    fn test_build_dashboard_is_reproducible_with_seed() {
        let service = service();
        let selection = Selection::new(FiscalYear::Fy2024, Scope::Global);
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

        let a = service.build_dashboard(&selection, &mut StdRng::seed_from_u64(3), date);
        let b = service.build_dashboard(&selection, &mut StdRng::seed_from_u64(3), date);
        assert_eq!(a.charts, b.charts);
        assert_eq!(a.charts.len(), 8);
    }

    #[test]
    fn test_payload_shape() {
        let payload = service().build_payload(&Selection::default(), &mut StdRng::seed_from_u64(8));
        let json = serde_json::to_value(&payload).unwrap();

        let mut keys: Vec<_> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["charts", "indicators", "sankey", "selection", "series"]);

        assert_eq!(json["selection"]["fiscal_year"], 2025);
        assert_eq!(json["indicators"][0]["formatted_value"], "49,500 tCO2e");
        assert_eq!(json["series"].as_object().unwrap().len(), 7);
        assert_eq!(json["series"]["ghg_trend"]["y"].as_array().unwrap().len(), 12);
        assert_eq!(json["series"]["supplier_score_distribution"]["x"][199], 199);
        assert_eq!(json["sankey"]["nodes"][1]["label"], "Manufacturing");
        assert_eq!(json["sankey"]["links"].as_array().unwrap().len(), 6);
        assert!(json["charts"]["value_chain"].is_object());
    }
}
