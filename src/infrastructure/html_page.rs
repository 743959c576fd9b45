// HTML page rendering for the composed dashboard
use crate::domain::dashboard::{Block, DashboardPage};
use crate::domain::indicator::DeltaDirection;
use crate::infrastructure::config::Theme;
use crate::infrastructure::plotly_mapper::figures_by_id;
use askama::Template;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub page: &'a DashboardPage,
    pub theme: &'a Theme,
    pub figures_json: String,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(page: &'a DashboardPage, theme: &'a Theme) -> Self {
        // Keep "</script>" inside string values from closing the inline script
        let figures_json = figures_by_id(&page.charts)
            .to_string()
            .replace("</", "<\\/");
        Self {
            page,
            theme,
            figures_json,
        }
    }
}

pub fn render_page(page: &DashboardPage, theme: &Theme) -> askama::Result<String> {
    DashboardTemplate::new(page, theme).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_renderer::{chart_ids, render_charts};
    use crate::application::layout_composer::compose;
    use crate::application::metric_generator::generate;
    use crate::domain::selection::{FiscalYear, Scope, Selection};
    use crate::infrastructure::config::DashboardSettings;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn html(selection: Selection) -> String {
        let theme = Theme::default();
        let metrics = generate(&selection, &mut StdRng::seed_from_u64(5));
        let charts = render_charts(&metrics, &theme);
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let page = compose(&metrics, charts, &DashboardSettings::default(), date);
        render_page(&page, &theme).unwrap()
    }

    #[test]
    fn test_page_contains_cards_and_chart_slots() {
        let html = html(Selection::new(FiscalYear::Fy2024, Scope::Emea));

        assert!(html.contains("<title>ESG Performance Dashboard</title>"));
        assert!(html.contains("54,000 tCO2e"));
        assert!(html.contains("1.5M m³"));
        assert!(html.contains(r#"<div class="metric-delta bad">+1.2%</div>"#));
        assert!(html.contains(r#"<div class="metric-delta good">-8.5%</div>"#));
        for id in [chart_ids::GHG_TREND, chart_ids::WATER_BY_REGION, chart_ids::VALUE_CHAIN] {
            assert!(html.contains(&format!(r#"id="chart-{}""#, id)), "missing {}", id);
        }
        assert!(html.contains("CONFIDENTIAL - INTERNAL USE ONLY"));
        assert!(html.contains("Last Update: 2026-10-15"));
    }

    #[test]
    fn test_page_marks_selected_options() {
        let html = html(Selection::new(FiscalYear::Fy2023, Scope::Apac));
        assert!(html.contains(r#"<option value="2023" selected>"#));
        assert!(html.contains(r#"<option value="APAC" selected>"#));
        assert!(html.contains(r#"<option value="2025">"#));
    }

    #[test]
    fn test_headers_are_escaped() {
        let html = html(Selection::default());
        assert!(html.contains("Governance &amp; Compliance"));
    }
}
