// Layout composer - Places cards and charts into the fixed page grid
use crate::application::chart_renderer::chart_ids;
use crate::application::metric_generator::MetricSet;
use crate::domain::chart::ChartSpec;
use crate::domain::dashboard::{
    Band, Block, Column, Control, ControlOption, DashboardPage, Panel, Sidebar, Tab,
};
use crate::domain::indicator::Indicator;
use crate::domain::selection::{FiscalYear, Scope, Selection};
use crate::infrastructure::config::DashboardSettings;
use chrono::NaiveDate;

// Executive summary cards, left to right
const SUMMARY_KEYS: [&str; 5] = [
    "ghg_emissions",
    "energy_intensity",
    "water_withdrawal",
    "esrs_compliance",
    "supplier_score",
];

pub fn compose(
    metrics: &MetricSet,
    charts: Vec<ChartSpec>,
    settings: &DashboardSettings,
    last_update: NaiveDate,
) -> DashboardPage {
    let selection = metrics.selection;

    DashboardPage {
        title: settings.title.clone(),
        subtitle: format!(
            "Overview of sustainability performance for {} in FY {}.",
            selection.scope, selection.fiscal_year
        ),
        sidebar: sidebar(&selection, settings, last_update),
        bands: vec![
            executive_summary(metrics),
            environmental(),
            social_and_governance(),
            value_chain(),
        ],
        charts,
        footer: settings.footer.clone(),
    }
}

fn sidebar(selection: &Selection, settings: &DashboardSettings, last_update: NaiveDate) -> Sidebar {
    Sidebar {
        header: "Dashboard Controls".to_string(),
        controls: vec![
            Control {
                name: "year",
                label: "Fiscal Year",
                options: FiscalYear::ALL
                    .into_iter()
                    .map(|fy| ControlOption {
                        value: fy.to_string(),
                        selected: fy == selection.fiscal_year,
                    })
                    .collect(),
            },
            Control {
                name: "scope",
                label: "Scope",
                options: Scope::ALL
                    .into_iter()
                    .map(|scope| ControlOption {
                        value: scope.to_string(),
                        selected: scope == selection.scope,
                    })
                    .collect(),
            },
        ],
        caption: vec![
            format!("Data Source: {}", settings.data_source),
            format!("Last Update: {}", last_update.format("%Y-%m-%d")),
        ],
    }
}

fn executive_summary(metrics: &MetricSet) -> Band {
    let cards: Vec<&Indicator> = SUMMARY_KEYS
        .iter()
        .filter_map(|key| metrics.indicator(key))
        .collect();

    Band {
        header: Some("Executive Summary".to_string()),
        panels: vec![Panel {
            weight: 1,
            header: None,
            columns: cards
                .into_iter()
                .map(|card| column(1, Block::Card(card.clone())))
                .collect(),
        }],
        separator_after: false,
    }
}

fn environmental() -> Band {
    Band {
        header: Some("Environmental Indicators".to_string()),
        panels: vec![Panel {
            weight: 1,
            header: None,
            columns: vec![
                column(2, Block::Chart(chart_ids::GHG_TREND)),
                column(
                    1,
                    Block::Tabs(vec![
                        Tab {
                            label: "Energy Breakdown",
                            chart_id: chart_ids::ENERGY_BY_FACILITY,
                        },
                        Tab {
                            label: "Water Usage",
                            chart_id: chart_ids::WATER_BY_REGION,
                        },
                    ]),
                ),
            ],
        }],
        separator_after: true,
    }
}

fn social_and_governance() -> Band {
    Band {
        header: None,
        panels: vec![
            Panel {
                weight: 1,
                header: Some("Social Responsibility".to_string()),
                columns: vec![
                    column(1, Block::Chart(chart_ids::SCORE_DISTRIBUTION)),
                    column(1, Block::Chart(chart_ids::CONFLICT_MINERALS)),
                ],
            },
            Panel {
                weight: 1,
                header: Some("Governance & Compliance".to_string()),
                columns: vec![
                    column(1, Block::Chart(chart_ids::CSRD_READINESS)),
                    column(1, Block::Chart(chart_ids::INCIDENTS)),
                ],
            },
        ],
        separator_after: true,
    }
}

fn value_chain() -> Band {
    Band {
        header: Some("Value Chain Sustainability Map".to_string()),
        panels: vec![Panel {
            weight: 1,
            header: None,
            columns: vec![column(1, Block::Chart(chart_ids::VALUE_CHAIN))],
        }],
        separator_after: false,
    }
}

fn column(weight: u8, block: Block) -> Column {
    Column {
        weight,
        blocks: vec![block],
    }
}
