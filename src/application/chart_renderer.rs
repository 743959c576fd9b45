// Chart renderer - Maps generated datasets to styled chart specs
use crate::application::metric_generator::MetricSet;
use crate::domain::chart::{
    Annotation, ChartData, ChartSpec, ChartStyle, GaugeScale, Margin, StyledFlow, Trace,
    TraceKind,
};
use crate::domain::series::SankeyFlow;
use crate::infrastructure::config::Theme;

pub mod chart_ids {
    pub const GHG_TREND: &str = "ghg_trend";
    pub const ENERGY_BY_FACILITY: &str = "energy_by_facility";
    pub const WATER_BY_REGION: &str = "water_by_region";
    pub const SCORE_DISTRIBUTION: &str = "supplier_score_distribution";
    pub const CONFLICT_MINERALS: &str = "conflict_minerals";
    pub const CSRD_READINESS: &str = "csrd_readiness";
    pub const INCIDENTS: &str = "incidents_response";
    pub const VALUE_CHAIN: &str = "value_chain";
}

const NODE_PAD: u32 = 20;
const NODE_THICKNESS: u32 = 15;
const LINK_ALPHA: f64 = 0.2;
const LOSS_LINK_ALPHA: f64 = 0.1;

/// Render every chart on the page, in layout order.
pub fn render_charts(metrics: &MetricSet, theme: &Theme) -> Vec<ChartSpec> {
    vec![
        ghg_trend(metrics, theme),
        energy_by_facility(metrics, theme),
        water_by_region(metrics, theme),
        score_distribution(metrics, theme),
        conflict_minerals(metrics, theme),
        csrd_gauge(metrics, theme),
        incidents(metrics, theme),
        value_chain(&metrics.value_chain, theme),
    ]
}

fn ghg_trend(metrics: &MetricSet, theme: &Theme) -> ChartSpec {
    let mut style = ChartStyle::new(380);
    style.margin = Some(Margin::all(50, 20, 20, 20));
    style.fill_color = Some(rgba(&theme.primary, 0.1));

    ChartSpec {
        id: chart_ids::GHG_TREND,
        title: "GHG Emissions Trend".to_string(),
        style,
        data: ChartData::Traces {
            kind: TraceKind::Area,
            traces: vec![Trace::new(metrics.ghg_trend.clone(), &theme.primary)],
        },
    }
}

fn energy_by_facility(metrics: &MetricSet, theme: &Theme) -> ChartSpec {
    category_bar(
        chart_ids::ENERGY_BY_FACILITY,
        "Energy Consumption by Facility",
        Trace::new(metrics.energy_by_facility.clone(), &theme.primary),
    )
}

fn water_by_region(metrics: &MetricSet, theme: &Theme) -> ChartSpec {
    category_bar(
        chart_ids::WATER_BY_REGION,
        "Water Withdrawal by Region",
        Trace::new(metrics.water_by_region.clone(), &theme.secondary),
    )
}

fn category_bar(id: &'static str, title: &str, trace: Trace) -> ChartSpec {
    let mut style = ChartStyle::new(320);
    style.hide_x_title = true;

    ChartSpec {
        id,
        title: title.to_string(),
        style,
        data: ChartData::Traces {
            kind: TraceKind::Bar,
            traces: vec![trace],
        },
    }
}

fn score_distribution(metrics: &MetricSet, theme: &Theme) -> ChartSpec {
    let mut style = ChartStyle::new(300);
    style.margin = Some(Margin::sides(20, 20));

    ChartSpec {
        id: chart_ids::SCORE_DISTRIBUTION,
        title: "Supplier ESG Score Dist.".to_string(),
        style,
        data: ChartData::Traces {
            kind: TraceKind::Box,
            traces: vec![Trace::new(
                metrics.supplier_score_distribution.clone(),
                &theme.accent,
            )],
        },
    }
}

fn conflict_minerals(metrics: &MetricSet, theme: &Theme) -> ChartSpec {
    let compliant = metrics
        .indicator("conflict_minerals")
        .map(|i| i.formatted_value.clone())
        .unwrap_or_default();

    let mut style = ChartStyle::new(300);
    style.show_legend = false;
    style.hole = Some(0.7);
    style.annotation = Some(Annotation {
        text: compliant,
        color: theme.primary.clone(),
        font_size: 24,
    });

    ChartSpec {
        id: chart_ids::CONFLICT_MINERALS,
        title: "Conflict Minerals (%)".to_string(),
        style,
        data: ChartData::Traces {
            kind: TraceKind::Donut,
            traces: vec![Trace {
                series: metrics.conflict_minerals.clone(),
                colors: vec![theme.primary.clone(), theme.danger.clone()],
                secondary_axis: false,
            }],
        },
    }
}

fn csrd_gauge(metrics: &MetricSet, theme: &Theme) -> ChartSpec {
    let value = metrics
        .indicator("csrd_readiness")
        .map(|i| i.value)
        .unwrap_or_default();

    let mut style = ChartStyle::new(300);
    style.margin = Some(Margin::sides(30, 30));

    ChartSpec {
        id: chart_ids::CSRD_READINESS,
        title: "CSRD Readiness".to_string(),
        style,
        data: ChartData::Gauge {
            value,
            scale: GaugeScale {
                min: 0.0,
                max: 100.0,
                bar_color: theme.ink.clone(),
                track_color: theme.track.clone(),
            },
        },
    }
}

fn incidents(metrics: &MetricSet, theme: &Theme) -> ChartSpec {
    let mut style = ChartStyle::new(300);
    style.show_legend = false;

    let mut hours = Trace::new(metrics.response_hours.clone(), &theme.ink);
    hours.secondary_axis = true;

    ChartSpec {
        id: chart_ids::INCIDENTS,
        title: "Incidents & Response".to_string(),
        style,
        data: ChartData::Traces {
            kind: TraceKind::Combo,
            traces: vec![
                Trace::new(metrics.incident_count.clone(), &theme.danger),
                hours,
            ],
        },
    }
}

fn value_chain(flow: &SankeyFlow, theme: &Theme) -> ChartSpec {
    let stage_colors = [
        &theme.slate,
        &theme.primary,
        &theme.secondary,
        &theme.accent,
        &theme.success,
        &theme.danger,
    ];
    let node_color = |n: usize| stage_colors[n % stage_colors.len()].as_str();

    // Links into an end-of-life sink take the sink's colour, others the source's
    let link_colors = flow
        .links
        .iter()
        .map(|link| {
            if flow.is_terminal(link.target) {
                let alpha = if node_color(link.target) == theme.danger {
                    LOSS_LINK_ALPHA
                } else {
                    LINK_ALPHA
                };
                rgba(node_color(link.target), alpha)
            } else {
                rgba(node_color(link.source), LINK_ALPHA)
            }
        })
        .collect();

    let mut style = ChartStyle::new(500);
    style.font_family = Some("Inter");

    ChartSpec {
        id: chart_ids::VALUE_CHAIN,
        title: "Traceability & Impact Flow (Scope 3)".to_string(),
        style,
        data: ChartData::Flow(StyledFlow {
            flow: flow.clone(),
            node_colors: (0..flow.nodes.len()).map(|n| node_color(n).to_string()).collect(),
            link_colors,
            pad: NODE_PAD,
            thickness: NODE_THICKNESS,
        }),
    }
}

/// "#0F766E" at 0.1 -> "rgba(15, 118, 110, 0.1)". Non-hex colours pass through.
pub fn rgba(hex: &str, alpha: f64) -> String {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return hex.to_string();
    }
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => hex.to_string(),
    }
}
