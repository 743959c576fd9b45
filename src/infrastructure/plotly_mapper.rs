// Mapper to convert chart specs to Plotly.js figures ({ data, layout })
use crate::domain::chart::{
    ChartData, ChartKind, ChartSpec, ChartStyle, GaugeScale, StyledFlow, Trace, TraceKind,
};
use serde_json::{json, Map, Value};

const GRID_COLOR: &str = "#EBF0F8";

/// Figures keyed by chart id, ready to embed in the page script.
pub fn figures_by_id(charts: &[ChartSpec]) -> Value {
    let figures: Map<String, Value> = charts
        .iter()
        .map(|chart| (chart.id.to_string(), chart_to_figure(chart)))
        .collect();
    Value::Object(figures)
}

pub fn chart_to_figure(chart: &ChartSpec) -> Value {
    let data = match &chart.data {
        ChartData::Traces { kind, traces } => traces
            .iter()
            .map(|trace| trace_to_plotly(*kind, &chart.style, trace))
            .collect(),
        ChartData::Gauge { value, scale } => vec![gauge_to_plotly(*value, scale)],
        ChartData::Flow(flow) => vec![flow_to_plotly(flow)],
    };

    json!({
        "data": data,
        "layout": layout(chart),
    })
}

fn trace_to_plotly(kind: TraceKind, style: &ChartStyle, trace: &Trace) -> Value {
    let series = &trace.series;
    let color = trace.colors.first().cloned().unwrap_or_default();

    let mut value = match kind {
        TraceKind::Area => json!({
            "type": "scatter",
            "mode": "lines",
            "fill": "tozeroy",
            "x": series.x(),
            "y": series.y(),
            "line": { "color": color },
            "fillcolor": style.fill_color,
        }),
        TraceKind::Bar => json!({
            "type": "bar",
            "x": series.x(),
            "y": series.y(),
            "marker": { "color": color },
        }),
        TraceKind::Box => json!({
            "type": "box",
            "y": series.y(),
            "marker": { "color": color },
        }),
        TraceKind::Donut => json!({
            "type": "pie",
            "labels": series.x(),
            "values": series.y(),
            "hole": style.hole,
            "marker": { "colors": trace.colors },
        }),
        TraceKind::Combo if trace.secondary_axis => json!({
            "type": "scatter",
            "mode": "lines",
            "x": series.x(),
            "y": series.y(),
            "yaxis": "y2",
            "line": { "color": color },
        }),
        // Primary-axis side of a combo chart
        TraceKind::Combo => json!({
            "type": "bar",
            "x": series.x(),
            "y": series.y(),
            "marker": { "color": color },
        }),
    };

    value["name"] = json!(series.label());
    value
}

fn gauge_to_plotly(value: f64, scale: &GaugeScale) -> Value {
    json!({
        "type": "indicator",
        "mode": "gauge+number",
        "value": value,
        "gauge": {
            "axis": { "range": [scale.min, scale.max] },
            "bar": { "color": scale.bar_color },
            "steps": [{ "range": [scale.min, scale.max], "color": scale.track_color }],
        },
    })
}

fn flow_to_plotly(styled: &StyledFlow) -> Value {
    let flow = &styled.flow;
    json!({
        "type": "sankey",
        "node": {
            "pad": styled.pad,
            "thickness": styled.thickness,
            "line": { "color": "white", "width": 0 },
            "label": flow.nodes.iter().map(|n| n.label.as_str()).collect::<Vec<_>>(),
            "color": styled.node_colors,
        },
        "link": {
            "source": flow.links.iter().map(|l| l.source).collect::<Vec<_>>(),
            "target": flow.links.iter().map(|l| l.target).collect::<Vec<_>>(),
            "value": flow.links.iter().map(|l| l.value).collect::<Vec<_>>(),
            "color": styled.link_colors,
        },
    })
}

fn layout(chart: &ChartSpec) -> Value {
    let style = &chart.style;
    let mut layout = template_layout(style.template);

    layout["title"] = json!({ "text": format!("<b>{}</b>", chart.title) });
    layout["height"] = json!(style.height);
    layout["showlegend"] = json!(style.show_legend);

    if let Some(margin) = &style.margin {
        let mut m = Map::new();
        for (side, v) in [("t", margin.t), ("l", margin.l), ("r", margin.r), ("b", margin.b)] {
            if let Some(v) = v {
                m.insert(side.to_string(), json!(v));
            }
        }
        layout["margin"] = Value::Object(m);
    }
    if style.hide_x_title {
        layout["xaxis"]["title"] = json!({ "text": "" });
    }
    if let Some(annotation) = &style.annotation {
        layout["annotations"] = json!([{
            "text": annotation.text,
            "x": 0.5,
            "y": 0.5,
            "showarrow": false,
            "font": { "size": annotation.font_size, "color": annotation.color },
        }]);
    }
    if let Some(family) = style.font_family {
        layout["font"] = json!({ "family": family });
    }
    if chart.kind() == ChartKind::Combo {
        layout["yaxis2"] = json!({ "overlaying": "y", "side": "right", "showgrid": false });
    }

    layout
}

/// Plotly.js has no named templates, so the Python-side names expand here.
fn template_layout(template: &str) -> Value {
    match template {
        "plotly_white" => json!({
            "paper_bgcolor": "white",
            "plot_bgcolor": "white",
            "xaxis": { "gridcolor": GRID_COLOR, "zerolinecolor": GRID_COLOR },
            "yaxis": { "gridcolor": GRID_COLOR, "zerolinecolor": GRID_COLOR },
        }),
        _ => json!({}),
    }
}
