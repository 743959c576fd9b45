// Series domain models - chart datasets and the value chain flow
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Category(String),
    Date(NaiveDate),
    Index(usize),
}

impl From<&str> for XValue {
    fn from(label: &str) -> Self {
        XValue::Category(label.to_string())
    }
}

impl From<NaiveDate> for XValue {
    fn from(date: NaiveDate) -> Self {
        XValue::Date(date)
    }
}

/// An ordered category/date-value dataset. `x` and `y` always have equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    label: String,
    x: Vec<XValue>,
    y: Vec<f64>,
}

impl Series {
    /// Pairs each x with its y, so both sides always have the same length.
    pub fn from_points<I, X>(label: &str, points: I) -> Self
    where
        I: IntoIterator<Item = (X, f64)>,
        X: Into<XValue>,
    {
        let (x, y) = points.into_iter().map(|(x, y)| (x.into(), y)).unzip();
        Self {
            label: label.to_string(),
            x,
            y,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> &[XValue] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowNode {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// Sankey-style material flow between value chain stages.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SankeyFlow {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl SankeyFlow {
    pub fn inflow(&self, node: usize) -> f64 {
        self.links.iter().filter(|l| l.target == node).map(|l| l.value).sum()
    }

    pub fn outflow(&self, node: usize) -> f64 {
        self.links.iter().filter(|l| l.source == node).map(|l| l.value).sum()
    }

    /// Nodes without outgoing links (end-of-life sinks).
    pub fn is_terminal(&self, node: usize) -> bool {
        !self.links.iter().any(|l| l.source == node)
    }

    /// Nodes that both receive and emit flow.
    pub fn intermediate_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nodes.len()).filter(move |&n| {
            self.links.iter().any(|l| l.target == n) && self.links.iter().any(|l| l.source == n)
        })
    }

    /// No intermediate node emits more than it receives.
    pub fn is_conserved(&self) -> bool {
        self.intermediate_nodes()
            .all(|n| self.outflow(n) <= self.inflow(n) + f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_from_points() {
        let series = Series::from_points("q", [("Q1", 4.0), ("Q2", 2.0)]);
        assert_eq!(series.x().len(), 2);
        assert_eq!(series.x()[1], XValue::Category("Q2".to_string()));
        assert_eq!(series.y(), &[4.0, 2.0]);
    }

    fn link(source: usize, target: usize, value: f64) -> FlowLink {
        FlowLink {
            source,
            target,
            value,
        }
    }

    fn node(label: &str) -> FlowNode {
        FlowNode {
            label: label.to_string(),
        }
    }

    #[test]
    fn test_sankey_conservation() {
        let mut flow = SankeyFlow {
            nodes: vec![node("a"), node("b"), node("c"), node("d")],
            links: vec![link(0, 1, 100.0), link(1, 2, 85.0), link(1, 3, 15.0)],
        };
        assert_eq!(flow.intermediate_nodes().collect::<Vec<_>>(), vec![1]);
        assert!(flow.is_conserved());

        flow.links.push(link(1, 3, 10.0));
        assert!(!flow.is_conserved());
    }
}
