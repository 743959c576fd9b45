// Indicator domain model - a named scalar shown as a summary card
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaDirection {
    Good,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaUnit {
    Percent,
    Points,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub key: &'static str,
    pub name: String,
    pub value: f64,
    pub formatted_value: String,
    pub delta: Option<f64>,
    pub delta_unit: DeltaUnit,
    pub delta_direction: DeltaDirection,
}

impl Indicator {
    pub fn new(key: &'static str, name: &str, value: f64, formatted_value: String) -> Self {
        Self {
            key,
            name: name.to_string(),
            value,
            formatted_value,
            delta: None,
            delta_unit: DeltaUnit::Percent,
            delta_direction: DeltaDirection::Good,
        }
    }

    pub fn with_delta(mut self, delta: f64, unit: DeltaUnit, direction: DeltaDirection) -> Self {
        self.delta = Some(delta);
        self.delta_unit = unit;
        self.delta_direction = direction;
        self
    }

    /// Signed delta as shown under the card value, e.g. "-8.5%" or "+2.5".
    pub fn formatted_delta(&self) -> Option<String> {
        self.delta.map(|d| match self.delta_unit {
            DeltaUnit::Percent => format!("{:+}%", d),
            DeltaUnit::Points => format!("{:+}", d),
        })
    }
}

/// Render an integral value with comma thousands separators ("54,000").
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact millions with one decimal ("1.5M").
pub fn compact_millions(value: f64) -> String {
    format!("{:.1}M", value / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(54000.0), "54,000");
        assert_eq!(group_thousands(49500.0), "49,500");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-4500.0), "-4,500");
    }

    #[test]
    fn test_compact_millions() {
        assert_eq!(compact_millions(1_500_000.0), "1.5M");
    }

    #[test]
    fn test_formatted_delta() {
        let base = Indicator::new("x", "X", 1.0, "1".to_string());
        assert_eq!(base.formatted_delta(), None);

        let pct = base.clone().with_delta(-8.5, DeltaUnit::Percent, DeltaDirection::Good);
        assert_eq!(pct.formatted_delta().as_deref(), Some("-8.5%"));

        let whole = base.clone().with_delta(12.0, DeltaUnit::Percent, DeltaDirection::Good);
        assert_eq!(whole.formatted_delta().as_deref(), Some("+12%"));

        let pts = base.with_delta(2.5, DeltaUnit::Points, DeltaDirection::Good);
        assert_eq!(pts.formatted_delta().as_deref(), Some("+2.5"));
    }
}
