// Metric generator - Synthetic indicators and series for one render pass
use crate::domain::indicator::{
    compact_millions, group_thousands, DeltaDirection, DeltaUnit, Indicator,
};
use crate::domain::selection::{FiscalYear, Selection};
use crate::domain::series::{FlowLink, FlowNode, SankeyFlow, Series, XValue};
use chrono::NaiveDate;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::Serialize;

/// The year whose emissions and energy figures differ from the rest.
pub const ALTERNATE_YEAR: FiscalYear = FiscalYear::Fy2024;

pub const TREND_POINTS: usize = 12;
const TREND_START: f64 = 6000.0;
const TREND_END: f64 = 4500.0;
const TREND_NOISE_SD: f64 = 100.0;

pub const DISTRIBUTION_SAMPLES: usize = 200;
const SCORE_MEAN: f64 = 72.0;
const SCORE_SD: f64 = 10.0;

const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

pub const VALUE_CHAIN_STAGES: [&str; 6] = [
    "Sourcing",
    "Manufacturing",
    "Distribution",
    "Use Phase",
    "Recycling",
    "Landfill",
];

// (source, target, value) over VALUE_CHAIN_STAGES
const VALUE_CHAIN_LINKS: [(usize, usize, f64); 6] = [
    (0, 1, 100.0),
    (1, 2, 85.0),
    (1, 5, 15.0),
    (2, 3, 85.0),
    (3, 4, 60.0),
    (3, 5, 25.0),
];

#[derive(Debug, Clone, Serialize)]
pub struct MetricSet {
    pub selection: Selection,
    pub indicators: Vec<Indicator>,
    pub ghg_trend: Series,
    pub energy_by_facility: Series,
    pub water_by_region: Series,
    pub supplier_score_distribution: Series,
    pub conflict_minerals: Series,
    pub incident_count: Series,
    pub response_hours: Series,
    pub value_chain: SankeyFlow,
}

impl MetricSet {
    pub fn indicator(&self, key: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.key == key)
    }

    /// Every series with its stable id, in page order.
    pub fn series_by_id(&self) -> [(&'static str, &Series); 7] {
        [
            ("ghg_trend", &self.ghg_trend),
            ("energy_by_facility", &self.energy_by_facility),
            ("water_by_region", &self.water_by_region),
            ("supplier_score_distribution", &self.supplier_score_distribution),
            ("conflict_minerals", &self.conflict_minerals),
            ("incident_count", &self.incident_count),
            ("response_hours", &self.response_hours),
        ]
    }
}

/// Build every indicator and series for the given selection.
///
/// Sampled series draw from `rng`; pass an entropy-seeded generator for live
/// renders and a seeded one for reproducible output.
pub fn generate<R: Rng + ?Sized>(selection: &Selection, rng: &mut R) -> MetricSet {
    MetricSet {
        selection: *selection,
        indicators: indicators(selection.fiscal_year),
        ghg_trend: ghg_trend(selection.fiscal_year, rng),
        energy_by_facility: Series::from_points(
            "Energy Consumption",
            [("Facility A", 220.0), ("Facility B", 180.0), ("Facility C", 110.0)],
        ),
        water_by_region: Series::from_points(
            "Water Withdrawal",
            [("Region X", 50.0), ("Region Y", 40.0), ("Region Z", 25.0)],
        ),
        supplier_score_distribution: score_distribution(rng),
        conflict_minerals: Series::from_points(
            "Conflict Minerals",
            [("Compliant", 98.0), ("Non-Compliant", 2.0)],
        ),
        incident_count: Series::from_points("Count", QUARTERS.into_iter().zip([4.0, 2.0, 5.0, 1.0])),
        response_hours: Series::from_points(
            "Hours",
            QUARTERS.into_iter().zip([24.0, 12.0, 18.0, 8.0]),
        ),
        value_chain: value_chain(),
    }
}

fn indicators(fiscal_year: FiscalYear) -> Vec<Indicator> {
    let (ghg, energy) = if fiscal_year == ALTERNATE_YEAR {
        (54000.0, 120.0)
    } else {
        (49500.0, 115.0)
    };
    let water = 1_500_000.0;

    vec![
        Indicator::new(
            "ghg_emissions",
            "Total GHG Emissions",
            ghg,
            format!("{} tCO2e", group_thousands(ghg)),
        )
        .with_delta(-8.5, DeltaUnit::Percent, DeltaDirection::Good),
        Indicator::new(
            "energy_intensity",
            "Energy Intensity",
            energy,
            format!("{} kWh/Unit", energy),
        )
        .with_delta(-4.2, DeltaUnit::Percent, DeltaDirection::Good),
        // Rising withdrawal is shown in red
        Indicator::new(
            "water_withdrawal",
            "Water Withdrawal",
            water,
            format!("{} m³", compact_millions(water)),
        )
        .with_delta(1.2, DeltaUnit::Percent, DeltaDirection::Bad),
        Indicator::new("esrs_compliance", "ESRS Compliance", 88.0, "88%".to_string())
            .with_delta(12.0, DeltaUnit::Percent, DeltaDirection::Good),
        Indicator::new("supplier_score", "Supplier ESG Score", 74.0, "74/100".to_string())
            .with_delta(2.5, DeltaUnit::Points, DeltaDirection::Good),
        Indicator::new(
            "conflict_minerals",
            "Conflict Minerals Compliant",
            98.0,
            "98%".to_string(),
        ),
        Indicator::new("csrd_readiness", "CSRD Readiness", 85.0, "85".to_string()),
    ]
}

/// Linear ramp from 6000 to 4500 over the fiscal year's month-ends, plus N(0, 100) noise.
fn ghg_trend<R: Rng + ?Sized>(fiscal_year: FiscalYear, rng: &mut R) -> Series {
    let step = (TREND_END - TREND_START) / (TREND_POINTS - 1) as f64;
    let points = month_ends(fiscal_year.year())
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let noise: f64 = rng.sample(StandardNormal);
            (date, TREND_START + step * i as f64 + noise * TREND_NOISE_SD)
        });
    Series::from_points("Emissions", points)
}

fn score_distribution<R: Rng + ?Sized>(rng: &mut R) -> Series {
    let points = (0..DISTRIBUTION_SAMPLES).map(|i| {
        let z: f64 = rng.sample(StandardNormal);
        (XValue::Index(i), SCORE_MEAN + z * SCORE_SD)
    });
    Series::from_points("Supplier ESG Score", points)
}

/// Last calendar day of each month of `year`.
fn month_ends(year: i32) -> Vec<NaiveDate> {
    (1..=12u32)
        .filter_map(|month| {
            let (y, m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
            NaiveDate::from_ymd_opt(y, m, 1).and_then(|first| first.pred_opt())
        })
        .collect()
}

fn value_chain() -> SankeyFlow {
    let flow = SankeyFlow {
        nodes: VALUE_CHAIN_STAGES
            .iter()
            .map(|label| FlowNode {
                label: label.to_string(),
            })
            .collect(),
        links: VALUE_CHAIN_LINKS
            .iter()
            .map(|&(source, target, value)| FlowLink {
                source,
                target,
                value,
            })
            .collect(),
    };
    debug_assert!(flow.is_conserved(), "value chain emits more than it receives");
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::Scope;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_selections() -> impl Iterator<Item = Selection> {
        FiscalYear::ALL
            .into_iter()
            .flat_map(|fy| Scope::ALL.into_iter().map(move |s| Selection::new(fy, s)))
    }

    #[test]
    fn test_series_lengths_match() {
        let mut rng = StdRng::seed_from_u64(7);
        for selection in all_selections() {
            let metrics = generate(&selection, &mut rng);
            for (id, series) in metrics.series_by_id() {
                assert_eq!(series.x().len(), series.y().len(), "{}", id);
            }
        }
    }

    #[test]
    fn test_alternate_year_indicators() {
        let mut rng = StdRng::seed_from_u64(1);
        let alt = generate(&Selection::new(FiscalYear::Fy2024, Scope::Global), &mut rng);
        assert_eq!(alt.indicator("ghg_emissions").unwrap().value, 54000.0);
        assert_eq!(alt.indicator("ghg_emissions").unwrap().formatted_value, "54,000 tCO2e");
        assert_eq!(alt.indicator("energy_intensity").unwrap().value, 120.0);

        for fy in [FiscalYear::Fy2025, FiscalYear::Fy2023] {
            let base = generate(&Selection::new(fy, Scope::Global), &mut rng);
            assert_eq!(base.indicator("ghg_emissions").unwrap().value, 49500.0);
            assert_eq!(base.indicator("energy_intensity").unwrap().formatted_value, "115 kWh/Unit");

            // Everything else is identical between the two years
            let unchanged = |m: &MetricSet| {
                m.indicators
                    .iter()
                    .filter(|i| i.key != "ghg_emissions" && i.key != "energy_intensity")
                    .cloned()
                    .collect::<Vec<_>>()
            };
            assert_eq!(unchanged(&alt), unchanged(&base));
        }
    }

    #[test]
    fn test_percentages_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let metrics = generate(&Selection::default(), &mut rng);
        let percentages: Vec<_> = metrics
            .indicators
            .iter()
            .filter(|i| i.formatted_value.ends_with('%'))
            .collect();
        assert_eq!(percentages.len(), 2);
        for indicator in percentages
            .into_iter()
            .chain(metrics.indicator("csrd_readiness"))
        {
            assert!((0.0..=100.0).contains(&indicator.value), "{}", indicator.name);
        }
    }

    #[test]
    fn test_sample_counts() {
        let mut rng = StdRng::seed_from_u64(11);
        let metrics = generate(&Selection::default(), &mut rng);
        assert_eq!(metrics.ghg_trend.y().len(), TREND_POINTS);
        assert_eq!(metrics.supplier_score_distribution.y().len(), DISTRIBUTION_SAMPLES);
    }

    #[test]
    fn test_trend_dates_are_month_ends() {
        let mut rng = StdRng::seed_from_u64(5);
        let metrics = generate(&Selection::new(FiscalYear::Fy2024, Scope::Emea), &mut rng);
        let dates = metrics.ghg_trend.x();
        assert_eq!(dates[0], XValue::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert_eq!(dates[1], XValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert_eq!(dates[11], XValue::Date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
    }

    #[test]
    fn test_trend_follows_ramp() {
        let mut rng = StdRng::seed_from_u64(13);
        let metrics = generate(&Selection::default(), &mut rng);
        let y = metrics.ghg_trend.y();
        // Noise has sd 100; a 10-sigma miss would mean the ramp is wrong
        assert!((y[0] - TREND_START).abs() < 1000.0);
        assert!((y[11] - TREND_END).abs() < 1000.0);
    }

    #[test]
    fn test_reruns_differ_but_hold_invariants() {
        let mut rng = rand::thread_rng();
        let selection = Selection::new(FiscalYear::Fy2023, Scope::Apac);
        let first = generate(&selection, &mut rng);
        let second = generate(&selection, &mut rng);

        assert_ne!(first.supplier_score_distribution, second.supplier_score_distribution);
        assert_eq!(first.indicators, second.indicators);
        for metrics in [&first, &second] {
            assert_eq!(metrics.ghg_trend.y().len(), TREND_POINTS);
            assert_eq!(metrics.supplier_score_distribution.y().len(), DISTRIBUTION_SAMPLES);
            assert!(metrics.value_chain.is_conserved());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let selection = Selection::default();
        let a = generate(&selection, &mut StdRng::seed_from_u64(42));
        let b = generate(&selection, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.ghg_trend, b.ghg_trend);
    }

    #[test]
    fn test_value_chain_conservation() {
        let flow = value_chain();
        let manufacturing = 1;
        assert_eq!(flow.inflow(manufacturing), 100.0);
        assert_eq!(flow.outflow(manufacturing), 100.0);
        assert_eq!(flow.intermediate_nodes().count(), 3);
        assert!(flow.is_conserved());
    }
}
