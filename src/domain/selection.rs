// Filter selection - the two enumerated dashboard controls
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown fiscal year '{0}' (expected one of 2025, 2024, 2023)")]
    UnknownFiscalYear(String),
    #[error("unknown scope '{0}' (expected one of Global, North America, EMEA, APAC)")]
    UnknownScope(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "i32")]
pub enum FiscalYear {
    #[default]
    Fy2025,
    Fy2024,
    Fy2023,
}

impl FiscalYear {
    /// Dropdown order, first entry is the default.
    pub const ALL: [FiscalYear; 3] = [FiscalYear::Fy2025, FiscalYear::Fy2024, FiscalYear::Fy2023];

    pub fn year(self) -> i32 {
        match self {
            FiscalYear::Fy2025 => 2025,
            FiscalYear::Fy2024 => 2024,
            FiscalYear::Fy2023 => 2023,
        }
    }
}

impl From<FiscalYear> for i32 {
    fn from(fy: FiscalYear) -> Self {
        fy.year()
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

impl FromStr for FiscalYear {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Accept "FY 2024" / "fy2024" as well as the bare year
        let digits = trimmed
            .strip_prefix("FY")
            .or_else(|| trimmed.strip_prefix("fy"))
            .unwrap_or(trimmed)
            .trim();

        Self::ALL
            .into_iter()
            .find(|fy| fy.year().to_string() == digits)
            .ok_or_else(|| SelectionError::UnknownFiscalYear(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum Scope {
    #[default]
    Global,
    NorthAmerica,
    Emea,
    Apac,
}

impl Scope {
    pub const ALL: [Scope; 4] = [Scope::Global, Scope::NorthAmerica, Scope::Emea, Scope::Apac];

    pub fn label(self) -> &'static str {
        match self {
            Scope::Global => "Global",
            Scope::NorthAmerica => "North America",
            Scope::Emea => "EMEA",
            Scope::Apac => "APAC",
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.label().to_string()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scope {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_', '+'], " ");
        Self::ALL
            .into_iter()
            .find(|scope| scope.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| SelectionError::UnknownScope(s.to_string()))
    }
}

/// The complete filter state for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub fiscal_year: FiscalYear,
    pub scope: Scope,
}

impl Selection {
    pub fn new(fiscal_year: FiscalYear, scope: Scope) -> Self {
        Self { fiscal_year, scope }
    }

    /// Parse optional raw control values, falling back to the defaults when absent.
    pub fn parse(year: Option<&str>, scope: Option<&str>) -> Result<Self, SelectionError> {
        let fiscal_year = match year.filter(|y| !y.trim().is_empty()) {
            Some(y) => y.parse()?,
            None => FiscalYear::default(),
        };
        let scope = match scope.filter(|s| !s.trim().is_empty()) {
            Some(s) => s.parse()?,
            None => Scope::default(),
        };
        Ok(Self::new(fiscal_year, scope))
    }
}
