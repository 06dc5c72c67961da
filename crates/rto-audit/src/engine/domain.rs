use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Australian state and territory codes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StateCode {
    #[serde(rename = "NSW")]
    Nsw,
    #[serde(rename = "VIC")]
    Vic,
    #[serde(rename = "QLD")]
    Qld,
    #[serde(rename = "WA")]
    Wa,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "TAS")]
    Tas,
    #[serde(rename = "ACT")]
    Act,
    #[serde(rename = "NT")]
    Nt,
}

impl StateCode {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Nsw,
            Self::Vic,
            Self::Qld,
            Self::Wa,
            Self::Sa,
            Self::Tas,
            Self::Act,
            Self::Nt,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Wa => "WA",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Act => "ACT",
            Self::Nt => "NT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|state| state.code().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where a provider operates: one state, or every state via a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Jurisdiction {
    State(StateCode),
    Multi,
    National,
}

impl Jurisdiction {
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("multi") {
            Some(Self::Multi)
        } else if trimmed.eq_ignore_ascii_case("national") {
            Some(Self::National)
        } else {
            StateCode::parse(trimmed).map(Self::State)
        }
    }

    /// Multi and National providers appear in every state.
    pub const fn is_everywhere(self) -> bool {
        matches!(self, Self::Multi | Self::National)
    }

    /// True when a provider in this jurisdiction competes in `state`.
    pub fn covers(self, state: StateCode) -> bool {
        match self {
            Self::State(own) => own == state,
            Self::Multi | Self::National => true,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::State(state) => state.code(),
            Self::Multi => "Multi",
            Self::National => "National",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown jurisdiction '{value}'"))
    }
}

impl From<Jurisdiction> for String {
    fn from(value: Jurisdiction) -> Self {
        value.label().to_string()
    }
}

/// Raw provider record as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub website_secondary: Option<String>,
    #[serde(rename = "state")]
    pub jurisdiction: Jurisdiction,
    #[serde(rename = "type", default)]
    pub organisation_type: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "mdpa_score")]
    pub primary_score: f64,
    pub status: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rto_code: String,
    /// Shared-ownership network signature, if one has been observed.
    #[serde(default)]
    pub operational_pattern: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub audit: AuditData,
}

impl Provider {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

pub(crate) const ACTIVE_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditData {
    pub groups: AuditGroups,
    pub overall_score: f64,
    #[serde(default)]
    pub last_audit: String,
    #[serde(default)]
    pub sustainability: Option<SustainabilityRecord>,
}

impl AuditData {
    /// Calendar date of the last audit, when the timestamp is parseable.
    pub fn last_audit_date(&self) -> Option<NaiveDate> {
        let trimmed = self.last_audit.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(dt.date_naive());
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditGroups {
    pub regulatory: CategoryGroup,
    pub intent: CategoryGroup,
    pub ux: CategoryGroup,
    pub performance: CategoryGroup,
    pub accessibility: CategoryGroup,
    pub commercial: CategoryGroup,
    pub authority: CategoryGroup,
}

impl AuditGroups {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CategoryGroup)> {
        [
            ("regulatory", &self.regulatory),
            ("intent", &self.intent),
            ("ux", &self.ux),
            ("performance", &self.performance),
            ("accessibility", &self.accessibility),
            ("commercial", &self.commercial),
            ("authority", &self.authority),
        ]
        .into_iter()
    }
}

/// A scored audit category. The metric breakdown is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    #[serde(default)]
    pub label: String,
    pub score: f64,
    #[serde(default)]
    pub metrics: Vec<WeightedMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMetric {
    pub label: String,
    pub value: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityRecord {
    pub attrition_risk: f64,
    pub failure_rate: f64,
    pub inventory_depth: InventoryDepth,
    pub wcag_barrier_count: u32,
    #[serde(rename = "w3c_compliant", default)]
    pub compliant: bool,
}

/// Ordinal content density, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InventoryDepth {
    D,
    #[serde(rename = "D+")]
    DPlus,
    C,
    B,
    A,
}

impl InventoryDepth {
    pub const fn is_low(self) -> bool {
        matches!(self, Self::D | Self::DPlus)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::DPlus => "D+",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
        }
    }
}
