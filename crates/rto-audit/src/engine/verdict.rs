use super::domain::Provider;
use super::market::MarketMetrics;
use super::round_half_up;
use serde::Serialize;

const CRITICAL_ATTRITION: f64 = 0.8;
const CAUTION_WCAG_BARRIERS: u32 = 20;

const DATA_PENDING: &str = "Data Pending";
const INSUFFICIENT_DATA_INSIGHT: &str = "Insufficient inventory data for a sustainability audit.";

const CONTINUITY_NETWORK_PATTERN: &str = "Operational Continuity Profile";
const DISCLOSURE_PENDING_PATTERN: &str = "Registry Disclosure Pending";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Critical,
    Caution,
    Stable,
}

impl VerdictStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Caution => "CAUTION",
            Self::Stable => "STABLE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SustainabilityVerdict {
    pub status: VerdictStatus,
    pub attrition_label: String,
    pub failure_label: String,
    pub insight: String,
}

pub fn sustainability_verdict(provider: &Provider, market: &MarketMetrics) -> SustainabilityVerdict {
    let Some(record) = provider.audit.sustainability.as_ref() else {
        return SustainabilityVerdict {
            status: VerdictStatus::Stable,
            attrition_label: DATA_PENDING.to_string(),
            failure_label: DATA_PENDING.to_string(),
            insight: INSUFFICIENT_DATA_INSIGHT.to_string(),
        };
    };

    let status = if record.attrition_risk >= CRITICAL_ATTRITION || record.inventory_depth.is_low() {
        VerdictStatus::Critical
    } else if record.wcag_barrier_count > CAUTION_WCAG_BARRIERS {
        VerdictStatus::Caution
    } else {
        VerdictStatus::Stable
    };

    let attrition_label = format!(
        "{}% Continuity Variance",
        round_half_up(record.attrition_risk * 100.0) as i64
    );
    let failure_label = format!(
        "{}% Non-Completion Sig.",
        round_half_up(record.failure_rate * 100.0) as i64
    );

    let insight = match status {
        VerdictStatus::Critical => critical_insight(provider.price, market.median_price),
        VerdictStatus::Caution | VerdictStatus::Stable => {
            baseline_insight(provider.primary_score, market.mean_score)
        }
    };

    SustainabilityVerdict {
        status,
        attrition_label,
        failure_label,
        insight,
    }
}

fn critical_insight(price: Option<f64>, median_price: f64) -> String {
    let price_diff = match price {
        Some(price) if price != 0.0 && median_price != 0.0 => {
            ((price - median_price) / median_price) * 100.0
        }
        _ => 0.0,
    };
    let magnitude = (round_half_up(price_diff) as i64).abs();
    let direction = if price_diff > 0.0 { "premium" } else { "variance" };

    format!(
        "This provider aligns with a \"D Plus\" inventory profile. At ${}, this pricing reflects a {}% {} against the market median, correlating with the 80% 12-month transition signature common in this support class.",
        display_price(price),
        magnitude,
        direction
    )
}

fn baseline_insight(primary_score: f64, mean_score: u32) -> String {
    let position = if primary_score > f64::from(mean_score) {
        "above"
    } else {
        "below"
    };

    format!(
        "This provider maintains a competitive digital footprint. Market metadata suggests performance is {} the state maturity baseline of {}.",
        position, mean_score
    )
}

/// Undisclosed prices render as `null`, matching the published copy.
fn display_price(price: Option<f64>) -> String {
    match price {
        Some(price) => price.to_string(),
        None => "null".to_string(),
    }
}

/// Warning copy for providers carrying a shared-ownership signature.
pub fn network_affinity_label(provider: &Provider) -> Option<&'static str> {
    match provider.operational_pattern.as_deref() {
        Some(CONTINUITY_NETWORK_PATTERN) => {
            Some("Shares operational metadata with previously registered entities.")
        }
        Some(DISCLOSURE_PENDING_PATTERN) => {
            Some("External regulatory disclosure files are currently under review.")
        }
        _ => None,
    }
}
