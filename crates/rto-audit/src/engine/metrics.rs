use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    AsqaRegistration,
    ScopeMatch,
    PageSpeed,
    MobileUsability,
    CourseCompleteness,
    PriceTransparency,
    GoogleReviews,
    ReviewVolume,
    ReviewRecency,
}

impl Metric {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::AsqaRegistration,
            Self::ScopeMatch,
            Self::PageSpeed,
            Self::MobileUsability,
            Self::CourseCompleteness,
            Self::PriceTransparency,
            Self::GoogleReviews,
            Self::ReviewVolume,
            Self::ReviewRecency,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AsqaRegistration => "ASQA Registration",
            Self::ScopeMatch => "Scope Match",
            Self::PageSpeed => "Page Speed",
            Self::MobileUsability => "Mobile Usability",
            Self::CourseCompleteness => "Course Completeness",
            Self::PriceTransparency => "Price Transparency",
            Self::GoogleReviews => "Google Reviews",
            Self::ReviewVolume => "Review Volume",
            Self::ReviewRecency => "Review Recency",
        }
    }

    pub const fn category(self) -> MetricCategory {
        match self {
            Self::AsqaRegistration | Self::ScopeMatch => MetricCategory::Compliance,
            Self::PageSpeed | Self::MobileUsability => MetricCategory::Technical,
            Self::CourseCompleteness | Self::PriceTransparency => MetricCategory::Content,
            Self::GoogleReviews | Self::ReviewVolume | Self::ReviewRecency => {
                MetricCategory::Trust
            }
        }
    }

    pub const fn is_pass_fail(self) -> bool {
        matches!(self, Self::AsqaRegistration | Self::ScopeMatch)
    }

    /// Accepts either the display label or the snake_case key.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered().into_iter().find(|metric| {
            metric.label().eq_ignore_ascii_case(value)
                || metric.key().eq_ignore_ascii_case(value)
        })
    }

    const fn key(self) -> &'static str {
        match self {
            Self::AsqaRegistration => "asqa_registration",
            Self::ScopeMatch => "scope_match",
            Self::PageSpeed => "page_speed",
            Self::MobileUsability => "mobile_usability",
            Self::CourseCompleteness => "course_completeness",
            Self::PriceTransparency => "price_transparency",
            Self::GoogleReviews => "google_reviews",
            Self::ReviewVolume => "review_volume",
            Self::ReviewRecency => "review_recency",
        }
    }

    /// Display string for a value of this metric.
    pub fn format(self, value: MetricValue) -> String {
        match self {
            Self::AsqaRegistration | Self::ScopeMatch => value.to_string(),
            Self::PageSpeed | Self::MobileUsability => format!("{value}/100"),
            Self::CourseCompleteness | Self::PriceTransparency | Self::ReviewRecency => {
                format!("{value}/5")
            }
            Self::GoogleReviews => format!("{value} ★"),
            Self::ReviewVolume => format!("{value} reviews"),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    Compliance,
    Technical,
    Content,
    Trust,
}

impl MetricCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Compliance, Self::Technical, Self::Content, Self::Trust]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliance => "Compliance",
            Self::Technical => "Technical",
            Self::Content => "Content",
            Self::Trust => "Trust",
        }
    }

    pub fn metrics(self) -> Vec<Metric> {
        Metric::ordered()
            .into_iter()
            .filter(|metric| metric.category() == self)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassFail {
    Pass,
    Fail,
}

impl PassFail {
    pub const fn from_bool(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Check(PassFail),
    Number(f64),
}

impl MetricValue {
    /// Numeric view used for winner selection. Pass/fail values have none.
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Check(_) => None,
            Self::Number(value) => Some(value),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check(check) => f.write_str(check.label()),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}
