mod profiles;
mod scenario;
mod session;

pub use profiles::{StrategyProfile, DEFAULT_ANALYSIS};
pub use scenario::Scenario;
pub use session::{ComparisonSession, SessionSnapshot};

use super::metrics::MetricCategory;
use super::scoring::TransformedProvider;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

pub const SLATE_SIZE: usize = 3;
pub const EMPTY_SLOT: &str = "none";

/// Sort position for providers without a disclosed price.
const UNDISCLOSED_PRICE: f64 = 99999.0;

/// Canned ranking heuristics offered to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentStrategy {
    Compliance,
    Value,
    Authority,
    StudentFirst,
}

impl IntentStrategy {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Compliance,
            Self::Value,
            Self::Authority,
            Self::StudentFirst,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Compliance => "compliance",
            Self::Value => "value",
            Self::Authority => "authority",
            Self::StudentFirst => "student-first",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|strategy| strategy.id().eq_ignore_ascii_case(value))
    }

    /// Table category highlighted while this strategy is active.
    pub const fn focus_category(self) -> MetricCategory {
        match self {
            Self::Compliance => MetricCategory::Compliance,
            Self::Value => MetricCategory::Content,
            Self::Authority => MetricCategory::Trust,
            Self::StudentFirst => MetricCategory::Technical,
        }
    }

    fn compare(self, a: &TransformedProvider, b: &TransformedProvider) -> Ordering {
        match self {
            Self::Compliance => b
                .is_active()
                .cmp(&a.is_active())
                .then_with(|| b.raw_scores.regulatory.total_cmp(&a.raw_scores.regulatory)),
            Self::Value => value_price(a)
                .total_cmp(&value_price(b))
                .then_with(|| b.score.total_cmp(&a.score)),
            Self::Authority => b.raw_scores.authority.total_cmp(&a.raw_scores.authority),
            Self::StudentFirst => {
                let a_total = a.raw_scores.ux + a.raw_scores.intent;
                let b_total = b.raw_scores.ux + b.raw_scores.intent;
                b_total.total_cmp(&a_total)
            }
        }
    }
}

impl fmt::Display for IntentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn value_price(provider: &TransformedProvider) -> f64 {
    provider
        .price
        .filter(|price| *price != 0.0)
        .unwrap_or(UNDISCLOSED_PRICE)
}

/// Order providers under a strategy. `None` keeps the input order.
pub fn rank_providers(
    providers: &[TransformedProvider],
    strategy: Option<IntentStrategy>,
) -> Vec<&TransformedProvider> {
    let mut ranked: Vec<&TransformedProvider> = providers.iter().collect();
    if let Some(strategy) = strategy {
        ranked.sort_by(|a, b| strategy.compare(a, b));
    }
    ranked
}

/// Like [`rank_providers`], resolving the strategy from its identifier.
/// Unknown identifiers leave the order untouched.
pub fn rank_by_id<'a>(
    providers: &'a [TransformedProvider],
    strategy_id: Option<&str>,
) -> Vec<&'a TransformedProvider> {
    rank_providers(providers, strategy_id.and_then(IntentStrategy::parse))
}

pub fn top_slate(providers: &[TransformedProvider], strategy: Option<IntentStrategy>) -> Slate {
    Slate::from_ranked(rank_providers(providers, strategy))
}

/// The three comparison slots; empty slots serialize as `"none"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slate {
    slots: [Option<String>; SLATE_SIZE],
}

impl Slate {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_ranked<'a, I>(ranked: I) -> Self
    where
        I: IntoIterator<Item = &'a TransformedProvider>,
    {
        let mut slate = Self::empty();
        for (slot, provider) in slate.slots.iter_mut().zip(ranked) {
            *slot = Some(provider.id.clone());
        }
        slate
    }

    pub fn ids(&self) -> [&str; SLATE_SIZE] {
        std::array::from_fn(|index| self.slots[index].as_deref().unwrap_or(EMPTY_SLOT))
    }

    /// Occupied slots, in slot order.
    pub fn provider_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    /// Returns false when `index` is out of range.
    pub fn set(&mut self, index: usize, provider_id: Option<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = provider_id.filter(|id| id != EMPTY_SLOT);
                true
            }
            None => false,
        }
    }
}

impl Serialize for Slate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(SLATE_SIZE))?;
        for id in self.ids() {
            seq.serialize_element(id)?;
        }
        seq.end()
    }
}
