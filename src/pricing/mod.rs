//! Tiered course pricing
//!
//! Every course in a selection is charged the rate of the tier that the
//! selection's total size falls into. This is a volume price, not a marginal
//! schedule: moving from 7 to 8 courses reprices all 8 at the lower rate.
//!
//! Per-course list prices stored on [`Course`](crate::models::Course) do not
//! take part in this calculation.

pub mod money;
pub mod selection;

pub use money::Money;
pub use selection::Selection;

use serde::Serialize;

/// A count range priced at a single per-course rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    /// Smallest selection size this tier applies to
    pub min_courses: usize,
    /// Largest selection size, `None` for the open-ended top tier
    pub max_courses: Option<usize>,
    pub rate: Money,
}

/// Tier table, ordered by `min_courses`
pub const TIERS: [Tier; 4] = [
    Tier { min_courses: 1, max_courses: Some(2), rate: Money::from_cents(5_000) },
    Tier { min_courses: 3, max_courses: Some(7), rate: Money::from_cents(4_500) },
    Tier { min_courses: 8, max_courses: Some(14), rate: Money::from_cents(4_250) },
    Tier { min_courses: 15, max_courses: None, rate: Money::from_cents(4_000) },
];

impl Tier {
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min_courses && self.max_courses.map_or(true, |max| count <= max)
    }

    /// Discount of this tier's rate against the single-course rate, in whole percent
    pub fn discount_percent(&self) -> u32 {
        let base = base_rate().cents();
        let saved = base - self.rate.cents();
        ((saved * 100 + base / 2) / base) as u32
    }
}

/// Rate charged when a single course is selected
pub fn base_rate() -> Money {
    TIERS[0].rate
}

/// Tier for a selection of `count` courses; `None` for an empty selection
pub fn tier_for(count: usize) -> Option<&'static Tier> {
    TIERS.iter().find(|tier| tier.contains(count))
}

/// Total price for a selection of `count` courses
pub fn compute_total(count: usize) -> Money {
    match tier_for(count) {
        Some(tier) => tier.rate * count,
        None => Money::ZERO,
    }
}

/// Price shown next to the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub course_count: usize,
    pub unit_rate: Option<Money>,
    pub total: Money,
}

impl PriceQuote {
    pub fn for_count(course_count: usize) -> Self {
        Self {
            course_count,
            unit_rate: tier_for(course_count).map(|tier| tier.rate),
            total: compute_total(course_count),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.course_count == 0
    }
}

/// A package advertised on the pricing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub course_count: usize,
    pub price: Money,
    /// What the same courses would cost at the single-course rate
    pub list_price: Money,
    pub discount_percent: u32,
    pub popular: bool,
}

/// Showcase plans, one per tier, priced with the same table as registration
pub fn plans() -> Vec<PricingPlan> {
    const NAMES: [(&str, bool); 4] = [
        ("Career Start", false),
        ("Career Boost", true),
        ("Full Transformation", false),
        ("Corporate", false),
    ];

    TIERS
        .iter()
        .zip(NAMES)
        .map(|(tier, (name, popular))| PricingPlan {
            name,
            course_count: tier.min_courses,
            price: compute_total(tier.min_courses),
            list_price: base_rate() * tier.min_courses,
            discount_percent: tier.discount_percent(),
            popular,
        })
        .collect()
}
