use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    config::PlanConfig,
    core::usage::UsageEstimate,
    quantity::{
        cost::Cost,
        distance::Kilometres,
        energy::KilowattHours,
        rate::KilometreRate,
    },
};

/// One tier priced against one usage estimate.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct PlanQuote {
    pub within_cap: bool,
    pub overage_energy: KilowattHours,
    pub overage_cost: Cost,
    pub monthly_cost: Cost,
    pub cost_per_km: KilometreRate,
}

impl PlanConfig {
    /// Price the tier for the month. Tiers are independent: no quote depends
    /// on any other tier having been evaluated.
    #[must_use]
    pub fn quote(&self, usage: &UsageEstimate) -> PlanQuote {
        let overage_energy =
            (usage.monthly_energy - self.included_energy_cap).max(KilowattHours::ZERO);
        let overage_cost = overage_energy * self.overage_rate;
        let monthly_cost = self.fixed_fee + overage_cost;
        let cost_per_km = if usage.monthly_distance > Kilometres::ZERO {
            monthly_cost / usage.monthly_distance
        } else {
            KilometreRate::ZERO
        };
        PlanQuote {
            within_cap: overage_energy == KilowattHours::ZERO,
            overage_energy,
            overage_cost,
            monthly_cost,
            cost_per_km,
        }
    }
}

/// Index of the cheapest tier for the estimated usage.
///
/// Ties go to the tier declared first in the configuration.
#[must_use]
pub fn recommend(plans: &[PlanConfig], usage: &UsageEstimate) -> Option<usize> {
    plans
        .iter()
        .map(|plan| plan.quote(usage))
        .position_min_by_key(|quote| OrderedFloat(quote.monthly_cost.0))
}
