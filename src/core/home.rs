use serde::Serialize;

use crate::{
    config::HomeChargingConfig,
    core::usage::UsageEstimate,
    quantity::{cost::Cost, distance::Kilometres, energy::KilowattHours, rate::KilometreRate},
};

/// Side-by-side reference: charging the same energy at home.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct HomeChargingQuote {
    /// Consumed energy grossed up by the charging loss.
    pub billed_energy: KilowattHours,
    pub monthly_cost: Cost,
    pub cost_per_km: KilometreRate,
}

impl HomeChargingConfig {
    /// Informational only: the solver in [`crate::core::break_even`] does not
    /// consume this.
    #[must_use]
    pub fn quote(&self, usage: &UsageEstimate) -> HomeChargingQuote {
        let billed_energy = usage.monthly_energy * (1.0 + self.loss_percent.max(0.0) / 100.0);
        let monthly_cost = billed_energy * self.tariff;
        let cost_per_km = if usage.monthly_distance > Kilometres::ZERO {
            monthly_cost / usage.monthly_distance
        } else {
            KilometreRate::ZERO
        };
        HomeChargingQuote { billed_energy, monthly_cost, cost_per_km }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::config::Config;

    #[test]
    fn test_quote() {
        let usage = UsageEstimate {
            monthly_distance: Kilometres::from(450.0),
            monthly_energy: KilowattHours::from(14.4),
            distance_per_swap: Kilometres::from(78.125),
            swaps_exact: 5.76,
            swaps_ceil: 6,
        };
        let quote = Config::default().home.quote(&usage);

        assert_abs_diff_eq!(quote.billed_energy.0, 16.128, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.monthly_cost.0, 129.024, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.cost_per_km.0, 129.024 / 450.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quote_zero_distance() {
        let usage = UsageEstimate {
            monthly_distance: Kilometres::ZERO,
            monthly_energy: KilowattHours::ZERO,
            distance_per_swap: Kilometres::ZERO,
            swaps_exact: 0.0,
            swaps_ceil: 0,
        };
        let quote = Config::default().home.quote(&usage);
        assert_eq!(quote.monthly_cost, Cost::ZERO);
        assert_eq!(quote.cost_per_km, KilometreRate::ZERO);
    }
}
