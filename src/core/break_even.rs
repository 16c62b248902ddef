use serde::Serialize;

use crate::{
    config::PlanConfig,
    core::usage::UsageEstimate,
    quantity::{
        consumption::WattHoursPerKilometre,
        distance::Kilometres,
        energy::KilowattHours,
        rate::KilowattHourRate,
    },
};

/// Monthly usage at which the fixed-fee tier stops costing more than the
/// low-cap tier.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct BreakEvenPoint {
    pub threshold_energy: KilowattHours,

    /// Signed distance from the current estimate; positive means the usage
    /// would have to grow to reach the threshold.
    pub delta_from_current: KilowattHours,

    pub equivalent_distance: Kilometres,
    pub equivalent_swaps: f64,
}

/// Solve for the monthly energy at which both tiers cost the same.
///
/// Both cost curves are affine within a billing segment, so the crossing
/// solves in closed form. The first segment has the low-cap tier paying
/// overage while the fixed tier is still within its allowance; the second has
/// both tiers paying overage. Parallel segments and roots outside their
/// segment's domain yield `None`: no meaningful crossing, not an error.
#[must_use]
pub fn find_break_even(
    low_cap_plan: &PlanConfig,
    fixed_plan: &PlanConfig,
    usage: &UsageEstimate,
    consumption: WattHoursPerKilometre,
    energy_per_swap: KilowattHours,
) -> Option<BreakEvenPoint> {
    let threshold_energy = solve_threshold(low_cap_plan, fixed_plan)?;
    let equivalent_distance = if consumption > WattHoursPerKilometre::ZERO {
        threshold_energy / consumption
    } else {
        Kilometres::ZERO
    };
    let equivalent_swaps = if energy_per_swap > KilowattHours::ZERO {
        threshold_energy / energy_per_swap
    } else {
        0.0
    };
    Some(BreakEvenPoint {
        threshold_energy,
        delta_from_current: threshold_energy - usage.monthly_energy,
        equivalent_distance,
        equivalent_swaps,
    })
}

fn solve_threshold(low: &PlanConfig, fixed: &PlanConfig) -> Option<KilowattHours> {
    let low_cap = low.included_energy_cap;
    let fixed_cap = fixed.included_energy_cap;

    // First segment: the low-cap tier pays overage against the fixed tier's
    // flat fee. A zero overage rate leaves both sides flat, so skip to the
    // second segment.
    if low.overage_rate > KilowattHourRate::ZERO {
        let threshold = low_cap + (fixed.fixed_fee - low.fixed_fee) / low.overage_rate;
        if threshold.is_finite() && threshold > low_cap && threshold <= fixed_cap {
            return Some(threshold);
        }
    }

    // Second segment: both tiers pay overage. Equal rates make the lines
    // parallel and the equation degenerate.
    if low.overage_rate != fixed.overage_rate {
        let threshold = (fixed.fixed_fee - low.fixed_fee + low_cap * low.overage_rate
            - fixed_cap * fixed.overage_rate)
            / (low.overage_rate - fixed.overage_rate);
        if threshold.is_finite() && threshold > fixed_cap {
            return Some(threshold);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{config::Config, quantity::cost::Cost};

    const CONSUMPTION: WattHoursPerKilometre = crate::quantity::Quantity(35.0);
    const ENERGY_PER_SWAP: KilowattHours = crate::quantity::Quantity(2.5);

    fn usage_of(monthly_energy: f64) -> UsageEstimate {
        UsageEstimate {
            monthly_distance: Kilometres::from(450.0),
            monthly_energy: KilowattHours::from(monthly_energy),
            distance_per_swap: Kilometres::from(71.4),
            swaps_exact: 6.3,
            swaps_ceil: 7,
        }
    }

    #[test]
    fn test_lite_vs_basic_crosses_in_second_segment() {
        let plans = Config::default().plans;
        let point =
            find_break_even(&plans[0], &plans[1], &usage_of(14.4), CONSUMPTION, ENERGY_PER_SWAP)
                .unwrap();

        // First segment root 20 + 1321/70 ≈ 38.9 exceeds the 35 kWh cap, so
        // the crossing comes from the joint-overage segment:
        assert_abs_diff_eq!(point.threshold_energy.0, 1496.0 / 35.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            point.delta_from_current.0,
            1496.0 / 35.0 - 14.4,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            point.equivalent_distance.0,
            1496.0 / 35.0 * 1000.0 / 35.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(point.equivalent_swaps, 1496.0 / 35.0 / 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_lite_vs_advanced_crosses_in_first_segment() {
        let plans = Config::default().plans;
        let point =
            find_break_even(&plans[0], &plans[2], &usage_of(14.4), CONSUMPTION, ENERGY_PER_SWAP)
                .unwrap();

        // 20 + (3599 − 678) / 70 ≈ 61.7, comfortably within the 87 kWh cap:
        assert_abs_diff_eq!(point.threshold_energy.0, 20.0 + 2921.0 / 70.0, epsilon = 1e-9);
        assert!(point.delta_from_current > KilowattHours::ZERO);
    }

    #[test]
    fn test_equal_rates_are_degenerate() {
        let low = PlanConfig {
            name: "Low".to_string(),
            fixed_fee: Cost::from(500.0),
            included_energy_cap: KilowattHours::from(10.0),
            overage_rate: KilowattHourRate::from(35.0),
        };
        let fixed = PlanConfig {
            name: "Fixed".to_string(),
            // Too far above for the first segment to cross before the cap:
            fixed_fee: Cost::from(5000.0),
            included_energy_cap: KilowattHours::from(20.0),
            overage_rate: KilowattHourRate::from(35.0),
        };
        assert!(solve_threshold(&low, &fixed).is_none());
    }

    #[test]
    fn test_zero_low_rate_is_degenerate() {
        let mut plans = Config::default().plans;
        plans[0].overage_rate = KilowattHourRate::ZERO;
        // Lite can then never catch up with a pricier flat fee in segment one,
        // and segment two crosses below the fixed cap, out of domain:
        assert!(solve_threshold(&plans[0], &plans[1]).is_none());
    }

    #[test]
    fn test_solver_never_reports_out_of_domain_roots() {
        for low_fee in [0.0, 500.0, 678.0, 2000.0] {
            for fixed_fee in [0.0, 1000.0, 1999.0, 3599.0] {
                for low_rate in [0.0, 35.0, 70.0, 120.0] {
                    for fixed_rate in [0.0, 35.0, 70.0] {
                        let low = PlanConfig {
                            name: "Low".to_string(),
                            fixed_fee: Cost::from(low_fee),
                            included_energy_cap: KilowattHours::from(20.0),
                            overage_rate: KilowattHourRate::from(low_rate),
                        };
                        let fixed = PlanConfig {
                            name: "Fixed".to_string(),
                            fixed_fee: Cost::from(fixed_fee),
                            included_energy_cap: KilowattHours::from(35.0),
                            overage_rate: KilowattHourRate::from(fixed_rate),
                        };
                        if let Some(threshold) = solve_threshold(&low, &fixed) {
                            assert!(threshold.is_finite());
                            assert!(threshold > low.included_energy_cap);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_consumption_zeroes_the_equivalents() {
        let plans = Config::default().plans;
        let point = find_break_even(
            &plans[0],
            &plans[2],
            &usage_of(14.4),
            WattHoursPerKilometre::ZERO,
            KilowattHours::ZERO,
        )
        .unwrap();
        assert_eq!(point.equivalent_distance, Kilometres::ZERO);
        assert_abs_diff_eq!(point.equivalent_swaps, 0.0);
    }
}
