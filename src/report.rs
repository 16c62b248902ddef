use chrono::{DateTime, Local};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    config::{Config, PlanConfig},
    core::{
        BreakEvenPoint,
        CommuteProfile,
        HomeChargingQuote,
        OwnershipMonthly,
        OwnershipProjection,
        PlanQuote,
        UsageEstimate,
        find_break_even,
        recommend,
    },
    quantity::cost::Cost,
};

/// The exportable payload: raw answers plus every derived figure, in one
/// document for the presentation layer to serialize or chart.
#[derive(Serialize)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub horizon_years: u32,
    pub profile: CommuteProfile,
    pub usage: UsageEstimate,
    pub plans: Vec<PlanReport>,
    pub recommended_plan: Option<String>,
    pub ownership: OwnershipReport,
    pub home_charging: HomeChargingQuote,
    pub break_even: Vec<BreakEvenReport>,
}

#[derive(Serialize)]
pub struct PlanReport {
    #[serde(flatten)]
    pub plan: PlanConfig,
    #[serde(flatten)]
    pub quote: PlanQuote,
    pub recommended: bool,
    /// Monthly total scaled across the horizon, as charted.
    pub horizon_cost: Cost,
}

#[derive(Serialize)]
pub struct OwnershipReport {
    #[serde(flatten)]
    pub projection: OwnershipProjection,
    #[serde(flatten)]
    pub monthly: OwnershipMonthly,
}

#[derive(Serialize)]
pub struct BreakEvenReport {
    /// Name of the fixed-fee tier the low-cap tier is compared against.
    pub against: String,
    pub point: Option<BreakEvenPoint>,
}

impl Report {
    #[must_use]
    pub fn build(config: &Config, profile: CommuteProfile, horizon_years: u32) -> Self {
        let usage = profile.estimate(config.swap.energy_per_swap);
        let recommended = recommend(&config.plans, &usage);

        let months = f64::from(12 * horizon_years);
        let plans = config
            .plans
            .iter()
            .enumerate()
            .map(|(index, plan)| {
                let quote = plan.quote(&usage);
                PlanReport {
                    plan: plan.clone(),
                    quote,
                    recommended: recommended == Some(index),
                    horizon_cost: quote.monthly_cost * months,
                }
            })
            .collect();

        Self {
            generated_at: Local::now(),
            horizon_years,
            profile,
            usage,
            plans,
            recommended_plan: recommended.map(|index| config.plans[index].name.clone()),
            ownership: OwnershipReport {
                projection: config.ownership.project(&usage, horizon_years),
                monthly: config.ownership.monthly_quote(&usage),
            },
            home_charging: config.home.quote(&usage),
            break_even: break_even_rows(config, &profile, &usage),
        }
    }
}

/// Compare the lowest-cap tier against every other tier.
fn break_even_rows(
    config: &Config,
    profile: &CommuteProfile,
    usage: &UsageEstimate,
) -> Vec<BreakEvenReport> {
    let Some(low_cap_index) = config
        .plans
        .iter()
        .position_min_by_key(|plan| OrderedFloat(plan.included_energy_cap.0))
    else {
        return Vec::new();
    };
    let low_cap_plan = &config.plans[low_cap_index];
    config
        .plans
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != low_cap_index)
        .map(|(_, fixed_plan)| BreakEvenReport {
            against: fixed_plan.name.clone(),
            point: find_break_even(
                low_cap_plan,
                fixed_plan,
                usage,
                profile.consumption,
                config.swap.energy_per_swap,
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{consumption::WattHoursPerKilometre, distance::Kilometres};

    fn profile() -> CommuteProfile {
        CommuteProfile::builder()
            .daily_distance(Kilometres::from(15.0))
            .days_per_month(26.0)
            .longest_trip(Kilometres::from(60.0))
            .consumption(WattHoursPerKilometre::from(32.0))
            .build()
    }

    #[test]
    fn test_build() {
        let report = Report::build(&Config::default(), profile(), 3);

        assert_eq!(report.horizon_years, 3);
        assert_eq!(report.recommended_plan.as_deref(), Some("Lite"));
        assert_eq!(report.plans.len(), 3);
        assert!(report.plans[0].recommended);
        assert_abs_diff_eq!(report.plans[0].horizon_cost.0, 678.0 * 36.0, epsilon = 1e-9);
        // The low-cap tier is compared against the two others:
        assert_eq!(report.break_even.len(), 2);
        assert!(report.break_even.iter().all(|row| row.point.is_some()));
    }

    #[test]
    fn test_payload_shape() -> crate::prelude::Result {
        let payload = serde_json::to_value(Report::build(&Config::default(), profile(), 3))?;

        assert_abs_diff_eq!(
            payload["usage"]["monthly_energy"].as_f64().unwrap(),
            14.4,
            epsilon = 1e-9
        );
        assert_eq!(payload["plans"][1]["name"], "Basic");
        assert!(payload["plans"][0]["within_cap"].as_bool().unwrap());
        assert_eq!(payload["ownership"]["packs_purchased"], 1);
        assert!(payload["break_even"][0]["point"]["threshold_energy"].as_f64().is_some());
        Ok(())
    }
}
