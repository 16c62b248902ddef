use serde::Serialize;

use crate::quantity::{
    consumption::WattHoursPerKilometre,
    distance::Kilometres,
    energy::KilowattHours,
};

/// Commute answers as collected from the respondent.
///
/// Immutable per calculation; out-of-range values are tolerated and clamped
/// by [`CommuteProfile::estimate`] rather than rejected.
#[derive(Copy, Clone, Debug, Serialize, bon::Builder)]
pub struct CommuteProfile {
    pub daily_distance: Kilometres,
    pub days_per_month: f64,
    pub longest_trip: Kilometres,
    pub consumption: WattHoursPerKilometre,
}

/// Monthly usage figures derived from a [`CommuteProfile`].
#[derive(Copy, Clone, Debug, Serialize)]
pub struct UsageEstimate {
    /// Rounded to whole kilometres; everything downstream keeps full precision.
    pub monthly_distance: Kilometres,
    pub monthly_energy: KilowattHours,
    pub distance_per_swap: Kilometres,
    pub swaps_exact: f64,
    pub swaps_ceil: u32,
}

impl CommuteProfile {
    /// Project the commute onto a month: distance, energy, and swap counts.
    ///
    /// Negative distances and out-of-range day counts clamp to the valid
    /// range. A non-positive consumption yields zero energy and zero swaps
    /// instead of dividing by it.
    #[must_use]
    pub fn estimate(&self, energy_per_swap: KilowattHours) -> UsageEstimate {
        let days = self.days_per_month.clamp(0.0, 31.0);
        let monthly_distance = (self.daily_distance.max(Kilometres::ZERO) * days
            + self.longest_trip.max(Kilometres::ZERO))
        .round();

        let (monthly_energy, distance_per_swap) =
            if self.consumption > WattHoursPerKilometre::ZERO {
                (monthly_distance * self.consumption, energy_per_swap / self.consumption)
            } else {
                (KilowattHours::ZERO, Kilometres::ZERO)
            };

        let swaps_exact = if distance_per_swap > Kilometres::ZERO {
            monthly_distance / distance_per_swap
        } else {
            0.0
        };
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let swaps_ceil = swaps_exact.ceil() as u32;

        UsageEstimate {
            monthly_distance,
            monthly_energy,
            distance_per_swap,
            swaps_exact,
            swaps_ceil,
        }
    }
}
