use serde::Serialize;

use crate::{
    config::OwnershipConfig,
    core::usage::UsageEstimate,
    quantity::{
        cost::Cost,
        distance::Kilometres,
        energy::KilowattHours,
        rate::{KilometreRate, KilowattHourRate},
    },
};

/// Cost of owning packs outright across the comparison horizon.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct OwnershipProjection {
    pub horizon_years: u32,
    pub total_energy: KilowattHours,
    pub packs_purchased: u32,
    pub invested_cost: Cost,
    pub used_cost: Cost,
    pub wasted_cost: Cost,
}

/// Pack amortization spread over a single month of usage.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct OwnershipMonthly {
    pub amortized_rate: KilowattHourRate,
    pub monthly_cost: Cost,
    pub cost_per_km: KilometreRate,
}

impl OwnershipConfig {
    /// Total energy one pack delivers before it is written off.
    #[must_use]
    pub fn lifetime_energy_per_pack(&self) -> KilowattHours {
        self.pack_energy * f64::from(self.pack_cycle_life)
    }

    /// Price the estimated usage under outright ownership.
    ///
    /// Packs are bought whole. The final pack may end the horizon only
    /// partially used, which splits the investment into a used and a wasted
    /// share. A zero pack lifetime yields an all-zero projection instead of
    /// dividing by it.
    #[must_use]
    pub fn project(&self, usage: &UsageEstimate, horizon_years: u32) -> OwnershipProjection {
        let total_energy = usage.monthly_energy * f64::from(12 * horizon_years);
        let lifetime_energy = self.lifetime_energy_per_pack();
        if lifetime_energy <= KilowattHours::ZERO {
            return OwnershipProjection {
                horizon_years,
                total_energy,
                packs_purchased: 0,
                invested_cost: Cost::ZERO,
                used_cost: Cost::ZERO,
                wasted_cost: Cost::ZERO,
            };
        }

        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let packs_purchased = (total_energy / lifetime_energy).ceil() as u32;
        let invested_cost = self.pack_price * f64::from(packs_purchased);

        let full_packs = f64::from(packs_purchased.saturating_sub(1));
        let final_pack_energy = (total_energy - lifetime_energy * full_packs).max(KilowattHours::ZERO);
        let final_fraction = (final_pack_energy / lifetime_energy).min(1.0);
        let used_cost = self.pack_price * (full_packs + final_fraction);

        OwnershipProjection {
            horizon_years,
            total_energy,
            packs_purchased,
            invested_cost,
            used_cost,
            wasted_cost: (invested_cost - used_cost).max(Cost::ZERO),
        }
    }

    /// Pack price amortized over its lifetime energy throughput.
    #[must_use]
    pub fn amortized_rate(&self) -> KilowattHourRate {
        let lifetime_energy = self.lifetime_energy_per_pack();
        if lifetime_energy > KilowattHours::ZERO {
            self.pack_price / lifetime_energy
        } else {
            KilowattHourRate::ZERO
        }
    }

    /// The per-month equivalent of the amortized pack cost.
    #[must_use]
    pub fn monthly_quote(&self, usage: &UsageEstimate) -> OwnershipMonthly {
        let amortized_rate = self.amortized_rate();
        let monthly_cost = usage.monthly_energy * amortized_rate;
        let cost_per_km = if usage.monthly_distance > Kilometres::ZERO {
            monthly_cost / usage.monthly_distance
        } else {
            KilometreRate::ZERO
        };
        OwnershipMonthly { amortized_rate, monthly_cost, cost_per_km }
    }
}
