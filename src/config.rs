use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// The constants table: swap billing, subscription tiers, pack economics and
/// home-charging assumptions. Injected once at startup and never mutated.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub swap: SwapConfig,

    /// Subscription tiers in preference order: cost ties are broken towards
    /// the earlier tier.
    #[serde(default = "Config::default_plans", rename = "plan")]
    pub plans: Vec<PlanConfig>,

    #[serde(default)]
    pub ownership: OwnershipConfig,

    #[serde(default)]
    pub home: HomeChargingConfig,

    /// Default comparison horizon in years.
    #[serde(default = "Config::default_horizon_years")]
    pub horizon_years: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swap: SwapConfig::default(),
            plans: Self::default_plans(),
            ownership: OwnershipConfig::default(),
            home: HomeChargingConfig::default(),
            horizon_years: Self::default_horizon_years(),
        }
    }
}

impl Config {
    const fn default_horizon_years() -> u32 {
        3
    }

    fn default_plans() -> Vec<PlanConfig> {
        vec![
            PlanConfig {
                name: "Lite".to_string(),
                fixed_fee: Cost::from(678.0),
                included_energy_cap: KilowattHours::from(20.0),
                overage_rate: KilowattHourRate::from(70.0),
            },
            PlanConfig {
                name: "Basic".to_string(),
                fixed_fee: Cost::from(1999.0),
                included_energy_cap: KilowattHours::from(35.0),
                overage_rate: KilowattHourRate::from(35.0),
            },
            PlanConfig {
                name: "Advanced".to_string(),
                fixed_fee: Cost::from(3599.0),
                included_energy_cap: KilowattHours::from(87.0),
                overage_rate: KilowattHourRate::from(35.0),
            },
        ]
    }

    #[instrument(name = "Reading the configuration…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            toml::from_str(&fs::read_to_string(path)?)
                .with_context(|| format!("failed to parse `{}`", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Check the constants once at startup so the calculator never has to.
    pub fn validate(&self) -> Result {
        ensure!(!self.plans.is_empty(), "at least one subscription tier must be configured");
        ensure!(
            self.swap.energy_per_swap > KilowattHours::ZERO,
            "energy per swap must be positive ({})",
            self.swap.energy_per_swap,
        );
        for plan in &self.plans {
            ensure!(
                plan.fixed_fee >= Cost::ZERO,
                "tier `{}`: the fixed fee must not be negative",
                plan.name,
            );
            ensure!(
                plan.included_energy_cap >= KilowattHours::ZERO,
                "tier `{}`: the included energy cap must not be negative",
                plan.name,
            );
            ensure!(
                plan.overage_rate >= KilowattHourRate::ZERO,
                "tier `{}`: the overage rate must not be negative",
                plan.name,
            );
        }
        ensure!(
            self.ownership.pack_price > Cost::ZERO,
            "the pack price must be positive ({})",
            self.ownership.pack_price,
        );
        ensure!(
            self.ownership.pack_energy > KilowattHours::ZERO,
            "the pack energy must be positive ({})",
            self.ownership.pack_energy,
        );
        ensure!(self.ownership.pack_cycle_life > 0, "the pack cycle life must be positive");
        ensure!(self.horizon_years >= 1, "the horizon must be at least one year");
        ensure!(
            self.home.tariff >= KilowattHourRate::ZERO,
            "the home tariff must not be negative",
        );
        ensure!(self.home.loss_percent >= 0.0, "the charging loss must not be negative");
        Ok(())
    }
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Billed energy per swap.
    ///
    /// The installed pack holds more, but the station bills for the usable part only.
    pub energy_per_swap: KilowattHours,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self { energy_per_swap: KilowattHours::from(2.5) }
    }
}

/// A subscription tier: fixed monthly fee, included energy allowance,
/// and a per-kilowatt-hour rate beyond the allowance.
#[derive(Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    pub fixed_fee: Cost,
    pub included_energy_cap: KilowattHours,
    pub overage_rate: KilowattHourRate,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct OwnershipConfig {
    /// Price of one whole pack.
    pub pack_price: Cost,

    /// Usable energy of one pack per cycle.
    pub pack_energy: KilowattHours,

    /// Full cycles before the pack is written off.
    pub pack_cycle_life: u32,
}

impl Default for OwnershipConfig {
    fn default() -> Self {
        Self {
            pack_price: Cost::from(35000.0),
            pack_energy: KilowattHours::from(1.8),
            pack_cycle_life: 600,
        }
    }
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct HomeChargingConfig {
    /// Household electricity tariff.
    pub tariff: KilowattHourRate,

    /// Transmission and charger loss, in percent of the consumed energy.
    pub loss_percent: f64,
}

impl Default for HomeChargingConfig {
    fn default() -> Self {
        Self { tariff: KilowattHourRate::from(8.0), loss_percent: 12.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() -> Result {
        Config::default().validate()
    }

    #[test]
    fn test_parse_override() -> Result {
        let config: Config = toml::from_str(
            r#"
            horizon_years = 5

            [[plan]]
            name = "Flat"
            fixed_fee = 1500.0
            included_energy_cap = 50.0
            overage_rate = 40.0
            "#,
        )?;
        config.validate()?;
        assert_eq!(config.horizon_years, 5);
        assert_eq!(config.plans.len(), 1);
        assert_eq!(config.plans[0].included_energy_cap, KilowattHours::from(50.0));
        // Unset sections fall back to the built-in constants:
        assert_eq!(config.swap.energy_per_swap, KilowattHours::from(2.5));
        Ok(())
    }

    #[test]
    fn test_rejects_zero_cycle_life() {
        let mut config = Config::default();
        config.ownership.pack_cycle_life = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_plans() {
        let mut config = Config::default();
        config.plans.clear();
        assert!(config.validate().is_err());
    }
}
