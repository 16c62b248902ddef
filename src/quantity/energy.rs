use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{
    Quantity,
    consumption::WattHoursPerKilometre,
    cost::Cost,
    distance::Kilometres,
    rate::KilowattHourRate,
};

pub type KilowattHours = Quantity<f64, 0, 1, 0>;

impl Default for KilowattHours {
    fn default() -> Self {
        Self(0.0)
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}kWh", self.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost::from(self.0 * rhs.0)
    }
}

impl Div<WattHoursPerKilometre> for KilowattHours {
    type Output = Kilometres;

    fn div(self, rhs: WattHoursPerKilometre) -> Self::Output {
        // The consumption is kept in watt-hours per kilometre:
        Kilometres::from(self.0 * 1000.0 / rhs.0)
    }
}

impl Div<KilowattHours> for KilowattHours {
    type Output = f64;

    fn div(self, rhs: KilowattHours) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_energy_times_rate() {
        let cost = KilowattHours::from(5.0) * KilowattHourRate::from(35.0);
        assert_abs_diff_eq!(cost.0, 175.0);
    }

    #[test]
    fn test_energy_per_consumption() {
        let distance = KilowattHours::from(2.5) / WattHoursPerKilometre::from(32.0);
        assert_abs_diff_eq!(distance.0, 78.125);
    }
}
