use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{
    Quantity,
    distance::Kilometres,
    energy::KilowattHours,
    rate::{KilometreRate, KilowattHourRate},
};

pub type Cost = Quantity<f64, 0, 0, 1>;

impl Default for Cost {
    fn default() -> Self {
        Self(0.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.0}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.0}", self.0)
    }
}

impl Div<Kilometres> for Cost {
    type Output = KilometreRate;

    fn div(self, rhs: Kilometres) -> Self::Output {
        KilometreRate::from(self.0 / rhs.0)
    }
}

impl Div<KilowattHours> for Cost {
    type Output = KilowattHourRate;

    fn div(self, rhs: KilowattHours) -> Self::Output {
        KilowattHourRate::from(self.0 / rhs.0)
    }
}

impl Div<KilowattHourRate> for Cost {
    type Output = KilowattHours;

    fn div(self, rhs: KilowattHourRate) -> Self::Output {
        KilowattHours::from(self.0 / rhs.0)
    }
}
