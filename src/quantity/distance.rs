use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{
    Quantity,
    consumption::WattHoursPerKilometre,
    energy::KilowattHours,
};

pub type Kilometres = Quantity<f64, 1, 0, 0>;

impl Kilometres {
    /// Round to the nearest whole kilometre.
    #[must_use]
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

impl Default for Kilometres {
    fn default() -> Self {
        Self(0.0)
    }
}

impl Display for Kilometres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} km", self.0)
    }
}

impl Debug for Kilometres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}km", self.0)
    }
}

impl Mul<WattHoursPerKilometre> for Kilometres {
    type Output = KilowattHours;

    fn mul(self, rhs: WattHoursPerKilometre) -> Self::Output {
        // The consumption is kept in watt-hours per kilometre:
        KilowattHours::from(self.0 * rhs.0 * 0.001)
    }
}

impl Div<Kilometres> for Kilometres {
    type Output = f64;

    fn div(self, rhs: Kilometres) -> Self::Output {
        self.0 / rhs.0
    }
}
