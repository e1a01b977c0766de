use std::ops::Mul;

use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(Watts, via: f64, suffix: "W", precision: 0);

impl Watts {
    /// Non-zero and finite.
    ///
    /// Zero readings are indistinguishable from missing ones in the equipment repository.
    pub const fn is_known(self) -> bool {
        self.0 != 0.0 && self.0.is_finite()
    }
}

impl Mul<Hours> for Watts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        KilowattHours(self.0 * hours.0 / 1000.0)
    }
}
