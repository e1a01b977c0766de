use std::ops::Div;

use crate::quantity::power::Watts;

quantity!(
    /// Nominal light output.
    Lumens, via: f64, suffix: "lm", precision: 0
);

quantity!(
    /// Luminous efficacy.
    Efficacy, via: f64, suffix: "lm/W", precision: 1
);

impl Div<Watts> for Lumens {
    type Output = Efficacy;

    fn div(self, rhs: Watts) -> Self::Output {
        Efficacy(self.0 / rhs.0)
    }
}
