use crate::quantity::energy::KilowattHours;

quantity!(
    /// Amount in the tariff currency.
    Cost, via: f64, suffix: "¤", precision: 0
);

quantity!(
    /// Tariff, currency units per kilowatt-hour.
    KilowattHourRate, via: f64, suffix: "¤/kWh", precision: 2
);

implement_mul!(KilowattHours, KilowattHourRate, Cost);

impl Cost {
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}
