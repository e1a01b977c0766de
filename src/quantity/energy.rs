quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 0);

impl KilowattHours {
    /// Round to whole kilowatt-hours, half away from zero.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}
