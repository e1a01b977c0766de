quantity!(Hours, via: f64, suffix: "h", precision: 1);

impl Hours {
    /// Assumed nightly operating duration when the schedule is unknown.
    pub const FALLBACK: Self = Self(12.0);

    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}
