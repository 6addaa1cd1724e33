//! Display-refresh clock.

/// Seconds elapsed since the refresh epoch, plus the reference point the
/// animation steps are measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    elapsed_seconds: f64,
    reference_seconds: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to a refresh timestamp given in milliseconds.
    ///
    /// Hosts hand out non-decreasing timestamps; one that goes backwards is
    /// held at the previous value so elapsed time never regresses.
    pub fn tick(&mut self, raw_timestamp_ms: f64) -> f64 {
        let seconds = raw_timestamp_ms / 1000.0;
        if seconds > self.elapsed_seconds {
            self.elapsed_seconds = seconds;
        }
        self.elapsed_seconds
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Record the current elapsed time as the reference point.
    pub fn mark(&mut self) {
        self.reference_seconds = self.elapsed_seconds;
    }

    pub fn reference_seconds(&self) -> f64 {
        self.reference_seconds
    }

    /// Seconds since the last [`mark`](Self::mark).
    pub fn since_mark(&self) -> f64 {
        (self.elapsed_seconds - self.reference_seconds).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_converts_milliseconds() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1500.0), 1.5);
        assert_eq!(clock.elapsed_seconds(), 1.5);
    }

    #[test]
    fn regressing_timestamp_is_held() {
        let mut clock = FrameClock::new();
        clock.tick(2000.0);
        assert_eq!(clock.tick(1000.0), 2.0);
    }

    #[test]
    fn since_mark_measures_from_reference() {
        let mut clock = FrameClock::new();
        clock.tick(3000.0);
        clock.mark();
        clock.tick(4250.0);
        assert!((clock.since_mark() - 1.25).abs() < 1e-12);
        assert_eq!(clock.reference_seconds(), 3.0);
    }

    #[test]
    fn nan_timestamp_does_not_poison_elapsed() {
        let mut clock = FrameClock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(f64::NAN), 0.5);
    }
}
