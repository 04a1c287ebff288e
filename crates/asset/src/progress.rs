//! Load progress derived from bytes consumed versus file size.

/// Percentage of `total` covered by `consumed`, clamped to `[0, 100]`.
/// An empty source counts as fully read.
pub fn percent(consumed: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (consumed as f64 * 100.0 / total as f64).min(100.0)
}

/// Emits a progress line every `interval` lines and once more at the end.
#[derive(Debug)]
pub struct ProgressReporter {
    total: u64,
    consumed: u64,
    interval: usize,
    last: f64,
}

impl ProgressReporter {
    /// `interval == 0` keeps only the final report.
    pub fn new(total: u64, interval: usize) -> Self {
        Self {
            total,
            consumed: 0,
            interval,
            last: 0.0,
        }
    }

    #[inline]
    pub fn advance(&mut self, bytes: u64) {
        self.consumed = self.consumed.saturating_add(bytes);
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Called after each line; returns the reported value on cadence lines.
    pub fn tick(&mut self, line: usize) -> Option<f64> {
        if self.interval == 0 || line % self.interval != 0 {
            return None;
        }
        Some(self.report())
    }

    pub fn finish(&mut self) -> f64 {
        self.last = 100.0;
        log::info!("  Loaded: {:.2}%", self.last);
        self.last
    }

    fn report(&mut self) -> f64 {
        self.last = self.last.max(percent(self.consumed, self.total));
        log::info!("  Loaded: {:.2}%", self.last);
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_zero_and_overshoot() {
        assert_eq!(percent(0, 0), 100.0);
        assert_eq!(percent(50, 200), 25.0);
        assert_eq!(percent(300, 200), 100.0);
    }

    #[test]
    fn reports_on_cadence_only() {
        let mut progress = ProgressReporter::new(100, 30);
        progress.advance(10);
        assert_eq!(progress.tick(1), None);
        progress.advance(20);
        assert_eq!(progress.consumed(), 30);
        assert_eq!(progress.tick(30), Some(30.0));
        assert_eq!(progress.tick(31), None);
        assert_eq!(progress.finish(), 100.0);
    }

    #[test]
    fn reported_values_never_decrease() {
        let mut progress = ProgressReporter::new(10, 1);
        let mut previous = 0.0;
        for line in 1..=20 {
            progress.advance(1);
            let value = progress.tick(line).unwrap();
            assert!(value >= previous);
            assert!(value <= 100.0);
            previous = value;
        }
    }

    #[test]
    fn zero_interval_only_finishes() {
        let mut progress = ProgressReporter::new(0, 0);
        assert_eq!(progress.tick(30), None);
        assert_eq!(progress.finish(), 100.0);
    }
}
