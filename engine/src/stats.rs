//! All about `Stats`.

use std::fmt::{Display, Formatter};
use std::ops::Add;

use serde::Serialize;

use tripmeter_formats::Kind;

/// Counters for one run.
///
/// The load stage fills in `lines`, the per-format counts and `trips`, the compute stage
/// `totals` and `distance`.  Both halves are merged with `+`.
///
/// ```rust
/// use tripmeter_engine::Stats;
///
/// let stats = Stats {
///     lines: 6,
///     geographic: 6,
///     trips: 3,
///     totals: 3,
///     distance: 333.585,
///     ..Default::default()
/// };
///
/// println!("Stats summary: {}", stats);
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Stats {
    pub lines: usize,
    pub geographic: usize,
    pub nvector: usize,
    pub grid: usize,
    pub trips: usize,
    pub totals: usize,
    pub distance: f64,
}

impl Stats {
    /// Count one decoded record.
    ///
    pub fn record(&mut self, kind: Kind) {
        match kind {
            Kind::Geographic => self.geographic += 1,
            Kind::NVector => self.nvector += 1,
            Kind::Grid => self.grid += 1,
        }
    }

    #[inline]
    pub fn records(&self) -> usize {
        self.geographic + self.nvector + self.grid
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lines={} geographic={} nvector={} grid={} trips={} totals={} distance={:.3}",
            self.lines,
            self.geographic,
            self.nvector,
            self.grid,
            self.trips,
            self.totals,
            self.distance
        )
    }
}

impl Add for Stats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Stats {
            lines: self.lines + rhs.lines,
            geographic: self.geographic + rhs.geographic,
            nvector: self.nvector + rhs.nvector,
            grid: self.grid + rhs.grid,
            trips: self.trips + rhs.trips,
            totals: self.totals + rhs.totals,
            distance: self.distance + rhs.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = Stats::default();
        assert_eq!(0, stats.lines);
        assert_eq!(0, stats.records());
        assert_eq!(0.0, stats.distance);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = Stats::default();
        stats.record(Kind::Grid);
        stats.record(Kind::Grid);
        stats.record(Kind::NVector);

        assert_eq!(0, stats.geographic);
        assert_eq!(1, stats.nvector);
        assert_eq!(2, stats.grid);
        assert_eq!(3, stats.records());
    }

    #[test]
    fn test_stats_display() {
        let stats = Stats {
            lines: 6,
            geographic: 4,
            nvector: 1,
            grid: 1,
            trips: 3,
            totals: 3,
            distance: 1234.5678,
        };
        assert_eq!(
            "lines=6 geographic=4 nvector=1 grid=1 trips=3 totals=3 distance=1234.568",
            stats.to_string()
        );
    }

    #[test]
    fn test_stats_add() {
        let load = Stats {
            lines: 6,
            geographic: 6,
            trips: 3,
            ..Default::default()
        };
        let compute = Stats {
            totals: 3,
            distance: 10.5,
            ..Default::default()
        };

        let sum = load + compute;
        assert_eq!(6, sum.lines);
        assert_eq!(6, sum.geographic);
        assert_eq!(3, sum.trips);
        assert_eq!(3, sum.totals);
        assert_eq!(10.5, sum.distance);
    }
}
