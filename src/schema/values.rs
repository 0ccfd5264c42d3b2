use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One of the fifteen value accumulators a player earns points in
/// through branching-story choices and `award_*` triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Honesty,
    Integrity,
    Empathy,
    Courage,
    Respect,
    Fairness,
    Responsibility,
    Compassion,
    Perseverance,
    Humility,
    Logic,
    HardWork,
    Planning,
    PhysicalActivity,
    Harmony,
}

impl Dimension {
    pub const ALL: [Dimension; 15] = [
        Dimension::Honesty,
        Dimension::Integrity,
        Dimension::Empathy,
        Dimension::Courage,
        Dimension::Respect,
        Dimension::Fairness,
        Dimension::Responsibility,
        Dimension::Compassion,
        Dimension::Perseverance,
        Dimension::Humility,
        Dimension::Logic,
        Dimension::HardWork,
        Dimension::Planning,
        Dimension::PhysicalActivity,
        Dimension::Harmony,
    ];

    /// Display name, matching the dimension keys used in story data.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Honesty => "Honesty",
            Self::Integrity => "Integrity",
            Self::Empathy => "Empathy",
            Self::Courage => "Courage",
            Self::Respect => "Respect",
            Self::Fairness => "Fairness",
            Self::Responsibility => "Responsibility",
            Self::Compassion => "Compassion",
            Self::Perseverance => "Perseverance",
            Self::Humility => "Humility",
            Self::Logic => "Logic",
            Self::HardWork => "HardWork",
            Self::Planning => "Planning",
            Self::PhysicalActivity => "PhysicalActivity",
            Self::Harmony => "Harmony",
        }
    }
}

/// Score table over the closed dimension set, all zero at story start.
///
/// Scores are non-negative. Negative award deltas saturate at zero
/// instead of underflowing; the only trigger that applies one is the
/// ambition path, which is deliberately kept as the single exception to
/// otherwise monotone accumulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoints {
    scores: FxHashMap<Dimension, u32>,
}

impl Default for ValuePoints {
    fn default() -> Self {
        Self::new()
    }
}

impl ValuePoints {
    pub fn new() -> Self {
        let mut scores = FxHashMap::default();
        for dimension in Dimension::ALL {
            scores.insert(dimension, 0);
        }
        Self { scores }
    }

    pub fn get(&self, dimension: Dimension) -> u32 {
        self.scores.get(&dimension).copied().unwrap_or(0)
    }

    /// Apply a signed delta, saturating at zero.
    pub fn award(&mut self, dimension: Dimension, delta: i32) {
        let entry = self.scores.entry(dimension).or_insert(0);
        *entry = if delta >= 0 {
            entry.saturating_add(delta as u32)
        } else {
            entry.saturating_sub(delta.unsigned_abs())
        };
    }

    /// Min and max over a fixed subset of dimensions.
    pub fn min_max(&self, dimensions: &[Dimension]) -> (u32, u32) {
        let mut min = u32::MAX;
        let mut max = 0;
        for &dimension in dimensions {
            let score = self.get(dimension);
            min = min.min(score);
            max = max.max(score);
        }
        if min == u32::MAX {
            min = 0;
        }
        (min, max)
    }

    /// Snapshot of all scores, for host UI.
    pub fn snapshot(&self) -> Vec<(Dimension, u32)> {
        Dimension::ALL.iter().map(|&d| (d, self.get(d))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dimensions_start_at_zero() {
        let points = ValuePoints::new();
        for dimension in Dimension::ALL {
            assert_eq!(points.get(dimension), 0);
        }
    }

    #[test]
    fn award_accumulates() {
        let mut points = ValuePoints::new();
        points.award(Dimension::Courage, 20);
        points.award(Dimension::Courage, 10);
        assert_eq!(points.get(Dimension::Courage), 30);
    }

    #[test]
    fn negative_award_saturates_at_zero() {
        let mut points = ValuePoints::new();
        points.award(Dimension::Responsibility, 3);
        points.award(Dimension::Responsibility, -5);
        assert_eq!(points.get(Dimension::Responsibility), 0);
    }

    #[test]
    fn min_max_over_subset() {
        let mut points = ValuePoints::new();
        points.award(Dimension::Logic, 10);
        points.award(Dimension::PhysicalActivity, 8);
        points.award(Dimension::Planning, 10);
        points.award(Dimension::HardWork, 10);
        let (min, max) = points.min_max(&[
            Dimension::Logic,
            Dimension::PhysicalActivity,
            Dimension::Planning,
            Dimension::HardWork,
        ]);
        assert_eq!((min, max), (8, 10));
    }

    #[test]
    fn min_max_of_empty_subset() {
        let points = ValuePoints::new();
        assert_eq!(points.min_max(&[]), (0, 0));
    }

    #[test]
    fn dimension_names() {
        assert_eq!(Dimension::HardWork.name(), "HardWork");
        assert_eq!(Dimension::PhysicalActivity.name(), "PhysicalActivity");
        assert_eq!(Dimension::ALL.len(), 15);
    }
}
