/// Value-branching story — a location state machine where choices award
/// points across the value dimensions and the final trial resolves one
/// of five endings from the accumulated scores.
use crate::schema::branch::{Location, StoryChoice};
use crate::schema::values::{Dimension, ValuePoints};

/// The dimension subset the harmony ending requires to be in balance.
const BALANCE_DIMENSIONS: [Dimension; 4] = [
    Dimension::Logic,
    Dimension::PhysicalActivity,
    Dimension::Planning,
    Dimension::HardWork,
];

/// Minimum min/max ratio over the balance dimensions, inclusive.
const BALANCE_RATIO: f32 = 0.8;

/// Drives the branching story independently of the dialogue script.
///
/// `make_choice` is the only mutation path for the current location; a
/// choice that the current location does not accept is ignored outright
/// (no transition, no points, no error).
pub struct ValueBranchingEngine {
    current_location: Location,
    points: ValuePoints,
}

impl Default for ValueBranchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueBranchingEngine {
    pub fn new() -> Self {
        Self {
            current_location: Location::VillageEntrance,
            points: ValuePoints::new(),
        }
    }

    /// Restart the journey at the village entrance. Accumulated points
    /// survive; only `new` produces a clean score table.
    pub fn begin(&mut self) {
        self.current_location = Location::VillageEntrance;
    }

    pub fn current_location(&self) -> Location {
        self.current_location
    }

    pub fn points(&self) -> &ValuePoints {
        &self.points
    }

    /// Shared award path for choice handlers and the `award_*` triggers.
    pub fn award(&mut self, dimension: Dimension, delta: i32) {
        self.points.award(dimension, delta);
        log::debug!(
            "awarded {delta} {} (total {})",
            dimension.name(),
            self.points.get(dimension)
        );
    }

    /// Process one choice at the current location.
    pub fn make_choice(&mut self, choice: StoryChoice) {
        use Dimension::*;
        use StoryChoice::*;

        let next = match (self.current_location, choice) {
            (Location::VillageEntrance, HonestPath) => {
                self.award_all(&[(Honesty, 10), (Integrity, 5)]);
                Some(Location::VillageCenter)
            }
            (Location::VillageEntrance, HumblePath) => {
                self.award_all(&[(Humility, 10), (Respect, 5)]);
                Some(Location::VillageCenter)
            }
            (Location::VillageCenter, CompassionatePath) => {
                self.award_all(&[(Compassion, 15), (Empathy, 10), (PhysicalActivity, 5)]);
                Some(Location::ForestPath)
            }
            (Location::VillageCenter, FairPath) => {
                self.award_all(&[(Fairness, 15), (Logic, 10), (Responsibility, 10)]);
                Some(Location::AncientLibrary)
            }
            (Location::VillageCenter, HumblePath) => {
                self.award_all(&[(Humility, 15), (Respect, 10), (Planning, 5)]);
                Some(Location::AncientLibrary)
            }
            (Location::ForestPath, CourageousPath) => {
                self.award_all(&[(Courage, 20), (HardWork, 15), (PhysicalActivity, 20)]);
                Some(Location::MountainTemple)
            }
            (Location::ForestPath, PerseverantPath) => {
                self.award_all(&[
                    (Perseverance, 20),
                    (Planning, 15),
                    (Logic, 10),
                    (PhysicalActivity, 15),
                ]);
                Some(Location::HermitsCave)
            }
            (Location::ForestPath, HumblePath) => {
                self.award_all(&[(Humility, 15), (Responsibility, 10), (Planning, 10)]);
                Some(Location::VillageCenter)
            }
            (Location::MountainTemple, RespectfulPath) => {
                self.award_all(&[(Respect, 20), (Humility, 15), (PhysicalActivity, 10)]);
                Some(Location::CrystalChamber)
            }
            (Location::MountainTemple, LogicalPath) => {
                self.award_all(&[(Logic, 20), (Planning, 15)]);
                Some(Location::CrystalChamber)
            }
            (Location::AncientLibrary, LogicalPath) => {
                self.award_all(&[(Logic, 25), (Planning, 20), (HardWork, 15)]);
                Some(Location::CrystalChamber)
            }
            (Location::AncientLibrary, HumblePath) => {
                self.award_all(&[(Humility, 20), (Respect, 15)]);
                Some(Location::CrystalChamber)
            }
            (Location::HermitsCave, CompassionatePath) => {
                self.award_all(&[(Compassion, 20), (Empathy, 15), (PhysicalActivity, 10)]);
                Some(Location::CrystalChamber)
            }
            (Location::HermitsCave, PerseverantPath) => {
                self.award_all(&[(Perseverance, 20), (HardWork, 15)]);
                Some(Location::CrystalChamber)
            }
            (Location::CrystalChamber, HarmoniousPath) => {
                self.award_all(&[
                    (Harmony, 25),
                    (Logic, 15),
                    (PhysicalActivity, 10),
                    (Planning, 10),
                ]);
                Some(Location::FinalTrial)
            }
            // The final trial resolves an ending no matter which path
            // the player leans on.
            (Location::FinalTrial, _) => Some(self.determine_ending()),
            _ => {
                log::debug!(
                    "choice {choice:?} not available at {:?}, ignoring",
                    self.current_location
                );
                None
            }
        };

        if let Some(location) = next {
            self.current_location = location;
            log::debug!("moved to {location:?}");
        }
    }

    /// Pick the ending from the accumulated scores. Priority order is
    /// part of the contract: harmony wins over every threshold ending
    /// whenever its own conditions hold.
    pub fn determine_ending(&self) -> Location {
        if self.points.get(Dimension::Harmony) >= 20 && self.is_balanced() {
            Location::EndingHarmony
        } else if self.points.get(Dimension::Courage) >= 30 {
            Location::EndingCourage
        } else if self.points.get(Dimension::Logic) >= 30 {
            Location::EndingWisdom
        } else if self.points.get(Dimension::Compassion) >= 30 {
            Location::EndingCompassion
        } else {
            Location::EndingBalance
        }
    }

    /// Balance check over {Logic, PhysicalActivity, Planning, HardWork}:
    /// min/max of the four scores must reach 0.8, inclusive. With all
    /// four still zero there is nothing to balance yet, so the answer is
    /// false rather than a division by zero.
    pub fn is_balanced(&self) -> bool {
        let (min, max) = self.points.min_max(&BALANCE_DIMENSIONS);
        if max == 0 {
            return false;
        }
        min as f32 / max as f32 >= BALANCE_RATIO
    }

    fn award_all(&mut self, awards: &[(Dimension, i32)]) {
        for &(dimension, delta) in awards {
            self.award(dimension, delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(points: &[(Dimension, i32)]) -> ValueBranchingEngine {
        let mut engine = ValueBranchingEngine::new();
        for &(dimension, delta) in points {
            engine.award(dimension, delta);
        }
        engine
    }

    #[test]
    fn starts_at_village_entrance_with_zero_points() {
        let engine = ValueBranchingEngine::new();
        assert_eq!(engine.current_location(), Location::VillageEntrance);
        assert_eq!(engine.points().get(Dimension::Harmony), 0);
    }

    #[test]
    fn honest_path_moves_to_village_center() {
        let mut engine = ValueBranchingEngine::new();
        engine.make_choice(StoryChoice::HonestPath);
        assert_eq!(engine.current_location(), Location::VillageCenter);
        assert_eq!(engine.points().get(Dimension::Honesty), 10);
        assert_eq!(engine.points().get(Dimension::Integrity), 5);
    }

    #[test]
    fn invalid_choice_is_ignored() {
        let mut engine = ValueBranchingEngine::new();
        engine.make_choice(StoryChoice::CourageousPath); // not offered at the entrance
        assert_eq!(engine.current_location(), Location::VillageEntrance);
        assert_eq!(engine.points().get(Dimension::Courage), 0);
    }

    #[test]
    fn forest_humble_path_loops_back() {
        let mut engine = ValueBranchingEngine::new();
        engine.make_choice(StoryChoice::HonestPath);
        engine.make_choice(StoryChoice::CompassionatePath);
        assert_eq!(engine.current_location(), Location::ForestPath);

        engine.make_choice(StoryChoice::HumblePath);
        assert_eq!(engine.current_location(), Location::VillageCenter);
    }

    #[test]
    fn ending_choices_are_inert() {
        let mut engine = engine_with(&[(Dimension::Courage, 30)]);
        engine.current_location = Location::FinalTrial;
        engine.make_choice(StoryChoice::CourageousPath);
        assert_eq!(engine.current_location(), Location::EndingCourage);

        engine.make_choice(StoryChoice::HonestPath);
        assert_eq!(engine.current_location(), Location::EndingCourage);
    }

    #[test]
    fn harmony_ending_outranks_logic_threshold() {
        let engine = engine_with(&[
            (Dimension::Harmony, 20),
            (Dimension::Logic, 30),
            (Dimension::PhysicalActivity, 20),
            (Dimension::Planning, 20),
            (Dimension::HardWork, 20),
        ]);
        // Logic:30 alone would give EndingWisdom; harmony + balance must win.
        // min/max = 20/30 fails, so push the spread back in range first.
        assert!(!engine.is_balanced());

        let engine = engine_with(&[
            (Dimension::Harmony, 20),
            (Dimension::Logic, 30),
            (Dimension::PhysicalActivity, 25),
            (Dimension::Planning, 25),
            (Dimension::HardWork, 25),
        ]);
        assert!(engine.is_balanced());
        assert_eq!(engine.determine_ending(), Location::EndingHarmony);
    }

    #[test]
    fn ending_threshold_order() {
        let engine = engine_with(&[(Dimension::Courage, 30), (Dimension::Logic, 30)]);
        assert_eq!(engine.determine_ending(), Location::EndingCourage);

        let engine = engine_with(&[(Dimension::Logic, 30), (Dimension::Compassion, 30)]);
        assert_eq!(engine.determine_ending(), Location::EndingWisdom);

        let engine = engine_with(&[(Dimension::Compassion, 30)]);
        assert_eq!(engine.determine_ending(), Location::EndingCompassion);

        let engine = engine_with(&[]);
        assert_eq!(engine.determine_ending(), Location::EndingBalance);
    }

    #[test]
    fn balance_boundary_is_inclusive() {
        let engine = engine_with(&[
            (Dimension::Logic, 10),
            (Dimension::PhysicalActivity, 8),
            (Dimension::Planning, 10),
            (Dimension::HardWork, 10),
        ]);
        assert!(engine.is_balanced()); // 8/10 = 0.8 exactly

        let engine = engine_with(&[
            (Dimension::Logic, 10),
            (Dimension::PhysicalActivity, 7),
            (Dimension::Planning, 10),
            (Dimension::HardWork, 10),
        ]);
        assert!(!engine.is_balanced()); // 0.7
    }

    #[test]
    fn all_zero_dimensions_are_not_balanced() {
        // regression: the obvious min/max ratio divides by zero here
        let engine = ValueBranchingEngine::new();
        assert!(!engine.is_balanced());
        assert_eq!(engine.determine_ending(), Location::EndingBalance);
    }

    #[test]
    fn begin_resets_location_but_keeps_points() {
        let mut engine = ValueBranchingEngine::new();
        engine.make_choice(StoryChoice::HonestPath);
        engine.begin();
        assert_eq!(engine.current_location(), Location::VillageEntrance);
        assert_eq!(engine.points().get(Dimension::Honesty), 10);
    }

    #[test]
    fn harmonious_walkthrough_reaches_harmony_ending() {
        let mut engine = ValueBranchingEngine::new();
        engine.make_choice(StoryChoice::HonestPath); // -> VillageCenter
        engine.make_choice(StoryChoice::FairPath); // -> AncientLibrary
        engine.make_choice(StoryChoice::LogicalPath); // -> CrystalChamber
        engine.make_choice(StoryChoice::HarmoniousPath); // -> FinalTrial
        assert_eq!(engine.current_location(), Location::FinalTrial);

        // Logic 10+25+15=50, Planning 20+10=30, HardWork 15, PhysicalActivity 10.
        // min/max = 10/50: unbalanced, Logic>=30, so wisdom wins the trial.
        engine.make_choice(StoryChoice::HarmoniousPath);
        assert_eq!(engine.current_location(), Location::EndingWisdom);
    }
}
