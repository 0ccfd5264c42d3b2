use serde::{Deserialize, Serialize};

/// Session-wide narrative progress state.
///
/// Owned by the trigger dispatcher, mutated only by trigger handlers and
/// the puzzle-completion path, and read by the host through getters.
/// Flag setting is idempotent: setting an already-true flag changes
/// nothing. The whole struct round-trips through the persistence
/// collaborator as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryFlags {
    pub first_orb_collected: bool,
    pub speed_research_unlocked: bool,
    pub light_speed_prepared: bool,
    pub light_speed_achieved: bool,
    pub transcendence_complete: bool,
    pub memory_puzzle_completed: bool,
    pub power_flow_puzzle_completed: bool,
    pub sleight_grid_puzzle_completed: bool,
    pub free_play_unlocked: bool,
    pub main_gameplay_started: bool,
    /// Coarse progress counter, bumped when main gameplay begins.
    pub current_story_segment: u32,
}

impl StoryFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once every puzzle in the story has been completed.
    pub fn all_puzzles_completed(&self) -> bool {
        self.memory_puzzle_completed
            && self.power_flow_puzzle_completed
            && self.sleight_grid_puzzle_completed
    }
}
