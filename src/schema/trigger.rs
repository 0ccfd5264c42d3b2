use serde::{Deserialize, Serialize};

/// The closed vocabulary of symbolic triggers the dispatcher recognizes.
///
/// Script files and in-level trigger volumes emit these by their external
/// string name; `parse` rejects anything outside the vocabulary so that
/// typos surface as load-time warnings instead of silently dead lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryTrigger {
    EnableOrbCollection,
    UnlockSpeedResearch,
    PrepareLightSpeedSequence,
    TranscendenceComplete,
    StartMemoryPuzzle,
    StartPowerFlowPuzzle,
    StartSleightGridPuzzle,
    UnlockFreePlayMode,
    BeginMainGameplay,
    AwardHonesty,
    AwardHumility,
    AwardCompassion,
    AwardOpenness,
    AwardRationality,
    AwardAltruism,
    AwardAmbition,
    SceneTransition,
}

impl StoryTrigger {
    /// The external string name, as it appears in script files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnableOrbCollection => "enable_orb_collection",
            Self::UnlockSpeedResearch => "unlock_speed_research",
            Self::PrepareLightSpeedSequence => "prepare_light_speed_sequence",
            Self::TranscendenceComplete => "transcendence_complete",
            Self::StartMemoryPuzzle => "start_memory_puzzle",
            Self::StartPowerFlowPuzzle => "start_power_flow_puzzle",
            Self::StartSleightGridPuzzle => "start_sleight_grid_puzzle",
            Self::UnlockFreePlayMode => "unlock_free_play_mode",
            Self::BeginMainGameplay => "begin_main_gameplay",
            Self::AwardHonesty => "award_honesty",
            Self::AwardHumility => "award_humility",
            Self::AwardCompassion => "award_compassion",
            Self::AwardOpenness => "award_openness",
            Self::AwardRationality => "award_rationality",
            Self::AwardAltruism => "award_altruism",
            Self::AwardAmbition => "award_ambition",
            Self::SceneTransition => "scene_transition",
        }
    }

    /// Parse an external trigger name. Returns `None` for anything
    /// outside the vocabulary; callers log and continue.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "enable_orb_collection" => Some(Self::EnableOrbCollection),
            "unlock_speed_research" => Some(Self::UnlockSpeedResearch),
            "prepare_light_speed_sequence" => Some(Self::PrepareLightSpeedSequence),
            "transcendence_complete" => Some(Self::TranscendenceComplete),
            "start_memory_puzzle" => Some(Self::StartMemoryPuzzle),
            "start_power_flow_puzzle" => Some(Self::StartPowerFlowPuzzle),
            "start_sleight_grid_puzzle" => Some(Self::StartSleightGridPuzzle),
            "unlock_free_play_mode" => Some(Self::UnlockFreePlayMode),
            "begin_main_gameplay" => Some(Self::BeginMainGameplay),
            "award_honesty" => Some(Self::AwardHonesty),
            "award_humility" => Some(Self::AwardHumility),
            "award_compassion" => Some(Self::AwardCompassion),
            "award_openness" => Some(Self::AwardOpenness),
            "award_rationality" => Some(Self::AwardRationality),
            "award_altruism" => Some(Self::AwardAltruism),
            "award_ambition" => Some(Self::AwardAmbition),
            "scene_transition" => Some(Self::SceneTransition),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[StoryTrigger] = &[
        StoryTrigger::EnableOrbCollection,
        StoryTrigger::UnlockSpeedResearch,
        StoryTrigger::PrepareLightSpeedSequence,
        StoryTrigger::TranscendenceComplete,
        StoryTrigger::StartMemoryPuzzle,
        StoryTrigger::StartPowerFlowPuzzle,
        StoryTrigger::StartSleightGridPuzzle,
        StoryTrigger::UnlockFreePlayMode,
        StoryTrigger::BeginMainGameplay,
        StoryTrigger::AwardHonesty,
        StoryTrigger::AwardHumility,
        StoryTrigger::AwardCompassion,
        StoryTrigger::AwardOpenness,
        StoryTrigger::AwardRationality,
        StoryTrigger::AwardAltruism,
        StoryTrigger::AwardAmbition,
        StoryTrigger::SceneTransition,
    ];

    #[test]
    fn parse_round_trips_every_variant() {
        for trigger in ALL {
            assert_eq!(StoryTrigger::parse(trigger.as_str()), Some(*trigger));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(StoryTrigger::parse("not_a_real_trigger"), None);
        assert_eq!(StoryTrigger::parse(""), None);
        // case-sensitive by design
        assert_eq!(StoryTrigger::parse("Scene_Transition"), None);
    }
}
