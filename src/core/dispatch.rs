/// Trigger dispatch — maps the closed trigger vocabulary onto story
/// flag mutations and directives for the director to carry out.
use crate::schema::flags::StoryFlags;
use crate::schema::line::DialogueLine;
use crate::schema::trigger::StoryTrigger;
use crate::schema::values::Dimension;

/// An external gameplay subsystem the story can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSystem {
    OrbSpawner,
    SpeedResearch,
    TranscendenceGate,
    FreePlayMode,
    MainGameplay,
}

/// The puzzle segments the story starts and stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    Memory,
    PowerFlow,
    SleightGrid,
}

impl PuzzleKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::PowerFlow => "power_flow",
            Self::SleightGrid => "sleight_grid",
        }
    }
}

/// Cutscenes the story can request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutsceneKind {
    LightSpeed,
}

/// One unit of work a trigger asks the director to perform. Directives
/// are drained through the director's bounded work queue, which is what
/// keeps trigger re-entrancy finite and observable.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Load a dialogue scene by name (the director derives the path).
    LoadScene(String),
    /// Move the story sequence to its next scene.
    AdvanceSequence,
    /// Fire-and-forget activation of a world subsystem.
    Activate(GameSystem),
    StartPuzzle(PuzzleKind),
    PlayCutscene(CutsceneKind),
    /// Delegate a point award to the value-branching engine.
    Award(Dimension, i32),
}

/// Fixed delta applied by the `award_*` triggers.
const AWARD_DELTA: i32 = 5;

/// Owns the story flags and resolves each trigger to its effects.
///
/// Unknown trigger names never error: the raw entry point logs and
/// returns nothing, so a mis-wired level volume cannot take the session
/// down. Flag mutation is idempotent throughout.
pub struct TriggerDispatcher {
    flags: StoryFlags,
}

impl Default for TriggerDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerDispatcher {
    pub fn new() -> Self {
        Self {
            flags: StoryFlags::new(),
        }
    }

    /// Rebuild the dispatcher around previously saved flags.
    pub fn with_flags(flags: StoryFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> &StoryFlags {
        &self.flags
    }

    /// Replace the flag state wholesale (restore path).
    pub fn restore_flags(&mut self, flags: StoryFlags) {
        self.flags = flags;
    }

    /// String entry point for genuinely dynamic callers (in-level
    /// trigger volumes). Unknown names warn and do nothing.
    pub fn dispatch_raw(&mut self, name: &str, line: Option<&DialogueLine>) -> Vec<Directive> {
        match StoryTrigger::parse(name) {
            Some(trigger) => self.dispatch(trigger, line),
            None => {
                log::warn!("unknown trigger: {name}");
                Vec::new()
            }
        }
    }

    /// Resolve one trigger to its flag mutation and directives.
    pub fn dispatch(
        &mut self,
        trigger: StoryTrigger,
        line: Option<&DialogueLine>,
    ) -> Vec<Directive> {
        log::debug!("dispatching trigger {}", trigger.as_str());
        match trigger {
            StoryTrigger::EnableOrbCollection => {
                self.flags.first_orb_collected = true;
                vec![Directive::Activate(GameSystem::OrbSpawner)]
            }
            StoryTrigger::UnlockSpeedResearch => {
                self.flags.speed_research_unlocked = true;
                vec![Directive::Activate(GameSystem::SpeedResearch)]
            }
            StoryTrigger::PrepareLightSpeedSequence => {
                self.flags.light_speed_prepared = true;
                vec![Directive::PlayCutscene(CutsceneKind::LightSpeed)]
            }
            StoryTrigger::TranscendenceComplete => {
                self.flags.transcendence_complete = true;
                vec![Directive::Activate(GameSystem::TranscendenceGate)]
            }
            StoryTrigger::StartMemoryPuzzle => {
                vec![Directive::StartPuzzle(PuzzleKind::Memory)]
            }
            StoryTrigger::StartPowerFlowPuzzle => {
                vec![Directive::StartPuzzle(PuzzleKind::PowerFlow)]
            }
            StoryTrigger::StartSleightGridPuzzle => {
                vec![Directive::StartPuzzle(PuzzleKind::SleightGrid)]
            }
            StoryTrigger::UnlockFreePlayMode => {
                self.flags.free_play_unlocked = true;
                vec![Directive::Activate(GameSystem::FreePlayMode)]
            }
            StoryTrigger::BeginMainGameplay => {
                if !self.flags.main_gameplay_started {
                    self.flags.main_gameplay_started = true;
                    self.flags.current_story_segment += 1;
                }
                vec![Directive::Activate(GameSystem::MainGameplay)]
            }
            StoryTrigger::AwardHonesty => {
                vec![Directive::Award(Dimension::Honesty, AWARD_DELTA)]
            }
            StoryTrigger::AwardHumility => {
                vec![Directive::Award(Dimension::Humility, AWARD_DELTA)]
            }
            StoryTrigger::AwardCompassion => {
                vec![Directive::Award(Dimension::Compassion, AWARD_DELTA)]
            }
            StoryTrigger::AwardOpenness => {
                vec![Directive::Award(Dimension::Respect, AWARD_DELTA)]
            }
            StoryTrigger::AwardRationality => {
                vec![Directive::Award(Dimension::Logic, AWARD_DELTA)]
            }
            StoryTrigger::AwardAltruism => {
                vec![Directive::Award(Dimension::Empathy, AWARD_DELTA)]
            }
            // The one negative award in the vocabulary. Kept as-is
            // pending product clarification; the score saturates at
            // zero on the receiving side.
            StoryTrigger::AwardAmbition => {
                vec![Directive::Award(Dimension::Responsibility, -AWARD_DELTA)]
            }
            StoryTrigger::SceneTransition => match line.and_then(|l| l.next_scene.as_deref()) {
                Some(next_scene) => vec![Directive::LoadScene(next_scene.to_string())],
                None => {
                    log::warn!("scene_transition trigger without a next_scene");
                    Vec::new()
                }
            },
        }
    }

    /// Record a puzzle's completion. Called from the director's
    /// completion path, not from a trigger.
    pub fn complete_puzzle(&mut self, kind: PuzzleKind) {
        match kind {
            PuzzleKind::Memory => self.flags.memory_puzzle_completed = true,
            PuzzleKind::PowerFlow => self.flags.power_flow_puzzle_completed = true,
            PuzzleKind::SleightGrid => self.flags.sleight_grid_puzzle_completed = true,
        }
    }

    /// Record that the light-speed cutscene ran to its end.
    pub fn mark_light_speed_achieved(&mut self) {
        self.flags.light_speed_achieved = true;
    }
}
