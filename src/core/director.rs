/// Story director — constructs and owns every narrative component,
/// wires the host's collaborators to them, and drains trigger
/// directives through a bounded work queue.
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

use crate::core::branching::ValueBranchingEngine;
use crate::core::dispatch::{CutsceneKind, Directive, GameSystem, PuzzleKind, TriggerDispatcher};
use crate::core::scheduler::{ScheduledAction, Scheduler};
use crate::core::script::{NullPresenter, ScenePresenter, ScriptEngine};
use crate::core::sequencer::{NullObserver, StoryObserver, StorySequencer};
use crate::core::source::{MemorySceneSource, SceneSource};
use crate::schema::branch::{Location, StoryChoice};
use crate::schema::flags::StoryFlags;
use crate::schema::line::DialogueLine;
use crate::schema::values::ValuePoints;

/// Resource prefix for story dialogue scenes.
const SCENE_RESOURCE_PREFIX: &str = "StoryRoutes/";

/// Delay between a puzzle's completion and the next scene load.
const PUZZLE_TRANSITION_DELAY: f32 = 2.0;

/// Bound on nested trigger dispatch. Trigger chains in shipped scripts
/// are two or three deep; anything past this is a script cycle.
const MAX_DISPATCH_DEPTH: usize = 8;

/// Fire-and-forget activation of external gameplay subsystems.
pub trait WorldGateway {
    fn activate(&mut self, _system: GameSystem) {}
}

/// Inert world used when the host supplies none.
#[derive(Debug, Default)]
pub struct NullWorld;

impl WorldGateway for NullWorld {}

/// A puzzle collaborator. Completion normally arrives by push
/// (`StoryDirector::notify_puzzle_complete`); `is_complete` is polled
/// each tick as the fallback for hosts that cannot push.
pub trait PuzzleHandle {
    fn activate(&mut self);
    fn deactivate(&mut self);
    fn is_complete(&self) -> bool;
    fn reset(&mut self) {}
    fn show_hint(&mut self) {}
}

/// Cutscene collaborator. `play` must not block; the host reports the
/// end of the sequence through `notify_cutscene_complete`.
pub trait CutscenePlayer {
    fn play(&mut self, kind: CutsceneKind);
    fn skip(&mut self);
}

/// Persistence collaborator for story flags.
pub trait FlagStore {
    fn load(&mut self) -> Option<StoryFlags>;
    fn save(&mut self, flags: &StoryFlags);
}

/// Owns the script engine, trigger dispatcher, sequencer, branching
/// engine, and scheduler; one director per session, by ownership
/// rather than by global state.
///
/// Every public entry point absorbs failure locally: a missing scene
/// file, an unknown trigger, or an absent collaborator logs and leaves
/// the story in a defined state, never panicking out of the host loop.
pub struct StoryDirector {
    script: ScriptEngine,
    dispatcher: TriggerDispatcher,
    sequencer: StorySequencer,
    branching: Option<ValueBranchingEngine>,
    scheduler: Scheduler,
    source: Box<dyn SceneSource>,
    presenter: Box<dyn ScenePresenter>,
    observer: Box<dyn StoryObserver>,
    world: Box<dyn WorldGateway>,
    cutscene: Option<Box<dyn CutscenePlayer>>,
    puzzles: FxHashMap<PuzzleKind, Box<dyn PuzzleHandle>>,
    flag_store: Option<Box<dyn FlagStore>>,
    active_puzzle: Option<PuzzleKind>,
}

impl StoryDirector {
    pub fn builder() -> StoryDirectorBuilder {
        StoryDirectorBuilder::new()
    }

    /// Reset the sequence to its first scene and load it.
    pub fn start_story(&mut self) {
        let name = self
            .sequencer
            .start_story(self.observer.as_mut())
            .map(str::to_string);
        if let Some(name) = name {
            let directives = self.load_scene_into_script(&name);
            self.run_directives(directives);
        }
        if let Some(branching) = self.branching.as_mut() {
            branching.begin();
        }
    }

    /// Step the dialogue one line.
    pub fn advance(&mut self) {
        let trigger = self.script.advance(self.presenter.as_mut());
        if let Some(trigger) = trigger {
            let directives = self.dispatcher.dispatch(trigger, self.script.current_line());
            self.run_directives(directives);
        }
    }

    /// Jump the dialogue to a labelled line (unknown ids fall back to a
    /// plain advance inside the script engine).
    pub fn select_choice(&mut self, next_line_id: &str) {
        let trigger = self.script.select_choice(next_line_id, self.presenter.as_mut());
        if let Some(trigger) = trigger {
            let directives = self.dispatcher.dispatch(trigger, self.script.current_line());
            self.run_directives(directives);
        }
    }

    /// Raw trigger entry point for world contact (level trigger
    /// volumes). Unknown names are logged no-ops.
    pub fn trigger(&mut self, name: &str, line: Option<&DialogueLine>) {
        let directives = self.dispatcher.dispatch_raw(name, line);
        self.run_directives(directives);
    }

    /// Forward a branching-story choice. Best-effort when the engine
    /// was configured out.
    pub fn make_choice(&mut self, choice: StoryChoice) {
        match self.branching.as_mut() {
            Some(branching) => branching.make_choice(choice),
            None => log::warn!("value branching engine not present, ignoring {choice:?}"),
        }
    }

    /// Push notification that a puzzle finished: deactivate it, record
    /// completion, and schedule the next story beat.
    pub fn notify_puzzle_complete(&mut self, kind: PuzzleKind) {
        if self.active_puzzle != Some(kind) {
            log::warn!("completion for puzzle '{}' which is not active", kind.name());
            return;
        }
        if let Some(handle) = self.puzzles.get_mut(&kind) {
            handle.deactivate();
        }
        self.dispatcher.complete_puzzle(kind);
        self.active_puzzle = None;
        self.scheduler
            .schedule(PUZZLE_TRANSITION_DELAY, ScheduledAction::AdvanceSequence);
    }

    /// Push notification that the running cutscene finished; the story
    /// moves on immediately.
    pub fn notify_cutscene_complete(&mut self) {
        self.dispatcher.mark_light_speed_achieved();
        self.run_directives(vec![Directive::AdvanceSequence]);
    }

    /// Skip the current dialogue scene: end-of-scene effects now, no
    /// partial state left behind.
    pub fn skip_dialogue(&mut self) {
        self.script.finish(self.presenter.as_mut());
    }

    /// Skip the running cutscene and apply its completion effects.
    pub fn skip_cutscene(&mut self) {
        if let Some(cutscene) = self.cutscene.as_mut() {
            cutscene.skip();
        }
        self.notify_cutscene_complete();
    }

    /// Host tick: polls the active puzzle (fallback completion path)
    /// and fires any delayed continuations that came due.
    pub fn tick(&mut self, dt: f32) {
        if let Some(kind) = self.active_puzzle {
            let complete = self
                .puzzles
                .get(&kind)
                .map(|handle| handle.is_complete())
                .unwrap_or(false);
            if complete {
                self.notify_puzzle_complete(kind);
            }
        }

        for action in self.scheduler.tick(dt) {
            match action {
                ScheduledAction::StartStory => self.start_story(),
                ScheduledAction::AdvanceSequence => {
                    self.run_directives(vec![Directive::AdvanceSequence])
                }
                ScheduledAction::LoadScene(name) => {
                    self.run_directives(vec![Directive::LoadScene(name)])
                }
            }
        }
    }

    /// Direct sequencer jump by index; invalid indices leave everything
    /// unchanged.
    pub fn load_scene_by_index(&mut self, index: usize) {
        let name = self.sequencer.load_by_index(index).map(str::to_string);
        if let Some(name) = name {
            let directives = self.load_scene_into_script(&name);
            self.run_directives(directives);
        }
    }

    /// Direct sequencer jump by name; unknown names leave everything
    /// unchanged.
    pub fn load_scene_by_name(&mut self, name: &str) {
        let name = self.sequencer.load_by_name(name).map(str::to_string);
        if let Some(name) = name {
            let directives = self.load_scene_into_script(&name);
            self.run_directives(directives);
        }
    }

    /// Save story flags through the persistence collaborator.
    pub fn save_progress(&mut self) {
        match self.flag_store.as_mut() {
            Some(store) => store.save(self.dispatcher.flags()),
            None => log::debug!("no flag store configured, skipping save"),
        }
    }

    /// Restore story flags through the persistence collaborator.
    pub fn restore_progress(&mut self) {
        if let Some(store) = self.flag_store.as_mut() {
            if let Some(flags) = store.load() {
                self.dispatcher.restore_flags(flags);
            }
        }
    }

    pub fn flags(&self) -> &StoryFlags {
        self.dispatcher.flags()
    }

    pub fn current_line(&self) -> Option<&DialogueLine> {
        self.script.current_line()
    }

    pub fn is_dialogue_finished(&self) -> bool {
        self.script.is_finished()
    }

    pub fn current_scene_index(&self) -> usize {
        self.sequencer.current_scene_index()
    }

    pub fn current_scene_name(&self) -> &str {
        self.sequencer.current_scene_name()
    }

    pub fn is_story_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    pub fn story_progress(&self) -> f32 {
        self.sequencer.progress()
    }

    pub fn values(&self) -> Option<&ValuePoints> {
        self.branching.as_ref().map(ValueBranchingEngine::points)
    }

    pub fn location(&self) -> Option<Location> {
        self.branching
            .as_ref()
            .map(ValueBranchingEngine::current_location)
    }

    pub fn active_puzzle(&self) -> Option<PuzzleKind> {
        self.active_puzzle
    }

    /// Drain directives breadth-first. Children inherit depth + 1 so a
    /// script cycle (scene A transitions to scene A) terminates at the
    /// bound instead of spinning.
    fn run_directives(&mut self, initial: Vec<Directive>) {
        let mut queue: VecDeque<(Directive, usize)> =
            initial.into_iter().map(|d| (d, 0)).collect();

        while let Some((directive, depth)) = queue.pop_front() {
            if depth >= MAX_DISPATCH_DEPTH {
                log::error!("dispatch depth limit reached, dropping {directive:?}");
                continue;
            }
            for produced in self.handle_directive(directive) {
                queue.push_back((produced, depth + 1));
            }
        }
    }

    fn handle_directive(&mut self, directive: Directive) -> Vec<Directive> {
        match directive {
            Directive::LoadScene(name) => self.load_scene_into_script(&name),
            Directive::AdvanceSequence => {
                let name = self
                    .sequencer
                    .advance(self.observer.as_mut())
                    .map(str::to_string);
                match name {
                    Some(name) => self.load_scene_into_script(&name),
                    None => Vec::new(),
                }
            }
            Directive::Activate(system) => {
                self.world.activate(system);
                Vec::new()
            }
            Directive::StartPuzzle(kind) => self.start_puzzle(kind),
            Directive::PlayCutscene(kind) => match self.cutscene.as_mut() {
                Some(cutscene) => {
                    cutscene.play(kind);
                    Vec::new()
                }
                None => {
                    log::warn!("no cutscene player, treating {kind:?} as complete");
                    self.dispatcher.mark_light_speed_achieved();
                    vec![Directive::AdvanceSequence]
                }
            },
            Directive::Award(dimension, delta) => {
                match self.branching.as_mut() {
                    Some(branching) => branching.award(dimension, delta),
                    None => log::warn!(
                        "value branching engine not present, dropping award of {delta} {}",
                        dimension.name()
                    ),
                }
                Vec::new()
            }
        }
    }

    fn start_puzzle(&mut self, kind: PuzzleKind) -> Vec<Directive> {
        match self.puzzles.get_mut(&kind) {
            Some(handle) => {
                handle.activate();
                self.active_puzzle = Some(kind);
                Vec::new()
            }
            None => {
                // Missing collaborator: the story must not stall on a
                // puzzle nobody wired up, so it counts as done.
                log::warn!(
                    "puzzle '{}' has no collaborator, treating as complete",
                    kind.name()
                );
                self.dispatcher.complete_puzzle(kind);
                self.scheduler
                    .schedule(PUZZLE_TRANSITION_DELAY, ScheduledAction::AdvanceSequence);
                Vec::new()
            }
        }
    }

    fn load_scene_into_script(&mut self, name: &str) -> Vec<Directive> {
        let path = format!("{SCENE_RESOURCE_PREFIX}{name}");
        match self.source.load_scene(&path) {
            Ok(scene) => {
                log::info!("loading story scene: {name}");
                let trigger = self.script.load(scene, self.presenter.as_mut());
                match trigger {
                    Some(trigger) => {
                        self.dispatcher.dispatch(trigger, self.script.current_line())
                    }
                    None => Vec::new(),
                }
            }
            Err(err) => {
                log::warn!("failed to load scene '{path}': {err}");
                Vec::new()
            }
        }
    }
}

/// Builder for a `StoryDirector`. Every collaborator is optional;
/// omitted ones fall back to inert defaults so a bare director is still
/// safe to drive (useful in tests and headless tools).
pub struct StoryDirectorBuilder {
    scenes: Vec<String>,
    source: Option<Box<dyn SceneSource>>,
    presenter: Option<Box<dyn ScenePresenter>>,
    observer: Option<Box<dyn StoryObserver>>,
    world: Option<Box<dyn WorldGateway>>,
    cutscene: Option<Box<dyn CutscenePlayer>>,
    puzzles: FxHashMap<PuzzleKind, Box<dyn PuzzleHandle>>,
    flag_store: Option<Box<dyn FlagStore>>,
    with_branching: bool,
    auto_start_delay: Option<f32>,
}

impl Default for StoryDirectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryDirectorBuilder {
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            source: None,
            presenter: None,
            observer: None,
            world: None,
            cutscene: None,
            puzzles: FxHashMap::default(),
            flag_store: None,
            with_branching: true,
            auto_start_delay: None,
        }
    }

    /// Override the story scene order (defaults to the shipped list).
    pub fn scenes<I, S>(mut self, scenes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scenes = scenes.into_iter().map(Into::into).collect();
        self
    }

    pub fn scene_source(mut self, source: impl SceneSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn presenter(mut self, presenter: impl ScenePresenter + 'static) -> Self {
        self.presenter = Some(Box::new(presenter));
        self
    }

    pub fn observer(mut self, observer: impl StoryObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn world(mut self, world: impl WorldGateway + 'static) -> Self {
        self.world = Some(Box::new(world));
        self
    }

    pub fn cutscene_player(mut self, player: impl CutscenePlayer + 'static) -> Self {
        self.cutscene = Some(Box::new(player));
        self
    }

    pub fn puzzle(mut self, kind: PuzzleKind, handle: impl PuzzleHandle + 'static) -> Self {
        self.puzzles.insert(kind, Box::new(handle));
        self
    }

    pub fn flag_store(mut self, store: impl FlagStore + 'static) -> Self {
        self.flag_store = Some(Box::new(store));
        self
    }

    /// Drop the value-branching engine entirely (the dispatcher then
    /// logs and continues on award triggers).
    pub fn without_branching(mut self) -> Self {
        self.with_branching = false;
        self
    }

    /// Auto-start the first scene this many time-units after `build`,
    /// counted in `tick` time.
    pub fn auto_start_delay(mut self, delay: f32) -> Self {
        self.auto_start_delay = Some(delay);
        self
    }

    pub fn build(self) -> StoryDirector {
        let sequencer = if self.scenes.is_empty() {
            StorySequencer::default()
        } else {
            StorySequencer::new(self.scenes)
        };

        let mut scheduler = Scheduler::new();
        if let Some(delay) = self.auto_start_delay {
            scheduler.schedule(delay, ScheduledAction::StartStory);
        }

        StoryDirector {
            script: ScriptEngine::new(),
            dispatcher: TriggerDispatcher::new(),
            sequencer,
            branching: self.with_branching.then(ValueBranchingEngine::new),
            scheduler,
            source: self
                .source
                .unwrap_or_else(|| Box::new(MemorySceneSource::new())),
            presenter: self.presenter.unwrap_or_else(|| Box::new(NullPresenter)),
            observer: self.observer.unwrap_or_else(|| Box::new(NullObserver)),
            world: self.world.unwrap_or_else(|| Box::new(NullWorld)),
            cutscene: self.cutscene,
            puzzles: self.puzzles,
            flag_store: self.flag_store,
            active_puzzle: None,
        }
    }
}
