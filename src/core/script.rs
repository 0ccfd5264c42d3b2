/// Script engine — dialogue cursor, label index, and line playback.
use rustc_hash::FxHashMap;

use crate::schema::line::{DialogueLine, DialogueScene};
use crate::schema::trigger::StoryTrigger;

/// Presentation collaborator. The engine hands lines over and never
/// waits on whatever animation the host runs; both calls are
/// fire-and-forget.
pub trait ScenePresenter {
    fn show_line(&mut self, line: &DialogueLine);
    fn hide(&mut self);
}

/// Inert presenter used when the host supplies none.
#[derive(Debug, Default)]
pub struct NullPresenter;

impl ScenePresenter for NullPresenter {
    fn show_line(&mut self, _line: &DialogueLine) {}
    fn hide(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Unloaded,
    At(usize),
    Finished,
}

/// Holds one loaded dialogue scene and a cursor over its lines.
///
/// Each of `load`/`advance`/`select_choice` makes exactly one
/// presentation call (show or hide) and returns at most one trigger for
/// the caller to dispatch; nothing is retried.
pub struct ScriptEngine {
    scene: Option<DialogueScene>,
    cursor: Cursor,
    labels: FxHashMap<String, usize>,
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptEngine {
    pub fn new() -> Self {
        Self {
            scene: None,
            cursor: Cursor::Unloaded,
            labels: FxHashMap::default(),
        }
    }

    /// Replace the held scene, rebuild the label index, and play line 0.
    ///
    /// Trigger names are validated against the closed vocabulary here so
    /// script typos surface at load instead of as dead lines mid-play.
    /// An empty scene goes straight to the finished state.
    pub fn load(
        &mut self,
        scene: DialogueScene,
        presenter: &mut dyn ScenePresenter,
    ) -> Option<StoryTrigger> {
        self.labels.clear();
        for (index, line) in scene.lines.iter().enumerate() {
            if let Some(trigger) = line.trigger.as_deref() {
                if StoryTrigger::parse(trigger).is_none() {
                    log::warn!("line {index}: unknown trigger '{trigger}'");
                }
            }
            if let Some(id) = line.id.as_deref() {
                if self.labels.insert(id.to_string(), index).is_some() {
                    log::warn!("duplicate line id '{id}', keeping line {index}");
                }
            }
        }

        if scene.is_empty() {
            self.scene = Some(scene);
            self.cursor = Cursor::Finished;
            presenter.hide();
            return None;
        }

        self.scene = Some(scene);
        self.cursor = Cursor::At(0);
        self.play_current(presenter)
    }

    /// Step to the next line; past the last line the engine transitions
    /// to finished, hides the presentation, and dispatches nothing.
    pub fn advance(&mut self, presenter: &mut dyn ScenePresenter) -> Option<StoryTrigger> {
        match self.cursor {
            Cursor::Unloaded => {
                log::warn!("advance called with no scene loaded");
                None
            }
            Cursor::Finished => None,
            Cursor::At(index) => {
                let len = self.scene.as_ref().map_or(0, DialogueScene::len);
                if index + 1 < len {
                    self.cursor = Cursor::At(index + 1);
                    self.play_current(presenter)
                } else {
                    self.cursor = Cursor::Finished;
                    presenter.hide();
                    None
                }
            }
        }
    }

    /// Jump to the line labelled `next_line_id` and play it. An unknown
    /// id warns and falls back to an ordinary `advance`; the fallback is
    /// part of the contract, not a swallowed error.
    pub fn select_choice(
        &mut self,
        next_line_id: &str,
        presenter: &mut dyn ScenePresenter,
    ) -> Option<StoryTrigger> {
        match self.labels.get(next_line_id) {
            Some(&index) => {
                self.cursor = Cursor::At(index);
                self.play_current(presenter)
            }
            None => {
                log::warn!("line id '{next_line_id}' not found, advancing instead");
                self.advance(presenter)
            }
        }
    }

    /// The line under the cursor, or `None` when unloaded or finished.
    pub fn current_line(&self) -> Option<&DialogueLine> {
        match self.cursor {
            Cursor::At(index) => self.scene.as_ref().and_then(|s| s.lines.get(index)),
            _ => None,
        }
    }

    /// Skip straight to the end-of-scene state: cursor finished,
    /// presentation hidden, no trigger dispatch. No-op when there is
    /// nothing to skip.
    pub fn finish(&mut self, presenter: &mut dyn ScenePresenter) {
        if let Cursor::At(_) = self.cursor {
            self.cursor = Cursor::Finished;
            presenter.hide();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == Cursor::Finished
    }

    fn play_current(&mut self, presenter: &mut dyn ScenePresenter) -> Option<StoryTrigger> {
        let Cursor::At(index) = self.cursor else {
            return None;
        };
        let line = self.scene.as_ref().and_then(|s| s.lines.get(index))?;
        presenter.show_line(line);

        let name = line.trigger.as_deref()?;
        let parsed = StoryTrigger::parse(name);
        if parsed.is_none() {
            log::warn!("line {index}: skipping unknown trigger '{name}'");
        }
        parsed
    }
}
