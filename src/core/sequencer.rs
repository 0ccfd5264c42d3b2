/// Story sequencer — a fixed, ordered list of named scenes and the
/// cursor that walks it.

/// Lifecycle notifications for the host. All methods default to no-ops
/// so observers implement only what they care about.
pub trait StoryObserver {
    fn on_story_start(&mut self) {}
    fn on_scene_transition(&mut self) {}
    fn on_story_complete(&mut self) {}
}

/// Inert observer used when the host supplies none.
#[derive(Debug, Default)]
pub struct NullObserver;

impl StoryObserver for NullObserver {}

/// The scene order of the main story, as shipped.
pub const DEFAULT_STORY_SCENES: [&str; 8] = [
    "01_city_streets_discovery",
    "02_workshop_investigation",
    "03_sled_ascension",
    "04_faster_than_light",
    "05_puzzle_transition",
    "06_memory_puzzle_complete",
    "07_power_flow_complete",
    "08_puzzle_victory",
];

/// Walks a fixed scene list. The index is always in `0..len`; reaching
/// the last index means the story is complete and no further scene is
/// ever returned for loading.
pub struct StorySequencer {
    scenes: Vec<String>,
    current_index: usize,
}

impl Default for StorySequencer {
    fn default() -> Self {
        Self::new(DEFAULT_STORY_SCENES.iter().map(|s| s.to_string()).collect())
    }
}

impl StorySequencer {
    /// An empty list gets one placeholder scene so the index invariant
    /// holds unconditionally.
    pub fn new(scenes: Vec<String>) -> Self {
        let scenes = if scenes.is_empty() {
            log::warn!("sequencer built with an empty scene list");
            vec![String::new()]
        } else {
            scenes
        };
        Self {
            scenes,
            current_index: 0,
        }
    }

    /// Reset to the first scene. Returns the scene name to load.
    pub fn start_story(&mut self, observer: &mut dyn StoryObserver) -> Option<&str> {
        self.current_index = 0;
        observer.on_story_start();
        Some(self.scenes[self.current_index].as_str())
    }

    /// Step to the next scene and return its name, or fire completion
    /// and return `None` when already at the last scene. Repeat calls at
    /// the end re-fire completion but never load anything.
    pub fn advance(&mut self, observer: &mut dyn StoryObserver) -> Option<&str> {
        if self.current_index < self.scenes.len() - 1 {
            self.current_index += 1;
            observer.on_scene_transition();
            Some(self.scenes[self.current_index].as_str())
        } else {
            log::info!("story sequence complete");
            observer.on_story_complete();
            None
        }
    }

    /// Direct jump by index. Out-of-range input warns and leaves the
    /// sequencer untouched.
    pub fn load_by_index(&mut self, index: usize) -> Option<&str> {
        if index < self.scenes.len() {
            self.current_index = index;
            Some(self.scenes[self.current_index].as_str())
        } else {
            log::warn!("invalid scene index: {index}");
            None
        }
    }

    /// Direct jump by scene name. Unknown names warn and leave the
    /// sequencer untouched.
    pub fn load_by_name(&mut self, name: &str) -> Option<&str> {
        match self.scenes.iter().position(|scene| scene == name) {
            Some(index) => {
                self.current_index = index;
                Some(self.scenes[self.current_index].as_str())
            }
            None => {
                log::warn!("scene not found in story sequence: {name}");
                None
            }
        }
    }

    pub fn current_scene_index(&self) -> usize {
        self.current_index
    }

    pub fn current_scene_name(&self) -> &str {
        &self.scenes[self.current_index]
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.scenes.len() - 1
    }

    /// Progress through the list as a 0..1 fraction. A single-scene
    /// list is complete at its only scene, so it reports 1.0 (this also
    /// keeps the division well-defined).
    pub fn progress(&self) -> f32 {
        if self.scenes.len() <= 1 {
            return 1.0;
        }
        self.current_index as f32 / (self.scenes.len() - 1) as f32
    }
}
