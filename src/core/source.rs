/// Scene providers — where dialogue scenes come from.
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::schema::line::DialogueScene;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("scene not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Resource-loading collaborator. The core only constructs resource
/// paths (`StoryRoutes/<scene>`); resolution is the source's business.
pub trait SceneSource {
    fn load_scene(&self, path: &str) -> Result<DialogueScene, SourceError>;
}

/// Loads scenes from a directory tree of RON files, `<root>/<path>.ron`.
pub struct RonSceneSource {
    root: PathBuf,
}

impl RonSceneSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Parse a scene from RON text.
    pub fn parse_ron(input: &str) -> Result<DialogueScene, SourceError> {
        Ok(ron::from_str(input)?)
    }
}

impl SceneSource for RonSceneSource {
    fn load_scene(&self, path: &str) -> Result<DialogueScene, SourceError> {
        let file = self.root.join(format!("{path}.ron"));
        if !file.exists() {
            return Err(SourceError::NotFound(path.to_string()));
        }
        let contents = std::fs::read_to_string(&file)?;
        Self::parse_ron(&contents)
    }
}

/// In-memory scene registry, for tests and embedded scripts.
#[derive(Default)]
pub struct MemorySceneSource {
    scenes: FxHashMap<String, DialogueScene>,
}

impl MemorySceneSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, scene: DialogueScene) {
        self.scenes.insert(path.into(), scene);
    }

    pub fn with_scene(mut self, path: impl Into<String>, scene: DialogueScene) -> Self {
        self.insert(path, scene);
        self
    }
}

impl SceneSource for MemorySceneSource {
    fn load_scene(&self, path: &str) -> Result<DialogueScene, SourceError> {
        self.scenes
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }
}
