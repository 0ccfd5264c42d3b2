use serde::{Deserialize, Serialize};

/// A single selectable choice attached to a dialogue line.
///
/// `next` names the `id` of the line the script jumps to when the
/// player picks this option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueOption {
    pub choice: String,
    pub next: String,
}

/// One step of a dialogue script.
///
/// Every field is optional in the data file: plain narration lines carry
/// only `text`, labelled jump targets add `id`, and lines that drive the
/// wider game add `trigger` or `next_scene`. Lines are immutable once a
/// scene is loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Jump label, referenced by `DialogueOption::next`.
    #[serde(default)]
    pub id: Option<String>,
    /// Symbolic trigger fired when this line is displayed.
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub options: Vec<DialogueOption>,
    /// Target scene for the `scene_transition` trigger.
    #[serde(default)]
    pub next_scene: Option<String>,
}

impl DialogueLine {
    /// A bare narration line with only text. Mostly a test convenience.
    pub fn narration(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// Returns true if this line offers player choices.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// An ordered dialogue scene. Owned exclusively by the script engine
/// while loaded and replaced wholesale on each load, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueScene {
    pub lines: Vec<DialogueLine>,
}

impl DialogueScene {
    pub fn new(lines: Vec<DialogueLine>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
