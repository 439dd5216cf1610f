use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-client display behaviour requested by a structured launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[serde(alias = "+")]
    Full,
    #[serde(alias = "^")]
    Float,
    #[serde(alias = "*")]
    Stick,
    #[serde(alias = "=")]
    Zaphod,
}

impl Mode {
    pub const SIGILS: [char; 4] = ['+', '^', '*', '='];

    pub fn from_sigil(sigil: char) -> Option<Mode> {
        match sigil {
            '+' => Some(Mode::Full),
            '^' => Some(Mode::Float),
            '*' => Some(Mode::Stick),
            '=' => Some(Mode::Zaphod),
            _ => None,
        }
    }

    pub fn sigil(self) -> char {
        match self {
            Mode::Full => '+',
            Mode::Float => '^',
            Mode::Stick => '*',
            Mode::Zaphod => '=',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Full => "full",
            Mode::Float => "float",
            Mode::Stick => "stick",
            Mode::Zaphod => "zaphod",
        }
    }

    pub fn is_sigil(ch: char) -> bool {
        Self::SIGILS.contains(&ch)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// App, tags, views and modes collected from the structured launch syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredLaunch {
    pub app: String,
    /// Tag names in order of first appearance.
    pub tags: Vec<String>,
    /// View names in order of first appearance.
    pub views: Vec<String>,
    pub modes: Vec<Mode>,
}

impl StructuredLaunch {
    /// Launch of a literal application name with no tags, views or modes.
    pub fn app(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            ..Self::default()
        }
    }

    pub(crate) fn push_tag(&mut self, name: &str) {
        push_unique(&mut self.tags, name);
    }

    pub(crate) fn push_view(&mut self, name: &str) {
        push_unique(&mut self.views, name);
    }

    pub(crate) fn push_word(&mut self, word: &str) {
        if !self.app.is_empty() {
            self.app.push(' ');
        }
        self.app.push_str(word);
    }

    pub fn is_empty(&self) -> bool {
        self.app.is_empty()
            && self.tags.is_empty()
            && self.views.is_empty()
            && self.modes.is_empty()
    }

    /// A view without any tag would never show the client, so such launches
    /// need a placeholder tag.
    pub fn needs_placeholder_tag(&self) -> bool {
        !self.views.is_empty() && !self.app.is_empty() && self.tags.is_empty()
    }
}

fn push_unique(items: &mut Vec<String>, name: &str) {
    if !items.iter().any(|item| item == name) {
        items.push(name.to_string());
    }
}

/// Result of classifying a raw command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Empty or whitespace-only input.
    Empty,
    Shell { text: String },
    Uri { url: String },
    Launch(StructuredLaunch),
    /// Reference to a saved command by name.
    MethodRef { name: String },
}

impl ParsedCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedCommand::Empty => "empty",
            ParsedCommand::Shell { .. } => "shell",
            ParsedCommand::Uri { .. } => "uri",
            ParsedCommand::Launch(_) => "launch",
            ParsedCommand::MethodRef { .. } => "method_ref",
        }
    }

    /// The single-line form stored in a saved command's `command` field.
    pub fn command_line(&self, raw: &str) -> String {
        match self {
            ParsedCommand::Shell { text } => text.clone(),
            ParsedCommand::Uri { url } => url.clone(),
            ParsedCommand::MethodRef { name } => format!(":{name}"),
            ParsedCommand::Empty | ParsedCommand::Launch(_) => raw.to_string(),
        }
    }
}
