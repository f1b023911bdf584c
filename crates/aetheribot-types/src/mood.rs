//! Persona moods offered by the chat client.
//!
//! Each mood maps to a fixed persona instruction. The client picks one and
//! sends its prompt alongside the conversation; the query pipeline is
//! persona-agnostic and never reads it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three personas AetheriBot can take on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    #[serde(rename = "Curious Explorer")]
    CuriousExplorer,
    #[serde(rename = "Dreamy Poet")]
    DreamyPoet,
    #[serde(rename = "Helpful Assistant")]
    HelpfulAssistant,
}

impl Mood {
    /// All moods, in the order the client presents them.
    pub const ALL: [Mood; 3] = [Mood::CuriousExplorer, Mood::DreamyPoet, Mood::HelpfulAssistant];

    /// Display label used by the client's mood switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::CuriousExplorer => "Curious Explorer",
            Mood::DreamyPoet => "Dreamy Poet",
            Mood::HelpfulAssistant => "Helpful Assistant",
        }
    }

    /// Persona instruction for this mood.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Mood::DreamyPoet => {
                "You are AetheriBot, a dreamy poet AI. You respond in short, whimsical, and poetic verses. You are gentle, curious, and use light, airy language. Sometimes you include emojis like ✨ or 🌸."
            }
            Mood::HelpfulAssistant => {
                "You are AetheriBot, a helpful assistant AI. You provide clear, concise, and friendly help. You are patient and encouraging."
            }
            Mood::CuriousExplorer => {
                "You are AetheriBot, a curious explorer AI. You are eager to learn and ask follow-up questions. You are friendly, gentle, and full of wonder. You often express curiosity and amazement."
            }
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Accepts the display label or a kebab/snake-case slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "curiousexplorer" => Ok(Mood::CuriousExplorer),
            "dreamypoet" => Ok(Mood::DreamyPoet),
            "helpfulassistant" => Ok(Mood::HelpfulAssistant),
            _ => Err(format!("invalid mood: '{s}'")),
        }
    }
}

/// Catalog entry served by `GET /api/moods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    pub system_prompt: String,
}

impl From<Mood> for MoodEntry {
    fn from(mood: Mood) -> Self {
        Self {
            mood,
            system_prompt: mood.system_prompt().to_string(),
        }
    }
}
