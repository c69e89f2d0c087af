use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Voices offered by the realtime speech backend. The wire value is the
/// bare voice name (e.g. `"Puck"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Voice {
    Zephyr,
    Puck,
    Charon,
    Kore,
    Fenrir,
    Leda,
    Orus,
    Aoede,
}

pub const AVAILABLE_VOICES: [Voice; 8] = [
    Voice::Zephyr,
    Voice::Puck,
    Voice::Charon,
    Voice::Kore,
    Voice::Fenrir,
    Voice::Leda,
    Voice::Orus,
    Voice::Aoede,
];

impl Voice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Zephyr => "Zephyr",
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Kore => "Kore",
            Voice::Fenrir => "Fenrir",
            Voice::Leda => "Leda",
            Voice::Orus => "Orus",
            Voice::Aoede => "Aoede",
        }
    }

    /// Friendly label shown in the voice picker.
    pub fn label(&self) -> &'static str {
        match self {
            Voice::Zephyr => "Zephyr (Bright)",
            Voice::Puck => "Puck (Upbeat)",
            Voice::Charon => "Charon (Informative)",
            Voice::Kore => "Kore (Firm)",
            Voice::Fenrir => "Fenrir (Excitable)",
            Voice::Leda => "Leda (Youthful)",
            Voice::Orus => "Orus (Warm)",
            Voice::Aoede => "Aoede (Breezy)",
        }
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::Puck
    }
}

/// Persona configuration edited on the Persona tab.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonaConfig {
    pub persona_name: String,
    pub system_prompt: String,
    pub voice: Voice,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            persona_name: "Aria".to_string(),
            system_prompt: "You are a helpful, friendly voice assistant.".to_string(),
            voice: Voice::default(),
        }
    }
}
