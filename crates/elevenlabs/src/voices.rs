//! Preset ElevenLabs voice catalog.
//!
//! The free-tier premade voices, keyed by a short lowercase name. The
//! provider voice ids are stable, provider-assigned identifiers.

use serde::Serialize;

/// Character limit for one text-to-speech request.
pub const MAX_TTS_TEXT_LENGTH: usize = 5000;

/// One preset voice.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Voice {
    /// Provider-assigned voice id.
    pub id: &'static str,
    /// Short lowercase catalog key.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    pub gender: &'static str,
    pub accent: &'static str,
    pub description: &'static str,
}

/// The built-in voice table, in catalog order.
pub const VOICES: [Voice; 9] = [
    Voice {
        id: "21m00Tcm4TlvDq8ikWAM",
        key: "rachel",
        name: "Rachel",
        gender: "female",
        accent: "American",
        description: "Calm, clear, and professional",
    },
    Voice {
        id: "AZnzlk1XvdvUeBnXmlld",
        key: "domi",
        name: "Domi",
        gender: "female",
        accent: "American",
        description: "Strong, confident, and authoritative",
    },
    Voice {
        id: "EXAVITQu4vr4xnSDxMaL",
        key: "bella",
        name: "Bella",
        gender: "female",
        accent: "American",
        description: "Soft, gentle, and soothing",
    },
    Voice {
        id: "ErXwobaYiN019PkySvjV",
        key: "antoni",
        name: "Antoni",
        gender: "male",
        accent: "American",
        description: "Well-rounded, warm, and friendly",
    },
    Voice {
        id: "MF3mGyEYCl7XYWbV9V6O",
        key: "elli",
        name: "Elli",
        gender: "female",
        accent: "American",
        description: "Energetic, young, and expressive",
    },
    Voice {
        id: "TxGEqnHWrfWFTfGW9XjX",
        key: "josh",
        name: "Josh",
        gender: "male",
        accent: "American",
        description: "Deep, authoritative, and confident",
    },
    Voice {
        id: "VR6AewLTigWG4xSOukaG",
        key: "arnold",
        name: "Arnold",
        gender: "male",
        accent: "American",
        description: "Crisp, clear, and professional",
    },
    Voice {
        id: "pNInz6obpgDQGcFmaJgB",
        key: "adam",
        name: "Adam",
        gender: "male",
        accent: "American",
        description: "Deep, resonant, and engaging",
    },
    Voice {
        id: "yoZ06aMxZJJ28mfd3POQ",
        key: "sam",
        name: "Sam",
        gender: "male",
        accent: "American",
        description: "Dynamic, raspy, and expressive",
    },
];

/// Look up a voice by its provider-assigned id.
pub fn find_voice(voice_id: &str) -> Option<&'static Voice> {
    VOICES.iter().find(|v| v.id == voice_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_voice_ids_resolve() {
        let rachel = find_voice("21m00Tcm4TlvDq8ikWAM").unwrap();
        assert_eq!(rachel.name, "Rachel");
        assert!(find_voice("nope").is_none());
    }

    #[test]
    fn catalog_keys_are_unique() {
        for (i, a) in VOICES.iter().enumerate() {
            for b in &VOICES[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.id, b.id);
            }
        }
    }
}
