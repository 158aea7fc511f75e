//! Shotstack timeline model, builder, and submit-side validation.
//!
//! The renderer consumes a declarative document: a timeline of tracks,
//! each an ordered sequence of timed clips, plus an output descriptor.
//! [`build_render_payload`] assembles that document from selected
//! screenshots and audio settings; [`validate_render_payload`] rejects
//! documents the remote API would bounce, before any network call.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Seconds each screenshot is shown in the visual track.
pub const IMAGE_CLIP_SECS: f64 = 3.0;

/// Shotstack's character limit for a text-to-speech clip.
pub const MAX_TTS_LENGTH: usize = 3000;

/// Timeline background when no theme color is available.
pub const DEFAULT_BACKGROUND: &str = "#000000";

/// Output container format (fixed).
pub const OUTPUT_FORMAT: &str = "mp4";

/// Output resolution preset (fixed; aspect ratio is left at the
/// renderer's 16:9 default).
pub const OUTPUT_RESOLUTION: &str = "hd";

/// Voice names accepted by Shotstack's built-in text-to-speech.
pub const SHOTSTACK_VOICES: [&str; 13] = [
    "Joanna", "Kendra", "Kimberly", "Ivy", "Salli", // female en-US
    "Matthew", "Joey", "Justin", // male en-US
    "Amy", "Emma", "Brian", // en-GB
    "Nicole", "Russell", // en-AU
];

/// Built-in background music presets, keyed by selection name.
pub const MUSIC_LIBRARY: [(&str, &str); 3] = [
    (
        "upbeat-1",
        "https://cdn.pixabay.com/audio/2022/05/27/audio_1808fbf07a.mp3",
    ),
    (
        "calm-1",
        "https://cdn.pixabay.com/audio/2022/03/10/audio_5c2e788c03.mp3",
    ),
    (
        "energetic-1",
        "https://cdn.pixabay.com/audio/2022/08/02/audio_2dde668d05.mp3",
    ),
];

// ---------------------------------------------------------------------------
// Timeline document
// ---------------------------------------------------------------------------

/// A clip's asset, tagged by type.
///
/// The three shapes are mutually exclusive: a clip is an image, an
/// audio file, or a rendered text-to-speech utterance, never a mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClipAsset {
    Image {
        src: String,
    },
    Audio {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        volume: Option<f64>,
    },
    TextToSpeech {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        voice: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

/// Clip duration: a fixed number of seconds, or `"auto"` to let the
/// renderer derive the length from the asset's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipLength {
    Seconds(f64),
    Auto,
}

impl Serialize for ClipLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ClipLength::Seconds(secs) => serializer.serialize_f64(*secs),
            ClipLength::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for ClipLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Seconds(f64),
            Sentinel(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Seconds(secs) => Ok(ClipLength::Seconds(secs)),
            Repr::Sentinel(s) if s == "auto" => Ok(ClipLength::Auto),
            Repr::Sentinel(s) => Err(D::Error::custom(format!(
                "invalid clip length {s:?}, expected a number or \"auto\""
            ))),
        }
    }
}

/// One timed asset placement on a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    pub asset: ClipAsset,
    /// Offset from the start of the timeline, in seconds.
    pub start: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<ClipLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

/// An ordered sequence of clips sharing a timeline layer. The builder
/// never emits overlapping clips within one track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub clips: Vec<Clip>,
}

/// The timeline: background color plus layered tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub tracks: Vec<Track>,
}

/// Output descriptor for the rendered video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub format: String,
    pub resolution: String,
}

/// The full document submitted to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPayload {
    pub timeline: Timeline,
    pub output: Output,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Voiceover and music settings for one render.
///
/// Volumes are whole percentages (0..=100) as presented in the UI; the
/// builder converts them to the renderer's 0.0..=1.0 scale.
#[derive(Debug, Clone, Default)]
pub struct AudioOptions {
    pub enable_voiceover: bool,
    pub voiceover_script: String,
    /// Shotstack TTS voice name, e.g. `Joanna`.
    pub voiceover_voice: Option<String>,
    pub voiceover_volume: u8,
    pub enable_music: bool,
    /// Music preset key from [`MUSIC_LIBRARY`], or `custom`.
    pub selected_music: Option<String>,
    /// User-supplied music URL, used when `selected_music` is `custom`.
    pub custom_music_url: Option<String>,
    pub music_volume: u8,
}

impl AudioOptions {
    /// Resolve the music selection to a source URL, if any.
    ///
    /// `custom` resolves to the user-supplied URL; any other key is
    /// looked up in [`MUSIC_LIBRARY`].
    pub fn music_src(&self) -> Option<String> {
        let selected = self.selected_music.as_deref()?;
        if selected == "custom" {
            return self.custom_music_url.clone();
        }
        MUSIC_LIBRARY
            .iter()
            .find(|(key, _)| *key == selected)
            .map(|(_, url)| url.to_string())
    }
}

/// Build the render document for an ordered list of screenshot URLs.
///
/// The visual track shows each image for [`IMAGE_CLIP_SECS`] seconds
/// with a cover fit and zoom-in effect. Voiceover and music tracks, if
/// enabled, each hold a single clip spanning the full visual duration.
/// An unresolvable music selection is logged and dropped rather than
/// failing the build.
pub fn build_render_payload(
    images: &[String],
    theme_color: Option<&str>,
    audio: &AudioOptions,
) -> Result<RenderPayload, CoreError> {
    if images.is_empty() {
        return Err(CoreError::Validation(
            "At least one screenshot is required".to_string(),
        ));
    }
    if images.len() > 10 {
        return Err(CoreError::Validation(format!(
            "At most 10 screenshots are allowed (got {})",
            images.len()
        )));
    }

    let clips: Vec<Clip> = images
        .iter()
        .enumerate()
        .map(|(idx, src)| Clip {
            asset: ClipAsset::Image { src: src.clone() },
            start: idx as f64 * IMAGE_CLIP_SECS,
            length: Some(ClipLength::Seconds(IMAGE_CLIP_SECS)),
            volume: None,
            fit: Some("cover".to_string()),
            effect: Some("zoomIn".to_string()),
        })
        .collect();

    let duration = clips.len() as f64 * IMAGE_CLIP_SECS;
    let mut tracks = vec![Track { clips }];

    if audio.enable_voiceover && !audio.voiceover_script.trim().is_empty() {
        tracks.push(Track {
            clips: vec![Clip {
                asset: ClipAsset::TextToSpeech {
                    text: audio.voiceover_script.clone(),
                    voice: audio.voiceover_voice.clone(),
                    language: Some("en-US".to_string()),
                },
                start: 0.0,
                length: Some(ClipLength::Seconds(duration)),
                volume: Some(f64::from(audio.voiceover_volume) / 100.0),
                fit: None,
                effect: None,
            }],
        });
    }

    if audio.enable_music {
        match audio.music_src() {
            Some(src) => tracks.push(Track {
                clips: vec![Clip {
                    asset: ClipAsset::Audio { src, volume: None },
                    start: 0.0,
                    length: Some(ClipLength::Seconds(duration)),
                    volume: Some(f64::from(audio.music_volume) / 100.0),
                    fit: None,
                    effect: None,
                }],
            }),
            None => {
                tracing::warn!(
                    selected = ?audio.selected_music,
                    "Music enabled but no source resolved, dropping music track",
                );
            }
        }
    }

    Ok(RenderPayload {
        timeline: Timeline {
            background: Some(
                theme_color
                    .filter(|c| !c.is_empty())
                    .unwrap_or(DEFAULT_BACKGROUND)
                    .to_string(),
            ),
            tracks,
        },
        output: Output {
            format: OUTPUT_FORMAT.to_string(),
            resolution: OUTPUT_RESOLUTION.to_string(),
        },
    })
}

// ---------------------------------------------------------------------------
// Submit-side validation
// ---------------------------------------------------------------------------

/// Validate every clip asset in a payload before submission.
///
/// Checks the constraints the remote API enforces on audio-bearing
/// clips so obviously broken payloads are rejected client-side:
///
/// - text-to-speech: non-empty trimmed text, at most [`MAX_TTS_LENGTH`]
///   characters, voice (if given) in [`SHOTSTACK_VOICES`];
/// - audio: non-empty `src` that parses as a well-formed URL.
pub fn validate_render_payload(payload: &RenderPayload) -> Result<(), CoreError> {
    for track in &payload.timeline.tracks {
        for clip in &track.clips {
            match &clip.asset {
                ClipAsset::TextToSpeech { text, voice, .. } => {
                    if text.trim().is_empty() {
                        return Err(CoreError::Validation(
                            "TTS text cannot be empty".to_string(),
                        ));
                    }
                    let len = text.chars().count();
                    if len > MAX_TTS_LENGTH {
                        return Err(CoreError::Validation(format!(
                            "TTS text exceeds {MAX_TTS_LENGTH} character limit (current: {len} characters)"
                        )));
                    }
                    if let Some(voice) = voice {
                        if !SHOTSTACK_VOICES.contains(&voice.as_str()) {
                            return Err(CoreError::Validation(format!(
                                "Invalid voice \"{voice}\". Valid voices: {}",
                                SHOTSTACK_VOICES.join(", ")
                            )));
                        }
                    }
                }
                ClipAsset::Audio { src, .. } => {
                    if src.trim().is_empty() {
                        return Err(CoreError::Validation(
                            "Audio source URL cannot be empty".to_string(),
                        ));
                    }
                    if url::Url::parse(src).is_err() {
                        return Err(CoreError::Validation(format!("Invalid audio URL: {src}")));
                    }
                }
                ClipAsset::Image { .. } => {}
            }
        }
    }
    Ok(())
}
