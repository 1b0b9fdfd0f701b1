//! Voice catalog by language
//!
//! Maps each supported language to its default voice, the named voices a
//! client may pick from, and the synthesis model to use. Voice ids are real
//! ElevenLabs catalog ids, not display names.

/// Synthesis options for one language
#[derive(Debug)]
pub struct VoiceConfig {
    /// Voice id used when the request names none
    pub default_voice: &'static str,
    /// Display name to voice id
    pub available: &'static [(&'static str, &'static str)],
    /// Synthesis model id
    pub model: &'static str,
}

/// Languages with a voice configuration, in listing order
pub const LANGUAGES: [&str; 4] = ["en", "es", "de", "ru"];

static EN: VoiceConfig = VoiceConfig {
    default_voice: "21m00Tcm4TlvDq8ikWAM", // Rachel
    available: &[
        ("Rachel", "21m00Tcm4TlvDq8ikWAM"),
        ("Drew", "29vD33N1CtxCmqQRPOHJ"),
        ("Clyde", "2EiwWnXFnvU5JabPnv8n"),
        ("Paul", "5Q0t7uMcjvnagumLfvZi"),
        ("Domi", "AZnzlk1XvdvUeBnXmlld"),
    ],
    model: "eleven_turbo_v2",
};

static ES: VoiceConfig = VoiceConfig {
    default_voice: "XrExE9yKIg1WjnnlVkGX", // Laura
    available: &[("Laura", "XrExE9yKIg1WjnnlVkGX")],
    model: "eleven_multilingual_v2",
};

static DE: VoiceConfig = VoiceConfig {
    default_voice: "ErXwobaYiN019PkySvjV", // Antoni, multilingual
    available: &[("Antoni", "ErXwobaYiN019PkySvjV")],
    model: "eleven_multilingual_v2",
};

static RU: VoiceConfig = VoiceConfig {
    default_voice: "ErXwobaYiN019PkySvjV", // Antoni, multilingual
    available: &[("Antoni", "ErXwobaYiN019PkySvjV")],
    model: "eleven_multilingual_v2",
};

/// Voice configuration for a language; unknown languages fall back to English.
pub fn voice_config(language: &str) -> &'static VoiceConfig {
    match language {
        "es" => &ES,
        "de" => &DE,
        "ru" => &RU,
        _ => &EN,
    }
}

/// Resolve the voice id to synthesize with.
///
/// No request → the language default; a known display name → its id; anything
/// else is assumed to already be a valid voice id and passed through.
pub fn resolve_voice_id<'a>(config: &'a VoiceConfig, requested: Option<&'a str>) -> &'a str {
    match requested {
        None => config.default_voice,
        Some(name) => config
            .available
            .iter()
            .find(|(display, _)| *display == name)
            .map(|(_, id)| *id)
            .unwrap_or(name),
    }
}
