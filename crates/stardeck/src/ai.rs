//! Adapter around the hosted text-generation endpoint used by the Demo slide.
//!
//! Every failure path resolves to a display string; callers never see an
//! error and never need to catch a panic. Single-in-flight is the caller's
//! job (the Demo session blocks re-entry while a request is outstanding).

use anyhow::{Context, Result};
use log::warn;

/// Shown in place of output when no credential is configured. No network
/// call is attempted in that case.
pub const NO_KEY_MESSAGE: &str =
    "Error: no API key configured. Run `stardeck ai init` or set GEMINI_API_KEY.";

/// Shown when the request fails for any reason (network, auth, quota).
pub const OFFLINE_MESSAGE: &str = "AI system offline (check API key)";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Generate a viral hook for the given video context.
///
/// Resolves to display text in all cases: the model's reply, the missing-key
/// message, or the offline fallback. Issues at most one request.
pub fn generate_hook(api_key: Option<&str>, model: &str, context: &str) -> String {
    let Some(key) = api_key.filter(|k| !k.is_empty()) else {
        return NO_KEY_MESSAGE.to_string();
    };

    match request_hook(key, model, context) {
        Ok(text) => text,
        Err(e) => {
            warn!("hook generation failed: {e:#}");
            OFFLINE_MESSAGE.to_string()
        }
    }
}

/// Fixed prompt template: short punchy caption (max 15 words) plus three
/// hashtags, caption line then hashtag line.
fn hook_prompt(context: &str) -> String {
    format!(
        "You are a viral content expert for short-form video. \
         Given the following video context: \"{context}\".\n\
         Generate a short, punchy, high-energy, viral hook/caption (max 15 words) \
         and 3 trending hashtags.\n\
         Format: \"CAPTION\\nHASHTAGS\""
    )
}

fn request_hook(api_key: &str, model: &str, context: &str) -> Result<String> {
    let body = serde_json::json!({
        "contents": [{
            "parts": [{
                "text": hook_prompt(context)
            }]
        }]
    });

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent?key={api_key}"
    );

    let response: serde_json::Value = ureq::post(&url)
        .header("Content-Type", "application/json")
        .send_json(&body)
        .context("Failed to call generation API")?
        .body_mut()
        .read_json()
        .context("Failed to parse generation response")?;

    let text = response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("No text in generation response"))?;

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_resolves_to_fixed_message() {
        assert_eq!(generate_hook(None, DEFAULT_MODEL, "anything"), NO_KEY_MESSAGE);
        assert_eq!(generate_hook(Some(""), DEFAULT_MODEL, "anything"), NO_KEY_MESSAGE);
    }

    #[test]
    fn test_service_failure_resolves_to_offline_message() {
        // Unresolvable key against the real endpoint shape is not something a
        // unit test should reach for; instead prove the adapter contract on
        // the request path by pointing at a key that forms an invalid URL
        // request. The outer function must still resolve, never panic.
        let out = generate_hook(Some("definitely-invalid key"), "no-such-model", "ctx");
        assert_eq!(out, OFFLINE_MESSAGE);
    }

    #[test]
    fn test_prompt_embeds_context_verbatim() {
        let prompt = hook_prompt("a king tower activation with 1hp left");
        assert!(prompt.contains("\"a king tower activation with 1hp left\""));
        assert!(prompt.contains("3 trending hashtags"));
    }
}
