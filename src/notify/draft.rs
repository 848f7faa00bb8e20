use std::time::Duration;

use serde_json::json;
use tracing::warn;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Draft a customer-facing outage message.
///
/// Best-effort: one request, 10 second timeout, no retry. Whenever the API
/// key is missing or the call fails in any way, the local template is
/// returned instead. This path never participates in the notification
/// lifecycle invariants.
pub async fn draft_outage_message(reason: &str, area: &str, estimated_time: &str) -> String {
    let Ok(api_key) = std::env::var(API_KEY_ENV) else {
        warn!("{} not set, using template message", API_KEY_ENV);
        return fallback_message(reason, area, estimated_time);
    };

    match request_draft(&api_key, reason, area, estimated_time).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "draft generation failed, using template message");
            fallback_message(reason, area, estimated_time)
        }
    }
}

/// The local template used whenever the generator is unavailable.
pub fn fallback_message(reason: &str, area: &str, estimated_time: &str) -> String {
    format!(
        "Alert: Network outage in {} due to {}. Estimated resolution: {}.",
        area, reason, estimated_time
    )
}

async fn request_draft(
    api_key: &str,
    reason: &str,
    area: &str,
    estimated_time: &str,
) -> anyhow::Result<String> {
    let prompt = format!(
        "You are a professional Network Operations Center (NOC) assistant for an ISP.\n\
         Draft a concise, professional notification message for customers regarding a network outage.\n\n\
         Details:\n\
         - Reason: {}\n\
         - Area: {}\n\
         - Estimated Resolution Time: {}\n\n\
         Keep it under 50 words. Use a polite and reassuring tone.",
        reason, area, estimated_time
    );

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}?key={}", GENERATE_URL, api_key))
        .header("User-Agent", "fiberctl/1.0")
        .timeout(Duration::from_secs(10))
        .json(&json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        }))
        .send()
        .await?
        .error_for_status()?;

    let body: serde_json::Value = response.json().await?;
    let text = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| anyhow::anyhow!("unexpected response shape"))?;

    Ok(text.trim().to_string())
}
