//! User-facing failure messages.

/// Published when the prompt is blank and no image is attached.
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt or select an image";

/// Published when the model answers with blank or absent text.
pub const NO_OUTPUT_MESSAGE: &str = "No output received from AI";

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Maps a model fault message to the text shown to the user.
///
/// Case-insensitive substring match; the first rule that matches wins:
/// "API key", then "quota", then "model", then "network".
pub fn classify_fault(message: Option<&str>) -> String {
    let lower = message.map(str::to_lowercase).unwrap_or_default();

    if lower.contains("api key") {
        "Invalid API key. Please check your configuration.".to_string()
    } else if lower.contains("quota") {
        "API quota exceeded. Please try again later.".to_string()
    } else if lower.contains("model") {
        format!("Model not available: {}", message.unwrap_or_default())
    } else if lower.contains("network") {
        "Network error. Please check your internet connection.".to_string()
    } else {
        format!("Error: {}", message.unwrap_or(UNKNOWN_ERROR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_takes_precedence() {
        assert_eq!(
            classify_fault(Some("invalid api KEY for model, quota and network")),
            "Invalid API key. Please check your configuration."
        );
    }

    #[test]
    fn test_quota_beats_model_and_network() {
        assert_eq!(
            classify_fault(Some("Quota Exceeded for model gemini over network")),
            "API quota exceeded. Please try again later."
        );
    }

    #[test]
    fn test_model_message_keeps_original_text() {
        assert_eq!(
            classify_fault(Some("NOT_FOUND: Model gemini-x was not found")),
            "Model not available: NOT_FOUND: Model gemini-x was not found"
        );
    }

    #[test]
    fn test_network() {
        assert_eq!(
            classify_fault(Some("Network unreachable")),
            "Network error. Please check your internet connection."
        );
    }

    #[test]
    fn test_generic_and_missing_message() {
        assert_eq!(classify_fault(Some("boom")), "Error: boom");
        assert_eq!(classify_fault(None), "Error: Unknown error occurred");
    }
}
