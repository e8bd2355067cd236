//! System-instruction construction and image payload handling

/// Fixed role and task description prepended to every chat request.
const ROLE_PREAMBLE: &str = "You are a Digital Krishi Officer (Agricultural Expert).\n\
Your goal is to help Indian farmers with:\n\
1. Crop disease identification.\n\
2. Treatment recommendations.\n\
3. Fertilizer advice.\n\
4. General farming tips.";

const FORMAT_DIRECTIVE: &str = "Format your response nicely with headings and bullet points using Markdown.\n\
Keep the tone helpful, encouraging, and easy to understand.";

const ENGLISH_DIRECTIVE: &str = "Reply in English.";

/// Select the language directive by exact match on the language code.
///
/// Unrecognized codes (including the default `en`) fall back to English;
/// that is the expected default, not an error.
pub fn language_directive(code: &str) -> &'static str {
    match code {
        "hi" => "Reply in Hindi using Devanagari script. Use simple farming terminology.",
        "kn" => "Reply in Kannada (ಕನ್ನಡ). Use simple farming terminology.",
        "te" => "Reply in Telugu (తెలుగు). Use simple farming terminology.",
        _ => ENGLISH_DIRECTIVE,
    }
}

/// Build the full system instruction for the given language code.
pub fn build_system_instruction(language: &str) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        ROLE_PREAMBLE,
        language_directive(language),
        FORMAT_DIRECTIVE
    )
}

/// Strip a data-URI prefix from a base64 image payload.
///
/// Frontends send either the bare base64 string or a full data URI such as
/// `data:image/jpeg;base64,XXXX`; everything up to and including the first
/// `base64,` is dropped.
pub fn strip_data_uri_prefix(payload: &str) -> &str {
    match payload.find("base64,") {
        Some(idx) => &payload[idx + "base64,".len()..],
        None => payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hindi_directive() {
        let instruction = build_system_instruction("hi");
        assert!(instruction.contains("Reply in Hindi using Devanagari script"));
    }

    #[test]
    fn test_kannada_directive() {
        let instruction = build_system_instruction("kn");
        assert!(instruction.contains("Reply in Kannada"));
        assert!(instruction.contains("ಕನ್ನಡ"));
    }

    #[test]
    fn test_telugu_directive() {
        let instruction = build_system_instruction("te");
        assert!(instruction.contains("Reply in Telugu"));
        assert!(instruction.contains("తెలుగు"));
    }

    #[test]
    fn test_english_is_the_fallback() {
        for code in ["en", "ml", "fr", "", "HI"] {
            let instruction = build_system_instruction(code);
            assert!(
                instruction.contains("Reply in English."),
                "code {:?} should fall back to English",
                code
            );
        }
    }

    #[test]
    fn test_instruction_always_carries_role_and_format() {
        let instruction = build_system_instruction("te");
        assert!(instruction.contains("Digital Krishi Officer"));
        assert!(instruction.contains("Markdown"));
    }

    #[test]
    fn test_strip_data_uri_prefix() {
        assert_eq!(
            strip_data_uri_prefix("data:image/jpeg;base64,XXXX"),
            "XXXX"
        );
        assert_eq!(strip_data_uri_prefix("data:image/png;base64,abc="), "abc=");
    }

    #[test]
    fn test_strip_leaves_bare_payload_untouched() {
        assert_eq!(strip_data_uri_prefix("AAAABBBB"), "AAAABBBB");
    }

    #[test]
    fn test_strip_uses_first_marker_only() {
        assert_eq!(strip_data_uri_prefix("base64,base64,XX"), "base64,XX");
    }
}
