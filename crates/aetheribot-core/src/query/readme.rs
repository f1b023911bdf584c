//! README payload decoding.
//!
//! GitHub returns README bodies as base64 inside a JSON envelope, wrapped
//! at 60 columns with `\n`. Decoding is lenient about whitespace and
//! padding; invalid UTF-8 is replaced rather than rejected.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use aetheribot_types::error::QueryError;

/// Number of README lines kept in a preview.
pub const README_PREVIEW_LINES: usize = 10;

const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a base64 README body to text.
pub fn decode_content(encoded: &str) -> Result<String, QueryError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = LENIENT_BASE64
        .decode(compact.as_bytes())
        .map_err(|e| QueryError::Decode(format!("README content is not valid base64: {e}")))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Keep the first `limit` `\n`-separated lines, rejoined with `\n`.
pub fn first_lines(text: &str, limit: usize) -> String {
    text.split('\n').take(limit).collect::<Vec<_>>().join("\n")
}

/// Decode a base64 README body and cut it down to a preview.
pub fn decode_preview(encoded: &str) -> Result<String, QueryError> {
    let text = decode_content(encoded)?;
    Ok(first_lines(&text, README_PREVIEW_LINES))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str) -> String {
        base64::engine::general_purpose::STANDARD.encode(text)
    }

    /// Wrap like GitHub does: 60 columns, `\n` separated.
    fn wrap(encoded: &str) -> String {
        encoded
            .as_bytes()
            .chunks(60)
            .map(|c| std::str::from_utf8(c).unwrap())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn preview_keeps_exactly_ten_lines() {
        let text: String = (1..=25).map(|i| format!("line {i}\n")).collect();
        let preview = decode_preview(&wrap(&encode(&text))).unwrap();

        let lines: Vec<&str> = preview.split('\n').collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "line 1");
        assert_eq!(lines[9], "line 10");
        assert!(!preview.ends_with('\n'));
    }

    #[test]
    fn short_readme_is_kept_whole() {
        let text = "# Title\n\nSome intro.\n";
        let preview = decode_preview(&encode(text)).unwrap();
        assert_eq!(preview, text);
    }

    #[test]
    fn leading_blank_lines_count_towards_the_limit() {
        let text = "\n\n# Title\na\nb\nc\nd\ne\nf\ng\nh\ni\n";
        let preview = decode_preview(&encode(text)).unwrap();
        assert_eq!(preview, "\n\n# Title\na\nb\nc\nd\ne\nf\ng");
    }

    #[test]
    fn unpadded_input_is_accepted() {
        let encoded = encode("hi!?").trim_end_matches('=').to_string();
        assert_eq!(decode_content(&encoded).unwrap(), "hi!?");
    }

    #[test]
    fn utf8_content_survives() {
        let text = "✨ Sparkly README 🌸";
        assert_eq!(decode_content(&wrap(&encode(text))).unwrap(), text);
    }

    #[test]
    fn invalid_base64_is_decode_error() {
        let err = decode_preview("not*base64").unwrap_err();
        assert!(matches!(err, QueryError::Decode(_)));
    }

    #[test]
    fn first_lines_on_empty_text() {
        assert_eq!(first_lines("", README_PREVIEW_LINES), "");
    }
}
