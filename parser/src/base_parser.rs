use crate::line_matcher::{match_sublime, match_vscode};
use crate::{ParseError, ParseResults, DETECTION_SAMPLE_LINES};

/// Base trait that all log format parsers must implement
pub trait Parser: Send + Sync {
    /// Display name shown to the user (e.g., "Sublime LSP", "VSCode")
    fn name(&self) -> &'static str;

    /// Short lookup key (e.g., "sublime", "vscode")
    fn key(&self) -> &'static str;

    /// Checks whether a single line is a header line of this format
    fn can_parse(&self, line: &str) -> bool;

    /// Parse an ordered sequence of already split lines
    fn parse(&self, lines: &[&str]) -> Result<ParseResults, ParseError>;

    /// Parse an in-memory log text, splitting it on line boundaries first
    fn parse_str(&self, text: &str) -> Result<ParseResults, ParseError> {
        let lines: Vec<&str> = text.lines().collect();
        self.parse(&lines)
    }
}

/// Helper to detect format from content.
///
/// The first line within the sample that looks like a header of either
/// built-in format decides.
pub fn detect_format(lines: &[&str]) -> FormatHint {
    for line in lines.iter().take(DETECTION_SAMPLE_LINES) {
        if match_vscode(line).is_header() {
            return FormatHint::VsCode;
        }
        if match_sublime(line).is_header() {
            return FormatHint::Sublime;
        }
    }

    FormatHint::Unknown
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Sublime,
    VsCode,
    Unknown,
}

impl FormatHint {
    /// Registry key of the parser this hint points at
    pub fn parser_key(&self) -> Option<&'static str> {
        match self {
            FormatHint::Sublime => Some("sublime"),
            FormatHint::VsCode => Some("vscode"),
            FormatHint::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_vscode() {
        let lines = [
            "",
            "[Trace - 10:00:00 AM] Sending request 'initialize - (0)'.",
            "Params: {}",
        ];
        assert_eq!(detect_format(&lines), FormatHint::VsCode);
    }

    #[test]
    fn test_detect_sublime_after_banner() {
        let lines = ["LSP: starting pyls", ":: --> pyls initialize(1): {}"];
        assert_eq!(detect_format(&lines), FormatHint::Sublime);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_format(&["hello", "world"]), FormatHint::Unknown);
        assert_eq!(detect_format(&[]), FormatHint::Unknown);
    }

    #[test]
    fn test_detect_only_looks_at_sample() {
        let mut lines = vec!["noise"; DETECTION_SAMPLE_LINES];
        lines.push(":: --> pyls initialize");
        assert_eq!(detect_format(&lines), FormatHint::Unknown);
    }
}
