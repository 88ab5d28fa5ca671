use crate::base_parser::{detect_format, FormatHint, Parser};
use crate::parsers::all_parsers;
use crate::{ParseError, ParseResults, DETECTION_SAMPLE_LINES};
use tracing::{debug, error, info, warn};

/// ParserRegistry - the single source of truth for which log formats exist
///
/// Parsers are loaded from `parsers::all_parsers()`; to add a built-in format
/// modify `parsers.rs` instead of this file.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn Parser>>,
}

impl ParserRegistry {
    /// Create a new registry with all built-in parsers
    pub fn new() -> Self {
        info!("Initializing ParserRegistry");
        let parsers = all_parsers();

        info!("Registered {} parsers: {}",
            parsers.len(),
            parsers.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
        );

        Self { parsers }
    }

    /// Register a custom parser
    pub fn register(&mut self, parser: Box<dyn Parser>) {
        info!("Registering custom parser: {} ({})", parser.name(), parser.key());
        self.parsers.push(parser);
    }

    /// Registered parsers, in registration order
    pub fn parsers(&self) -> impl Iterator<Item = &dyn Parser> {
        self.parsers.iter().map(|p| p.as_ref())
    }

    /// Display names of the registered parsers, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Get parser by display name or key, ignoring case
    pub fn get_parser(&self, name: &str) -> Option<&dyn Parser> {
        debug!("Looking up parser by name: {}", name);
        let result = self.parsers.iter()
            .find(|p| p.name().eq_ignore_ascii_case(name) || p.key().eq_ignore_ascii_case(name))
            .map(|p| p.as_ref());

        if result.is_some() {
            debug!("Found parser: {}", name);
        } else {
            warn!("Parser not found: {}", name);
        }

        result
    }

    /// Find the parser for the given lines.
    ///
    /// The built-in content hint is tried first, then every registered
    /// parser's `can_parse` over the detection sample.
    pub fn detect(&self, lines: &[&str]) -> Option<&dyn Parser> {
        let hint = detect_format(lines);
        info!("Format hint from content analysis: {:?}", hint);

        if let Some(parser) = hint.parser_key().and_then(|key| self.get_parser(key)) {
            return Some(parser);
        }

        if hint == FormatHint::Unknown {
            debug!("Format unknown, trying parsers individually");
        }

        lines.iter()
            .take(DETECTION_SAMPLE_LINES)
            .find_map(|line| {
                self.parsers.iter().find(|p| {
                    let can_parse = p.can_parse(line);
                    debug!("Parser '{}' can_parse result: {}", p.name(), can_parse);
                    can_parse
                })
            })
            .map(|p| p.as_ref())
    }

    /// Auto-detect the format and parse
    pub fn parse_auto(&self, lines: &[&str]) -> Result<ParseResults, ParseError> {
        info!("Starting auto-detection of log format");

        match self.detect(lines) {
            Some(parser) => {
                info!("Selected parser: {}", parser.name());
                parser.parse(lines)
            }
            None => {
                error!("Unable to detect format - no suitable parser found");
                Err(ParseError::UndetectedFormat)
            }
        }
    }

    /// Parse with the named parser, failing if it is not registered
    pub fn parse_with(&self, lines: &[&str], name: &str) -> Result<ParseResults, ParseError> {
        let parser = self.get_parser(name)
            .ok_or_else(|| ParseError::UnknownParser(name.to_string()))?;

        info!("Using parser '{}'", parser.name());
        parser.parse(lines)
    }

    /// Parse with the named parser, falling back to auto-detection when the
    /// name is unknown
    pub fn parse_with_name(&self, lines: &[&str], name: &str) -> Result<ParseResults, ParseError> {
        if let Some(parser) = self.get_parser(name) {
            info!("Using parser '{}'", parser.name());
            parser.parse(lines)
        } else {
            warn!("No parser named '{}', falling back to auto-detection", name);
            self.parse_auto(lines)
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
