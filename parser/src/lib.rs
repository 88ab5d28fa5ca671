// Parser crate for LSP client logs
// Turns Sublime LSP and VSCode language client output into message trees

pub mod types;
pub mod line_matcher;
pub mod base_parser;
pub mod parsers;
pub mod registry_parser;

// Individual format parsers
pub mod sublime_parser;
pub mod vscode_parser;

// Re-export main types
pub use types::*;
pub use base_parser::{Parser, FormatHint, detect_format};
pub use line_matcher::LineMatch;
pub use registry_parser::ParserRegistry;

// Re-export parsers
pub use sublime_parser::SublimeParser;
pub use vscode_parser::VsCodeParser;

/// Number of leading lines inspected when auto-detecting the log format
pub const DETECTION_SAMPLE_LINES: usize = 50;
