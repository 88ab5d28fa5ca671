//! Central parser registration module
//!
//! Every built-in log format is listed here, in the order the registry
//! exposes them. When adding a new format:
//! 1. Create the parser file (e.g., neovim_parser.rs)
//! 2. Export it in lib.rs: `pub mod neovim_parser; pub use neovim_parser::NeovimParser;`
//! 3. Add it to the `register_parsers!` list in `all_parsers()` below

use crate::base_parser::Parser;
use crate::{SublimeParser, VsCodeParser};
use tracing::info;

/// Boxes each parser into a `Vec<Box<dyn Parser>>`
///
/// Usage:
/// ```rust,ignore
/// register_parsers![
///     SublimeParser,
///     VsCodeParser,
///     NeovimParser,  // <-- Just add parser name here
/// ]
/// ```
#[macro_export]
macro_rules! register_parsers {
    ($($parser:expr),* $(,)?) => {
        vec![
            $(Box::new($parser) as Box<dyn $crate::base_parser::Parser>),*
        ]
    };
}

/// Returns all built-in parsers, in display order.
pub fn all_parsers() -> Vec<Box<dyn Parser>> {
    info!("Initializing parser collection");

    register_parsers![
        SublimeParser,
        VsCodeParser,
    ]
}
