use crate::base_parser::Parser;
use crate::line_matcher::{match_sublime, LineMatch};
use crate::types::IdAllocator;
use crate::{Message, ParseError, ParseResults, FIRST_MESSAGE_ID};
use tracing::{debug, info};

/// Sublime LSP parser - one message per line, payload after the colon becomes
/// the single child
pub struct SublimeParser;

impl Parser for SublimeParser {
    fn name(&self) -> &'static str {
        "Sublime LSP"
    }

    fn key(&self) -> &'static str {
        "sublime"
    }

    fn can_parse(&self, line: &str) -> bool {
        match_sublime(line).is_header()
    }

    fn parse(&self, lines: &[&str]) -> Result<ParseResults, ParseError> {
        info!("Starting Sublime LSP log parsing ({} lines)", lines.len());
        // Sublime numbering skips the seed id; the first message is id 2.
        let mut ids = IdAllocator::starting_at(FIRST_MESSAGE_ID + 1);
        let mut messages = Vec::with_capacity(lines.len());

        for line in lines {
            let message = match match_sublime(line) {
                LineMatch::Header(header) => {
                    let mut message = Message::new(
                        ids.next_id(),
                        format!("({}) {}", header.kind, header.description),
                    )
                    .with_kind(header.direction)
                    .with_direction(Some(header.direction_icon()));

                    if let Some(payload) = header.payload {
                        message = message.with_child(Message::new(ids.next_id(), payload));
                    }
                    message
                }
                LineMatch::Continuation => {
                    debug!("Unmatched line kept as info message");
                    Message::new(ids.next_id(), *line).with_kind("info")
                }
            };

            messages.push(message);
        }

        let results = ParseResults::from_messages(messages);
        info!("Sublime LSP parsing complete: {} messages parsed", results.len());
        Ok(results)
    }
}
