use crate::base_parser::Parser;
use crate::line_matcher::{match_vscode, LineMatch, VsCodeHeader};
use crate::types::IdAllocator;
use crate::{Message, ParseError, ParseResults};
use tracing::{debug, error, info, trace};

/// VSCode parser - a header line opens a message, every following
/// non-header line belongs to its body until the next header
pub struct VsCodeParser;

impl Parser for VsCodeParser {
    fn name(&self) -> &'static str {
        "VSCode"
    }

    fn key(&self) -> &'static str {
        "vscode"
    }

    fn can_parse(&self, line: &str) -> bool {
        match_vscode(line).is_header()
    }

    fn parse(&self, lines: &[&str]) -> Result<ParseResults, ParseError> {
        info!("Starting VSCode log parsing ({} lines)", lines.len());

        let state = lines
            .iter()
            .copied()
            .enumerate()
            .try_fold(FoldState::new(), |state, (index, line)| state.feed(index, line))
            .map_err(|e| {
                error!("VSCode parsing aborted: {}", e);
                e
            })?;

        let results = ParseResults::from_messages(state.finish());
        info!(
            "VSCode parsing complete: {} messages parsed, filters: {:?}",
            results.len(),
            results.filters
        );
        Ok(results)
    }
}

/// Header seen but body not yet complete
struct Pending<'a> {
    message: Message,
    body: Vec<&'a str>,
}

struct FoldState<'a> {
    ids: IdAllocator,
    current: Option<Pending<'a>>,
    output: Vec<Message>,
}

impl<'a> FoldState<'a> {
    fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            current: None,
            output: Vec::new(),
        }
    }

    fn feed(mut self, index: usize, line: &'a str) -> Result<Self, ParseError> {
        match match_vscode(line) {
            LineMatch::Header(header) => {
                self.flush();
                let message = self.open(&header);
                self.current = Some(Pending {
                    message,
                    body: Vec::new(),
                });
            }
            LineMatch::Continuation => match self.current.as_mut() {
                Some(pending) => pending.body.push(line),
                None => return Err(ParseError::OrphanContinuation { line: index }),
            },
        }

        Ok(self)
    }

    fn open(&mut self, header: &VsCodeHeader<'_>) -> Message {
        Message::new(
            self.ids.next_id(),
            format!("[{}] {} ({})", header.timestamp, header.details, header.method),
        )
        .with_kind(header.level.as_type())
        .with_direction(Some(header.direction_icon()))
    }

    /// Emit the message under construction, its buffered body joined into a
    /// single child.
    fn flush(&mut self) {
        let Some(Pending { mut message, body }) = self.current.take() else {
            return;
        };

        if !body.is_empty() {
            trace!("Attaching {} body lines to message {}", body.len(), message.id);
            message = message.with_child(Message::new(self.ids.next_id(), body.join("\n")));
        }

        debug!("Finalized message {}: {}", message.id, message.name);
        self.output.push(message);
    }

    fn finish(mut self) -> Vec<Message> {
        self.flush();
        self.output
    }
}
