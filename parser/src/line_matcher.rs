//! Per-format header patterns.
//!
//! Each matcher looks at a single line with no knowledge of its neighbours and
//! either returns the captured header fields or reports a continuation line.

use crate::types::DirectionIcon;
use once_cell::sync::Lazy;
use regex::Regex;

static SUBLIME_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^::\s+([^ ]+)\s+([^ ]+)\s+([^:\n]+):?\s*(.*)").unwrap()
});

static VSCODE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(Trace|Info|Error) - ([0-9:APM ]+)\] (Sending|Received) (\S+) (.+)").unwrap()
});

/// Result of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch<H> {
    Header(H),
    Continuation,
}

impl<H> LineMatch<H> {
    pub fn is_header(&self) -> bool {
        matches!(self, LineMatch::Header(_))
    }
}

/// `:: <direction> <kind> <description>[: <payload>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SublimeHeader<'a> {
    pub direction: &'a str,
    pub kind: &'a str,
    pub description: &'a str,
    pub payload: Option<&'a str>,
}

impl SublimeHeader<'_> {
    /// `received` counts as outbound here, unlike the VSCode verb of the same
    /// name. Logs already tagged this way rely on it.
    pub fn direction_icon(&self) -> DirectionIcon {
        if self.direction.contains('>') || self.direction == "received" {
            DirectionIcon::Outbound
        } else if self.direction.contains('<') {
            DirectionIcon::Inbound
        } else {
            DirectionIcon::Indeterminate
        }
    }
}

pub fn match_sublime(line: &str) -> LineMatch<SublimeHeader<'_>> {
    let Some(caps) = SUBLIME_HEADER.captures(line) else {
        return LineMatch::Continuation;
    };

    // Groups 1-3 are mandatory in the pattern.
    let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();

    LineMatch::Header(SublimeHeader {
        direction: group(1),
        kind: group(2),
        description: group(3),
        payload: caps.get(4).map(|m| m.as_str()).filter(|p| !p.is_empty()),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Info,
    Error,
}

impl Level {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "Trace" => Some(Level::Trace),
            "Info" => Some(Level::Info),
            "Error" => Some(Level::Error),
            _ => None,
        }
    }

    /// Lower-cased label used as the message type
    pub fn as_type(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Sending,
    Received,
}

impl Verb {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sending" => Some(Verb::Sending),
            "received" => Some(Verb::Received),
            _ => None,
        }
    }

    pub fn direction_icon(&self) -> DirectionIcon {
        match self {
            Verb::Sending => DirectionIcon::Outbound,
            Verb::Received => DirectionIcon::Inbound,
        }
    }
}

/// `[<Level> - <timestamp>] <Sending|Received> <method> <details>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VsCodeHeader<'a> {
    pub level: Level,
    pub timestamp: &'a str,
    pub verb: Verb,
    pub method: &'a str,
    pub details: &'a str,
}

impl VsCodeHeader<'_> {
    pub fn direction_icon(&self) -> DirectionIcon {
        self.verb.direction_icon()
    }
}

pub fn match_vscode(line: &str) -> LineMatch<VsCodeHeader<'_>> {
    let Some(caps) = VSCODE_HEADER.captures(line) else {
        return LineMatch::Continuation;
    };

    let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();

    // The pattern's alternations only admit known levels and verbs.
    let (Some(level), Some(verb)) = (Level::parse(group(1)), Verb::parse(group(3))) else {
        return LineMatch::Continuation;
    };

    LineMatch::Header(VsCodeHeader {
        level,
        timestamp: group(2),
        verb,
        method: group(4),
        details: group(5),
    })
}
