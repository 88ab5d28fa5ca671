use serde::{Deserialize, Serialize};

/// Seed id of every parse run
pub const FIRST_MESSAGE_ID: u64 = 1;

/// Communication direction of a logged event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionIcon {
    Outbound,
    Inbound,
    Indeterminate,
}

impl DirectionIcon {
    /// Icon identifier the log viewer renders for this direction
    pub fn icon_name(&self) -> &'static str {
        match self {
            DirectionIcon::Outbound => "mdi-email-send-outline",
            DirectionIcon::Inbound => "mdi-email-receive",
            DirectionIcon::Indeterminate => "mdi-sync-alert",
        }
    }
}

/// One node of the parsed message tree.
///
/// `filter`, `request_id` and `is_expanded` belong to the consumer (filter UI,
/// request/response linking, expand/collapse state). Parsers leave them unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_icon: Option<DirectionIcon>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
}

impl Message {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: None,
            direction_icon: None,
            children: Vec::new(),
            filter: None,
            request_id: None,
            is_expanded: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_direction(mut self, icon: Option<DirectionIcon>) -> Self {
        self.direction_icon = icon;
        self
    }

    pub fn with_child(mut self, child: Message) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Pre-order walk over this message and all of its descendants
    pub fn walk(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(|c| c.walk())))
    }
}

/// Output of a single parse run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResults {
    pub messages: Vec<Message>,
    /// Distinct top-level `type` values, in first-seen order
    pub filters: Vec<String>,
}

impl ParseResults {
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let mut filters: Vec<String> = Vec::new();
        for kind in messages.iter().filter_map(|m| m.kind.as_deref()) {
            if !filters.iter().any(|f| f == kind) {
                filters.push(kind.to_string());
            }
        }

        Self { messages, filters }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Hands out message ids for one parse run. Parents and children draw from
/// the same sequence.
#[derive(Debug, Clone)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub(crate) fn new() -> Self {
        Self::starting_at(FIRST_MESSAGE_ID)
    }

    pub(crate) fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub(crate) fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Message content with no parent (line {line})")]
    OrphanContinuation { line: usize },
    #[error("Unknown parser: {0}")]
    UnknownParser(String),
    #[error("Unable to detect log format")]
    UndetectedFormat,
    #[error("{0}")]
    Custom(String),
}

impl From<String> for ParseError {
    fn from(msg: String) -> Self {
        ParseError::Custom(msg)
    }
}

impl From<&str> for ParseError {
    fn from(msg: &str) -> Self {
        ParseError::Custom(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_allocator_starts_at_first_id() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), FIRST_MESSAGE_ID);
        assert_eq!(ids.next_id(), FIRST_MESSAGE_ID + 1);
    }

    #[test]
    fn test_id_allocator_starting_at() {
        let mut ids = IdAllocator::starting_at(FIRST_MESSAGE_ID + 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_filters_are_distinct_in_first_seen_order() {
        let messages = vec![
            Message::new(1, "a").with_kind("trace"),
            Message::new(2, "b"),
            Message::new(3, "c").with_kind("error"),
            Message::new(4, "d").with_kind("trace"),
        ];

        let results = ParseResults::from_messages(messages);
        assert_eq!(results.filters, vec!["trace", "error"]);
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_message_serializes_camel_case_and_omits_empty() {
        let msg = Message::new(1, "(client) foo")
            .with_kind("-->")
            .with_direction(Some(DirectionIcon::Outbound))
            .with_child(Message::new(2, "payload"));

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "-->");
        assert_eq!(json["directionIcon"], "outbound");
        assert_eq!(json["children"][0]["name"], "payload");
        assert!(json["children"][0].get("children").is_none());
        assert!(json["children"][0].get("type").is_none());
        assert!(json.get("isExpanded").is_none());
    }

    #[test]
    fn test_consumer_fields_survive_round_trip() {
        let json = r#"{"id":7,"name":"x","type":"info","filter":"noise","requestId":3,"isExpanded":true}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        assert_eq!(msg.kind.as_deref(), Some("info"));
        assert_eq!(msg.filter.as_deref(), Some("noise"));
        assert_eq!(msg.request_id, Some(3));
        assert_eq!(msg.is_expanded, Some(true));
        assert!(msg.children.is_empty());
    }

    #[test]
    fn test_walk_is_pre_order() {
        let msg = Message::new(1, "parent").with_child(Message::new(2, "child"));
        let ids: Vec<u64> = msg.walk().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(DirectionIcon::Outbound.icon_name(), "mdi-email-send-outline");
        assert_eq!(DirectionIcon::Inbound.icon_name(), "mdi-email-receive");
        assert_eq!(DirectionIcon::Indeterminate.icon_name(), "mdi-sync-alert");
    }
}
