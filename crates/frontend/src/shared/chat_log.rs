//! Messages shown in the console's scrolling log.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    System,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::User => "message message--user",
            MessageKind::System => "message message--system",
        }
    }
}

/// One entry of the log. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub kind: MessageKind,
    pub title: String,
    /// Body rendered as preformatted text; `None` renders the title only
    pub content: Option<String>,
    /// Short remark shown under the content; never part of it
    pub note: Option<String>,
}

impl Message {
    pub fn new(kind: MessageKind, title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            content: content.filter(|c| !c.is_empty()),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn user(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, title, Some(content.into()))
    }

    pub fn system(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageKind::System, title, Some(content.into()))
    }
}

/// Body of the most recent system message that has one
pub fn last_system_content(messages: &[Message]) -> Option<&str> {
    messages
        .iter()
        .rev()
        .filter(|m| m.kind == MessageKind::System)
        .find_map(|m| m.content.as_deref())
}

/// `message` if non-empty, else `fallback`
pub fn error_text(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
