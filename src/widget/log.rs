use crate::types::{ChatMessage, Role};

/// Append-only record of every displayed message, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn append(&mut self, message: ChatMessage) {
        tracing::trace!(role = ?message.role, len = self.messages.len() + 1, "message appended");
        self.messages.push(message);
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>) {
        self.append(ChatMessage::new(role, text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut log = MessageLog::default();
        log.push(Role::User, "first");
        log.push(Role::Bot, "second");
        log.push(Role::Error, "third");

        let texts: Vec<_> = log.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
        assert_eq!(log.messages().last().map(|m| m.role), Some(Role::Error));
    }

    #[test]
    fn test_empty_text_is_kept() {
        let mut log = MessageLog::default();
        log.push(Role::Bot, "");
        assert_eq!(log.messages(), [ChatMessage::new(Role::Bot, "")]);
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let mut log = MessageLog::default();
        log.push(Role::User, "again");
        log.push(Role::User, "again");
        assert_eq!(log.messages().len(), 2);
    }
}
