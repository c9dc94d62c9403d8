use super::{ChatWidget, PendingReply, pending};
use crate::backend::reply_text;
use crate::types::{ChatMessage, Role};

const ANSWER_FIELDS: &[&str] = &["answer", "result"];

impl ChatWidget {
    /// Send the current input.
    ///
    /// Both the Enter key and the send button land here. Returns `None`
    /// without touching the log when the trimmed input is empty.
    pub fn submit(&self) -> Option<PendingReply> {
        let text = self.update(|state| {
            let text = state.input.trim().to_string();
            if text.is_empty() {
                return None;
            }
            state.log.push(Role::User, text.clone());
            state.input.clear();
            Some(text)
        })?;
        Some(self.query(text))
    }

    /// Ask the backend and append whatever comes back.
    pub fn query(&self, text: String) -> PendingReply {
        let widget = self.clone();
        pending(async move {
            tracing::debug!(chars = text.chars().count(), "query dispatched");
            let notices = widget.notices();
            let reply = match widget.inner.backend.ask(&text).await {
                Ok(body) => ChatMessage::new(
                    Role::Bot,
                    reply_text(&body, ANSWER_FIELDS).unwrap_or_else(|| notices.no_answer.clone()),
                ),
                Err(err) => {
                    tracing::error!(error = %err, "query failed");
                    ChatMessage::new(Role::Error, notices.query_failed.clone())
                }
            };
            widget.append(reply);
        })
    }
}
