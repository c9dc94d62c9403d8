use super::{ChatWidget, PendingReply, pending};
use crate::backend::reply_text;
use crate::types::{ChatMessage, Role, SelectedFile};

const ACK_FIELDS: &[&str] = &["message"];

impl ChatWidget {
    /// Upload the file chosen in the picker. A cancelled dialog passes
    /// `None` and nothing happens.
    pub fn upload(&self, file: Option<SelectedFile>) -> Option<PendingReply> {
        let file = file?;
        let notices = self.notices();
        self.append(ChatMessage::new(
            Role::User,
            format!("{}{}", notices.upload_prefix, file.name),
        ));

        let widget = self.clone();
        Some(pending(async move {
            let name = file.name.clone();
            let notices = widget.notices();
            let reply = match widget.inner.backend.upload(file).await {
                Ok(body) => ChatMessage::new(
                    Role::Bot,
                    reply_text(&body, ACK_FIELDS).unwrap_or_else(|| notices.upload_succeeded.clone()),
                ),
                Err(err) => {
                    tracing::error!(error = %err, file = %name, "upload failed");
                    ChatMessage::new(Role::Error, notices.upload_failed.clone())
                }
            };
            widget.append(reply);
        }))
    }
}
