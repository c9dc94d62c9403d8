//! Microphone input.
//!
//! Speech recognition is an optional platform capability, detected once
//! when the widget is built. Recognizers report back asynchronously through
//! a [`SpeechSink`]; the host drains the matching receiver (see
//! [`ChatWidget::take_speech_events`]) and feeds each event to
//! [`ChatWidget::handle_speech_event`].

use super::{ChatWidget, PendingReply};
use crate::types::{ChatMessage, Role};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeechState {
    #[default]
    Idle,
    Listening,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeechEvent {
    /// The recognizer opened the microphone.
    Started,
    /// Final transcript of the utterance.
    Result(String),
    /// Recognition failed; carries the recognizer's description.
    Error(String),
    /// The session closed, with or without a result.
    Ended,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub lang: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl RecognitionOptions {
    pub fn single_utterance(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("{0}")]
    StartFailed(String),
}

/// Where a recognizer delivers its events.
#[derive(Clone)]
pub struct SpeechSink(mpsc::UnboundedSender<SpeechEvent>);

impl SpeechSink {
    pub fn emit(&self, event: SpeechEvent) {
        if self.0.send(event).is_err() {
            tracing::debug!("speech event dropped, widget is gone");
        }
    }
}

pub trait SpeechRecognizer: Send + Sync {
    /// Begin a recognition session. Events for the session go to `events`;
    /// starting while a session is active is the recognizer's business.
    fn start(&self, options: &RecognitionOptions, events: SpeechSink) -> Result<(), SpeechError>;
}

/// The speech recognizer available on this platform, if any.
///
/// In the browser this looks for the page's recognition constructor once;
/// native builds have no recognizer and report the capability as missing.
#[cfg(feature = "web")]
pub fn platform_recognizer() -> Option<Arc<dyn SpeechRecognizer>> {
    use super::web_speech::{BrowserRecognizer, find_constructor, window_has};

    match find_constructor(window_has) {
        Some(constructor) => {
            tracing::info!(constructor, "browser speech recognition available");
            Some(Arc::new(BrowserRecognizer::new(constructor)))
        }
        None => {
            tracing::info!("browser has no speech recognition");
            None
        }
    }
}

#[cfg(not(feature = "web"))]
pub fn platform_recognizer() -> Option<Arc<dyn SpeechRecognizer>> {
    tracing::info!("speech recognition not available on this platform");
    None
}

impl ChatWidget {
    pub fn speech_supported(&self) -> bool {
        self.inner.recognizer.is_some()
    }

    pub fn speech_state(&self) -> SpeechState {
        self.lock().speech
    }

    /// The microphone control was activated.
    pub fn activate_mic(&self) {
        let Some(recognizer) = &self.inner.recognizer else {
            self.append(ChatMessage::new(
                Role::Error,
                self.notices().speech_unsupported.clone(),
            ));
            return;
        };

        let sink = SpeechSink(self.inner.speech_tx.clone());
        if let Err(err) = recognizer.start(&self.inner.recognition, sink) {
            tracing::warn!(error = %err, "speech recognizer failed to start");
            self.append(self.mic_error(&err.to_string()));
        }
    }

    /// Take the receiving end of the speech event channel. Only the first
    /// call gets it.
    pub fn take_speech_events(&self) -> Option<mpsc::UnboundedReceiver<SpeechEvent>> {
        self.inner
            .speech_rx
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
    }

    /// Apply one recognizer event. A transcript is sent straight away, so
    /// the returned reply must be spawned like any other submission.
    pub fn handle_speech_event(&self, event: SpeechEvent) -> Option<PendingReply> {
        match event {
            SpeechEvent::Started => {
                let listening = ChatMessage::new(Role::Bot, self.notices().listening.clone());
                self.update(|state| {
                    state.speech = SpeechState::Listening;
                    state.log.append(listening);
                });
                None
            }
            SpeechEvent::Result(transcript) => {
                self.set_input(transcript);
                self.submit()
            }
            SpeechEvent::Error(description) => {
                let message = self.mic_error(&description);
                self.update(|state| {
                    state.speech = SpeechState::Idle;
                    state.log.append(message);
                });
                None
            }
            SpeechEvent::Ended => {
                self.update(|state| state.speech = SpeechState::Idle);
                None
            }
        }
    }

    fn mic_error(&self, description: &str) -> ChatMessage {
        ChatMessage::new(
            Role::Error,
            format!("{}{}", self.notices().mic_error_prefix, description),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "web"))]
    #[test]
    fn test_native_builds_have_no_recognizer() {
        assert!(platform_recognizer().is_none());
    }

    #[test]
    fn test_single_utterance_options() {
        let options = RecognitionOptions::single_utterance("en-US");
        assert_eq!(options.lang, "en-US");
        assert!(!options.continuous);
        assert!(!options.interim_results);
    }
}
