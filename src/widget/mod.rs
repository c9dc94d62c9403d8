//! The chat widget's interaction state machine.
//!
//! [`ChatWidget`] is a cheap, cloneable handle shared by every event
//! handler of the view. Handlers that talk to the backend return a
//! [`PendingReply`] which the host spawns; the reply appends to the message
//! log whenever it resolves, so overlapping replies land in arrival order.
//!
//! # Usage
//!
//! ```rust,no_run
//! use docchat::config::WidgetConfig;
//! use docchat::widget::ChatWidget;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let widget = ChatWidget::from_config(&WidgetConfig::from_env()?);
//! widget.set_input("What does the report conclude?");
//! if let Some(reply) = widget.submit() {
//!     tokio::spawn(reply);
//! }
//! # Ok(())
//! # }
//! ```
mod dispatch;
mod log;
mod speech;
mod upload;
mod web_speech;

pub use log::MessageLog;
pub use speech::{
    RecognitionOptions, SpeechError, SpeechEvent, SpeechRecognizer, SpeechSink, SpeechState,
    platform_recognizer,
};

use crate::backend::{self, Backend};
use crate::config::{Notices, WidgetConfig};
use crate::types::ChatMessage;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, watch};

/// An in-flight backend request. Dropping it without polling abandons the
/// request before it is sent.
#[cfg(not(target_arch = "wasm32"))]
pub type PendingReply = futures::future::BoxFuture<'static, ()>;

#[cfg(target_arch = "wasm32")]
pub type PendingReply = futures::future::LocalBoxFuture<'static, ()>;

#[cfg(not(target_arch = "wasm32"))]
fn pending(reply: impl Future<Output = ()> + Send + 'static) -> PendingReply {
    Box::pin(reply)
}

#[cfg(target_arch = "wasm32")]
fn pending(reply: impl Future<Output = ()> + 'static) -> PendingReply {
    Box::pin(reply)
}

/// Everything the view renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub listening: bool,
}

#[derive(Default)]
struct WidgetState {
    log: MessageLog,
    input: String,
    speech: SpeechState,
}

struct Inner {
    state: Mutex<WidgetState>,
    revision: watch::Sender<u64>,
    backend: Arc<dyn Backend>,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    recognition: RecognitionOptions,
    speech_tx: mpsc::UnboundedSender<SpeechEvent>,
    speech_rx: Mutex<Option<mpsc::UnboundedReceiver<SpeechEvent>>>,
    notices: Notices,
}

#[derive(Clone)]
pub struct ChatWidget {
    inner: Arc<Inner>,
}

impl ChatWidget {
    /// Build a widget with the configured backend and whatever speech
    /// recognizer the platform offers.
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(backend::from_config(config), platform_recognizer(), config)
    }

    pub fn new(
        backend: Arc<dyn Backend>,
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
        config: &WidgetConfig,
    ) -> Self {
        let (revision, _) = watch::channel(0);
        let (speech_tx, speech_rx) = mpsc::unbounded_channel();
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(WidgetState::default()),
                revision,
                backend,
                recognizer,
                recognition: RecognitionOptions::single_utterance(&config.speech_lang),
                speech_tx,
                speech_rx: Mutex::new(Some(speech_rx)),
                notices: config.notices.clone(),
            }),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.lock();
        Snapshot {
            messages: state.log.messages().to_vec(),
            input: state.input.clone(),
            listening: state.speech == SpeechState::Listening,
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().log.messages().to_vec()
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.input = text);
    }

    /// Receiver that ticks after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    fn notices(&self) -> &Notices {
        &self.inner.notices
    }

    fn append(&self, message: ChatMessage) {
        self.update(|state| state.log.append(message));
    }

    fn update<R>(&self, change: impl FnOnce(&mut WidgetState) -> R) -> R {
        let result = {
            let mut state = self.lock();
            change(&mut state)
        };
        self.inner.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
        result
    }

    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
