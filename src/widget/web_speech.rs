//! Browser speech recognition through the page's `SpeechRecognition`
//! constructor (or its `webkit` prefixed twin).
//!
//! The session runs as a script evaluated in the page; recognition events
//! come back over the eval channel as small JSON objects.
#![cfg_attr(not(feature = "web"), allow(dead_code))]

use super::speech::{RecognitionOptions, SpeechEvent};
use serde::Deserialize;
use serde_json::Value;

const CONSTRUCTORS: &[&str] = &["SpeechRecognition", "webkitSpeechRecognition"];

/// First recognition constructor the page exposes, unprefixed preferred.
pub(crate) fn find_constructor(has_global: impl Fn(&str) -> bool) -> Option<&'static str> {
    CONSTRUCTORS.iter().copied().find(|name| has_global(name))
}

/// Script driving one single-utterance session.
pub(crate) fn session_script(constructor: &str, options: &RecognitionOptions) -> String {
    let constructor = Value::from(constructor);
    let lang = Value::from(options.lang.as_str());
    format!(
        r#"
const recognition = new window[{constructor}]();
recognition.lang = {lang};
recognition.continuous = {continuous};
recognition.interimResults = {interim};
recognition.onstart = () => dioxus.send({{ kind: "start" }});
recognition.onresult = (event) => dioxus.send({{ kind: "result", transcript: event.results[0][0].transcript }});
recognition.onerror = (event) => dioxus.send({{ kind: "error", error: String(event.error) }});
recognition.onend = () => dioxus.send({{ kind: "end" }});
try {{
    recognition.start();
}} catch (err) {{
    dioxus.send({{ kind: "error", error: String(err) }});
    dioxus.send({{ kind: "end" }});
}}
"#,
        continuous = options.continuous,
        interim = options.interim_results,
    )
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum BrowserEvent {
    Start,
    Result { transcript: String },
    Error { error: String },
    End,
}

impl From<BrowserEvent> for SpeechEvent {
    fn from(event: BrowserEvent) -> Self {
        match event {
            BrowserEvent::Start => SpeechEvent::Started,
            BrowserEvent::Result { transcript } => SpeechEvent::Result(transcript),
            BrowserEvent::Error { error } => SpeechEvent::Error(error),
            BrowserEvent::End => SpeechEvent::Ended,
        }
    }
}

#[cfg(feature = "web")]
pub(crate) use browser::{BrowserRecognizer, window_has};

#[cfg(feature = "web")]
mod browser {
    use super::{BrowserEvent, session_script};
    use crate::widget::speech::{RecognitionOptions, SpeechError, SpeechEvent, SpeechRecognizer, SpeechSink};
    use dioxus::prelude::{document, spawn};
    use js_sys::{JsString, Reflect};

    pub(crate) fn window_has(name: &str) -> bool {
        Reflect::has(&js_sys::global(), &JsString::from(name)).unwrap_or(false)
    }

    pub(crate) struct BrowserRecognizer {
        constructor: &'static str,
    }

    impl BrowserRecognizer {
        pub(crate) fn new(constructor: &'static str) -> Self {
            Self { constructor }
        }
    }

    impl SpeechRecognizer for BrowserRecognizer {
        fn start(&self, options: &RecognitionOptions, events: SpeechSink) -> Result<(), SpeechError> {
            let mut session = document::eval(&session_script(self.constructor, options));
            spawn(async move {
                loop {
                    match session.recv::<BrowserEvent>().await {
                        Ok(event) => {
                            let ended = event == BrowserEvent::End;
                            events.emit(event.into());
                            if ended {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "speech session channel closed");
                            events.emit(SpeechEvent::Error(err.to_string()));
                            events.emit(SpeechEvent::Ended);
                            break;
                        }
                    }
                }
            });
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_constructor_means_no_recognizer() {
        assert_eq!(find_constructor(|_| false), None);
    }

    #[test]
    fn test_prefixed_constructor_is_found() {
        assert_eq!(
            find_constructor(|name| name == "webkitSpeechRecognition"),
            Some("webkitSpeechRecognition")
        );
    }

    #[test]
    fn test_unprefixed_constructor_preferred() {
        assert_eq!(find_constructor(|_| true), Some("SpeechRecognition"));
    }

    #[test]
    fn test_session_script_configures_single_utterance() {
        let script = session_script(
            "webkitSpeechRecognition",
            &RecognitionOptions::single_utterance("pt-BR"),
        );
        assert!(script.contains(r#"new window["webkitSpeechRecognition"]()"#));
        assert!(script.contains(r#"recognition.lang = "pt-BR";"#));
        assert!(script.contains("recognition.continuous = false;"));
        assert!(script.contains("recognition.interimResults = false;"));
    }

    #[test]
    fn test_session_script_escapes_language() {
        let script = session_script(
            "SpeechRecognition",
            &RecognitionOptions::single_utterance(r#"en"; alert(1); ""#),
        );
        assert!(script.contains(r#"recognition.lang = "en\"; alert(1); \"";"#));
    }

    #[test]
    fn test_browser_events_map_to_speech_events() {
        let parse = |raw: &str| SpeechEvent::from(serde_json::from_str::<BrowserEvent>(raw).unwrap());
        assert_eq!(parse(r#"{"kind":"start"}"#), SpeechEvent::Started);
        assert_eq!(
            parse(r#"{"kind":"result","transcript":"hello"}"#),
            SpeechEvent::Result("hello".to_string())
        );
        assert_eq!(
            parse(r#"{"kind":"error","error":"no-speech"}"#),
            SpeechEvent::Error("no-speech".to_string())
        );
        assert_eq!(parse(r#"{"kind":"end"}"#), SpeechEvent::Ended);
    }
}
