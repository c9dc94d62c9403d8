use crate::types::SelectedFile;
use crate::widget::{ChatWidget, Snapshot};
use dioxus::events::Key;
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use std::path::Path;
use std::sync::Arc;

const SCROLL_TO_NEWEST: &str = r#"
const list = document.getElementById("chat_messages");
if (list) { list.scrollTop = list.scrollHeight; }
"#;

/// Read the first picked file. Desktop file engines report full paths, the
/// message log only shows the file name.
async fn read_selected_file(files: Arc<dyn FileEngine>) -> Option<SelectedFile> {
    let path = files.files().into_iter().next()?;
    let bytes = files.read_file(&path).await?;
    let name = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    Some(SelectedFile::new(name.unwrap_or(path), bytes))
}

/// Mirror widget state into a signal so the view re-renders on change.
fn use_widget_snapshot(widget: ChatWidget) -> Signal<Snapshot> {
    let initial = widget.snapshot();
    let snapshot = use_signal(move || initial);
    use_future(move || {
        let widget = widget.clone();
        let mut snapshot = snapshot;
        async move {
            let mut changes = widget.subscribe();
            while changes.changed().await.is_ok() {
                snapshot.set(widget.snapshot());
            }
        }
    });
    snapshot
}

fn use_speech_events(widget: ChatWidget) {
    use_future(move || {
        let widget = widget.clone();
        async move {
            let Some(mut events) = widget.take_speech_events() else {
                return;
            };
            while let Some(event) = events.recv().await {
                if let Some(reply) = widget.handle_speech_event(event) {
                    spawn(reply);
                }
            }
        }
    });
}

#[component]
pub fn ChatView() -> Element {
    let widget = use_context::<ChatWidget>();
    let snapshot = use_widget_snapshot(widget.clone());
    use_speech_events(widget.clone());

    use_effect(move || {
        let _newest = snapshot.read().messages.len();
        let _ = document::eval(SCROLL_TO_NEWEST);
    });

    let send = {
        let widget = widget.clone();
        move || {
            if let Some(reply) = widget.submit() {
                spawn(reply);
            }
        }
    };
    let send_on_enter = send.clone();
    let input_widget = widget.clone();
    let mic_widget = widget.clone();
    let upload_widget = widget.clone();

    let Snapshot {
        messages,
        input,
        listening,
    } = snapshot();
    let mic_class = if listening {
        "btn btn-ghost mic-btn mic-active"
    } else {
        "btn btn-ghost mic-btn"
    };

    rsx! {
        div { class: "main-container",
            div { id: "chat_messages", class: "chat-messages",
                for (i, msg) in messages.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: format_args!("chat-message {}", msg.role.class()),
                        "{msg.text}"
                    }
                }
            }

            form { class: "composer no-divider", onsubmit: move |ev| ev.prevent_default(),
                div { class: "composer-inner",
                    label { class: "btn btn-ghost", title: "Upload PDF",
                        "📄"
                        input {
                            id: "pdf_upload",
                            r#type: "file",
                            accept: ".pdf,application/pdf",
                            hidden: true,
                            onchange: move |ev: FormEvent| {
                                let widget = upload_widget.clone();
                                async move {
                                    let file = match ev.files() {
                                        Some(files) => read_selected_file(files).await,
                                        None => None,
                                    };
                                    if let Some(reply) = widget.upload(file) {
                                        reply.await;
                                    }
                                }
                            },
                        }
                    }
                    input {
                        id: "input_box",
                        r#type: "text",
                        placeholder: "Ask something about your documents",
                        value: "{input}",
                        autofocus: true,
                        oninput: move |ev| input_widget.set_input(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                send_on_enter();
                            }
                        },
                    }
                    button {
                        id: "mic_btn",
                        class: mic_class,
                        r#type: "button",
                        title: "Speak",
                        onclick: move |_| mic_widget.activate_mic(),
                        "🎤"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| send(),
                        "Send"
                    }
                }
            }
        }
    }
}
