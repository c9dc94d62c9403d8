/// Stylesheet for the chat widget. Colors follow the system light/dark
/// preference.
pub const WIDGET_CSS: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-overlay: rgba(255, 255, 255, 0.92);
    --color-text-primary: #000000;
    --color-text-muted: #4a4a4a;
    --color-border: #000000;
    --color-surface-muted: #e6e6e6;
    --color-input-border: #c2c2c2;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #111111;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #f5f5f5;
    --color-chat-bot-text: #000000;
    --color-chat-error-bg: #ffe0d1;
    --color-chat-error-text: #8a1c00;
}
@media (prefers-color-scheme: dark) {
    :root {
        --color-bg-primary: #000000;
        --color-bg-overlay: rgba(0, 0, 0, 0.9);
        --color-text-primary: #ffffff;
        --color-text-muted: #cfcfcf;
        --color-border: #ffffff;
        --color-surface-muted: #111111;
        --color-input-border: #2a2a2a;
        --color-input-bg: #000000;
        --color-chat-user-bg: #ffffff;
        --color-chat-user-text: #000000;
        --color-chat-bot-bg: #111111;
        --color-chat-bot-text: #ffffff;
        --color-chat-error-bg: #2a0a00;
        --color-chat-error-text: #ff8a6b;
    }
}
body { margin: 0; font-family: system-ui, sans-serif; background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { padding: 0.75rem 1rem; border-bottom: 1px solid var(--color-input-border); }
.header h1 { margin: 0; font-size: 1.1rem; }
.main-container { display: flex; flex-direction: column; height: calc(100vh - 3.5rem); }
.chat-messages { flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
.chat-message { max-width: 75%; padding: 0.5rem 0.75rem; border-radius: 0.75rem; white-space: pre-wrap; }
.chat-message.user { align-self: flex-end; background: var(--color-chat-user-bg); color: var(--color-chat-user-text); }
.chat-message.bot { align-self: flex-start; background: var(--color-chat-bot-bg); color: var(--color-chat-bot-text); }
.chat-message.error { align-self: flex-start; background: var(--color-chat-error-bg); color: var(--color-chat-error-text); }
.composer { background: var(--color-bg-overlay); border-top: 1px solid var(--color-border); padding: 0.75rem; }
.composer-inner { display: flex; gap: 0.5rem; align-items: center; }
.composer input[type="text"] { flex: 1; padding: 0.5rem; background: var(--color-input-bg); color: var(--color-text-primary); border: 1px solid var(--color-input-border); border-radius: 0.5rem; }
.composer input[type="text"]:focus { border-color: var(--color-border); outline: none; }
.btn { cursor: pointer; border: 1px solid var(--color-input-border); background: transparent; color: var(--color-text-primary); border-radius: 0.5rem; padding: 0.45rem 0.75rem; }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.btn-primary { border-color: var(--color-border); }
.mic-btn.mic-active { filter: invert(34%) sepia(89%) saturate(7483%) hue-rotate(358deg); }
"#;
