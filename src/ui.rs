use crate::config::WidgetConfig;
use crate::theme::WIDGET_CSS;
use crate::views::ChatView;
use crate::widget::ChatWidget;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    use_context_provider(build_widget);

    rsx! {
        style { dangerous_inner_html: "{WIDGET_CSS}" }
        AppHeader {}
        ChatView {}
    }
}

fn build_widget() -> ChatWidget {
    let config = WidgetConfig::from_env().unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid configuration, using defaults");
        WidgetConfig::default()
    });
    ChatWidget::from_config(&config)
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        div { class: "header no-divider",
            div { class: "header-content",
                h1 { "Document Chat" }
            }
        }
    }
}
