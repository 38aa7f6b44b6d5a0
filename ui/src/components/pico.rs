//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct CopyButtonProps {
    pub text_to_copy: String,
}

/// A small button that copies its text to the clipboard and briefly shows a
/// check mark. Clicks do not propagate to the enclosing row.
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let mut copied = use_signal(|| false);
    let text = props.text_to_copy.clone();
    rsx! {
        button {
            class: "secondary outline copy-button",
            title: "Copy to clipboard",
            onclick: move |evt| {
                evt.stop_propagation();
                let text = text.clone();
                spawn(async move {
                    if crate::compat::clipboard_set(text).await {
                        copied.set(true);
                        crate::compat::sleep(std::time::Duration::from_millis(1200)).await;
                        copied.set(false);
                    }
                });
            },
            if copied() { "✓" } else { "⧉" }
        }
    }
}
