use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::session::Msg;
use crate::session::VerifySession;

/// The viewer pane: one tab button per extracted file, and the active file's
/// content in a code surface. Renders nothing while no batch is published.
#[component]
pub fn SourceViewer() -> Element {
    let mut session = use_context::<Signal<VerifySession>>();

    let (files, active) = {
        let session = session.read();
        (session.files().to_vec(), session.active_file())
    };

    if files.is_empty() {
        return rsx! {};
    }

    rsx! {
        Card {
            h3 { "Verified Sources" }
            div {
                class: "file-tabs",
                for (index, file) in files.iter().enumerate() {
                    button {
                        class: if index == active { "file-tab" } else { "file-tab outline secondary" },
                        "aria-current": if index == active { "true" } else { "false" },
                        onclick: move |_| {
                            session.write().apply(Msg::FileTabSelected(index));
                        },
                        "{file.name}"
                    }
                }
            }
            if let Some(file) = files.get(active) {
                h5 { "{file.name}" }
                pre {
                    class: "source-pane",
                    code { "{file.content}" }
                }
            }
        }
    }
}
