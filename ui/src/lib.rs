// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod compat;
mod components;
mod screens;
pub mod session;

use components::pico::Container;
use screens::about::AboutScreen;
use screens::deployments::DeploymentsScreen;
use session::VerifySession;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Default)]
enum Screen {
    #[default]
    Deployments,
    About,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Deployments => "Deployments",
            Screen::About => "About",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 2] = [Screen::Deployments, Screen::About];

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if *active_screen.read() == screen { "active-tab" } else { "" },
                            "aria-current": if *active_screen.read() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen.clone());
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .deploy-table thead th {
        position: sticky;
        top: 0;
        background: var(--pico-card-background-color);
        white-space: nowrap;
    }

    .deploy-table tbody tr {
        cursor: pointer;
    }

    .deploy-table tbody tr.selected-row {
        background-color: var(--pico-card-sectioning-background-color);
    }

    .file-tabs {
        display: flex;
        flex-wrap: wrap;
        gap: 0.25rem;
        margin-bottom: 1rem;
    }

    .file-tabs button {
        width: auto;
        margin-bottom: 0;
        padding: 0.25rem 0.75rem;
        font-size: 0.85rem;
    }

    .copy-button {
        width: auto;
        margin-bottom: 0;
        padding: 0 0.5rem;
        line-height: 1.4;
    }

    .source-pane {
        max-height: 50vh;
        overflow: auto;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // The session is the single owner of page state; screens dispatch
    // messages into it and render from it.
    use_context_provider(|| Signal::new(VerifySession::default()));

    let active_screen = use_signal(Screen::default);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            h1 {
                                style: "margin: 0; font-size: 1.4rem;",
                                "Neutron Contract Verification"
                            }
                        }
                    }
                    ul {
                        li {
                            Tabs {
                                active_screen,
                            }
                        }
                    }
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Deployments => rsx! {
                        DeploymentsScreen {}
                    },
                    Screen::About => rsx! {
                        AboutScreen {}
                    },
                }
            }
        }
    }
}
