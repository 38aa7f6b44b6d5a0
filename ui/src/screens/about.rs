// File: src/screens/about.rs
use dioxus::prelude::*;

use crate::components::pico::Card;

#[component]
pub fn AboutScreen() -> Element {
    rsx! {
        Card {
            h3 { "About" }
            p {
                "Neutron Smart Contract Verification is a platform for verifying CosmWasm "
                "smart contracts deployed from Remix IDE. Select a deployment to check it "
                "against the verifier service and browse the verified sources."
            }
            p {
                "Our principle is simple: "
                strong { "'Don't trust, verify'." }
            }
        }
    }
}
