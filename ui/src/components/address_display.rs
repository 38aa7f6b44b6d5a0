use dioxus::prelude::*;

use crate::components::pico::CopyButton;

/// A small helper component to display a contract address abbreviated, with
/// the full address as a tooltip and a copy button.
#[component]
pub fn AddressDisplay(address: String) -> Element {
    let abbreviated = if address.len() > 21 {
        format!(
            "{}...{}",
            &address[..12],
            &address[address.len() - 6..]
        )
    } else {
        address.clone()
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            code {
                title: "{address}",
                "{abbreviated}"
            }
            CopyButton {
                text_to_copy: address.clone(),
            }
        }
    }
}
