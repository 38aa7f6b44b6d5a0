//=============================================================================
// File: src/screens/deployments.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus_logger::tracing;

use api::deploy_record::DeploymentRecord;

use crate::components::address_display::AddressDisplay;
use crate::components::pico::Card;
use crate::components::source_viewer::SourceViewer;
use crate::session::Msg;
use crate::session::VerifySession;

/// A self-contained component for rendering a single row in the deployment
/// table. Clicking it kicks off the verification flow for its record.
#[component]
fn DeploymentRow(record: DeploymentRecord) -> Element {
    let mut session = use_context::<Signal<VerifySession>>();

    let is_selected = session
        .read()
        .selected()
        .map(|selected| selected.contract_address == record.contract_address)
        .unwrap_or(false);

    let row_record = record.clone();
    rsx! {
        tr {
            class: if is_selected { "selected-row" } else { "" },
            onclick: move |_| {
                let record = row_record.clone();
                let seq = session.write().begin_verification(record.clone());
                spawn(async move {
                    match api::verify_contract(record.contract_address.clone()).await {
                        Ok(report) => {
                            session.write().apply(Msg::VerificationFinished { seq, report });
                        }
                        Err(e) => {
                            tracing::warn!(
                                "verification request for {} failed: {e}",
                                record.contract_address
                            );
                            session.write().apply(Msg::VerificationFailed {
                                seq,
                                message: e.to_string(),
                            });
                        }
                    }
                });
            },

            td { AddressDisplay { address: record.contract_address.clone() } }
            td { "{record.env_os_name}" }
            td { "{record.env_os_version}" }
            td { "{record.env_rustc_version}" }
            td { "{record.env_cargo_wasm_version}" }
        }
    }
}

/// The status block under the table: progress while a verification is in
/// flight, then the latest verdict or transport error.
#[component]
fn VerificationStatus() -> Element {
    let session = use_context::<Signal<VerifySession>>();

    let (verifying, selected_address, request_error, outcome) = {
        let session = session.read();
        (
            session.is_verifying(),
            session
                .selected()
                .map(|record| record.contract_address.clone()),
            session.request_error().map(str::to_string),
            session.verification().cloned(),
        )
    };

    if verifying {
        let address = selected_address.unwrap_or_default();
        return rsx! {
            Card {
                p { "Verifying {address}..." }
                progress {}
            }
        };
    }

    if let Some(message) = request_error {
        return rsx! {
            Card {
                h4 { "Verification Request Failed" }
                p { "{message}" }
            }
        };
    }

    match outcome {
        Some(outcome) if outcome.is_verified => {
            let src_url = outcome.src_url.unwrap_or_default();
            rsx! {
                Card {
                    h4 { "Verification Successful" }
                    p { "{src_url}" }
                }
            }
        }
        Some(outcome) => {
            let err_msg = outcome.err_msg.unwrap_or_default();
            rsx! {
                Card {
                    h4 { "Verification Failed" }
                    p { "{err_msg}" }
                }
            }
        }
        None => rsx! {},
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DeploymentsScreen() -> Element {
    let mut session = use_context::<Signal<VerifySession>>();
    let mut histories = use_resource(move || async move { api::deploy_histories().await });

    // Publish the fetched page into the session. The comparison prevents a
    // re-publish loop when the resource settles on the same data.
    use_effect(move || {
        if let Some(Ok(records)) = histories.read().as_ref() {
            if !session.peek().has_history(records) {
                session.write().apply(Msg::HistoryLoaded(records.clone()));
            }
        }
    });

    rsx! {
        match &*histories.read() {
            None => rsx! {
                Card {
                    h3 { "Deployments" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load deploy histories: {e}" }
                    button { onclick: move |_| histories.restart(), "Retry" }
                }
            },
            Some(Ok(_)) => {
                let records = session.read().records().to_vec();
                rsx! {
                    Card {
                        h3 { "Deployments ({records.len()})" }
                        div {
                            style: "max-height: 60vh; overflow-y: auto;",
                            table {
                                class: "deploy-table",
                                thead { tr {
                                    th { "Contract Address" }
                                    th { "OS" }
                                    th { "OS Version" }
                                    th { "Rust Version" }
                                    th { "Cargo Version" }
                                }}
                                tbody {
                                    for record in records.iter() {
                                        DeploymentRow {
                                            key: "{record.contract_address}",
                                            record: record.clone(),
                                        }
                                    }
                                }
                            }
                        }
                    }
                    VerificationStatus {}
                    SourceViewer {}
                }
            }
        }
    }
}
