//! Integration tests: the HTTP client layer against a local stub of the
//! compiler and verifier services.

mod common;

use std::io::Cursor;
use std::io::Write;

use api::client;
use api::endpoints::Endpoints;
use common::stub_server;
use common::stub_server::StubRoute;
use zip::write::SimpleFileOptions;

const HISTORY_PATH: &str = "/compiler/neutron-deploy-histories";
const VERIFY_PATH: &str = "/verification/neutron";

fn endpoints_for(base: &str) -> Endpoints {
    Endpoints {
        compiler_base: base.to_string(),
        verifier_base: base.to_string(),
        chain_id: "testnet".to_string(),
    }
}

fn sample_archive() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("a.txt", options).unwrap();
    writer.write_all(b"contents of a").unwrap();
    writer.add_directory("b/", options).unwrap();
    writer.start_file("b/c.txt", options).unwrap();
    writer.write_all(b"contents of c").unwrap();
    writer.finish().unwrap().into_inner()
}

#[tokio::test]
async fn history_fetch_parses_records_in_arrival_order() {
    let body = r#"[
        {"contractAddress": "neutron1aaa", "envOsName": "ubuntu", "envOsVersion": "22.04",
         "envRustcVersion": "1.69.0", "envCargoWasmVersion": "0.2.0"},
        {"contractAddress": "neutron1bbb", "envOsName": "ubuntu", "envOsVersion": "20.04",
         "envRustcVersion": "1.68.2", "envCargoWasmVersion": "0.2.0"}
    ]"#;
    let (base, log) = stub_server::start(vec![StubRoute::json("GET", HISTORY_PATH, body)]);

    let records = client::fetch_deploy_histories(&endpoints_for(&base))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].contract_address, "neutron1aaa");
    assert_eq!(records[1].contract_address, "neutron1bbb");
    assert_eq!(records[1].env_rustc_version, "1.68.2");

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert!(log[0].contains("chainId=testnet"));
    assert!(log[0].contains("offset=0"));
    assert!(log[0].contains("fetchSize=50"));
}

#[tokio::test]
async fn verified_contract_yields_unpacked_source_batch() {
    let (base, _log) = stub_server::start(vec![StubRoute::bytes("/src/contract.zip", sample_archive())]);
    let verify_body = format!(r#"{{"isVerified": true, "srcUrl": "{base}/src/contract.zip"}}"#);
    let (verifier, _) = stub_server::start(vec![StubRoute::json("POST", VERIFY_PATH, &verify_body)]);

    let mut endpoints = endpoints_for(&base);
    endpoints.verifier_base = verifier;

    let report = client::verify_and_fetch_source(&endpoints, "neutron1aaa")
        .await
        .unwrap();

    assert!(report.outcome.is_verified);
    let files = report.files.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "a.txt");
    assert_eq!(files[0].content, "contents of a");
    assert_eq!(files[1].name, "b/c.txt");
    assert_eq!(files[1].content, "contents of c");
}

#[tokio::test]
async fn failed_verification_never_requests_the_archive() {
    let body = r#"{"isVerified": false, "errMsg": "bytecode mismatch"}"#;
    let (base, log) = stub_server::start(vec![StubRoute::json("POST", VERIFY_PATH, body)]);

    let report = client::verify_and_fetch_source(&endpoints_for(&base), "neutron1bbb")
        .await
        .unwrap();

    assert!(!report.outcome.is_verified);
    assert_eq!(report.outcome.err_msg.as_deref(), Some("bytecode mismatch"));
    assert!(report.files.is_none());

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1, "only the verification POST should have hit the server");
    assert!(log[0].starts_with("POST"));
}

#[tokio::test]
async fn unreachable_archive_keeps_the_verdict() {
    // srcUrl points at a path the stub does not serve, so the download 404s.
    let (base, log) = stub_server::start(Vec::new());
    let verify_body = format!(r#"{{"isVerified": true, "srcUrl": "{base}/src/gone.zip"}}"#);
    let (verifier, _) = stub_server::start(vec![StubRoute::json("POST", VERIFY_PATH, &verify_body)]);

    let mut endpoints = endpoints_for(&base);
    endpoints.verifier_base = verifier;

    let report = client::verify_and_fetch_source(&endpoints, "neutron1ccc")
        .await
        .unwrap();

    assert!(report.outcome.is_verified);
    assert!(report.files.is_none());

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("GET /src/gone.zip"));
}

#[tokio::test]
async fn verifier_transport_error_propagates() {
    let (base, _log) = stub_server::start(vec![StubRoute {
        method: "POST",
        path: VERIFY_PATH.to_string(),
        status: "500 Internal Server Error",
        content_type: "application/json",
        body: Vec::new(),
    }]);

    let result = client::verify_and_fetch_source(&endpoints_for(&base), "neutron1ddd").await;
    assert!(result.is_err());
}
