#[path = "../support/mod.rs"]
mod support;

use support::{HOLDER, StubChain, addr, default_config, run, write_config};
use t0ken::core::error::T0kenError;
use tempfile::tempdir;

const DEAD: &str = "0x000000000000000000000000000000000000dead";

#[test]
fn next_resolves_alias_from_config() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::with_pending(12);

    let (result, out) = run(&["--config", config.to_str().unwrap(), "nonce", "next", "ops"], &chain);
    result.unwrap();
    assert_eq!(out, "12\n");
    assert_eq!(chain.nonce_queries(), vec![addr(DEAD)]);
}

#[test]
fn next_accepts_hex_address() {
    let tmp = tempdir().unwrap();
    let config = write_config(tmp.path(), "");
    let chain = StubChain::with_pending(4);

    let (result, out) = run(&["--config", config.to_str().unwrap(), "nonce", "next", HOLDER], &chain);
    result.unwrap();
    assert_eq!(out, "4\n");
    assert_eq!(chain.nonce_queries(), vec![addr(HOLDER)]);
}

#[test]
fn next_resolves_keystore_alias() {
    let tmp = tempdir().unwrap();
    let keystore = tmp.path().join("keystore");
    std::fs::create_dir(&keystore).unwrap();
    std::fs::write(
        keystore.join("treasury.json"),
        r#"{"address":"f01ff29dcbee147e9ca151a281bfdf136f66a45b","version":3}"#,
    )
    .unwrap();
    let config = write_config(
        tmp.path(),
        &format!("keystore_dir = {:?}\n", keystore.display().to_string()),
    );
    let chain = StubChain::with_pending(2);

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "nonce", "next", "treasury"],
        &chain,
    );
    result.unwrap();
    assert_eq!(out, "2\n");
    assert_eq!(chain.nonce_queries(), vec![addr(HOLDER)]);
}

#[test]
fn next_unknown_alias_fails_before_connecting() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::with_pending(12);

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "nonce", "next", "nobody"],
        &chain,
    );
    let err = result.unwrap_err();
    assert!(matches!(err, T0kenError::ResolutionError(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
    assert_eq!(chain.invocations(), 0);
}

#[test]
fn next_reports_unreachable_node() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::with_pending(12);
    chain.go_offline();

    let (result, out) = run(&["--config", config.to_str().unwrap(), "nonce", "next", "ops"], &chain);
    assert!(matches!(result, Err(T0kenError::NetworkError(_))));
    assert!(out.is_empty());
}

#[test]
fn allocate_honours_nonce_flag_without_querying() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::with_pending(7);

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "nonce", "allocate", "--nonce", "42"],
        &chain,
    );
    result.unwrap();
    assert_eq!(out, "42\n");
    assert!(chain.nonce_queries().is_empty());
}

#[test]
fn allocate_without_flag_resyncs_then_reads_pending() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::with_pending(7);

    let (result, out) = run(&["--config", config.to_str().unwrap(), "nonce", "allocate"], &chain);
    result.unwrap();
    assert_eq!(out, "7\n");
    // One probe when the default override of 0 is applied, one for the read.
    assert_eq!(chain.nonce_queries(), vec![addr(DEAD), addr(DEAD)]);
}

#[test]
fn allocate_uses_from_flag_over_config_signer() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::with_pending(3);

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "--from", HOLDER, "nonce", "allocate"],
        &chain,
    );
    result.unwrap();
    assert_eq!(out, "3\n");
    assert!(chain.nonce_queries().iter().all(|a| *a == addr(HOLDER)));
}

#[test]
fn allocate_requires_a_signer() {
    let tmp = tempdir().unwrap();
    let config = write_config(tmp.path(), "");
    let chain = StubChain::with_pending(3);

    let (result, _) = run(&["--config", config.to_str().unwrap(), "nonce", "allocate"], &chain);
    assert!(matches!(result, Err(T0kenError::ResolutionError(_))));
    assert_eq!(chain.invocations(), 0);
}

#[test]
fn allocate_rejects_non_numeric_nonce() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::with_pending(3);

    let (result, _) = run(
        &["--config", config.to_str().unwrap(), "nonce", "allocate", "--nonce", "soon"],
        &chain,
    );
    let err = result.unwrap_err();
    assert!(matches!(err, T0kenError::ArgumentError(_)));
    assert_eq!(err.exit_code(), 2);
}
