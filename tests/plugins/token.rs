#[path = "../support/mod.rs"]
mod support;

use support::{
    HOLDER, SPENDER, StubChain, TOKEN, addr, address_word, default_config, run, string_return,
    word, write_config,
};
use alloy_primitives::U256;
use alloy_sol_types::SolCall;
use t0ken::core::artifacts::{self, ArtifactKind};
use t0ken::core::error::T0kenError;
use t0ken::plugins::token::{self, IT0ken};
use tempfile::tempdir;

#[test]
fn balance_of_uses_configured_token_address() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::new();
    chain.reply_with(word(250_000));

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "token", "balanceOf", HOLDER],
        &chain,
    );
    result.unwrap();
    assert_eq!(out, "250000\n");

    let calls = chain.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, addr(TOKEN));
    assert_eq!(&calls[0].1[..4], &IT0ken::balanceOfCall::SELECTOR);
}

#[test]
fn allowance_encodes_both_addresses() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::new();
    chain.reply_with(word(3));

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "token", "allowance", HOLDER, SPENDER],
        &chain,
    );
    result.unwrap();
    assert_eq!(out, "3\n");

    let data = &chain.calls()[0].1;
    assert_eq!(&data[..4], &IT0ken::allowanceCall::SELECTOR);
    assert_eq!(&data[4..36], &address_word(addr(HOLDER))[..]);
    assert_eq!(&data[36..68], &address_word(addr(SPENDER))[..]);
}

#[test]
fn total_supply_prints_full_256_bit_value() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::new();
    let supply = U256::from_str_radix("1000000000000000000000000000", 10).unwrap();
    chain.reply_with(supply.to_be_bytes::<32>().to_vec());

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "token", "totalSupply"],
        &chain,
    );
    result.unwrap();
    assert_eq!(out, "1000000000000000000000000000\n");
}

#[test]
fn string_and_bool_getters_render_plainly() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let config = config.to_str().unwrap();

    let chain = StubChain::new();
    chain.reply_with(string_return("tZERO Preferred"));
    let (result, out) = run(&["--config", config, "token", "name"], &chain);
    result.unwrap();
    assert_eq!(out, "tZERO Preferred\n");

    let chain = StubChain::new();
    chain.reply_with(word(1));
    let (result, out) = run(&["--config", config, "token", "isHolder", HOLDER], &chain);
    result.unwrap();
    assert_eq!(out, "true\n");

    let chain = StubChain::new();
    chain.reply_with(word(0));
    let (result, out) = run(&["--config", config, "token", "issuingFinished"], &chain);
    result.unwrap();
    assert_eq!(out, "false\n");
}

#[test]
fn address_getters_print_checksummed_hex() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::new();
    chain.reply_with(address_word(addr(SPENDER)));

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "token", "issuer"],
        &chain,
    );
    result.unwrap();
    assert_eq!(out, format!("{}\n", addr(SPENDER).to_checksum(None)));
}

#[test]
fn holder_at_encodes_index() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::new();
    chain.reply_with(address_word(addr(HOLDER)));

    let (result, _) = run(
        &["--config", config.to_str().unwrap(), "token", "holderAt", "5"],
        &chain,
    );
    result.unwrap();
    let data = &chain.calls()[0].1;
    assert_eq!(&data[..4], &IT0ken::holderAtCall::SELECTOR);
    assert_eq!(&data[4..], &word(5)[..]);
}

#[test]
fn malformed_arguments_fail_before_connecting() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let config = config.to_str().unwrap();

    for args in [
        vec!["--config", config, "token", "holderAt", "-1"],
        vec!["--config", config, "token", "holderAt", "five"],
        vec!["--config", config, "token", "balanceOf", "0x1234"],
        vec!["--config", config, "token", "balanceOf", HOLDER, "--address", "nope"],
    ] {
        let chain = StubChain::new();
        let (result, out) = run(&args, &chain);
        let err = result.unwrap_err();
        assert!(matches!(err, T0kenError::ArgumentError(_)), "{:?}: {}", args, err);
        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
        assert_eq!(chain.invocations(), 0);
    }
}

#[test]
fn wrong_argument_count_is_an_argument_error() {
    let tmp = tempdir().unwrap();
    let config = default_config(tmp.path());
    let chain = StubChain::new();

    let (result, _) = run(
        &["--config", config.to_str().unwrap(), "token", "balanceOf"],
        &chain,
    );
    assert!(matches!(result, Err(T0kenError::ArgumentError(_))));

    let (result, _) = run(
        &["--config", config.to_str().unwrap(), "token", "name", HOLDER],
        &chain,
    );
    assert!(matches!(result, Err(T0kenError::ArgumentError(_))));
    assert_eq!(chain.invocations(), 0);
}

#[test]
fn revert_is_reported_as_contract_call_error() {
    let tmp = tempdir().unwrap();
    let config = write_config(tmp.path(), &format!("[contracts]\ntoken = \"{}\"\n", TOKEN));
    let chain = StubChain::new();

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "token", "symbol"],
        &chain,
    );
    assert!(matches!(result, Err(T0kenError::ContractCallError(_))));
    assert!(out.is_empty());
}

#[test]
fn bin_prints_embedded_bytecode() {
    let tmp = tempdir().unwrap();
    let config = write_config(tmp.path(), "");
    let chain = StubChain::new();

    let (result, out) = run(
        &["--config", config.to_str().unwrap(), "token", "bin"],
        &chain,
    );
    result.unwrap();
    let expected = artifacts::get(token::ARTIFACT, ArtifactKind::Bin).unwrap();
    assert_eq!(out, format!("{}\n", expected));
    assert_eq!(chain.invocations(), 0);
}

#[test]
fn token_capabilities_follow_contract_getters() {
    let names: Vec<_> = token::registry().commands().iter().map(|c| c.name()).collect();
    assert_eq!(names.first(), Some(&"abi"));
    assert_eq!(names.get(1), Some(&"bin"));
    assert_eq!(&names[names.len() - 2..], &["isLocked", "owner"]);
    assert_eq!(token::registry().contract_key(), token::CONTRACT_KEY);
}
