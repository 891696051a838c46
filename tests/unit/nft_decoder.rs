//! NFT Decoder Tests

use sensible_decoder::decoder::decode_into;
use sensible_decoder::types::{CodeType, SensibleLayout, TxoData};

use crate::common::*;

#[test]
fn test_nft_issue_scenario() {
    let script = pad_script(&nft_issue_suffix([0x33; 40], [0x44; 20], 7, 0));
    let mut txo = populated_txo();

    assert_eq!(decode_into(&script, &mut txo), Ok(SensibleLayout::NftIssue));
    assert_eq!(txo.code_type, CodeType::Nft);
    assert_eq!(txo.token_idx, 7);
    assert_eq!(txo.address_pkh, [0x44; 20]);
    assert_eq!(txo.genesis_id, vec![0x33; 40]);
    assert_eq!(txo.code_hash, prefix_hash(&script, 80));
    // Issue outputs carry no metadata reference
    assert_eq!(txo.meta_tx_id, [0xee; 32]);
}

#[test]
fn test_nft_transfer_scenario() {
    let script = pad_script(&nft_transfer_suffix(
        [0x55; 40],
        [0x66; 20],
        2,
        [0x77; 32],
        1,
    ));
    let mut txo = TxoData::default();

    assert!(sensible_decoder::decode_sensible_txo(&script, &mut txo));
    assert_eq!(txo.code_type, CodeType::Nft);
    assert_eq!(txo.token_idx, 2);
    assert_eq!(txo.address_pkh, [0x66; 20]);
    assert_eq!(txo.genesis_id, vec![0x55; 40]);
    assert_eq!(txo.meta_tx_id, [0x77; 32]);
    assert_eq!(txo.code_hash, prefix_hash(&script, 104));
    assert_eq!(txo.layout, Some(SensibleLayout::NftTransfer));
}

#[test]
fn test_token_idx_is_little_endian_u64() {
    let token_idx = 0x0102_0304_0506_0708;
    let script = pad_script(&nft_issue_suffix([0x33; 40], [0x44; 20], token_idx, 0));
    let mut txo = TxoData::default();

    decode_into(&script, &mut txo).unwrap();
    assert_eq!(txo.token_idx, token_idx);
}

#[test]
fn test_nft_code_hash_covers_whole_prefix() {
    // Contract code longer than the padding minimum
    let suffix = nft_transfer_suffix([0x55; 40], [0x66; 20], 2, [0x77; 32], 1);
    let mut script = vec![0xac; 3000];
    script.extend_from_slice(&suffix);
    let mut txo = TxoData::default();

    decode_into(&script, &mut txo).unwrap();
    assert_eq!(txo.code_hash, sensible_decoder::crypto::hash160(&[0xac; 3000]));
}

#[test]
fn test_nft_decode_leaves_ft_fields() {
    let script = pad_script(&nft_transfer_suffix(
        [0x55; 40],
        [0x66; 20],
        2,
        [0x77; 32],
        1,
    ));
    let mut txo = populated_txo();

    decode_into(&script, &mut txo).unwrap();
    assert_eq!(txo.name, "PREVIOUS");
    assert_eq!(txo.symbol, "PRV");
    assert_eq!(txo.amount, 99);
    assert_eq!(txo.sensible_id, vec![0xee; 4]);
}
