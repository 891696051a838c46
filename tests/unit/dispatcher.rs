//! Dispatcher Tests
//!
//! Length gate, flag routing, NFT branch ordering and the guarantee that a
//! rejected script leaves the caller's record untouched.

use sensible_decoder::decoder::{decode_into, decode_sensible_txo, DecoderError};
use sensible_decoder::types::{CodeType, SensibleLayout, TxoData};

use crate::common::*;

#[test]
fn test_short_script_rejected_and_untouched() {
    let script = vec![0u8; 1023];
    let mut txo = populated_txo();

    assert!(!decode_sensible_txo(&script, &mut txo));
    assert_eq!(txo, populated_txo());
}

#[test]
fn test_short_script_rejected_whatever_its_suffix() {
    // A valid FT v3 suffix in front of too little contract code
    let suffix = token_fields(&[0x22; 20]).suffix(92);
    let script = pad_script_to(&suffix, 1023);
    let mut txo = TxoData::default();

    assert_eq!(
        decode_into(&script, &mut txo),
        Err(DecoderError::ScriptTooShort {
            len: 1023,
            min: 1024
        })
    );
    assert_eq!(txo, TxoData::default());
}

#[test]
fn test_min_length_without_suffix_rejected() {
    let script = vec![0u8; MIN_SCRIPT_LEN];
    let mut txo = populated_txo();

    assert_eq!(
        decode_into(&script, &mut txo),
        Err(DecoderError::UnrecognisedLayout)
    );
    assert_eq!(txo, populated_txo());
}

#[test]
fn test_unknown_proto_type_rejected() {
    let mut script = ft_v3_script();
    let len = script.len();
    script[len - 12] = 7;
    let mut txo = populated_txo();

    assert_eq!(
        decode_into(&script, &mut txo),
        Err(DecoderError::UnknownProtoType(7))
    );
    assert_eq!(txo, populated_txo());
}

#[test]
fn test_flag_routes_to_unique_not_nft() {
    let script = pad_script(&unique_suffix(&[], 0, [0x88; 36], SENSIBLE));
    let mut txo = TxoData::default();

    assert!(decode_sensible_txo(&script, &mut txo));
    assert_eq!(txo.code_type, CodeType::Unique);
}

#[test]
fn test_rejected_ft_probe_leaves_record_untouched() {
    let mut script = ft_v3_script();
    let len = script.len();
    // Pushdata length byte one above the v3 value
    script[len - 93] = 93;
    let mut txo = populated_txo();

    assert_eq!(
        decode_into(&script, &mut txo),
        Err(DecoderError::NoFtVersion)
    );
    assert_eq!(txo, populated_txo());
}

#[test]
fn test_issue_markers_with_final_byte_one_decode_as_issue() {
    let script = pad_script(&nft_issue_suffix([0x33; 40], [0x44; 20], 7, 1));
    let mut txo = TxoData::default();

    assert_eq!(decode_into(&script, &mut txo), Ok(SensibleLayout::NftIssue));
    assert_eq!(txo.token_idx, 7);
}

#[test]
fn test_issue_markers_with_other_final_byte_rejected() {
    let script = pad_script(&nft_issue_suffix([0x33; 40], [0x44; 20], 7, 2));
    let mut txo = populated_txo();

    assert_eq!(
        decode_into(&script, &mut txo),
        Err(DecoderError::UnrecognisedLayout)
    );
    assert_eq!(txo, populated_txo());
}

#[test]
fn test_transfer_markers_need_final_byte_one() {
    let script = pad_script(&nft_transfer_suffix(
        [0x55; 40],
        [0x66; 20],
        2,
        [0x77; 32],
        0,
    ));
    let mut txo = populated_txo();

    assert_eq!(
        decode_into(&script, &mut txo),
        Err(DecoderError::UnrecognisedLayout)
    );
    assert_eq!(txo, populated_txo());
}

#[test]
fn test_nft_markers_ignored_behind_sensible_flag() {
    // NFT issue bytes followed by a Unique-typed flag trailer: routing is by flag
    let mut suffix = nft_issue_suffix([0x33; 40], [0x44; 20], 7, 0);
    suffix.extend_from_slice(&9u32.to_le_bytes());
    suffix.extend_from_slice(SENSIBLE);
    let script = pad_script(&suffix);
    let mut txo = TxoData::default();

    assert_eq!(
        decode_into(&script, &mut txo),
        Err(DecoderError::UnknownProtoType(9))
    );
}

#[test]
fn test_error_tags_are_stable() {
    assert_eq!(DecoderError::NoFtVersion.tag(), "NO_FT_VERSION");
    assert_eq!(DecoderError::UnrecognisedLayout.tag(), "UNRECOGNISED");
    assert_eq!(
        DecoderError::UniqueLengthOverflow {
            data_len: 2000,
            script_len: 1024
        }
        .tag(),
        "UNIQUE_LENGTH_OVERFLOW"
    );
}
