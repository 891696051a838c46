//! FT Decoder Tests
//!
//! One fixture per layout version, plus the v5 genesis hashing rule and
//! name/symbol trimming.

use sensible_decoder::crypto::hash160;
use sensible_decoder::decoder::{decode_into, decode_script, DecoderError};
use sensible_decoder::types::{CodeType, FtVersion, SensibleLayout, TxoData};

use crate::common::*;

fn decode_ok(script: &[u8]) -> TxoData {
    decode_script(script).expect("fixture should decode")
}

#[test]
fn test_ft_v3_scenario() {
    let script = ft_v3_script();
    let mut txo = TxoData::default();

    assert!(sensible_decoder::decode_sensible_txo(&script, &mut txo));
    assert_eq!(txo.code_type, CodeType::Ft);
    assert_eq!(txo.name, "TOKEN");
    assert_eq!(txo.symbol, "TKN");
    assert_eq!(txo.name_bytes, b"TOKEN".to_vec());
    assert_eq!(txo.symbol_bytes, b"TKN".to_vec());
    assert_eq!(txo.decimal, 8);
    assert_eq!(txo.amount, 100_000_000);
    assert_eq!(txo.address_pkh, [0x11; 20]);
    assert_eq!(txo.genesis_id, vec![0x22; 20]);
    assert_eq!(txo.sensible_id, txo.genesis_id);
    assert_eq!(txo.code_hash, prefix_hash(&script, 95));
    assert_eq!(
        txo.layout,
        Some(SensibleLayout::Ft {
            version: FtVersion::V3
        })
    );
}

#[test]
fn test_ft_v5_scenario() {
    let script = ft_v5_script();
    let source = ft_v5_source();
    let txo = decode_ok(&script);

    assert_eq!(txo.code_type, CodeType::Ft);
    assert_eq!(txo.genesis_id, hash160(&source).to_vec());
    assert_eq!(txo.sensible_id, source[40..].to_vec());
    assert_ne!(txo.sensible_id, txo.genesis_id);
    assert_eq!(txo.name, "TOKEN");
    assert_eq!(txo.amount, 100_000_000);
    assert_eq!(txo.code_hash, prefix_hash(&script, 151));
    assert_eq!(
        txo.layout,
        Some(SensibleLayout::Ft {
            version: FtVersion::V5
        })
    );
}

#[test]
fn test_ft_v4_scenario() {
    let genesis = [0x44; 36];
    let script = pad_script(&token_fields(&genesis).suffix(108));
    let txo = decode_ok(&script);

    assert_eq!(txo.genesis_id, genesis.to_vec());
    assert_eq!(txo.sensible_id, genesis.to_vec());
    assert_eq!(txo.symbol, "TKN");
    assert_eq!(txo.code_hash, prefix_hash(&script, 111));
    assert_eq!(
        txo.layout,
        Some(SensibleLayout::Ft {
            version: FtVersion::V4
        })
    );
}

#[test]
fn test_ft_v2_scenario() {
    // The 86-byte v2 push starts inside the symbol; only the trailing fields are asserted
    let genesis = [0x55; 36];
    let script = pad_script(&token_fields(&genesis).suffix(86));
    let txo = decode_ok(&script);

    assert_eq!(txo.decimal, 8);
    assert_eq!(txo.amount, 100_000_000);
    assert_eq!(txo.address_pkh, [0x11; 20]);
    assert_eq!(txo.genesis_id, genesis.to_vec());
    assert_eq!(txo.sensible_id, genesis.to_vec());
    assert_eq!(txo.code_hash, prefix_hash(&script, 89));
    assert_eq!(
        txo.layout,
        Some(SensibleLayout::Ft {
            version: FtVersion::V2
        })
    );
}

#[test]
fn test_ft_v1_scenario() {
    let genesis = [0x66; 20];
    let script = pad_script(&token_fields(&genesis).suffix(112));
    let txo = decode_ok(&script);

    assert_eq!(txo.name, "TOKEN");
    assert_eq!(txo.symbol, "TKN");
    assert_eq!(txo.genesis_id, genesis.to_vec());
    assert_eq!(txo.sensible_id, genesis.to_vec());
    assert_eq!(txo.code_hash, prefix_hash(&script, 115));
    assert_eq!(
        txo.layout,
        Some(SensibleLayout::Ft {
            version: FtVersion::V1
        })
    );
}

#[test]
fn test_genesis_id_lengths_per_version() {
    let cases: [(u8, usize, usize); 5] = [
        (148, 76, 20),
        (108, 36, 36),
        (92, 20, 20),
        (86, 36, 36),
        (112, 20, 20),
    ];
    for (push_len, source_len, expected) in cases {
        let source = vec![0x5a; source_len];
        let script = pad_script(&token_fields(&source).suffix(push_len));
        let txo = decode_ok(&script);
        assert_eq!(txo.genesis_id.len(), expected, "push length {}", push_len);
        assert_eq!(txo.code_hash.len(), 20);
        assert_eq!(txo.address_pkh.len(), 20);
    }
}

#[test]
fn test_oraclesv_flag_accepted() {
    let genesis = [0x22; 20];
    let mut fields = token_fields(&genesis);
    fields.flag = ORACLESV;
    let txo = decode_ok(&pad_script(&fields.suffix(92)));

    assert_eq!(txo.code_type, CodeType::Ft);
    assert_eq!(txo.name, "TOKEN");
}

#[test]
fn test_full_width_name_and_embedded_nul() {
    let genesis = [0x22; 20];
    let mut fields = token_fields(&genesis);
    fields.name = "ABCDEFGHIJKLMNOPQRST";
    fields.symbol = "A\0B";
    let txo = decode_ok(&pad_script(&fields.suffix(92)));

    assert_eq!(txo.name, "ABCDEFGHIJKLMNOPQRST");
    assert_eq!(txo.symbol, "A\0B");
}

#[test]
fn test_non_utf8_name_and_symbol_kept_raw() {
    let mut script = ft_v3_script();
    let len = script.len();
    script[len - 92..len - 72].copy_from_slice(&[0xff; 20]);
    // "A" then a three-byte character cut off after its second byte
    let symbol = [b'A', 0xe4, 0xb8, 0, 0, 0, 0, 0, 0, 0];
    script[len - 72..len - 62].copy_from_slice(&symbol);
    let txo = decode_ok(&script);

    assert_eq!(txo.name_bytes, vec![0xff; 20]);
    assert_eq!(txo.symbol_bytes, vec![b'A', 0xe4, 0xb8]);
    assert!(txo.name_bytes.len() <= 20);
    assert!(txo.symbol_bytes.len() <= 10);
    assert_eq!(txo.name, "\u{fffd}".repeat(20));
    assert_eq!(txo.symbol, "A\u{fffd}");

    let json = serde_json::to_value(&txo).unwrap();
    assert_eq!(json["name_bytes"], "ff".repeat(20));
    assert_eq!(json["symbol_bytes"], "41e4b8");
}

#[test]
fn test_is_genesis_byte_not_part_of_symbol_or_decimal() {
    let genesis = [0x22; 20];
    let mut fields = token_fields(&genesis);
    fields.is_genesis = 1;
    let txo = decode_ok(&pad_script(&fields.suffix(92)));

    assert_eq!(txo.symbol, "TKN");
    assert_eq!(txo.decimal, 8);
}

#[test]
fn test_off_by_one_pushdata_length_rejected() {
    for push_len in [91u8, 93] {
        let mut script = ft_v3_script();
        let len = script.len();
        script[len - 93] = push_len;
        let mut txo = TxoData::default();
        assert_eq!(
            decode_into(&script, &mut txo),
            Err(DecoderError::NoFtVersion),
            "push length {}",
            push_len
        );
    }
}

#[test]
fn test_missing_pushdata_opcode_rejected() {
    let mut script = ft_v3_script();
    let len = script.len();
    script[len - 94] = 0x4d;
    assert_eq!(decode_script(&script), Err(DecoderError::NoFtVersion));
}

#[test]
fn test_ft_decode_keeps_nft_fields() {
    let script = ft_v3_script();
    let mut txo = populated_txo();
    decode_into(&script, &mut txo).unwrap();

    let expected = TxoData {
        token_idx: 99,
        meta_tx_id: [0xee; 32],
        ..decode_ok(&script)
    };
    assert_eq!(txo, expected);
}
