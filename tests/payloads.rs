//! Payload builders through the public API, as a wallet would consume them.

use predmarket_sdk::error::{BuildError, EncodeError, EncodeErrorKind};
use predmarket_sdk::prelude::*;
use serde_json::json;

fn custom_protocol() -> ProtocolConfig {
    serde_json::from_value(json!({
        "router_address": "0xcafe",
        "market_address": "0xbeef",
        "market_module": "binary_market"
    }))
    .unwrap()
}

fn padded(short: &str) -> String {
    format!("0x{:0>64}", short)
}

#[test]
fn test_swap_payload_json_shape() {
    let protocol = custom_protocol();
    let payload = build_swap_payload(
        &SwapParams {
            pool: "0x01".into(),
            direction: SwapDirection::AToB,
            amount_in: "1000".into(),
            min_amount_out: Some(990u64.into()),
        },
        &protocol,
    )
    .unwrap();

    let value = payload.to_json().unwrap();
    assert_eq!(
        value["function"],
        format!("{}::router::swap", padded("cafe"))
    );
    assert_eq!(value["typeArguments"], json!([]));

    let args = value["functionArguments"].as_array().unwrap();
    assert_eq!(args.len(), 1);
    let blob = args[0].as_str().unwrap();
    // 49 bytes as 0x-prefixed hex
    assert_eq!(blob.len(), 2 + 49 * 2);
    assert_eq!(&blob[66..68], "01");
    assert_eq!(&blob[68..84], "e803000000000000");
    assert_eq!(&blob[84..], "de03000000000000");
}

#[test]
fn test_market_payload_json_shape() {
    let protocol = custom_protocol();
    let payload = build_buy_shares_payload(
        &BuySharesParams {
            market: "0x2a".into(),
            amount: u64::MAX.into(),
            is_yes: false,
        },
        &protocol,
    )
    .unwrap();

    assert_eq!(
        payload.to_json().unwrap(),
        json!({
            "function": format!("{}::binary_market::buy_shares", padded("beef")),
            "typeArguments": [],
            "functionArguments": [padded("2a"), "18446744073709551615", false]
        })
    );
}

#[test]
fn test_create_market_argument_order() {
    let payload = build_create_market_payload(
        &CreateMarketParams {
            description: "ETH above 5k by June?".into(),
            resolution_time: 1_780_000_000u64.into(),
            resolver: "0x03".into(),
            oracle_id: "chainlink:ETH/USD".into(),
            target_address: "0x04".into(),
            target_function: "get_price".into(),
            target_value: "5000".into(),
            operator: ComparisonOperator::LessThan as u8,
        },
        &custom_protocol(),
    )
    .unwrap();

    let value = payload.to_json().unwrap();
    assert_eq!(
        value["functionArguments"],
        json!([
            "ETH above 5k by June?",
            "1780000000",
            padded("3"),
            "chainlink:ETH/USD",
            padded("4"),
            "get_price",
            "5000",
            "1"
        ])
    );
}

#[test]
fn test_create_pool_and_add_liquidity_blobs() {
    let protocol = custom_protocol();
    let pool = build_create_pool_payload(
        &CreatePoolParams {
            token_a: "0x0a".into(),
            token_b: "0x0b".into(),
            hook_type: None,
            fee_rate: None,
        },
        &protocol,
    )
    .unwrap();
    let blob = pool.blob().unwrap();
    assert_eq!(blob.len(), 74);
    assert_eq!(&blob[..2], &[0x04, 0x02]);
    assert_eq!(&blob[66..], &3000u64.to_le_bytes());

    let fresh = build_add_liquidity_payload(
        &AddLiquidityParams {
            pool: "0x0a".into(),
            position: None,
            amount_a: 5u64.into(),
            amount_b: 6u64.into(),
            min_output: None,
        },
        &protocol,
    )
    .unwrap();
    let existing = build_add_liquidity_payload(
        &AddLiquidityParams {
            pool: "0x0a".into(),
            position: Some("0x0c".into()),
            amount_a: 5u64.into(),
            amount_b: 6u64.into(),
            min_output: None,
        },
        &protocol,
    )
    .unwrap();

    assert_eq!(fresh.blob().unwrap().len(), 57);
    assert_eq!(fresh.blob().unwrap()[32], 0x00);
    assert_eq!(existing.blob().unwrap().len(), 57 + 32);
    assert_eq!(existing.blob().unwrap()[32], 0x01);
}

#[test]
fn test_buy_and_sell_differ_only_in_function() {
    let protocol = custom_protocol();
    let params = TradeSharesParams {
        market: "0x77".into(),
        amount: 10u64.into(),
        is_yes: true,
    };

    let buy = build_buy_shares_payload(&params, &protocol).unwrap();
    let sell = build_sell_shares_payload(&params, &protocol).unwrap();

    assert_eq!(buy.arguments, sell.arguments);
    assert_ne!(buy.function, sell.function);
}

#[test]
fn test_invalid_inputs_never_produce_payloads() {
    let protocol = custom_protocol();

    let bad_pool = build_swap_payload(
        &SwapParams {
            pool: "0xnotanaddress".into(),
            direction: SwapDirection::BToA,
            amount_in: 1u64.into(),
            min_amount_out: None,
        },
        &protocol,
    );
    assert!(matches!(
        bad_pool,
        Err(BuildError::Encode(EncodeError::InvalidHex(_)))
    ));

    let odd_market = build_buy_shares_payload(
        &TradeSharesParams {
            market: "0xabc".into(),
            amount: 1u64.into(),
            is_yes: true,
        },
        &protocol,
    );
    match odd_market {
        Err(BuildError::Encode(e)) => assert_eq!(e.kind(), EncodeErrorKind::Format),
        other => panic!("expected format error, got {:?}", other),
    }

    let negative = build_sell_shares_payload(
        &TradeSharesParams {
            market: "0x01".into(),
            amount: (-5i64).into(),
            is_yes: true,
        },
        &protocol,
    );
    match negative {
        Err(BuildError::Encode(e)) => assert_eq!(e.kind(), EncodeErrorKind::Range),
        other => panic!("expected range error, got {:?}", other),
    }

    let overflow = build_create_pool_payload(
        &CreatePoolParams {
            token_a: "0x01".into(),
            token_b: "0x02".into(),
            hook_type: None,
            fee_rate: Some("18446744073709551616".into()),
        },
        &protocol,
    );
    assert!(matches!(
        overflow,
        Err(BuildError::Encode(EncodeError::OutOfRange { .. }))
    ));
}

#[test]
fn test_scaled_amount_feeds_builder() {
    let amount = scale_amount("12.5".parse().unwrap(), 6).unwrap();
    let payload = build_buy_shares_payload(
        &TradeSharesParams {
            market: "0x01".into(),
            amount: amount.into(),
            is_yes: true,
        },
        &custom_protocol(),
    )
    .unwrap();

    assert_eq!(payload.arguments[1], Argument::U64(12_500_000));
}
