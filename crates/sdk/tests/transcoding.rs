// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Round-trip and wire-shape checks across every parameter record.

use primitive_types::U256;
use serde_json::{Value, json};
use switchboard_aptos::codec::{JsonForm, MoveParams, MoveStruct, TranscodeError};
use switchboard_aptos::params::*;
use switchboard_aptos::transaction::{EntryCall, ProgramAddresses};
use switchboard_aptos::types::{AccountAddress, SwitchboardDecimal};

fn addr(byte: u8) -> AccountAddress {
    AccountAddress::new([byte; 32])
}

fn assert_round_trips<P>(params: &P)
where
    P: MoveParams + PartialEq + std::fmt::Debug,
{
    let values = params.to_values();
    for spec in P::FIELDS {
        assert!(
            values.get(spec.name).is_some_and(|v| v.matches(spec.kind)),
            "`{}` is missing or does not match {:?}",
            spec.name,
            spec.kind
        );
    }

    assert_eq!(&P::from_json(&params.to_json()).unwrap(), params);
    assert_eq!(&P::from_move_struct(&params.to_move_struct()).unwrap(), params);

    // Both forms survive a trip through their serialized text.
    let text = serde_json::to_string(&params.to_move_struct()).unwrap();
    let parsed: MoveStruct = serde_json::from_str(&text).unwrap();
    assert_eq!(&P::from_move_struct(&parsed).unwrap(), params);

    let text = serde_json::to_string(&params.to_json()).unwrap();
    let parsed: JsonForm = serde_json::from_str(&text).unwrap();
    assert_eq!(&P::from_json(&parsed).unwrap(), params);
}

fn assert_entry_shape<P: EntryCall>(params: &P, expected_args: usize) {
    let program = ProgramAddresses {
        contract: addr(0xc0),
        state: addr(0x5e),
    };
    let payload = serde_json::to_value(params.payload(&program).unwrap()).unwrap();

    assert_eq!(payload["type"], json!("entry_function_payload"));
    assert_eq!(
        payload["function"],
        json!(format!("{}::{}::run", addr(0xc0), P::MODULE))
    );
    assert_eq!(payload["type_arguments"], json!([]));
    assert_eq!(payload["arguments"][0], json!(addr(0x5e).to_string()));
    assert_eq!(payload["arguments"].as_array().unwrap().len(), expected_args + 1);
}

fn big() -> U256 {
    U256::from(u64::MAX) * U256::from(1000u64)
}

fn aggregator_init() -> AggregatorInitParams {
    AggregatorInitParams {
        address: addr(1),
        authority: addr(2),
        name: b"BTC/USD".to_vec(),
        metadata: vec![],
        queue_address: addr(3),
        batch_size: U256::from(4),
        min_oracle_results: U256::from(3),
        min_job_results: U256::from(2),
        min_update_delay_seconds: U256::from(u64::MAX),
        start_after: big(),
        variance_threshold: SwitchboardDecimal::new(25u64, 1, false),
        force_report_period: U256::zero(),
        expiration: U256::from(3600),
    }
}

fn queue() -> OracleQueueSetConfigsParams {
    OracleQueueSetConfigsParams {
        address: addr(9),
        name: b"permissionless".to_vec(),
        metadata: vec![],
        authority: addr(8),
        oracle_timeout: U256::from(180),
        reward: U256::from(u64::MAX),
        min_stake: big(),
        slashing_enabled: true,
        variance_tolerance_multiplier: SwitchboardDecimal::new(2u64, 0, false),
        feed_probation_period: U256::from(100),
        consecutive_feed_failure_limit: U256::from(1000),
        consecutive_oracle_failure_limit: U256::from(1000),
        unpermissioned_feeds_enabled: true,
        lock_lease_funding: false,
        max_size: U256::from(256),
    }
}

#[test]
fn test_every_record_round_trips() {
    let init = aggregator_init();
    assert_round_trips(&init);

    let set_config = AggregatorSetConfigParams {
        address: init.address,
        authority: init.authority,
        name: init.name.clone(),
        metadata: b"updated".to_vec(),
        queue_address: init.queue_address,
        batch_size: init.batch_size,
        min_oracle_results: init.min_oracle_results,
        min_job_results: init.min_job_results,
        min_update_delay_seconds: init.min_update_delay_seconds,
        start_after: init.start_after,
        variance_threshold: SwitchboardDecimal::new(1u64, 2, true),
        force_report_period: init.force_report_period,
        expiration: init.expiration,
    };
    assert_round_trips(&set_config);

    assert_round_trips(&AggregatorAddJobParams {
        aggregator_address: addr(1),
        job: addr(4),
        weight: 255,
    });
    assert_round_trips(&AggregatorRemoveJobParams {
        aggregator_address: addr(1),
        job: addr(4),
    });
    assert_round_trips(&AggregatorSaveResultParams {
        oracle_address: addr(6),
        aggregator_address: addr(1),
        oracle_idx: U256::from(2),
        error: false,
        value: SwitchboardDecimal::new(big(), 18, true),
        jobs_checksum: vec![0xde, 0xad, 0xbe, 0xef],
    });
    assert_round_trips(&AggregatorOpenRoundParams {
        aggregator_address: addr(1),
    });
    assert_round_trips(&JobInitParams {
        address: addr(4),
        name: vec![],
        metadata: vec![],
        authority: addr(2),
        data: (0..=255).collect(),
    });
    assert_round_trips(&CrankInitParams {
        address: addr(7),
        queue_address: addr(9),
    });
    assert_round_trips(&CrankPushParams {
        crank_address: addr(7),
        aggregator_address: addr(1),
    });
    assert_round_trips(&CrankPopParams {
        crank_address: addr(7),
    });
    assert_round_trips(&queue());
}

#[test]
fn test_default_records_round_trip() {
    assert_round_trips(&AggregatorInitParams::default());
    assert_round_trips(&AggregatorSaveResultParams::default());
    assert_round_trips(&JobInitParams::default());
    assert_round_trips(&OracleQueueSetConfigsParams::default());
}

#[test]
fn test_entry_argument_counts() {
    assert_entry_shape(&aggregator_init(), 14);
    assert_entry_shape(&AggregatorSetConfigParams::default(), 14);
    assert_entry_shape(&AggregatorAddJobParams::default(), 3);
    assert_entry_shape(&AggregatorRemoveJobParams::default(), 2);
    assert_entry_shape(&AggregatorSaveResultParams::default(), 8);
    assert_entry_shape(&AggregatorOpenRoundParams::default(), 1);
    assert_entry_shape(&JobInitParams::default(), 5);
    assert_entry_shape(&CrankInitParams::default(), 2);
    assert_entry_shape(&CrankPushParams::default(), 2);
    assert_entry_shape(&CrankPopParams::default(), 1);
    assert_entry_shape(&queue(), 17);
}

#[test]
fn test_empty_byte_fields_stay_empty() {
    let job = JobInitParams::default();

    let json = job.to_json();
    assert_eq!(json.get("name"), Some(&json!([])));
    assert_eq!(json.get("data"), Some(&json!([])));

    let move_struct = job.to_move_struct();
    assert_eq!(move_struct.get("name"), Some(&json!("")));
    assert_eq!(move_struct.get("metadata"), Some(&json!("")));

    let back = JobInitParams::from_move_struct(&move_struct).unwrap();
    assert!(back.name.is_empty());
}

#[test]
fn test_move_struct_accepts_both_byte_encodings() {
    let mut hex_form = queue().to_move_struct().into_map();
    let mut array_form = hex_form.clone();
    hex_form.insert("name".to_string(), json!("0a0b"));
    array_form.insert("name".to_string(), json!([10, 11]));

    let from_hex = OracleQueueSetConfigsParams::from_move_struct(&MoveStruct::new(hex_form)).unwrap();
    let from_array =
        OracleQueueSetConfigsParams::from_move_struct(&MoveStruct::new(array_form)).unwrap();

    assert_eq!(from_hex.name, vec![10, 11]);
    assert_eq!(from_hex, from_array);
}

#[test]
fn test_large_integers_are_decimal_strings() {
    let params = aggregator_init();

    let json = params.to_json();
    assert_eq!(
        json.get("minUpdateDelaySeconds"),
        Some(&json!("18446744073709551615"))
    );
    assert_eq!(json.get("startAfter"), Some(&json!(big().to_string())));

    let move_struct = params.to_move_struct();
    assert_eq!(
        move_struct.get("min_update_delay_seconds"),
        Some(&json!("18446744073709551615"))
    );
}

#[test]
fn test_nested_decimal_uses_move_struct_form() {
    let move_struct = queue().to_move_struct();
    assert_eq!(
        move_struct.get("variance_tolerance_multiplier"),
        Some(&json!({ "value": "2", "dec": 0, "neg": false }))
    );
}

#[test]
fn test_malformed_fields_reject_whole_record() {
    let mut map = aggregator_init().to_json().into_map();
    map.insert("batchSize".to_string(), json!("12a3"));
    let err = AggregatorInitParams::from_json(&JsonForm::new(map)).unwrap_err();
    assert!(matches!(err, TranscodeError::MalformedInteger { .. }));
    assert_eq!(err.field(), Some("batchSize"));

    let mut map = aggregator_init().to_move_struct().into_map();
    map.insert("name".to_string(), json!("0xZZ"));
    let err = AggregatorInitParams::from_move_struct(&MoveStruct::new(map)).unwrap_err();
    assert!(matches!(err, TranscodeError::MalformedHex { .. }));

    let mut map = aggregator_init().to_move_struct().into_map();
    map.remove("queue_addr");
    let err = AggregatorInitParams::from_move_struct(&MoveStruct::new(map)).unwrap_err();
    assert_eq!(err, TranscodeError::MissingField("queue_addr".to_string()));
}

#[test]
fn test_non_object_input() {
    assert_eq!(
        JsonForm::try_from(Value::Null).unwrap_err(),
        TranscodeError::ExpectedObject
    );
    assert_eq!(
        MoveStruct::try_from(json!(["addr"])).unwrap_err(),
        TranscodeError::ExpectedObject
    );
}
