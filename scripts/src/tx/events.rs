use alloy::{
    dyn_abi::{DynSolValue, EventExt},
    json_abi::{Event, JsonAbi},
    primitives::{Address, LogData},
};
use tracing::debug;

use crate::runtime::EventRecord;

/// Decode a raw log against the events of `abi`
///
/// Logs that match no known event, or fail to decode, are kept with their
/// address only.
pub fn decode_log(abi: &JsonAbi, address: Address, data: &LogData) -> EventRecord {
    let unknown = EventRecord {
        address,
        event: None,
        args: Vec::new(),
    };

    let Some(topic0) = data.topics().first() else {
        return unknown;
    };
    let Some(event) = abi
        .events()
        .find(|event| !event.anonymous && event.selector() == *topic0)
    else {
        return unknown;
    };

    match event.decode_log(data, true) {
        Ok(decoded) => EventRecord {
            address,
            event: Some(event.name.clone()),
            args: name_args(event, decoded.indexed, decoded.body),
        },
        Err(e) => {
            debug!("Could not decode {} log: {}", event.name, e);
            unknown
        }
    }
}

/// Pair decoded values back with their parameter names
fn name_args(
    event: &Event,
    indexed: Vec<DynSolValue>,
    body: Vec<DynSolValue>,
) -> Vec<(String, DynSolValue)> {
    let mut indexed = indexed.into_iter();
    let mut body = body.into_iter();

    event
        .inputs
        .iter()
        .filter_map(|input| {
            let value = if input.indexed {
                indexed.next()
            } else {
                body.next()
            };
            value.map(|value| (input.name.clone(), value))
        })
        .collect()
}

/// Render a decoded value the way it is printed to the user
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Uint(v, _) => v.to_string(),
        DynSolValue::Int(v, _) => v.to_string(),
        DynSolValue::Address(a) => a.to_string(),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", alloy::hex::encode(&word[..*size])),
        DynSolValue::Bytes(b) => format!("0x{}", alloy::hex::encode(b)),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, B256, U256};

    use super::*;
    use crate::runtime::artifacts::{tests::UNIVERSAL_ARTIFACT, ContractArtifact};

    fn transfer_log(token_id: u64) -> LogData {
        let abi = ContractArtifact::parse("Universal", UNIVERSAL_ARTIFACT)
            .unwrap()
            .abi;
        let selector = abi.event("Transfer").unwrap()[0].selector();
        LogData::new_unchecked(
            vec![
                selector,
                Address::ZERO.into_word(),
                address!("9A676e781A523b5d0C0e43731313A708CB607508").into_word(),
                B256::from(U256::from(token_id).to_be_bytes::<32>()),
            ],
            Default::default(),
        )
    }

    #[test]
    fn decodes_known_event() {
        let abi = ContractArtifact::parse("Universal", UNIVERSAL_ARTIFACT)
            .unwrap()
            .abi;
        let emitter = address!("A51c1fc2f0D1a1b8494Ed1FE312d7C3a78Ed91C0");

        let record = decode_log(&abi, emitter, &transfer_log(42));

        assert_eq!(record.address, emitter);
        assert_eq!(record.event.as_deref(), Some("Transfer"));
        assert_eq!(
            record.arg("to"),
            Some(&DynSolValue::Address(address!(
                "9A676e781A523b5d0C0e43731313A708CB607508"
            )))
        );
        assert_eq!(format_value(record.arg("tokenId").unwrap()), "42");
    }

    #[test]
    fn unknown_logs_keep_no_name() {
        let abi = ContractArtifact::parse("Universal", UNIVERSAL_ARTIFACT)
            .unwrap()
            .abi;

        let foreign = LogData::new_unchecked(vec![B256::repeat_byte(0x11)], Default::default());
        assert!(decode_log(&abi, Address::ZERO, &foreign).event.is_none());

        let anonymous = LogData::new_unchecked(vec![], Default::default());
        assert!(decode_log(&abi, Address::ZERO, &anonymous).event.is_none());
    }
}
