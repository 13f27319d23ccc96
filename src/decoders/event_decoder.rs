// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use alloy_primitives::U256;
use serde_json::{Map, Value};

use crate::config::consts::{
    COMPOUND_TRIGGERED_EVENT, DEFAULT_CROSS_CALL_EVENT, DEFAULT_CRON_EVENT,
    DEFAULT_LIQUIDATION_EVENT, UNKNOWN_EVENT,
};
use crate::decoders::abi;
use crate::decoders::types::{
    AbiItem, CompoundEvent, CrossCallEvent, DecodedEvent, ErrorEvent, ExecutionEvent, RawLog,
    ScheduledExecutionEvent, SuccessEvent, ThrottleEvent,
};
use crate::deployment::HandlerKind;
use crate::errors::ValidationError;
use crate::observability::messages::decoder::{
    EventRegistered, PayloadDecodeFallback, SignatureRejected, UnknownEventSkipped,
};
use crate::observability::messages::StructuredLog;
use crate::subscriptions::{parse_event_signature, EventParameter, EventSignature, ParamType};
use crate::utils::{address_from_topic, decode_hex_bytes, is_valid_topic, parse_quantity};

/// Events every reactive handler can emit.
const BUILTIN_EVENTS: &[&str] = &[
    "ReactiveSuccess(string action)",
    "ReactiveError(bytes reason)",
    "ReactiveExecution(string step,bool result)",
    "ThrottleTriggered(uint256 eventCount,uint256 threshold)",
    "ScheduledExecution(uint256 executedAt,uint256 nextExecutedAt)",
    "CrossCallEnqueued(uint256 callIndex,address target,bytes data)",
    "CrossCallsExecuted(uint256 executedCount,uint256 remaining)",
];

const FALLBACK_TEXT: &str = "unknown";

#[derive(Debug, Clone)]
struct Registered {
    signature: String,
    parsed: EventSignature,
}

/// Resolves raw logs to named events.
///
/// Signatures are keyed by their `topics[0]` hash. Lookups ignore case, so
/// checksummed or uppercase hashes from different RPC nodes hit the same
/// entry.
#[derive(Debug, Clone)]
pub struct EventDecoder {
    events: HashMap<String, Registered>,
}

impl Default for EventDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDecoder {
    /// Decoder with the built-in reactive handler events registered.
    pub fn new() -> Self {
        let mut decoder = Self {
            events: HashMap::new(),
        };
        decoder.register_all(BUILTIN_EVENTS);
        decoder
    }

    /// Also register every named, non-anonymous `event` item of `abi`.
    pub fn with_abi(mut self, abi: &[AbiItem]) -> Result<Self, ValidationError> {
        for item in abi.iter().filter(|item| !item.anonymous) {
            if let Some(signature) = item.event_signature() {
                self.register_event(&signature)?;
            }
        }
        Ok(self)
    }

    fn register_all(&mut self, signatures: &[&str]) {
        for &signature in signatures {
            if let Err(error) = self.register_event(signature) {
                SignatureRejected {
                    signature,
                    error: &error,
                }
                .log();
            }
        }
    }

    /// Register `signature` under an explicit hash, replacing any previous
    /// entry. The hash is not checked against the signature.
    pub fn register_signature(
        &mut self,
        hash: &str,
        signature: &str,
    ) -> Result<(), ValidationError> {
        if !is_valid_topic(hash) {
            return Err(ValidationError::InvalidTopic {
                value: hash.to_string(),
            });
        }
        let parsed = parse_event_signature(signature)?;
        self.insert(hash.to_lowercase(), signature, parsed);
        Ok(())
    }

    /// Register `signature` under its keccak-256 topic hash and return the hash.
    pub fn register_event(&mut self, signature: &str) -> Result<String, ValidationError> {
        let parsed = parse_event_signature(signature)?;
        let hash = parsed.topic_hash();
        self.insert(hash.clone(), signature, parsed);
        Ok(hash)
    }

    fn insert(&mut self, hash: String, signature: &str, parsed: EventSignature) {
        EventRegistered {
            signature,
            topic_hash: &hash,
        }
        .log();
        self.events.insert(
            hash,
            Registered {
                signature: signature.to_string(),
                parsed,
            },
        );
    }

    /// The signature registered under `hash`, exactly as it was registered.
    pub fn get_signature(&self, hash: &str) -> Option<&str> {
        self.lookup(hash).map(|entry| entry.signature.as_str())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn lookup(&self, hash: &str) -> Option<&Registered> {
        self.events.get(&hash.to_lowercase())
    }

    fn resolve(&self, log: &RawLog) -> Option<&Registered> {
        log.topics.first().and_then(|topic| self.lookup(topic))
    }

    fn is_event(&self, log: &RawLog, name: &str) -> bool {
        self.resolve(log).is_some_and(|entry| entry.parsed.name == name)
    }

    /// Resolve a log against the registry. Never fails: unregistered or
    /// topic-less logs come back as `UnknownEvent` with an empty payload.
    pub fn decode(&self, log: &RawLog) -> DecodedEvent {
        let topic0 = log.topics.first().cloned().unwrap_or_default();
        let (name, decoded) = match self.resolve(log) {
            Some(entry) => (entry.parsed.canonical(), decode_payload(&entry.parsed, log)),
            None => {
                UnknownEventSkipped {
                    topic: &topic0,
                    address: &log.address,
                }
                .log();
                (UNKNOWN_EVENT.to_string(), Map::new())
            }
        };

        DecodedEvent {
            name,
            signature: topic0,
            address: log.address.clone(),
            topics: log.topics.clone(),
            data: log.data.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
            log_index: log.log_index,
            decoded,
        }
    }

    pub fn parse_success_event(&self, log: &RawLog) -> Option<SuccessEvent> {
        if !self.is_event(log, "ReactiveSuccess") {
            return None;
        }
        Some(SuccessEvent {
            action: payload_text(&log.data).unwrap_or_else(|| FALLBACK_TEXT.to_string()),
            address: log.address.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
        })
    }

    pub fn parse_error_event(&self, log: &RawLog) -> Option<ErrorEvent> {
        if !self.is_event(log, "ReactiveError") {
            return None;
        }
        let reason = payload_text(&log.data)
            .or_else(|| log.topics.get(1).cloned())
            .unwrap_or_else(|| FALLBACK_TEXT.to_string());
        Some(ErrorEvent {
            reason,
            data: log.data.clone(),
            address: log.address.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
        })
    }

    /// Accepts both ABI-encoded `(string,bool)` data and the compact form
    /// where the step is `topics[1]` and data is a bare quantity.
    pub fn parse_execution_event(&self, log: &RawLog) -> Option<ExecutionEvent> {
        if !self.is_event(log, "ReactiveExecution") {
            return None;
        }
        let abi_form = abi::decode_data(&[ParamType::String, ParamType::Bool], &log.data);
        let (step, result) = match abi_form {
            Ok(values) => (
                values[0].as_str().unwrap_or(FALLBACK_TEXT).to_string(),
                values[1].as_bool().unwrap_or(false),
            ),
            Err(_) => (
                log.topics
                    .get(1)
                    .cloned()
                    .unwrap_or_else(|| FALLBACK_TEXT.to_string()),
                parse_quantity(&log.data).is_some_and(|n| !n.is_zero()),
            ),
        };
        Some(ExecutionEvent {
            step,
            result,
            address: log.address.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
        })
    }

    /// `eventCount` from `topics[1]` (zero when absent), `threshold` from the
    /// first data word.
    pub fn parse_throttle_event(&self, log: &RawLog) -> Option<ThrottleEvent> {
        if !self.is_event(log, "ThrottleTriggered") {
            return None;
        }
        Some(ThrottleEvent {
            event_count: topic_quantity(log, 1),
            threshold: abi::data_word(&log.data, 0),
            address: log.address.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
        })
    }

    pub fn parse_scheduled_execution_event(&self, log: &RawLog) -> Option<ScheduledExecutionEvent> {
        if !self.is_event(log, "ScheduledExecution") {
            return None;
        }
        Some(ScheduledExecutionEvent {
            executed_at: topic_quantity(log, 1),
            next_executed_at: abi::data_word(&log.data, 0),
            address: log.address.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
        })
    }

    pub fn parse_cross_call_event(&self, log: &RawLog) -> Option<CrossCallEvent> {
        if !self.is_event(log, "CrossCallEnqueued") {
            return None;
        }
        let target = log
            .topics
            .get(2)
            .map(|topic| address_from_topic(topic))
            .unwrap_or_else(|| address_from_topic(""));
        Some(CrossCallEvent {
            call_index: topic_quantity(log, 1),
            target,
            data: log.data.clone(),
            address: log.address.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
        })
    }

    /// Only resolves on decoders that know `CompoundTriggered`, see
    /// [`create_event_decoder`].
    pub fn parse_compound_event(&self, log: &RawLog) -> Option<CompoundEvent> {
        if !self.is_event(log, "CompoundTriggered") {
            return None;
        }
        Some(CompoundEvent {
            amount: abi::data_word(&log.data, 0),
            new_total: abi::data_word(&log.data, 1),
            address: log.address.clone(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash.clone(),
        })
    }
}

/// Events specific to one handler family.
fn family_events(kind: HandlerKind) -> &'static [&'static str] {
    match kind {
        HandlerKind::AutoCompound => &[COMPOUND_TRIGGERED_EVENT],
        HandlerKind::EventFilterThrottle => &["EventThrottled(address source,uint256 eventCount)"],
        HandlerKind::CronScheduler => &[DEFAULT_CRON_EVENT],
        HandlerKind::LiquidationGuardian => &[DEFAULT_LIQUIDATION_EVENT],
        HandlerKind::CrossCallOrchestrator => &[DEFAULT_CROSS_CALL_EVENT],
        HandlerKind::UpgradeableProxy => &["Upgraded(address indexed implementation)"],
    }
}

/// A decoder for logs emitted by one handler family: the built-in events
/// plus that family's own.
pub fn create_event_decoder(kind: HandlerKind) -> EventDecoder {
    let mut decoder = EventDecoder::new();
    decoder.register_all(family_events(kind));
    decoder
}

fn field_name(parameter: &EventParameter, position: usize) -> String {
    if parameter.name.is_empty() {
        format!("arg{}", position)
    } else {
        parameter.name.clone()
    }
}

fn topic_quantity(log: &RawLog, index: usize) -> U256 {
    log.topics
        .get(index)
        .and_then(|topic| parse_quantity(topic))
        .unwrap_or(U256::ZERO)
}

/// Readable text carried by `data`: an ABI string or bytes value, else the
/// raw bytes when they are printable UTF-8, else the hex itself. `None`
/// for empty data.
fn payload_text(data: &str) -> Option<String> {
    let digits = data.strip_prefix("0x").unwrap_or(data);
    if digits.is_empty() {
        return None;
    }
    let bytes = abi::decode_dynamic_bytes(data)
        .or_else(|_| decode_hex_bytes(data))
        .unwrap_or_default();
    match String::from_utf8(bytes) {
        Ok(text) if is_printable(&text) => Some(text),
        _ => Some(data.to_string()),
    }
}

fn is_printable(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| !c.is_control() || c.is_whitespace())
}

fn decode_payload(signature: &EventSignature, log: &RawLog) -> Map<String, Value> {
    let mut fields = Map::new();
    let mut topics = log.topics.iter().skip(1);
    let mut body: Vec<(String, &ParamType)> = Vec::new();

    for (position, parameter) in signature.parameters.iter().enumerate() {
        let key = field_name(parameter, position);
        if parameter.indexed {
            if let Some(topic) = topics.next() {
                fields.insert(key, abi::decode_topic(&parameter.kind, topic));
            }
        } else {
            body.push((key, &parameter.kind));
        }
    }

    if body.is_empty() {
        return fields;
    }

    let kinds: Vec<ParamType> = body.iter().map(|(_, kind)| (*kind).clone()).collect();
    match abi::decode_data(&kinds, &log.data) {
        Ok(values) => {
            for ((key, _), value) in body.into_iter().zip(values) {
                fields.insert(key, value);
            }
        }
        Err(error) => {
            PayloadDecodeFallback {
                event: &signature.name,
                error: &error,
            }
            .log();
            decode_payload_leniently(&body, &log.data, &mut fields);
        }
    }
    fields
}

/// Single text payloads become text; word-sized fields are read
/// positionally for as long as the data lasts.
fn decode_payload_leniently(
    body: &[(String, &ParamType)],
    data: &str,
    fields: &mut Map<String, Value>,
) {
    if let [(key, ParamType::String | ParamType::Bytes)] = body {
        if let Some(text) = payload_text(data) {
            fields.insert(key.clone(), Value::String(text));
        }
        return;
    }

    for (index, (key, kind)) in body.iter().enumerate() {
        if kind.is_dynamic() || matches!(kind, ParamType::Tuple(_) | ParamType::Array(..)) {
            continue;
        }
        if let Some(word) = abi::lenient_word(data, index) {
            fields.insert(key.clone(), abi::word_value(kind, &word.to_be_bytes::<32>()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x1234567890123456789012345678901234567890";
    const TX_HASH: &str = "0xabcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890";

    fn topic_of(signature: &str) -> String {
        parse_event_signature(signature).unwrap().topic_hash()
    }

    fn log(topics: Vec<String>, data: &str) -> RawLog {
        RawLog {
            address: ADDRESS.to_string(),
            topics,
            data: data.to_string(),
            block_number: 12345,
            transaction_hash: TX_HASH.to_string(),
            log_index: 0,
        }
    }

    fn word(n: u64) -> String {
        format!("{:064x}", n)
    }

    #[test]
    fn test_builtins_registered_under_keccak_hashes() {
        let decoder = EventDecoder::new();
        assert_eq!(decoder.len(), BUILTIN_EVENTS.len());
        assert_eq!(
            decoder.get_signature(&topic_of("ReactiveSuccess(string)")),
            Some("ReactiveSuccess(string action)")
        );
        assert!(decoder
            .get_signature(&topic_of("CrossCallsExecuted(uint256,uint256)"))
            .is_some());
    }

    #[test]
    fn test_unknown_event() {
        let decoder = EventDecoder::new();
        let event = decoder.decode(&log(vec![format!("0x{}", "f".repeat(64))], "0x"));
        assert_eq!(event.name, UNKNOWN_EVENT);
        assert!(event.is_unknown());
        assert!(event.decoded.is_empty());
    }

    #[test]
    fn test_log_without_topics_is_unknown() {
        let decoder = EventDecoder::new();
        let event = decoder.decode(&log(vec![], "0x1234"));
        assert!(event.is_unknown());
        assert_eq!(event.signature, "");
        assert_eq!(event.data, "0x1234");
    }

    #[test]
    fn test_decode_success_with_raw_text() {
        let decoder = EventDecoder::new();
        let event = decoder.decode(&log(vec![topic_of("ReactiveSuccess(string)")], "0x68656c6c6f"));
        assert_eq!(event.name, "ReactiveSuccess(string)");
        assert_eq!(event.address, ADDRESS);
        assert_eq!(event.block_number, 12345);
        assert_eq!(event.transaction_hash, TX_HASH);
        assert_eq!(event.decoded["action"], Value::String("hello".to_string()));
    }

    #[test]
    fn test_decode_abi_encoded_execution() {
        let decoder = EventDecoder::new();
        let data = format!(
            "0x{}{}{}{}",
            word(64),
            word(1),
            word(4),
            format!("{:0<64}", hex::encode("swap"))
        );
        let event = decoder.decode(&log(vec![topic_of("ReactiveExecution(string,bool)")], &data));
        assert_eq!(event.decoded["step"], Value::String("swap".to_string()));
        assert_eq!(event.decoded["result"], Value::Bool(true));

        let parsed = decoder
            .parse_execution_event(&log(vec![topic_of("ReactiveExecution(string,bool)")], &data))
            .unwrap();
        assert_eq!(parsed.step, "swap");
        assert!(parsed.result);
    }

    #[test]
    fn test_hash_lookup_ignores_case() {
        let decoder = EventDecoder::new();
        let upper = format!("0x{}", topic_of("ReactiveSuccess(string)")[2..].to_uppercase());
        assert!(decoder.get_signature(&upper).is_some());
        assert!(decoder.parse_success_event(&log(vec![upper], "0x")).is_some());
    }

    #[test]
    fn test_parse_success_event() {
        let decoder = EventDecoder::new();
        let success_log = log(
            vec![topic_of("ReactiveSuccess(string)")],
            "0x48616e646c657220657865637574656420",
        );
        let event = decoder.parse_success_event(&success_log).unwrap();
        assert_eq!(event.action, "Handler executed ");
        assert_eq!(event.address, ADDRESS);

        let empty = decoder
            .parse_success_event(&log(vec![topic_of("ReactiveSuccess(string)")], "0x"))
            .unwrap();
        assert_eq!(empty.action, "unknown");
    }

    #[test]
    fn test_parse_error_event() {
        let decoder = EventDecoder::new();
        let error_log = log(
            vec![topic_of("ReactiveError(bytes)")],
            "0x496e76616c696420616464726573",
        );
        let event = decoder.parse_error_event(&error_log).unwrap();
        assert_eq!(event.reason, "Invalid addres");
        assert_eq!(event.data, "0x496e76616c696420616464726573");
        assert!(decoder.parse_success_event(&error_log).is_none());
    }

    #[test]
    fn test_parse_execution_event_compact_form() {
        let decoder = EventDecoder::new();
        let topic = topic_of("ReactiveExecution(string,bool)");
        assert!(decoder.parse_execution_event(&log(vec![topic.clone()], "0x1")).unwrap().result);
        let failed = decoder.parse_execution_event(&log(vec![topic], "0x0")).unwrap();
        assert!(!failed.result);
        assert_eq!(failed.step, "unknown");
    }

    #[test]
    fn test_parse_throttle_event() {
        let decoder = EventDecoder::new();
        let event = decoder
            .parse_throttle_event(&log(
                vec![topic_of("ThrottleTriggered(uint256,uint256)")],
                &format!("0x{}", word(100)),
            ))
            .unwrap();
        assert_eq!(event.threshold, U256::from(100u64));
        assert_eq!(event.event_count, U256::ZERO);
    }

    #[test]
    fn test_parse_scheduled_execution_event() {
        let decoder = EventDecoder::new();
        let event = decoder
            .parse_scheduled_execution_event(&log(
                vec![
                    topic_of("ScheduledExecution(uint256,uint256)"),
                    format!("0x{}", word(7)),
                ],
                "0x0000000000000000000000000000000000000000000000000000000065a90000",
            ))
            .unwrap();
        assert_eq!(event.executed_at, U256::from(7u64));
        assert_eq!(event.next_executed_at, U256::from(0x65a90000u64));
    }

    #[test]
    fn test_parse_cross_call_event() {
        let decoder = EventDecoder::new();
        let target = format!("0x{:0>64}", &ADDRESS[2..]);
        let event = decoder
            .parse_cross_call_event(&log(
                vec![
                    topic_of("CrossCallEnqueued(uint256,address,bytes)"),
                    format!("0x{}", word(3)),
                    target,
                ],
                "0x",
            ))
            .unwrap();
        assert_eq!(event.call_index, U256::from(3u64));
        assert_eq!(event.target, ADDRESS);
        assert_eq!(event.data, "0x");
    }

    #[test]
    fn test_register_signature_overrides() {
        let mut decoder = EventDecoder::new();
        let hash = format!("0x{}", "a".repeat(64));
        decoder
            .register_signature(&hash, "CustomEvent(address,uint256)")
            .unwrap();
        assert_eq!(decoder.get_signature(&hash), Some("CustomEvent(address,uint256)"));

        decoder
            .register_signature(&hash, "UpdatedEvent(uint256)")
            .unwrap();
        assert_eq!(decoder.get_signature(&hash), Some("UpdatedEvent(uint256)"));
    }

    #[test]
    fn test_register_rejects_bad_input() {
        let mut decoder = EventDecoder::new();
        assert!(matches!(
            decoder.register_signature("0x1234", "Custom(uint256)"),
            Err(ValidationError::InvalidTopic { .. })
        ));
        assert!(matches!(
            decoder.register_event("Broken(uint256"),
            Err(ValidationError::InvalidEventSignature { .. })
        ));
    }

    #[test]
    fn test_decode_indexed_and_data_parameters() {
        let mut decoder = EventDecoder::new();
        let hash = decoder
            .register_event("Transfer(address indexed from,address indexed to,uint256 value)")
            .unwrap();
        assert_eq!(
            hash,
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );

        let from = format!("0x{:0>64}", &ADDRESS[2..]);
        let to = format!("0x{:0>64}", "ab".repeat(20));
        let event = decoder.decode(&log(vec![hash, from, to], &format!("0x{}", word(1000))));
        assert_eq!(event.name, "Transfer(address,address,uint256)");
        assert_eq!(event.decoded["from"], Value::String(ADDRESS.to_string()));
        assert_eq!(event.decoded["to"], Value::String(format!("0x{}", "ab".repeat(20))));
        assert_eq!(event.decoded["value"], Value::String("1000".to_string()));
    }

    #[test]
    fn test_unnamed_parameters_use_positions() {
        let mut decoder = EventDecoder::new();
        let hash = decoder.register_event("Pair(uint256,bool)").unwrap();
        let event = decoder.decode(&log(vec![hash], &format!("0x{}{}", word(5), word(0))));
        assert_eq!(event.decoded["arg0"], Value::String("5".to_string()));
        assert_eq!(event.decoded["arg1"], Value::Bool(false));
    }

    #[test]
    fn test_short_data_decodes_leniently() {
        let decoder = EventDecoder::new();
        let event = decoder.decode(&log(
            vec![topic_of("ThrottleTriggered(uint256,uint256)")],
            "0x64",
        ));
        assert_eq!(event.decoded["eventCount"], Value::String("100".to_string()));
        assert!(!event.decoded.contains_key("threshold"));
    }

    #[test]
    fn test_huge_fixed_array_falls_back() {
        let mut decoder = EventDecoder::new();
        let hash = decoder
            .register_event("Big(uint256[288230376151711744] values)")
            .unwrap();
        let event = decoder.decode(&log(vec![hash], &format!("0x{}", word(1))));
        assert_eq!(event.name, "Big(uint256[288230376151711744])");
        assert!(event.decoded.is_empty());
    }

    #[test]
    fn test_with_abi() {
        let abi: Vec<AbiItem> = serde_json::from_str(
            r#"[
                {"type": "event", "name": "Deposited", "inputs": [
                    {"name": "user", "type": "address", "indexed": true},
                    {"name": "amount", "type": "uint256"}
                ]},
                {"type": "event", "name": "Hidden", "anonymous": true, "inputs": []},
                {"type": "function", "name": "deposit", "inputs": []}
            ]"#,
        )
        .unwrap();
        let decoder = EventDecoder::new().with_abi(&abi).unwrap();
        assert_eq!(decoder.len(), BUILTIN_EVENTS.len() + 1);
        assert!(decoder.get_signature(&topic_of("Deposited(address,uint256)")).is_some());
    }

    #[test]
    fn test_compound_event_requires_family_decoder() {
        let compound_log = log(
            vec![topic_of("CompoundTriggered(uint256,uint256)")],
            &format!("0x{}{}", word(50), word(1050)),
        );
        assert!(EventDecoder::new().parse_compound_event(&compound_log).is_none());

        let decoder = create_event_decoder(HandlerKind::AutoCompound);
        let event = decoder.parse_compound_event(&compound_log).unwrap();
        assert_eq!(event.amount, U256::from(50u64));
        assert_eq!(event.new_total, U256::from(1050u64));
    }

    #[test]
    fn test_create_event_decoder_for_every_family() {
        for kind in HandlerKind::ALL {
            let decoder = create_event_decoder(kind);
            assert_eq!(decoder.len(), BUILTIN_EVENTS.len() + family_events(kind).len());
        }
    }
}
