//! Property tests for the subscription codec.

use proptest::prelude::*;
use push_subscription::{JsonObject, Subscription, SubscriptionEndpoint, WireCodec};
use serde_json::Value;

fn arb_endpoint() -> impl Strategy<Value = SubscriptionEndpoint> {
    (".*", "[a-z]{0,8}", ".*").prop_map(|(env, kind, value)| SubscriptionEndpoint::new(env, kind, value))
}

fn arb_subscription() -> impl Strategy<Value = Subscription> {
    (".*", ".*", ".*", arb_endpoint())
        .prop_map(|(id, wallet, device, endpoint)| Subscription::new(id, wallet, device, endpoint))
}

/// Rewrite encode output into the shape decode expects.
fn as_incoming(mut json: JsonObject) -> JsonObject {
    if let Some(id) = json.remove("id") {
        json.insert("subscription_id".into(), id);
    }
    json
}

proptest! {
    #[test]
    fn prop_roundtrip_with_renamed_id(subscription in arb_subscription()) {
        let decoded = Subscription::<SubscriptionEndpoint>::decode(&as_incoming(subscription.encode()));
        prop_assert_eq!(decoded, Ok(subscription));
    }

    #[test]
    fn prop_raw_roundtrip_fails(subscription in arb_subscription()) {
        let decoded = Subscription::<SubscriptionEndpoint>::decode(&subscription.encode());
        prop_assert!(decoded.is_err());
    }

    #[test]
    fn prop_encode_has_exactly_documented_keys(subscription in arb_subscription()) {
        let json = subscription.encode();
        let mut keys: Vec<&str> = json.keys().map(String::as_str).collect();
        keys.sort_unstable();
        prop_assert_eq!(keys, vec!["device_id", "endpoint", "id", "wallet_id"]);

        let endpoint = json["endpoint"].as_object().unwrap();
        let mut keys: Vec<&str> = endpoint.keys().map(String::as_str).collect();
        keys.sort_unstable();
        prop_assert_eq!(keys, vec!["environment", "kind", "value"]);
    }

    #[test]
    fn prop_text_roundtrip(subscription in arb_subscription()) {
        let text = Value::Object(as_incoming(subscription.encode())).to_string();
        let decoded: Subscription = Subscription::from_json_str(&text).unwrap();
        prop_assert_eq!(decoded, subscription);
    }

    #[test]
    fn prop_dropping_any_key_fails(
        subscription in arb_subscription(),
        index in 0usize..4,
    ) {
        let key = ["subscription_id", "wallet_id", "device_id", "endpoint"][index];
        let mut json = as_incoming(subscription.encode());
        json.remove(key);

        prop_assert!(Subscription::<SubscriptionEndpoint>::decode_opt(&json).is_none());
    }
}
