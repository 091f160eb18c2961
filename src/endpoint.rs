//! Push delivery endpoint attached to a subscription.

use crate::codec::{required_str, JsonObject, WireCodec};
use crate::error::Result;
use crate::keys;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Where push notifications for a subscription are delivered.
///
/// `kind` names the delivery channel (e.g. "fcm", "apns"), `environment`
/// the channel's environment (e.g. "production", "development") and `value`
/// the channel-specific token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionEndpoint {
    environment: String,
    kind: String,
    value: String,
}

impl SubscriptionEndpoint {
    pub fn new(
        environment: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl WireCodec for SubscriptionEndpoint {
    const NAME: &'static str = "subscription_endpoint";

    fn decode(json: &JsonObject) -> Result<Self> {
        Ok(Self::new(
            required_str(json, keys::ENVIRONMENT)?,
            required_str(json, keys::KIND)?,
            required_str(json, keys::VALUE)?,
        ))
    }

    fn encode(&self) -> JsonObject {
        let mut json = JsonObject::new();
        json.insert(keys::ENVIRONMENT.into(), Value::from(self.environment.as_str()));
        json.insert(keys::KIND.into(), Value::from(self.kind.as_str()));
        json.insert(keys::VALUE.into(), Value::from(self.value.as_str()));
        json
    }
}

impl Serialize for SubscriptionEndpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SubscriptionEndpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode_value(&value).map_err(serde::de::Error::custom)
    }
}
