//! Push-notification subscription record.

use crate::codec::{required_object, required_str, JsonObject, WireCodec};
use crate::endpoint::SubscriptionEndpoint;
use crate::error::{DecodeError, Result};
use crate::keys;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A device's subscription to push notifications for a wallet.
///
/// Immutable once built. The endpoint type is pluggable so callers can bring
/// their own endpoint model as long as it implements [`WireCodec`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription<E = SubscriptionEndpoint> {
    id: String,
    wallet: String,
    device: String,
    endpoint: E,
}

impl<E> Subscription<E> {
    pub fn new(
        id: impl Into<String>,
        wallet: impl Into<String>,
        device: impl Into<String>,
        endpoint: E,
    ) -> Self {
        Self {
            id: id.into(),
            wallet: wallet.into(),
            device: device.into(),
            endpoint,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the wallet that owns this subscription.
    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    /// Id of the subscribing device.
    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }
}

impl<E: WireCodec> WireCodec for Subscription<E> {
    const NAME: &'static str = "subscription";

    /// Reads `subscription_id`, `wallet_id`, `device_id` and `endpoint`.
    fn decode(json: &JsonObject) -> Result<Self> {
        let id = required_str(json, keys::SUBSCRIPTION_ID)?;
        let wallet = required_str(json, keys::WALLET_ID)?;
        let device = required_str(json, keys::DEVICE_ID)?;
        let endpoint = E::decode(required_object(json, keys::ENDPOINT)?)
            .map_err(|e| DecodeError::Endpoint(Box::new(e)))?;

        Ok(Self::new(id, wallet, device, endpoint))
    }

    /// Writes `id`, `wallet_id`, `device_id` and `endpoint`.
    ///
    /// The id goes out under `id`, not the `subscription_id` key it was read
    /// from, so `decode(encode(s))` does not succeed.
    fn encode(&self) -> JsonObject {
        let mut json = JsonObject::new();
        json.insert(keys::ID.into(), Value::from(self.id.as_str()));
        json.insert(keys::WALLET_ID.into(), Value::from(self.wallet.as_str()));
        json.insert(keys::DEVICE_ID.into(), Value::from(self.device.as_str()));
        json.insert(keys::ENDPOINT.into(), Value::Object(self.endpoint.encode()));
        json
    }
}

// serde goes through the codec so both paths share one wire schema.

impl<E: WireCodec> Serialize for Subscription<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de, E: WireCodec> Deserialize<'de> for Subscription<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode_value(&value).map_err(serde::de::Error::custom)
    }
}
