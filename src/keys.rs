//! JSON keys used on the wire.
//!
//! Subscriptions are read with `subscription_id` but written back with `id`.
//! Both keys are kept because the service expects them that way.

/// Subscription id, as it arrives from the service.
pub const SUBSCRIPTION_ID: &str = "subscription_id";

/// Subscription id, as it is sent to the service.
pub const ID: &str = "id";

pub const WALLET_ID: &str = "wallet_id";
pub const DEVICE_ID: &str = "device_id";
pub const ENDPOINT: &str = "endpoint";

// Endpoint fields.
pub const ENVIRONMENT: &str = "environment";
pub const KIND: &str = "kind";
pub const VALUE: &str = "value";
