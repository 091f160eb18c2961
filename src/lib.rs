//! # Push Subscription Models
//!
//! Wire models for push-notification subscriptions as exchanged with the
//! blockchain database service.
//!
//! ## Core Concepts
//!
//! - **Subscription**: a device subscribed to notifications for a wallet
//! - **Endpoint**: where the notifications are delivered
//! - **WireCodec**: decode from / encode to a JSON object
//!
//! Decoding is all-or-nothing: a record with any missing or mistyped field is
//! rejected as a whole.
//!
//! ## Example
//!
//! ```
//! use push_subscription::{Subscription, SubscriptionEndpoint, WireCodec};
//!
//! let subscription: Subscription = Subscription::from_json_str(r#"{
//!     "subscription_id": "s1",
//!     "wallet_id": "w1",
//!     "device_id": "d1",
//!     "endpoint": {"environment": "production", "kind": "fcm", "value": "token"}
//! }"#)?;
//! assert_eq!(subscription.wallet(), "w1");
//!
//! // Written back with `id`, not `subscription_id`.
//! let json = subscription.to_json_value();
//! assert_eq!(json["id"], "s1");
//! # Ok::<(), push_subscription::DecodeError>(())
//! ```

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod keys;
pub mod subscription;

// Re-exports
pub use codec::{required_object, required_str, JsonObject, WireCodec};
pub use endpoint::SubscriptionEndpoint;
pub use error::{DecodeError, Result};
pub use subscription::Subscription;
