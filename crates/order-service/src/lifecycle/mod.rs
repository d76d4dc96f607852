//! # System Lifecycle
//!
//! Starting, wiring and stopping the resource actors.
//!
//! [`OrderSystem`] creates one actor per resource, spawns each in its own Tokio
//! task and keeps the typed clients. Shutdown works by channel closure: dropping
//! every client makes the actor's `recv()` return `None`, the actor logs its
//! final state and its task ends.
//!
//! Channel capacity comes from [`SystemConfig`], which reads
//! `ORDER_SERVICE_CHANNEL_BUFFER`:
//!
//! ```bash
//! ORDER_SERVICE_CHANNEL_BUFFER=128 RUST_LOG=info cargo run -p order-service
//! ```

pub mod config;
pub mod order_system;

pub use config::*;
pub use order_system::*;
