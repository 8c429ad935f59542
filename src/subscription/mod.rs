// WebSocket tick stream with per-connection subscriptions

pub mod manager;
pub mod protocol;

pub use manager::ConnectionManager;
pub use protocol::{ClientMessage, ErrorMessage, ServerMessage};
