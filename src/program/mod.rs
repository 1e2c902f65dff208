//! On-chain payload construction for the router and market modules.
//!
//! This module turns typed operation parameters into entry-function payloads
//! ready for an external submission channel. Nothing here performs I/O.

pub mod config;
pub mod constants;
pub mod encoding;
pub mod instructions;
pub mod payload;
pub mod types;

// Re-export commonly used items
pub use config::ProtocolConfig;
pub use constants::*;
pub use encoding::*;
pub use instructions::*;
pub use payload::{Argument, EntryFunctionPayload, FunctionId};
pub use types::*;
