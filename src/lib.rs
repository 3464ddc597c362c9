//! Typed data model for the NEAR JSON-RPC API.
//!
//! Request, response and error types mirror the node's published schema. Its `oneOf` /
//! `anyOf` unions are decoded by the generic tagged-union [`codec`], which tries every
//! declared variant in order and reports each rejection when none fits.
//!
//! The crate does no networking: it turns parsed JSON into typed values and back.

mod api;
pub mod codec;
mod error;
mod helpers;
pub mod prelude;

pub use api::methods::RpcMethod;
pub use api::types::*;
pub use codec::{DynamicValue, MatchRule, TaggedUnion};
pub use error::{Error, Result, *};
pub use helpers::YoctoNear;
