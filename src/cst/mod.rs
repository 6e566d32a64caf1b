//! Syntax tree module
//!
//! The tree produced by the parser and consumed by the printer. Nodes carry
//! byte spans into the source; comments are kept in a separate, sorted list
//! instead of being attached to nodes.

pub mod node;
pub mod span;

pub use node::*;
pub use span::{Input, Span};
