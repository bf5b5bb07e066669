//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the tool catalog and the dispatcher behind `tools/call`
//! - **generation**: the text-generation capability the tools delegate to

pub mod generation;
pub mod tools;
