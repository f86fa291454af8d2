// crates/core/src/lib.rs

//! Core logic for the few-shot planning agent: domain classification,
//! problem extraction, example selection, plan validation, and the
//! text-generation client.

pub mod corpus;
pub mod domain;
pub mod extract;
pub mod gen_client;
pub mod http_generator;
pub mod index;
pub mod text;
pub mod types;
pub mod validate;
