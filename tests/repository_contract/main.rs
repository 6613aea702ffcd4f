//! Repository Contract Tests
//!
//! End-to-end behaviour through the public command surface:
//! - Command enum - the instruction set
//! - Executor - stateless command dispatch
//! - Response - status, message and typed output

mod common;

mod batch;
mod concurrency;
mod isolation;
mod lifecycle;
mod wire;
