//! Engine module for FlowEngine implementation
//!
//! Provides the core engine and the per-run flow context that executes each
//! step and records its events.

pub mod core;
pub mod flow_ctx;

pub use core::FlowEngine;
pub use flow_ctx::FlowCtx;
