//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the demo's window, and wires them to the
//! GPU layer.

mod runtime;
mod virtual_cursor;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
