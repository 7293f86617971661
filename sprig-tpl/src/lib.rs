//! Typed templates and the per-cycle cache carrying their non-serializable
//! interpolations (event handlers, live values) across compile and render.

pub mod cache;
pub mod template;

pub use cache::{CachedValue, CycleScope, Handler, RenderCycle, SharedValue, handler, shared};
pub use template::{Slot, Template};
