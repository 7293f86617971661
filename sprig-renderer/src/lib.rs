//! The live tree host plus the render and patch-apply halves of
//! reconciliation. Live nodes are what patches mutate in place.

pub mod live;
pub mod patch;
pub mod render;

pub use live::LiveHandle;
pub use patch::apply;
pub use render::{mount, render};
