//! Reactive component core: declared properties synchronized with host
//! attributes, driving the compile → parse → diff → patch cycle on change.

pub mod component;
pub mod props;

pub use component::{Component, ComponentSpec, mount_app};
pub use props::{PropDef, PropType, PropValue, coerce_attr, to_attr_name, to_prop_name};
