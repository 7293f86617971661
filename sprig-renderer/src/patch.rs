use sprig_dom::diff::Patch;
use sprig_tpl::{CachedValue, RenderCycle};

use crate::live::LiveHandle;
use crate::render::render;

/// Applies a patch list to a live node and returns the node now occupying
/// its tree position: the same handle after in-place mutation, or a fresh
/// one when a `Replace` swapped the subtree out wholesale.
pub fn apply(patches: &[Patch], node: &LiveHandle, cache: &RenderCycle) -> LiveHandle {
    let mut current = node.clone();
    for patch in patches {
        match patch {
            Patch::Replace(vnode) => {
                let fresh = render(vnode, cache);
                current.replace_with(&fresh);
                current = fresh;
            }
            Patch::SetAttr(name, value) => match cache.lookup(value) {
                // listeners bind at creation time only, never re-diffed
                Some(CachedValue::Handler(_)) => {}
                Some(cached) => current.set_live_prop(name, cached),
                None => current.set_attribute(name, value),
            },
            Patch::RemoveAttr(name) => current.remove_attribute(name),
            Patch::UpdateChild(index, child_patches) => {
                if let Some(child) = current.child(*index) {
                    apply(child_patches, &child, cache);
                }
            }
            Patch::InsertChild(index, vnode) => {
                current.insert_child(*index, &render(vnode, cache));
            }
            Patch::RemoveChild(index) => current.remove_child(*index),
        }
    }
    current
}
