use sprig_dom::VNode;
use sprig_tpl::{CachedValue, RenderCycle};

use crate::live::LiveHandle;

/// Instantiates a live node from a VNode, resolving cache placeholders.
///
/// An attribute whose value resolves through the cycle cache is not written
/// literally: a handler under an `on`-prefixed name is bound as an event
/// listener with the prefix stripped, and every other hit is assigned as a
/// live property. Cache misses are plain attributes.
pub fn render(vnode: &VNode, cache: &RenderCycle) -> LiveHandle {
    match vnode {
        VNode::Text(t) => LiveHandle::text(t),
        VNode::Element {
            tag,
            attrs,
            children,
        } => {
            let el = LiveHandle::element(tag);
            for (name, value) in attrs.iter() {
                match cache.lookup(value) {
                    Some(CachedValue::Handler(h)) if name.starts_with("on") => {
                        el.add_listener(&name[2..], h);
                    }
                    Some(cached) => el.set_live_prop(name, cached),
                    None => el.set_attribute(name, value),
                }
            }
            for child in children {
                el.append_child(&render(child, cache));
            }
            el
        }
    }
}

/// Replaces `target` with `node` in the live tree and returns `node`.
/// Clearing the cycle cache afterwards is the caller's scope's job.
pub fn mount(node: &LiveHandle, target: &LiveHandle) -> LiveHandle {
    target.replace_with(node);
    node.clone()
}
