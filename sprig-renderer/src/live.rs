use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use sprig_dom::{Attrs, VNode};
use sprig_tpl::{CachedValue, Handler};

/// Shared handle to a node in the live rendered tree.
///
/// The live tree is the host environment the reconciler mutates: elements
/// carry string attributes, typed live properties, bound event listeners and
/// ordered children; text nodes carry their content. Parent links are weak,
/// so a detached subtree stays alive only through handles pointing into it.
#[derive(Clone)]
pub struct LiveHandle(Rc<RefCell<LiveNode>>);

struct LiveNode {
    kind: Kind,
    parent: Weak<RefCell<LiveNode>>,
}

enum Kind {
    Text(String),
    Element {
        tag: String,
        attrs: HashMap<String, String>,
        props: HashMap<String, CachedValue>,
        listeners: HashMap<String, Handler>,
        children: Vec<LiveHandle>,
    },
}

impl LiveHandle {
    pub fn element(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(LiveNode {
            kind: Kind::Element {
                tag: tag.into(),
                attrs: HashMap::new(),
                props: HashMap::new(),
                listeners: HashMap::new(),
                children: Vec::new(),
            },
            parent: Weak::new(),
        })))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(LiveNode {
            kind: Kind::Text(content.into()),
            parent: Weak::new(),
        })))
    }

    pub fn ptr_eq(&self, other: &LiveHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.0.borrow().kind, Kind::Text(_))
    }

    pub fn tag(&self) -> Option<String> {
        match &self.0.borrow().kind {
            Kind::Element { tag, .. } => Some(tag.clone()),
            Kind::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> Option<String> {
        match &self.0.borrow().kind {
            Kind::Text(t) => Some(t.clone()),
            Kind::Element { .. } => None,
        }
    }

    // -- attributes --

    pub fn set_attribute(&self, name: &str, value: &str) {
        if let Kind::Element { attrs, .. } = &mut self.0.borrow_mut().kind {
            attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        match &self.0.borrow().kind {
            Kind::Element { attrs, .. } => attrs.get(name).cloned(),
            Kind::Text(_) => None,
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn remove_attribute(&self, name: &str) {
        if let Kind::Element { attrs, .. } = &mut self.0.borrow_mut().kind {
            attrs.remove(name);
        }
    }

    pub fn attrs(&self) -> HashMap<String, String> {
        match &self.0.borrow().kind {
            Kind::Element { attrs, .. } => attrs.clone(),
            Kind::Text(_) => HashMap::new(),
        }
    }

    // -- live properties --

    pub fn set_live_prop(&self, name: &str, value: CachedValue) {
        if let Kind::Element { props, .. } = &mut self.0.borrow_mut().kind {
            props.insert(name.to_string(), value);
        }
    }

    pub fn live_prop(&self, name: &str) -> Option<CachedValue> {
        match &self.0.borrow().kind {
            Kind::Element { props, .. } => props.get(name).cloned(),
            Kind::Text(_) => None,
        }
    }

    // -- listeners --

    pub fn add_listener(&self, event: &str, handler: Handler) {
        if let Kind::Element { listeners, .. } = &mut self.0.borrow_mut().kind {
            listeners.insert(event.to_string(), handler);
        }
    }

    pub fn has_listener(&self, event: &str) -> bool {
        match &self.0.borrow().kind {
            Kind::Element { listeners, .. } => listeners.contains_key(event),
            Kind::Text(_) => false,
        }
    }

    /// Invokes the listener bound for `event`, if any. The handler is cloned
    /// out first so it may freely re-enter the tree.
    pub fn emit(&self, event: &str) -> bool {
        let handler = match &self.0.borrow().kind {
            Kind::Element { listeners, .. } => listeners.get(event).cloned(),
            Kind::Text(_) => None,
        };
        match handler {
            Some(h) => {
                (h.borrow_mut())();
                true
            }
            None => false,
        }
    }

    // -- tree structure --

    pub fn children(&self) -> Vec<LiveHandle> {
        match &self.0.borrow().kind {
            Kind::Element { children, .. } => children.clone(),
            Kind::Text(_) => Vec::new(),
        }
    }

    pub fn child(&self, index: usize) -> Option<LiveHandle> {
        match &self.0.borrow().kind {
            Kind::Element { children, .. } => children.get(index).cloned(),
            Kind::Text(_) => None,
        }
    }

    pub fn child_count(&self) -> usize {
        match &self.0.borrow().kind {
            Kind::Element { children, .. } => children.len(),
            Kind::Text(_) => 0,
        }
    }

    pub fn append_child(&self, child: &LiveHandle) {
        child.remove();
        if let Kind::Element { children, .. } = &mut self.0.borrow_mut().kind {
            children.push(child.clone());
        } else {
            return;
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
    }

    pub fn insert_child(&self, index: usize, child: &LiveHandle) {
        child.remove();
        if let Kind::Element { children, .. } = &mut self.0.borrow_mut().kind {
            let at = index.min(children.len());
            children.insert(at, child.clone());
        } else {
            return;
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
    }

    pub fn remove_child(&self, index: usize) {
        let removed = {
            match &mut self.0.borrow_mut().kind {
                Kind::Element { children, .. } if index < children.len() => {
                    Some(children.remove(index))
                }
                _ => None,
            }
        };
        if let Some(child) = removed {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Detaches this node from its parent, if attached.
    pub fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            if let Kind::Element { children, .. } = &mut parent.borrow_mut().kind {
                children.retain(|c| !Rc::ptr_eq(&c.0, &self.0));
            }
            self.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Swaps `new` into this node's tree position. A parentless node has no
    /// position, so the call degrades to a no-op.
    pub fn replace_with(&self, new: &LiveHandle) {
        if self.ptr_eq(new) {
            return;
        }
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            new.remove();
            if let Kind::Element { children, .. } = &mut parent.borrow_mut().kind {
                if let Some(at) = children.iter().position(|c| Rc::ptr_eq(&c.0, &self.0)) {
                    children[at] = new.clone();
                }
            }
            new.0.borrow_mut().parent = Rc::downgrade(&parent);
            self.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Reflects the live subtree back into VNode shape, for diffing or
    /// inspection. Live properties and listeners have no VNode form and are
    /// not reflected.
    pub fn to_vnode(&self) -> VNode {
        match &self.0.borrow().kind {
            Kind::Text(t) => VNode::Text(t.clone()),
            Kind::Element {
                tag,
                attrs,
                children,
                ..
            } => {
                let mut reflected = Attrs::new();
                for (k, v) in attrs {
                    reflected.insert(k.clone(), v.clone());
                }
                VNode::Element {
                    tag: tag.clone(),
                    attrs: reflected,
                    children: children.iter().map(|c| c.to_vnode()).collect(),
                }
            }
        }
    }
}
