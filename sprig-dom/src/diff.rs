use crate::{Attrs, VNode};

#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    Replace(VNode),
    SetAttr(String, String),
    RemoveAttr(String),
    UpdateChild(usize, Vec<Patch>),
    InsertChild(usize, VNode),
    RemoveChild(usize),
}

/// Computes the patch list turning the tree rendered from `old` into the
/// tree described by `new`. An empty list means the trees are identical.
pub fn diff(old: &VNode, new: &VNode) -> Vec<Patch> {
    match (old, new) {
        (VNode::Text(a), VNode::Text(b)) => {
            if a == b {
                vec![]
            } else {
                vec![Patch::Replace(new.clone())]
            }
        }
        (
            VNode::Element {
                tag: old_tag,
                attrs: old_attrs,
                children: old_children,
            },
            VNode::Element {
                tag: new_tag,
                attrs: new_attrs,
                children: new_children,
            },
        ) => {
            if old_tag != new_tag {
                return vec![Patch::Replace(new.clone())];
            }
            let mut patches = diff_attrs(old_attrs, new_attrs);
            patches.extend(diff_children(old_children, new_children));
            patches
        }
        // text vs element in either direction
        _ => vec![Patch::Replace(new.clone())],
    }
}

// New and updated attributes first, then removals.
fn diff_attrs(old: &Attrs, new: &Attrs) -> Vec<Patch> {
    let mut patches = Vec::new();
    for (k, v) in new.iter() {
        if old.get(k) != Some(v) {
            patches.push(Patch::SetAttr(k.to_string(), v.to_string()));
        }
    }
    for (k, _) in old.iter() {
        if !new.contains(k) {
            patches.push(Patch::RemoveAttr(k.to_string()));
        }
    }
    patches
}

// Positional, not keyed: child i of old pairs with child i of new.
fn diff_children(old: &[VNode], new: &[VNode]) -> Vec<Patch> {
    let mut patches = Vec::new();
    let common = old.len().min(new.len());
    for i in 0..common {
        let child_patches = diff(&old[i], &new[i]);
        if !child_patches.is_empty() {
            patches.push(Patch::UpdateChild(i, child_patches));
        }
    }
    // Fresh children beyond the old count are appended in order.
    for (i, node) in new.iter().enumerate().skip(old.len()) {
        patches.push(Patch::InsertChild(i, node.clone()));
    }
    // Old children beyond the new count are removed explicitly, in
    // descending index order so earlier removals do not shift later ones.
    for i in (new.len()..old.len()).rev() {
        patches.push(Patch::RemoveChild(i));
    }
    patches
}
