use std::collections::HashMap;

pub mod diff;
pub mod parse;

pub use parse::parse;

#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    Element {
        tag: String,
        attrs: Attrs,
        children: Vec<VNode>,
    },
    Text(String),
}

impl VNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            VNode::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, VNode::Text(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attrs {
    map: HashMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for literal trees.
    pub fn set(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.map.insert(k.into(), v.into());
        self
    }

    pub fn insert(&mut self, k: impl Into<String>, v: impl Into<String>) {
        self.map.insert(k.into(), v.into());
    }

    pub fn get(&self, k: &str) -> Option<&str> {
        self.map.get(k).map(String::as_str)
    }

    pub fn contains(&self, k: &str) -> bool {
        self.map.contains_key(k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// Allow concise attrs creation
impl From<()> for Attrs {
    fn from(_: ()) -> Self {
        Attrs::default()
    }
}
impl From<Vec<(&str, &str)>> for Attrs {
    fn from(v: Vec<(&str, &str)>) -> Self {
        let mut a = Attrs::new();
        for (k, val) in v {
            a.insert(k, val);
        }
        a
    }
}

pub fn h(tag: impl Into<String>, attrs: impl Into<Attrs>, children: Vec<VNode>) -> VNode {
    VNode::Element {
        tag: tag.into(),
        attrs: attrs.into(),
        children,
    }
}
pub fn text(t: impl Into<String>) -> VNode {
    VNode::Text(t.into())
}
