use crate::cache::{CachedValue, Handler, RenderCycle, SharedValue};

/// A typed template interpolation.
#[derive(Clone)]
pub enum Slot {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Slot>),
    Handler(Handler),
    Value(SharedValue),
}

impl From<bool> for Slot {
    fn from(b: bool) -> Self {
        Slot::Bool(b)
    }
}
impl From<f64> for Slot {
    fn from(n: f64) -> Self {
        Slot::Number(n)
    }
}
impl From<i32> for Slot {
    fn from(n: i32) -> Self {
        Slot::Number(n as f64)
    }
}
impl From<&str> for Slot {
    fn from(s: &str) -> Self {
        Slot::Text(s.to_string())
    }
}
impl From<String> for Slot {
    fn from(s: String) -> Self {
        Slot::Text(s)
    }
}
impl From<Vec<Slot>> for Slot {
    fn from(items: Vec<Slot>) -> Self {
        Slot::List(items)
    }
}
impl From<Handler> for Slot {
    fn from(h: Handler) -> Self {
        Slot::Handler(h)
    }
}
impl From<SharedValue> for Slot {
    fn from(v: SharedValue) -> Self {
        Slot::Value(v)
    }
}

enum Piece {
    Part(String),
    Slot(Slot),
}

/// Static markup fragments interleaved with typed slots, in source order.
///
/// `compile` flattens the template into a single markup string; handler and
/// value slots are interned into the cycle cache and stand in as placeholder
/// identifiers, to be resolved again at render time.
#[derive(Default)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part(mut self, fragment: impl Into<String>) -> Self {
        self.pieces.push(Piece::Part(fragment.into()));
        self
    }

    pub fn slot(mut self, slot: impl Into<Slot>) -> Self {
        self.pieces.push(Piece::Slot(slot.into()));
        self
    }

    pub fn compile(&self, cache: &RenderCycle) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Part(s) => out.push_str(s),
                Piece::Slot(slot) => out.push_str(&resolve(slot, cache)),
            }
        }
        out
    }
}

fn resolve(slot: &Slot, cache: &RenderCycle) -> String {
    match slot {
        // `false` renders as nothing, so `cond && markup` style slots work
        Slot::Bool(false) => String::new(),
        Slot::Bool(true) => "true".to_string(),
        Slot::Number(n) => n.to_string(),
        Slot::Text(s) => s.clone(),
        Slot::List(items) => items.iter().map(|item| resolve(item, cache)).collect(),
        Slot::Handler(h) => cache.intern(CachedValue::Handler(h.clone())),
        Slot::Value(v) => cache.intern(CachedValue::Value(v.clone())),
    }
}
