use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

/// Shared event-handler closure, callable any number of times.
pub type Handler = Rc<RefCell<dyn FnMut()>>;

/// Shared opaque value assigned to live nodes as a property.
pub type SharedValue = Rc<dyn Any>;

pub fn handler<F: FnMut() + 'static>(f: F) -> Handler {
    Rc::new(RefCell::new(f))
}

pub fn shared<T: Any>(value: T) -> SharedValue {
    Rc::new(value)
}

/// A non-serializable value parked in the cache while its placeholder
/// identifier travels through compiled markup.
#[derive(Clone)]
pub enum CachedValue {
    Handler(Handler),
    Value(SharedValue),
}

impl CachedValue {
    pub fn is_handler(&self) -> bool {
        matches!(self, CachedValue::Handler(_))
    }

    // Identity, not structural equality: two clones of one Rc are the
    // same cached item, two closures with equal behavior are not.
    fn is_same(&self, other: &CachedValue) -> bool {
        match (self, other) {
            (CachedValue::Handler(a), CachedValue::Handler(b)) => Rc::ptr_eq(a, b),
            (CachedValue::Value(a), CachedValue::Value(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The value store for one compile→render (or diff/patch) cycle.
///
/// Placeholder identifiers handed out by [`RenderCycle::intern`] stay valid
/// until the cycle completes; [`RenderCycle::begin`] returns a scope guard
/// whose drop marks that completion and empties the store. Identifiers are
/// random, so they are never reused across cycles.
#[derive(Default)]
pub struct RenderCycle {
    entries: RefCell<Vec<(String, CachedValue)>>,
}

impl RenderCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing identifier when `value` is reference-identical
    /// to an already interned item, else allocates a fresh one.
    pub fn intern(&self, value: CachedValue) -> String {
        if let Some((id, _)) = self
            .entries
            .borrow()
            .iter()
            .find(|(_, cached)| cached.is_same(&value))
        {
            return id.clone();
        }
        let id = generate_id();
        self.entries.borrow_mut().push((id.clone(), value));
        id
    }

    pub fn lookup(&self, id: &str) -> Option<CachedValue> {
        self.entries
            .borrow()
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, cached)| cached.clone())
    }

    /// Empties the store. Called exactly once per completed mount or
    /// update, never mid-cycle; prefer [`RenderCycle::begin`].
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn begin(&self) -> CycleScope<'_> {
        CycleScope { cycle: self }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Scope guard for one render cycle; clears the cache on drop.
pub struct CycleScope<'a> {
    cycle: &'a RenderCycle,
}

impl Drop for CycleScope<'_> {
    fn drop(&mut self) {
        self.cycle.clear();
    }
}

// 11 lowercase base-36 characters, the shape of a stripped
// `Math.random().toString(36)` fraction.
fn generate_id() -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..11)
        .map(|_| DIGITS[rng.random_range(0..DIGITS.len())] as char)
        .collect()
}
