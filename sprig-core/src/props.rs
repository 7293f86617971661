use std::fmt;
use std::rc::Rc;

use sprig_tpl::SharedValue;

/// Declared coercion type of a reactive property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropType {
    Boolean,
    Number,
    Text,
}

/// Runtime value of a reactive property.
///
/// `Shared` covers object-typed values: never mirrored onto an attribute,
/// compared by reference identity.
#[derive(Clone)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Shared(SharedValue),
}

impl PropValue {
    pub fn truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
            PropValue::Shared(_) => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            // NaN != NaN, so a NaN-valued set is never short-circuited
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::Text(a), PropValue::Text(b)) => a == b,
            (PropValue::Shared(a), PropValue::Shared(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "Bool({b})"),
            PropValue::Number(n) => write!(f, "Number({n})"),
            PropValue::Text(s) => write!(f, "Text({s:?})"),
            PropValue::Shared(_) => write!(f, "Shared(..)"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}
impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}
impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n as f64)
    }
}
impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}
impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}
impl From<SharedValue> for PropValue {
    fn from(v: SharedValue) -> Self {
        PropValue::Shared(v)
    }
}

/// Per-property declaration: an explicit type tag plus the default value
/// assigned when neither a host attribute nor an in-memory value exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PropDef {
    pub ty: PropType,
    pub default: PropValue,
}

impl PropDef {
    pub fn boolean(default: bool) -> Self {
        Self {
            ty: PropType::Boolean,
            default: PropValue::Bool(default),
        }
    }

    pub fn number(default: f64) -> Self {
        Self {
            ty: PropType::Number,
            default: PropValue::Number(default),
        }
    }

    pub fn text(default: impl Into<String>) -> Self {
        Self {
            ty: PropType::Text,
            default: PropValue::Text(default.into()),
        }
    }
}

/// Coerces a host attribute value per the declared type. Absent attributes
/// coerce to `false`, NaN or empty text; a non-numeric string against a
/// numeric property propagates NaN rather than failing.
pub fn coerce_attr(ty: PropType, raw: Option<&str>) -> PropValue {
    match ty {
        PropType::Boolean => {
            let b = matches!(raw, Some(v) if !v.is_empty() && v != "false");
            PropValue::Bool(b)
        }
        PropType::Number => {
            PropValue::Number(raw.and_then(|v| v.parse().ok()).unwrap_or(f64::NAN))
        }
        PropType::Text => PropValue::Text(raw.unwrap_or_default().to_string()),
    }
}

/// camelCase property name → kebab-case attribute name.
pub fn to_attr_name(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len());
    for ch in prop.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// kebab-case attribute name → camelCase property name.
pub fn to_prop_name(attr: &str) -> String {
    let mut out = String::with_capacity(attr.len());
    let mut upper_next = false;
    for ch in attr.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
