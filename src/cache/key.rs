//! Cache Key Module
//!
//! Deterministic key construction from ordered scalar parts.

use std::fmt;

// == Public Constants ==
/// Separator placed between key parts
pub const KEY_DELIMITER: char = ':';

// == Key Part ==
/// A single scalar component of a cache key.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyPart {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Str(s) => f.write_str(s),
            KeyPart::Int(n) => write!(f, "{}", n),
            KeyPart::UInt(n) => write!(f, "{}", n),
            KeyPart::Float(n) => write!(f, "{}", n),
            KeyPart::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::Str(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::Str(value)
    }
}

impl From<&String> for KeyPart {
    fn from(value: &String) -> Self {
        KeyPart::Str(value.clone())
    }
}

impl From<bool> for KeyPart {
    fn from(value: bool) -> Self {
        KeyPart::Bool(value)
    }
}

impl From<f64> for KeyPart {
    fn from(value: f64) -> Self {
        KeyPart::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for KeyPart {
                fn from(value: $t) -> Self {
                    KeyPart::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

// == Build Key ==
/// Joins the string form of each part with [`KEY_DELIMITER`].
///
/// Parts containing the delimiter can make distinct inputs collide; callers
/// that need exact uniqueness must avoid them.
pub fn build_key<I, P>(parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: Into<KeyPart>,
{
    let mut key = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            key.push(KEY_DELIMITER);
        }
        key.push_str(&part.into().to_string());
    }
    key
}

// == Cache Key Builder ==
/// Incremental builder for keys made of mixed scalar types.
#[derive(Debug, Clone, Default)]
pub struct CacheKeyBuilder {
    parts: Vec<KeyPart>,
}

impl CacheKeyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part.
    pub fn part(mut self, part: impl Into<KeyPart>) -> Self {
        self.parts.push(part.into());
        self
    }

    pub fn build(self) -> String {
        build_key(self.parts)
    }
}

/// Builds a cache key from heterogeneous scalar parts.
///
/// ```
/// use doc_cache::cache_key;
///
/// assert_eq!(cache_key!("users", 42, true), "users:42:true");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($($part:expr),* $(,)?) => {
        $crate::cache::build_key([$($crate::cache::KeyPart::from($part)),*])
    };
}
