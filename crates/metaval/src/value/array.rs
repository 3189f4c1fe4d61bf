//! Ordered container with string-or-integer keys.

use std::fmt;

use super::MetaValue;

/// Key of a [`MetaArray`] entry.
///
/// String keys that spell a canonical decimal integer (no sign prefix `+`,
/// no leading zeros) are normalized to integer keys at insertion, so `"5"`
/// and `5` address the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    /// Builds a key from its encoded (string) form, mapping canonical
    /// decimal integers back to integer keys.
    pub fn from_encoded(s: &str) -> Self {
        match parse_canonical_int(s) {
            Some(i) => ArrayKey::Int(i),
            None => ArrayKey::Str(s.to_owned()),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{i}"),
            ArrayKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(i: i64) -> Self {
        ArrayKey::Int(i)
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        ArrayKey::from_encoded(s)
    }
}

/// Returns `Some` iff `s` is the canonical decimal form of an `i64`:
/// an optional `-`, then digits with no leading zero (except `"0"` itself).
fn parse_canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s.starts_with('-') && digits == "0" {
        return None;
    }
    s.parse().ok()
}

/// Ordered sequence of key/value entries.
///
/// `push` assigns the next integer key (one past the largest integer key
/// used so far, starting at 0), so interleaving keyed inserts and pushes
/// behaves like the usual dynamic-array append.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetaArray {
    entries: Vec<(ArrayKey, MetaValue)>,
}

impl MetaArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under the next integer key.
    pub fn push(&mut self, value: MetaValue) {
        let next = self
            .entries
            .iter()
            .filter_map(|(k, _)| match k {
                ArrayKey::Int(i) => Some(*i),
                ArrayKey::Str(_) => None,
            })
            .max()
            .map_or(0, |max| max.saturating_add(1));
        self.entries.push((ArrayKey::Int(next), value));
    }

    /// Sets `key` to `value`, replacing an existing entry in place or
    /// appending a new one.
    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: MetaValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &ArrayKey) -> Option<&MetaValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn entries(&self) -> &[(ArrayKey, MetaValue)] {
        &self.entries
    }

    pub fn values(&self) -> impl Iterator<Item = &MetaValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff the keys are exactly `0..len` in order, i.e. the array is a
    /// plain list and can be encoded without keys.
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| *k == ArrayKey::Int(i as i64))
    }
}

impl From<Vec<MetaValue>> for MetaArray {
    fn from(values: Vec<MetaValue>) -> Self {
        let mut arr = MetaArray::new();
        for v in values {
            arr.push(v);
        }
        arr
    }
}

impl FromIterator<MetaValue> for MetaArray {
    fn from_iter<I: IntoIterator<Item = MetaValue>>(iter: I) -> Self {
        let mut arr = MetaArray::new();
        for v in iter {
            arr.push(v);
        }
        arr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_integer_keys() {
        let mut arr = MetaArray::new();
        arr.push(MetaValue::Int(10));
        arr.push(MetaValue::Int(20));
        assert!(arr.is_list());
        assert_eq!(arr.get(&ArrayKey::Int(1)), Some(&MetaValue::Int(20)));
    }

    #[test]
    fn push_continues_past_largest_integer_key() {
        let mut arr = MetaArray::new();
        arr.insert(5i64, MetaValue::Null);
        arr.push(MetaValue::Bool(true));
        assert_eq!(arr.get(&ArrayKey::Int(6)), Some(&MetaValue::Bool(true)));
        assert!(!arr.is_list());
    }

    #[test]
    fn string_keys_normalize_to_canonical_integers() {
        assert_eq!(ArrayKey::from_encoded("5"), ArrayKey::Int(5));
        assert_eq!(ArrayKey::from_encoded("-3"), ArrayKey::Int(-3));
        assert_eq!(ArrayKey::from_encoded("0"), ArrayKey::Int(0));
        assert_eq!(ArrayKey::from_encoded("05"), ArrayKey::Str("05".into()));
        assert_eq!(ArrayKey::from_encoded("+5"), ArrayKey::Str("+5".into()));
        assert_eq!(ArrayKey::from_encoded("-0"), ArrayKey::Str("-0".into()));
        assert_eq!(ArrayKey::from_encoded(""), ArrayKey::Str(String::new()));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut arr = MetaArray::new();
        arr.insert("a", MetaValue::Int(1));
        arr.insert("b", MetaValue::Int(2));
        arr.insert("a", MetaValue::Int(3));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.entries()[0].1, MetaValue::Int(3));
    }
}
