// Parameter map: query parameter name -> first decoded value

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    values: HashMap<String, String>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value; later values for an existing name are ignored
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a map from a raw query string such as `?chs=200x100&chd=t:1|2`.
    ///
    /// Pairs are split on `&`, names from values on the first `=`, and both
    /// sides are percent-decoded (`+` decodes to a space).
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(decode_pair)
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParamMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

fn decode_pair(pair: &str) -> (String, String) {
    let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
    (decode_component(name), decode_component(value))
}

/// Percent-decode one query component; `+` is a space and a `%` without two
/// hex digits is kept literally
fn decode_component(raw: &str) -> String {
    let mut decoded = Vec::with_capacity(raw.len());
    let mut bytes = raw.as_bytes().iter();

    while let Some(&b) = bytes.next() {
        match b {
            b'+' => decoded.push(b' '),
            b'%' => match escaped_byte(bytes.as_slice()) {
                Some(byte) => {
                    decoded.push(byte);
                    bytes.nth(1);
                }
                None => decoded.push(b'%'),
            },
            _ => decoded.push(b),
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn escaped_byte(rest: &[u8]) -> Option<u8> {
    let hex = rest.get(..2).filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))?;
    std::str::from_utf8(hex)
        .ok()
        .and_then(|hex| u8::from_str_radix(hex, 16).ok())
}
