//! Style rule cache keyed by short hashed identifiers.
//!
//! Components register declaration blocks while the page composes; the cache
//! hands back `<key>-<id>` class names and keeps the compiled rule text
//! around for the critical-CSS pass. A rule flushed to the client during
//! hydration is replaced by a sentinel so its text is never sent twice.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{Result, StyleError};

/// Default key prefix for generated class names.
pub const DEFAULT_KEY: &str = "css";

/// A rule held in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertedRule {
    /// Compiled rule text that has not been sent to the client yet.
    Css(String),
    /// The rule was flushed to the client in an earlier response and must
    /// not be serialized again.
    Flushed,
}

impl InsertedRule {
    /// Returns the rule text unless the rule has been flushed.
    pub fn css(&self) -> Option<&str> {
        match self {
            InsertedRule::Css(text) => Some(text),
            InsertedRule::Flushed => None,
        }
    }

    /// Returns true if the rule was already flushed to the client.
    pub fn is_flushed(&self) -> bool {
        matches!(self, InsertedRule::Flushed)
    }
}

/// Style rule cache for one render, or a sequence of renders sharing state.
///
/// Three pieces of state make up the styling contract:
/// - `key`: the short prefix class names carry in rendered markup,
/// - `registered`: full `<key>-<id>` class name -> source declarations,
/// - `inserted`: identifier -> compiled rule text (or the flushed
///   sentinel), iterated in insertion order.
///
/// `inserted` may hold entries a given render never references (left over
/// from earlier renders against the same cache); the extractor decides per
/// call which of them to emit.
#[derive(Debug, Clone)]
pub struct StyleCache {
    key: String,
    pub(crate) registered: HashMap<String, String>,
    pub(crate) inserted: Vec<(String, InsertedRule)>,
    pub(crate) marker: Regex,
}

impl StyleCache {
    /// Creates an empty cache with the given key prefix.
    ///
    /// The key is validated (non-empty, ASCII alphanumeric or `-`) and the
    /// `<key>-<id>` marker pattern is compiled once up front, so extraction
    /// itself cannot fail.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(StyleError::EmptyKey);
        }
        if !key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(StyleError::InvalidKey(key));
        }

        let marker = Regex::new(&format!("{key}-([a-zA-Z0-9-]+)"))?;

        Ok(Self {
            key,
            registered: HashMap::new(),
            inserted: Vec::new(),
            marker,
        })
    }

    /// The cache key prefix.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Registers a declaration block and returns its class name.
    ///
    /// The block is hashed to a short identifier; repeat insertions of the
    /// same block reuse it. A rule already flushed to the client keeps its
    /// sentinel, so its text is never queued a second time.
    pub fn insert(&mut self, declarations: &str) -> String {
        let id = hash_identifier(declarations);
        let class = format!("{}-{}", self.key, id);

        if !self.registered.contains_key(&class) {
            self.registered
                .insert(class.clone(), declarations.to_string());
        }
        if !self.contains(&id) {
            let rule = format!(".{class}{{{declarations}}}");
            self.inserted.push((id, InsertedRule::Css(rule)));
        }

        class
    }

    /// Inserts a verbatim global rule and returns its identifier.
    ///
    /// Global rules are never referenced by class name in the markup and are
    /// deliberately left out of `registered`, which makes the extractor
    /// treat them as critical on every render.
    pub fn insert_global(&mut self, css: &str) -> String {
        let id = hash_identifier(css);
        if !self.contains(&id) {
            self.inserted
                .push((id.clone(), InsertedRule::Css(css.to_string())));
        }
        id
    }

    /// Marks identifiers as flushed to the client.
    ///
    /// This is the client-side hydration step: the identifier list shipped
    /// with a server response is recorded so later extractions against this
    /// cache skip those rules. Identifiers the cache has never seen are
    /// recorded as flushed too.
    pub fn hydrate<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref();
            match self
                .inserted
                .iter_mut()
                .find(|(existing, _)| existing == id)
            {
                Some((_, rule)) => *rule = InsertedRule::Flushed,
                None => self.inserted.push((id.to_string(), InsertedRule::Flushed)),
            }
        }
    }

    /// Returns true if a full `<key>-<id>` class name has been registered.
    pub fn is_registered(&self, class: &str) -> bool {
        self.registered.contains_key(class)
    }

    /// Iterates inserted rules in insertion order, flushed ones included.
    pub fn inserted(&self) -> impl Iterator<Item = (&str, &InsertedRule)> {
        self.inserted.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    /// Number of inserted rules, flushed ones included.
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    /// Returns true if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.inserted.iter().any(|(existing, _)| existing == id)
    }
}

/// Hashes a declaration block to a short, stable identifier.
///
/// FNV-1a folded to 32 bits and base-36 encoded, giving short lowercase ids
/// such as `1x7c9q`. Stability matters: the same declarations must map to
/// the same class name across renders and across processes.
fn hash_identifier(input: &str) -> String {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    base36((hash ^ (hash >> 32)) as u32)
}

fn base36(mut value: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while value > 0 {
        out.insert(0, DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out
}
