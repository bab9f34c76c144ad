//! Token-to-key resolution
//!
//! Tokens are matched in order against the keys of a layout. Each physical key
//! can be consumed once per pass: the first token that matches it wins, and a
//! later token with no unused match contributes nothing.

use std::collections::BTreeSet;

use crate::keyboard::{Key, Layout};
use crate::parser::Token;

/// A key matched to one token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedKey {
    pub key: &'static Key,
    /// Position of the key in the layout catalog
    pub key_index: usize,
    /// Position of the token in the token sequence
    pub token_index: usize,
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Matched keys in token order
    pub matches: Vec<ResolvedKey>,
    /// Identifiers of every matched key
    pub active: BTreeSet<&'static str>,
    current: Option<&'static Key>,
}

impl Resolution {
    /// The first key the final token names, consumed or not
    ///
    /// This is the key under the cursor: typing a repeated letter keeps its
    /// key lit even though the path gains no point.
    pub fn current_key(&self) -> Option<&'static Key> {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }
}

/// Resolve tokens against a layout
pub fn resolve(tokens: &[Token<'_>], layout: &Layout) -> Resolution {
    let keys = layout.keys();
    let mut used = vec![false; keys.len()];
    let mut resolution = Resolution {
        current: tokens
            .last()
            .and_then(|token| keys.iter().find(|key| token_matches(token, key))),
        ..Resolution::default()
    };

    for (token_index, token) in tokens.iter().enumerate() {
        let found = keys
            .iter()
            .enumerate()
            .find(|(i, key)| !used[*i] && token_matches(token, key));

        let Some((key_index, key)) = found else {
            continue;
        };

        used[key_index] = true;
        resolution.active.insert(key.id);
        resolution.matches.push(ResolvedKey {
            key,
            key_index,
            token_index,
        });
    }

    resolution
}

fn token_matches(token: &Token<'_>, key: &Key) -> bool {
    match token {
        Token::Named(id) => key.id == *id,
        Token::Char(c) => {
            let mut buf = [0; 4];
            key.label_matches(c.encode_utf8(&mut buf))
        }
    }
}
