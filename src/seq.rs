//! Append-only token sequences.
//!
//! `TokenSeq` is the persistent backbone of every filter: all operations are
//! pure and return a new sequence, so a filter handed to a combinator is
//! observable before and after with identical contents. Insertion order is
//! SQL token order and is preserved exactly.

use serde::{Deserialize, Serialize};

use crate::ast::FilterToken;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenSeq {
    items: Vec<FilterToken>,
}

impl TokenSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterToken> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&FilterToken> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&FilterToken> {
        self.items.last()
    }

    /// Copy with one token appended.
    #[must_use]
    pub fn push(&self, token: FilterToken) -> Self {
        let mut items = self.items.clone();
        items.push(token);
        Self { items }
    }

    /// Copy with a run of tokens appended.
    #[must_use]
    pub fn push_all(&self, tokens: impl IntoIterator<Item = FilterToken>) -> Self {
        let mut items = self.items.clone();
        items.extend(tokens);
        Self { items }
    }

    /// Copy with another sequence appended.
    #[must_use]
    pub fn concat(&self, other: &TokenSeq) -> Self {
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        Self { items }
    }
}

impl<'a> IntoIterator for &'a TokenSeq {
    type Item = &'a FilterToken;
    type IntoIter = std::slice::Iter<'a, FilterToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<FilterToken> for TokenSeq {
    fn from_iter<I: IntoIterator<Item = FilterToken>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
