//! Field token construction and validation.

use crate::ast::{Alias, FilterToken};
use crate::error::{FilterError, FilterResult};

/// Build the field token for a resolved column name plus an optional alias.
/// Purely functional; the only checks are that neither name is blank.
pub(crate) fn build_field_token(name: &str, alias: Option<&Alias>) -> FilterResult<FilterToken> {
    if name.trim().is_empty() {
        return Err(FilterError::invalid_argument("field name is blank"));
    }
    if let Some(alias) = alias {
        if alias.name().trim().is_empty() {
            return Err(FilterError::invalid_argument("alias name is blank"));
        }
    }
    Ok(FilterToken::field(name, alias))
}
