//! Token-sequence rendering.
//!
//! Walks a filter's tokens in order and produces WHERE-clause text plus the
//! parallel ordered parameter list for binding. The builder invariant (no
//! dangling connective, balanced grouping) is re-checked here defensively;
//! filters built through the public API cannot violate it.

use serde::{Deserialize, Serialize};

use crate::ast::{FilterToken, Value};
use crate::error::{FilterError, FilterResult};
use crate::filter::Filter;

/// Placeholder style of the target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// `?` placeholders (SQLite, MySQL, JDBC-style).
    #[default]
    Generic,
    /// `$1`, `$2`, ... placeholders.
    Postgres,
}

impl Dialect {
    fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Generic => "?".to_string(),
            Dialect::Postgres => format!("${}", index),
        }
    }
}

/// Rendered WHERE-clause text and its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFilter {
    pub sql: String,
    pub params: Vec<Value>,
}

fn validate(filter: &Filter) -> FilterResult<()> {
    let tokens = filter.tokens();
    if tokens.is_empty() {
        return Err(FilterError::invalid_state("token sequence is empty"));
    }
    if matches!(tokens.first(), Some(FilterToken::Logic(_))) {
        return Err(FilterError::invalid_state("sequence starts with a connective"));
    }
    if matches!(tokens.last(), Some(FilterToken::Logic(_))) {
        return Err(FilterError::invalid_state("sequence ends with a connective"));
    }
    let mut depth: i64 = 0;
    for token in tokens {
        if let FilterToken::Syntax(text) = token {
            match text.as_str() {
                "(" => depth += 1,
                ")" => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(FilterError::invalid_state("unbalanced grouping"));
                    }
                }
                _ => {}
            }
        }
    }
    if depth != 0 {
        return Err(FilterError::invalid_state("unbalanced grouping"));
    }
    Ok(())
}

pub(crate) fn render(filter: &Filter, dialect: Dialect) -> FilterResult<RenderedFilter> {
    validate(filter)?;

    let mut sql = String::new();
    let mut params: Vec<Value> = Vec::new();

    for token in filter.tokens() {
        let text = match token {
            FilterToken::Field { column, alias } => match alias {
                Some(alias) if !filter.aliases_suppressed() => format!("{}.{}", alias, column),
                _ => column.clone(),
            },
            FilterToken::Param(value) => {
                params.push(value.clone());
                dialect.placeholder(params.len())
            }
            other => other.to_string(),
        };
        // commas attach to the previous token
        if !sql.is_empty() && text != "," {
            sql.push(' ');
        }
        sql.push_str(&text);
    }

    Ok(RenderedFilter { sql, params })
}
