use serde::{Deserialize, Serialize};

use crate::ast::{LogicalOp, Operator, Value};

/// An atomic unit of a rendered filter. Tokens never change after creation;
/// combinators only ever arrange them into new sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterToken {
    /// A column reference. The alias tag is kept separate from the column
    /// name so alias suppression at render time is lossless and reversible.
    Field {
        column: String,
        alias: Option<String>,
    },
    /// A comparison operator.
    Op(Operator),
    /// A bound value, rendered as a placeholder.
    Param(Value),
    /// Raw syntax text: grouping parens, list commas, the BETWEEN separator.
    Syntax(String),
    /// An AND/OR connective between predicates.
    Logic(LogicalOp),
}

impl FilterToken {
    pub fn field(column: impl Into<String>, alias: Option<&crate::ast::Alias>) -> Self {
        FilterToken::Field {
            column: column.into(),
            alias: alias.map(|a| a.name().to_string()),
        }
    }

    pub fn syntax(text: impl Into<String>) -> Self {
        FilterToken::Syntax(text.into())
    }

    pub fn group_open() -> Self {
        FilterToken::Syntax("(".to_string())
    }

    pub fn group_close() -> Self {
        FilterToken::Syntax(")".to_string())
    }

    /// The alias tag recorded on this token, if any.
    pub fn alias_tag(&self) -> Option<&str> {
        match self {
            FilterToken::Field { alias, .. } => alias.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterToken::Field {
                column,
                alias: Some(alias),
            } => write!(f, "{}.{}", alias, column),
            FilterToken::Field { column, .. } => write!(f, "{}", column),
            FilterToken::Op(op) => write!(f, "{}", op),
            FilterToken::Param(value) => write!(f, "{}", value),
            FilterToken::Syntax(text) => write!(f, "{}", text),
            FilterToken::Logic(op) => write!(f, "{}", op),
        }
    }
}
