//! The composable, immutable filter expression.
//!
//! A [`Filter`] wraps an ordered token sequence. Combinators never mutate
//! their inputs; they read token sequences and produce new filters, so any
//! filter can be reused as a building block any number of times.
//!
//! ```
//! use sqlsift::prelude::*;
//!
//! # fn main() -> FilterResult<()> {
//! let age: TypedColumn<i64> = TypedColumn::new("Age");
//! let name: TypedColumn<String> = TypedColumn::new("Name");
//!
//! let by_name = Filter::from(name).equal("Tom")?
//!     .or(name).equal("Jerry")?;
//! let filter = Filter::from(age).greater_than(18)?.and_group(&by_name);
//!
//! let rendered = filter.render()?;
//! assert_eq!(rendered.sql, "Age > ? AND ( Name = ? OR Name = ? )");
//! # Ok(())
//! # }
//! ```

pub mod item;
pub mod staged;

use serde::{Deserialize, Serialize};

use crate::ast::{Alias, FieldDef, FieldKind, FilterToken, LogicalOp, TypedColumn};
use crate::error::FilterResult;
use crate::render::{self, Dialect, RenderedFilter};
use crate::seq::TokenSeq;

pub use staged::{DynFilterField, FilterField};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    tokens: TokenSeq,
    suppress_aliases: bool,
}

impl Filter {
    pub(crate) fn from_parts(tokens: TokenSeq) -> Self {
        Self {
            tokens,
            suppress_aliases: false,
        }
    }

    /// Start a new filter on a typed column.
    pub fn from<T: FieldKind>(col: TypedColumn<T>) -> FilterField<T> {
        FilterField::new(TokenSeq::new(), FilterToken::field(col.name(), None))
    }

    /// Start a new filter on a typed column qualified by a table alias.
    pub fn from_aliased<T: FieldKind>(col: TypedColumn<T>, alias: &Alias) -> FilterField<T> {
        FilterField::new(TokenSeq::new(), FilterToken::field(col.name(), Some(alias)))
    }

    /// Start a new filter on a runtime field descriptor.
    pub fn from_def(def: &FieldDef) -> FilterResult<DynFilterField> {
        let field = item::build_field_token(def.name(), None)?;
        Ok(DynFilterField::new(TokenSeq::new(), field, def.category()))
    }

    /// Start a new filter on an alias-qualified runtime field descriptor.
    pub fn from_def_aliased(def: &FieldDef, alias: &Alias) -> FilterResult<DynFilterField> {
        let field = item::build_field_token(def.name(), Some(alias))?;
        Ok(DynFilterField::new(TokenSeq::new(), field, def.category()))
    }

    fn stage<T: FieldKind>(
        &self,
        connective: LogicalOp,
        col: TypedColumn<T>,
        alias: Option<&Alias>,
    ) -> FilterField<T> {
        let prior = self.tokens.push(FilterToken::Logic(connective));
        FilterField::new(prior, FilterToken::field(col.name(), alias))
    }

    fn stage_def(
        &self,
        connective: LogicalOp,
        def: &FieldDef,
        alias: Option<&Alias>,
    ) -> FilterResult<DynFilterField> {
        let field = item::build_field_token(def.name(), alias)?;
        let prior = self.tokens.push(FilterToken::Logic(connective));
        Ok(DynFilterField::new(prior, field, def.category()))
    }

    /// Stage `AND field`; the operator call completes the new filter.
    pub fn and<T: FieldKind>(&self, col: TypedColumn<T>) -> FilterField<T> {
        self.stage(LogicalOp::And, col, None)
    }

    /// Stage `OR field`.
    pub fn or<T: FieldKind>(&self, col: TypedColumn<T>) -> FilterField<T> {
        self.stage(LogicalOp::Or, col, None)
    }

    pub fn and_aliased<T: FieldKind>(&self, col: TypedColumn<T>, alias: &Alias) -> FilterField<T> {
        self.stage(LogicalOp::And, col, Some(alias))
    }

    pub fn or_aliased<T: FieldKind>(&self, col: TypedColumn<T>, alias: &Alias) -> FilterField<T> {
        self.stage(LogicalOp::Or, col, Some(alias))
    }

    pub fn and_def(&self, def: &FieldDef) -> FilterResult<DynFilterField> {
        self.stage_def(LogicalOp::And, def, None)
    }

    pub fn or_def(&self, def: &FieldDef) -> FilterResult<DynFilterField> {
        self.stage_def(LogicalOp::Or, def, None)
    }

    /// Flat conjunction: `self AND other`, no parentheses added.
    pub fn and_filter(&self, other: &Filter) -> Filter {
        Filter::from_parts(
            self.tokens
                .push(FilterToken::Logic(LogicalOp::And))
                .concat(&other.tokens),
        )
    }

    /// Flat disjunction: `self OR other`, no parentheses added.
    pub fn or_filter(&self, other: &Filter) -> Filter {
        Filter::from_parts(
            self.tokens
                .push(FilterToken::Logic(LogicalOp::Or))
                .concat(&other.tokens),
        )
    }

    /// `self AND ( other )`. The only mechanism for forcing precedence:
    /// the right operand is wrapped in exactly one pair of parentheses
    /// whatever its internal connectives.
    pub fn and_group(&self, other: &Filter) -> Filter {
        Filter::from_parts(
            self.tokens
                .push(FilterToken::Logic(LogicalOp::And))
                .push(FilterToken::group_open())
                .concat(&other.tokens)
                .push(FilterToken::group_close()),
        )
    }

    /// `self OR ( other )`.
    pub fn or_group(&self, other: &Filter) -> Filter {
        Filter::from_parts(
            self.tokens
                .push(FilterToken::Logic(LogicalOp::Or))
                .push(FilterToken::group_open())
                .concat(&other.tokens)
                .push(FilterToken::group_close()),
        )
    }

    /// Copy with alias prefixes suppressed at render time. Token text is
    /// untouched, so the toggle is lossless.
    #[must_use]
    pub fn without_aliases(&self) -> Filter {
        Filter {
            tokens: self.tokens.clone(),
            suppress_aliases: true,
        }
    }

    /// Copy with alias prefixes rendered again.
    #[must_use]
    pub fn with_aliases(&self) -> Filter {
        Filter {
            tokens: self.tokens.clone(),
            suppress_aliases: false,
        }
    }

    /// The ordered token sequence. Together with
    /// [`aliases_suppressed`](Self::aliases_suppressed) this is the whole
    /// contract an external renderer needs.
    pub fn tokens(&self) -> &TokenSeq {
        &self.tokens
    }

    pub fn aliases_suppressed(&self) -> bool {
        self.suppress_aliases
    }

    /// Render to WHERE-clause text with `?` placeholders plus the parallel
    /// ordered parameter list.
    pub fn render(&self) -> FilterResult<RenderedFilter> {
        render::render(self, Dialect::Generic)
    }

    pub fn render_with_dialect(&self, dialect: Dialect) -> FilterResult<RenderedFilter> {
        render::render(self, dialect)
    }
}

/// Debug rendering with values inlined instead of placeholders.
impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            let text = match token {
                FilterToken::Field { column, alias } if self.suppress_aliases || alias.is_none() => {
                    column.clone()
                }
                other => other.to_string(),
            };
            if i > 0 && text != "," {
                write!(f, " ")?;
            }
            write!(f, "{}", text)?;
        }
        Ok(())
    }
}
