//! # sqlsift — composable, immutable SQL filter builder
//!
//! > Stop concatenating WHERE clauses. Compose them.
//!
//! Filters are built from typed field references and operators into an
//! ordered sequence of SQL-fragment tokens. Every combinator is pure: it
//! reads its inputs and returns a new filter, so any filter can be shared
//! and reused as a building block.
//!
//! ## Quick example
//!
//! ```
//! use sqlsift::prelude::*;
//!
//! # fn main() -> FilterResult<()> {
//! const AGE: TypedColumn<i64> = TypedColumn::new("Age");
//! const NAME: TypedColumn<String> = TypedColumn::new("Name");
//!
//! let adults = Filter::from(AGE).greater_than(18)?;
//! let named = Filter::from(NAME).equal("Tom")?.or(NAME).equal("Jerry")?;
//!
//! let rendered = adults.and_group(&named).render()?;
//! assert_eq!(rendered.sql, "Age > ? AND ( Name = ? OR Name = ? )");
//! assert_eq!(rendered.params.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! The field's declared type restricts the operator set: `greater_than` is
//! only available on numeric and date columns, `like` only on text columns,
//! and a mismatched value type is a compile error.

pub mod ast;
pub mod error;
pub mod filter;
pub mod render;
pub mod seq;

pub use filter::Filter;

pub mod prelude {
    pub use crate::ast::{
        Alias, FieldDef, FilterToken, LogicalOp, Operator, TypeCategory, TypedColumn, Value,
    };
    pub use crate::error::{FilterError, FilterResult};
    pub use crate::filter::{DynFilterField, Filter, FilterField};
    pub use crate::render::{Dialect, RenderedFilter};
    pub use crate::seq::TokenSeq;
}
