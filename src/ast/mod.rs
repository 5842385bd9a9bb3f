//! Filter AST: tokens, operators, values, and field descriptors.

pub mod fields;
pub mod operators;
pub mod token;
pub mod values;

pub use fields::{
    Alias, CollectionKind, ColumnValue, FieldDef, FieldKind, OrderedKind, TextKind, TypeCategory,
    TypedColumn,
};
pub use operators::{LogicalOp, Operator};
pub use token::FilterToken;
pub use values::Value;
