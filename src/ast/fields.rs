//! Field descriptors and compile-time column typing.
//!
//! Two ways to name a field: `TypedColumn<T>` carries the column's Rust type
//! as a phantom parameter so operator legality is checked by the compiler,
//! and `FieldDef` is the runtime descriptor (name + type category) for
//! callers that resolve fields dynamically. The builder algebra depends only
//! on the resolved descriptor, never on how it was obtained.

use std::marker::PhantomData;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type category of a field, keying the legal operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeCategory {
    Numeric,
    Text,
    Date,
    Boolean,
    Collection,
}

/// A table or subquery alias. Treated as opaque data; the builder only ever
/// records its name on field tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    name: String,
}

impl Alias {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Runtime field descriptor: resolved column name plus its type category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    name: String,
    category: TypeCategory,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> TypeCategory {
        self.category
    }
}

/// A typed column reference with compile-time type information.
///
/// The type parameter `T` is the Rust type for this column.
#[derive(Debug)]
pub struct TypedColumn<T> {
    name: &'static str,
    _phantom: PhantomData<T>,
}

// Manual impls: the column is copyable whatever `T` is.
impl<T> Clone for TypedColumn<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for TypedColumn<T> {}

impl<T> TypedColumn<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: FieldKind> TypedColumn<T> {
    /// Downgrade to the runtime descriptor.
    pub fn to_def(&self) -> FieldDef {
        FieldDef::new(self.name, T::CATEGORY)
    }
}

/// Maps a column's Rust type to its type category.
pub trait FieldKind {
    const CATEGORY: TypeCategory;
}

impl FieldKind for i32 {
    const CATEGORY: TypeCategory = TypeCategory::Numeric;
}
impl FieldKind for i64 {
    const CATEGORY: TypeCategory = TypeCategory::Numeric;
}
impl FieldKind for f64 {
    const CATEGORY: TypeCategory = TypeCategory::Numeric;
}
impl FieldKind for String {
    const CATEGORY: TypeCategory = TypeCategory::Text;
}
impl FieldKind for Uuid {
    const CATEGORY: TypeCategory = TypeCategory::Text;
}
impl FieldKind for bool {
    const CATEGORY: TypeCategory = TypeCategory::Boolean;
}
impl FieldKind for DateTime<Utc> {
    const CATEGORY: TypeCategory = TypeCategory::Date;
}
impl FieldKind for NaiveDate {
    const CATEGORY: TypeCategory = TypeCategory::Date;
}
impl<T: FieldKind> FieldKind for Vec<T> {
    const CATEGORY: TypeCategory = TypeCategory::Collection;
}

/// Marker for categories with an ordering (comparison and BETWEEN).
pub trait OrderedKind: FieldKind {}
impl OrderedKind for i32 {}
impl OrderedKind for i64 {}
impl OrderedKind for f64 {}
impl OrderedKind for DateTime<Utc> {}
impl OrderedKind for NaiveDate {}

/// Marker for text columns (LIKE family).
pub trait TextKind: FieldKind {}
impl TextKind for String {}

/// Marker for collection columns (containment and overlap).
pub trait CollectionKind: FieldKind {
    /// Element type of the collection.
    type Element: FieldKind;
}
impl<T: FieldKind> CollectionKind for Vec<T> {
    type Element = T;
}

/// Marker trait for value types that match a column type.
///
/// This is what lets `age.greater_than(18)` take an `i32` against an `i64`
/// column while rejecting a `&str` at compile time.
pub trait ColumnValue<C> {}

impl ColumnValue<i64> for i64 {}
impl ColumnValue<i64> for i32 {}
impl ColumnValue<i64> for &i64 {}
impl ColumnValue<i32> for i32 {}
impl ColumnValue<i32> for &i32 {}

impl ColumnValue<f64> for f64 {}
impl ColumnValue<f64> for f32 {}
impl ColumnValue<f64> for &f64 {}

impl ColumnValue<String> for String {}
impl ColumnValue<String> for &str {}
impl ColumnValue<String> for &String {}

impl ColumnValue<bool> for bool {}
impl ColumnValue<bool> for &bool {}

impl ColumnValue<Uuid> for Uuid {}
impl ColumnValue<Uuid> for &Uuid {}

impl ColumnValue<DateTime<Utc>> for DateTime<Utc> {}
impl ColumnValue<NaiveDate> for NaiveDate {}

// Option carries the column's own type; None converts to Value::Null and is
// rejected at the operator call, not at the type level.
impl<C, V: ColumnValue<C>> ColumnValue<C> for Option<V> {}
