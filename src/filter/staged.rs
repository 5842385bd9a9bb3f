//! Staged field builders.
//!
//! A staged value holds the filter tokens accumulated so far plus the field
//! token not yet combined with an operator. It is consumed by value on the
//! operator call, so single use is enforced by move semantics.

use std::marker::PhantomData;

use crate::ast::{
    CollectionKind, ColumnValue, FieldKind, FilterToken, Operator, OrderedKind, TextKind,
    TypeCategory, Value,
};
use crate::error::{FilterError, FilterResult};
use crate::filter::Filter;
use crate::seq::TokenSeq;

/// Append `field op params` to `prior` and seal the result into a Filter.
fn finish(prior: TokenSeq, field: FilterToken, op: Operator, params: Vec<Value>) -> Filter {
    let mut tokens = prior.push(field).push(FilterToken::Op(op));
    match op {
        Operator::Between | Operator::NotBetween => {
            tokens = tokens
                .push(FilterToken::Param(params[0].clone()))
                .push(FilterToken::syntax("AND"))
                .push(FilterToken::Param(params[1].clone()));
        }
        Operator::In | Operator::NotIn => {
            tokens = tokens.push(FilterToken::group_open());
            for (i, value) in params.into_iter().enumerate() {
                if i > 0 {
                    tokens = tokens.push(FilterToken::syntax(","));
                }
                tokens = tokens.push(FilterToken::Param(value));
            }
            tokens = tokens.push(FilterToken::group_close());
        }
        Operator::Contains | Operator::Overlaps => {
            tokens = tokens.push(FilterToken::Param(Value::Array(params)));
        }
        Operator::IsNull | Operator::IsNotNull => {}
        _ => {
            tokens = tokens.push(FilterToken::Param(params[0].clone()));
        }
    }
    Filter::from_parts(tokens)
}

/// An empty IN list can match nothing, so the whole predicate collapses to a
/// constant instead of producing `IN ()`, which is not SQL.
fn finish_empty_list(prior: TokenSeq, op: Operator) -> Filter {
    let text = match op {
        Operator::NotIn => "1 = 1",
        _ => "1 = 0",
    };
    Filter::from_parts(prior.push(FilterToken::syntax(text)))
}

fn reject_null(op: Operator, value: Value) -> FilterResult<Value> {
    if value.is_null() && !op.accepts_null() {
        return Err(FilterError::invalid_argument(format!(
            "operator {} does not support NULL; use is_null / is_not_null",
            op.sql_symbol()
        )));
    }
    Ok(value)
}

fn collect_non_null<V: Into<Value>>(
    op: Operator,
    values: impl IntoIterator<Item = V>,
) -> FilterResult<Vec<Value>> {
    values
        .into_iter()
        .map(|v| reject_null(op, v.into()))
        .collect()
}

/// A staged builder bound to one field of column type `T`.
///
/// Operator methods are only available where `T`'s category allows them;
/// each one consumes the staging value and yields a completed [`Filter`].
#[derive(Debug)]
pub struct FilterField<T> {
    prior: TokenSeq,
    field: FilterToken,
    _marker: PhantomData<T>,
}

impl<T> FilterField<T> {
    pub(crate) fn new(prior: TokenSeq, field: FilterToken) -> Self {
        Self {
            prior,
            field,
            _marker: PhantomData,
        }
    }
}

impl<T: FieldKind> FilterField<T> {
    fn apply(self, op: Operator, value: Value) -> FilterResult<Filter> {
        let value = reject_null(op, value)?;
        Ok(finish(self.prior, self.field, op, vec![value]))
    }

    pub fn equal<V>(self, value: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::Eq, value.into())
    }

    pub fn not_equal<V>(self, value: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::Ne, value.into())
    }

    pub fn is_null(self) -> Filter {
        finish(self.prior, self.field, Operator::IsNull, vec![])
    }

    pub fn is_not_null(self) -> Filter {
        finish(self.prior, self.field, Operator::IsNotNull, vec![])
    }

    /// `field IN ( ... )`. An empty list renders the always-false `1 = 0`.
    pub fn in_values<V>(self, values: impl IntoIterator<Item = V>) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        let params = collect_non_null(Operator::In, values)?;
        if params.is_empty() {
            return Ok(finish_empty_list(self.prior, Operator::In));
        }
        Ok(finish(self.prior, self.field, Operator::In, params))
    }

    /// `field NOT IN ( ... )`. An empty list renders the always-true `1 = 1`.
    pub fn not_in_values<V>(self, values: impl IntoIterator<Item = V>) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        let params = collect_non_null(Operator::NotIn, values)?;
        if params.is_empty() {
            return Ok(finish_empty_list(self.prior, Operator::NotIn));
        }
        Ok(finish(self.prior, self.field, Operator::NotIn, params))
    }
}

impl<T: OrderedKind> FilterField<T> {
    pub fn greater_than<V>(self, value: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::Gt, value.into())
    }

    pub fn greater_or_equal<V>(self, value: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::Gte, value.into())
    }

    pub fn less_than<V>(self, value: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::Lt, value.into())
    }

    pub fn less_or_equal<V>(self, value: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::Lte, value.into())
    }

    pub fn between<V>(self, low: V, high: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        let low = reject_null(Operator::Between, low.into())?;
        let high = reject_null(Operator::Between, high.into())?;
        Ok(finish(self.prior, self.field, Operator::Between, vec![low, high]))
    }

    pub fn not_between<V>(self, low: V, high: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        let low = reject_null(Operator::NotBetween, low.into())?;
        let high = reject_null(Operator::NotBetween, high.into())?;
        Ok(finish(
            self.prior,
            self.field,
            Operator::NotBetween,
            vec![low, high],
        ))
    }
}

impl<T: TextKind> FilterField<T> {
    pub fn like<V>(self, pattern: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::Like, pattern.into())
    }

    pub fn not_like<V>(self, pattern: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::NotLike, pattern.into())
    }

    pub fn ilike<V>(self, pattern: V) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T>,
    {
        self.apply(Operator::ILike, pattern.into())
    }
}

impl<T: CollectionKind> FilterField<T> {
    /// Array containment: `field @> values`.
    pub fn contains<V>(self, values: impl IntoIterator<Item = V>) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T::Element>,
    {
        let params = collect_non_null(Operator::Contains, values)?;
        Ok(finish(self.prior, self.field, Operator::Contains, params))
    }

    /// Array overlap: `field && values`.
    pub fn overlaps<V>(self, values: impl IntoIterator<Item = V>) -> FilterResult<Filter>
    where
        V: Into<Value> + ColumnValue<T::Element>,
    {
        let params = collect_non_null(Operator::Overlaps, values)?;
        Ok(finish(self.prior, self.field, Operator::Overlaps, params))
    }
}

/// Descriptor-based staging for callers that resolve fields at runtime.
///
/// Operator legality is checked against the descriptor's type category via
/// [`Operator::supports`] instead of trait bounds.
#[derive(Debug)]
pub struct DynFilterField {
    prior: TokenSeq,
    field: FilterToken,
    category: TypeCategory,
}

impl DynFilterField {
    pub(crate) fn new(prior: TokenSeq, field: FilterToken, category: TypeCategory) -> Self {
        Self {
            prior,
            field,
            category,
        }
    }

    fn check(&self, op: Operator) -> FilterResult<()> {
        if !op.supports(self.category) {
            return Err(FilterError::invalid_argument(format!(
                "operator {} is not legal for {:?} fields",
                op.sql_symbol(),
                self.category
            )));
        }
        Ok(())
    }

    /// Apply a value-free operator (IS NULL, IS NOT NULL).
    pub fn unary(self, op: Operator) -> FilterResult<Filter> {
        self.check(op)?;
        if op.needs_value() {
            return Err(FilterError::invalid_argument(format!(
                "operator {} requires a value",
                op.sql_symbol()
            )));
        }
        Ok(finish(self.prior, self.field, op, vec![]))
    }

    /// Apply a single-value operator (=, >, LIKE, ...).
    pub fn binary(self, op: Operator, value: impl Into<Value>) -> FilterResult<Filter> {
        self.check(op)?;
        if !op.needs_value()
            || matches!(
                op,
                Operator::In
                    | Operator::NotIn
                    | Operator::Between
                    | Operator::NotBetween
                    | Operator::Contains
                    | Operator::Overlaps
            )
        {
            return Err(FilterError::invalid_argument(format!(
                "operator {} does not take a single value",
                op.sql_symbol()
            )));
        }
        let value = reject_null(op, value.into())?;
        Ok(finish(self.prior, self.field, op, vec![value]))
    }

    /// Apply a range operator (BETWEEN, NOT BETWEEN).
    pub fn ranged(
        self,
        op: Operator,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> FilterResult<Filter> {
        self.check(op)?;
        if !matches!(op, Operator::Between | Operator::NotBetween) {
            return Err(FilterError::invalid_argument(format!(
                "operator {} does not take a range",
                op.sql_symbol()
            )));
        }
        let low = reject_null(op, low.into())?;
        let high = reject_null(op, high.into())?;
        Ok(finish(self.prior, self.field, op, vec![low, high]))
    }

    /// Apply a list operator (IN, NOT IN, @>, &&).
    pub fn listed<V: Into<Value>>(
        self,
        op: Operator,
        values: impl IntoIterator<Item = V>,
    ) -> FilterResult<Filter> {
        self.check(op)?;
        match op {
            Operator::In | Operator::NotIn => {
                let params = collect_non_null(op, values)?;
                if params.is_empty() {
                    return Ok(finish_empty_list(self.prior, op));
                }
                Ok(finish(self.prior, self.field, op, params))
            }
            Operator::Contains | Operator::Overlaps => {
                let params = collect_non_null(op, values)?;
                Ok(finish(self.prior, self.field, op, params))
            }
            _ => Err(FilterError::invalid_argument(format!(
                "operator {} does not take a list",
                op.sql_symbol()
            ))),
        }
    }
}
