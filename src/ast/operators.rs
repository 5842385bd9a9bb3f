use serde::{Deserialize, Serialize};

use crate::ast::fields::TypeCategory;

/// Logical connective between predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl LogicalOp {
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl std::fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_symbol())
    }
}

/// Comparison operator applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    NotLike,
    ILike,
    In,
    NotIn,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
    Contains,
    Overlaps,
}

impl Operator {
    /// For simple operators, returns the symbol directly.
    /// For keyword operators (BETWEEN, IS NULL), returns the keyword.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::ILike => "ILIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Contains => "@>",
            Operator::Overlaps => "&&",
        }
    }

    /// IS NULL and IS NOT NULL stand alone; everything else binds a value.
    pub fn needs_value(&self) -> bool {
        !matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    /// Whether NULL is a legal right-hand side. SQL three-valued logic makes
    /// `x = NULL` always unknown, so value-binding operators refuse it.
    pub fn accepts_null(&self) -> bool {
        !self.needs_value()
    }

    /// Operator legality per field type category. The runtime counterpart of
    /// the marker-trait bounds on `FilterField<T>`: every operator callable
    /// on the typed path for a category is accepted here, and vice versa.
    /// (Equality and IN are nominally declared for every column type, but no
    /// `ColumnValue` impl targets a collection column, so on collections
    /// only containment, overlap, and the null checks are callable.)
    pub fn supports(&self, category: TypeCategory) -> bool {
        match category {
            TypeCategory::Numeric | TypeCategory::Date => matches!(
                self,
                Operator::Eq
                    | Operator::Ne
                    | Operator::Gt
                    | Operator::Gte
                    | Operator::Lt
                    | Operator::Lte
                    | Operator::In
                    | Operator::NotIn
                    | Operator::Between
                    | Operator::NotBetween
                    | Operator::IsNull
                    | Operator::IsNotNull
            ),
            TypeCategory::Text => matches!(
                self,
                Operator::Eq
                    | Operator::Ne
                    | Operator::Like
                    | Operator::NotLike
                    | Operator::ILike
                    | Operator::In
                    | Operator::NotIn
                    | Operator::IsNull
                    | Operator::IsNotNull
            ),
            TypeCategory::Boolean => matches!(
                self,
                Operator::Eq
                    | Operator::Ne
                    | Operator::In
                    | Operator::NotIn
                    | Operator::IsNull
                    | Operator::IsNotNull
            ),
            TypeCategory::Collection => matches!(
                self,
                Operator::Contains | Operator::Overlaps | Operator::IsNull | Operator::IsNotNull
            ),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_symbol())
    }
}
