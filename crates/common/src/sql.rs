//! Parameterized SQL fragment builders
//!
//! Values never get interpolated into SQL text. Every builder here returns
//! the fragment and its values separately; callers bind the values onto the
//! final statement with [`bind_values`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

use crate::{Error, Result};

/// A storable scalar destined for a positional parameter.
///
/// Each variant is nullable so that a SQL `NULL` still carries its type
/// when bound.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(Option<i32>),
    Text(Option<String>),
    Decimal(Option<Decimal>),
    Bool(Option<bool>),
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(Some(v))
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(Some(v))
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(Some(v.to_string()))
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        SqlValue::Decimal(Some(v))
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(Some(v))
    }
}

/// Output of [`sql_for_partial_update`]
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    /// Comma-joined `"<column>"=$<n>` assignments
    pub set_cols: String,
    /// Values aligned with the placeholders: `values[i]` binds to `$i+1`
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Placeholder index for the first value appended after the assignments
    /// (typically the row id in the WHERE clause).
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Build the SET fragment of a partial UPDATE.
///
/// `fields` are emitted in the given order. `column_names` maps a field name to
/// its storage column; fields missing from it use their own name.
///
/// ```ignore
/// [("firstName", "Aliya"), ("age", 32)] with {firstName: first_name}
///   => "\"first_name\"=$1, \"age\"=$2", ["Aliya", 32]
/// ```
pub fn sql_for_partial_update(
    fields: Vec<(&str, SqlValue)>,
    column_names: &HashMap<&str, &str>,
) -> Result<PartialUpdate> {
    if fields.is_empty() {
        return Err(Error::Validation("No data".to_string()));
    }

    let mut assignments = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());

    for (idx, (field, value)) in fields.into_iter().enumerate() {
        let column = column_names.get(field).copied().unwrap_or(field);
        assignments.push(format!("{}=${}", quote_ident(column), idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate {
        set_cols: assignments.join(", "),
        values,
    })
}

/// Double-quote an identifier, doubling any embedded quotes
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Predicate list for a dynamic WHERE clause.
///
/// Predicates and their values grow together; a bound predicate's
/// placeholder is taken from the number of values at the moment it is
/// pushed, so any subset of filters numbers its parameters `$1..$n`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicates {
    clauses: Vec<String>,
    values: Vec<SqlValue>,
}

impl Predicates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `"<expr> $<n>"` bound to `value`
    pub fn push_bound(&mut self, expr: &str, value: SqlValue) -> &mut Self {
        self.values.push(value);
        self.clauses.push(format!("{} ${}", expr, self.values.len()));
        self
    }

    /// Append a predicate that takes no parameter
    pub fn push(&mut self, expr: impl Into<String>) -> &mut Self {
        self.clauses.push(expr.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// `WHERE p1 AND p2 ...`, or an empty string when there are no predicates
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

/// Bind `values` onto `query` in order.
pub fn bind_values<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    values.into_iter().fold(query, |query, value| match value {
        SqlValue::Int(v) => query.bind(v),
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Decimal(v) => query.bind(v),
        SqlValue::Bool(v) => query.bind(v),
    })
}
