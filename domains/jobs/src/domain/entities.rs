//! Domain entities for Jobs domain
//!
//! The stored `Job` row plus the typed inputs that reach the repository:
//! `NewJob` for inserts, `JobUpdate` for partial updates and `JobFilters`
//! for filtered listing.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use jobly_common::{Predicates, SqlValue};

/// Job posting entity
///
/// `equity` serializes as a decimal string (`"0.05"`) and `company_handle`
/// as `companyHandle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Input for creating a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(range(min = 0))]
    pub salary: Option<i32>,

    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<Decimal>,

    /// Handle of an existing company (varchar(25))
    #[validate(length(min = 1, max = 25))]
    pub company_handle: String,
}

/// Equity is a fraction of the company: 0 through 1 inclusive
fn validate_equity(equity: &Decimal) -> std::result::Result<(), ValidationError> {
    if equity.is_sign_negative() || *equity > Decimal::ONE {
        return Err(ValidationError::new("range"));
    }
    Ok(())
}

/// Partial update of a job.
///
/// Outer `None` leaves a field untouched; `Some(None)` is an explicit `null`,
/// which clears `salary` or `equity` and is rejected for `title`.
/// `id` and `companyHandle` cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(default, deserialize_with = "present_or_null")]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "present_or_null")]
    pub salary: Option<Option<i32>>,

    #[serde(default, deserialize_with = "present_or_null")]
    pub equity: Option<Option<Decimal>>,
}

/// Distinguish an explicit `null` from an absent field
fn present_or_null<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Validate for JobUpdate {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.title {
            Some(None) => errors.add("title", ValidationError::new("required")),
            Some(Some(title)) if title.is_empty() => {
                errors.add("title", ValidationError::new("length"))
            }
            _ => {}
        }
        if matches!(self.salary, Some(Some(salary)) if salary < 0) {
            errors.add("salary", ValidationError::new("range"));
        }
        if let Some(Some(equity)) = &self.equity {
            if let Err(e) = validate_equity(equity) {
                errors.add("equity", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl JobUpdate {
    /// Fields present in this update, in column order, ready for a SET clause
    pub fn into_fields(self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::with_capacity(3);
        if let Some(title) = self.title {
            fields.push(("title", SqlValue::Text(title)));
        }
        if let Some(salary) = self.salary {
            fields.push(("salary", SqlValue::Int(salary)));
        }
        if let Some(equity) = self.equity {
            fields.push(("equity", SqlValue::Decimal(equity)));
        }
        fields
    }
}

/// Optional filters for listing jobs; absent filters impose no constraint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Inclusive lower bound on salary
    pub min_salary: Option<i32>,
    /// Only jobs with equity > 0
    pub has_equity: bool,
    pub company_handle: Option<String>,
}

enum Filter {
    Bound(&'static str, SqlValue),
    Unbound(&'static str),
}

impl JobFilters {
    /// Fold the present filters into a predicate list
    pub fn to_predicates(&self) -> Predicates {
        let filters = [
            self.title
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| Filter::Bound("title ILIKE", format!("%{}%", escape_like(t)).into())),
            self.min_salary.map(|s| Filter::Bound("salary >=", s.into())),
            self.has_equity.then_some(Filter::Unbound("equity > 0")),
            self.company_handle
                .as_deref()
                .filter(|h| !h.is_empty())
                .map(|h| Filter::Bound("company_handle =", h.into())),
        ];

        filters
            .into_iter()
            .flatten()
            .fold(Predicates::new(), |mut predicates, filter| {
                match filter {
                    Filter::Bound(expr, value) => predicates.push_bound(expr, value),
                    Filter::Unbound(expr) => predicates.push(expr),
                };
                predicates
            })
    }
}

/// Escape LIKE metacharacters so the title filter matches literally
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
