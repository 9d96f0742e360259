//! Leaf clause constructors
//!
//! One function per primitive query kind. Every constructor produces a
//! single-key mapping whose value maps the field name to the caller's value
//! description, for example:
//!
//! ```json
//! { "term": { "status": "published" } }
//! ```
//!
//! Constructors are total: any value is accepted and passed through
//! unmodified. Nothing is validated against an index schema; a semantically
//! meaningless clause is still assembled and left for the search engine to
//! reject at request time.

use serde_json::{Map, Value};

/// Build the `{ kind: { field: value } }` shape shared by every leaf clause.
fn single_field(kind: &str, field: impl Into<String>, value: impl Into<Value>) -> Value {
    let mut inner = Map::new();
    inner.insert(field.into(), value.into());
    let mut clause = Map::new();
    clause.insert(kind.to_string(), Value::Object(inner));
    Value::Object(clause)
}

/// Clause matching documents that contain the exact term in the field
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let clause = esdsl::term("status", "published");
/// assert_eq!(clause, json!({ "term": { "status": "published" } }));
/// ```
pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("term", field, value)
}

/// Clause matching documents that contain any of the exact terms in the field
///
/// The order of the provided values is preserved in the output sequence.
pub fn terms<I, V>(field: impl Into<String>, values: I) -> Value
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    single_field("terms", field, values)
}

/// Clause matching documents whose field value falls in the given range
///
/// The bounds descriptor passes through unmodified; a typed
/// [`RangeBounds`](crate::RangeBounds) converts into the wire shape via
/// `From`, and a raw JSON object is accepted as well.
///
/// # Example
///
/// ```
/// use esdsl::{range, RangeBounds};
/// use serde_json::json;
///
/// let clause = range("year", RangeBounds::new().gte(2020).lte(2024));
/// assert_eq!(clause, json!({ "range": { "year": { "gte": 2020, "lte": 2024 } } }));
/// ```
pub fn range(field: impl Into<String>, bounds: impl Into<Value>) -> Value {
    single_field("range", field, bounds)
}

/// Full text clause matching analyzed field content
///
/// The value may be a bare query string or an options object such as
/// `{ "query": "rust programming", "operator": "and" }`.
pub fn r#match(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("match", field, value)
}

/// Full text clause matching an exact phrase or word proximity
pub fn match_phrase(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("match_phrase", field, value)
}

/// Clause matching all documents
///
/// Exposed with the same `(field, value)` signature as the other leaf
/// constructors; both arguments pass through as given.
pub fn match_all(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("match_all", field, value)
}

/// Clause matching no documents
///
/// Same `(field, value)` pass-through signature as [`match_all`].
pub fn match_none(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("match_none", field, value)
}

/// Clause matching terms against a wildcard pattern
///
/// The value may be a bare pattern or an options object such as
/// `{ "value": "prog*", "boost": 2.0 }`.
pub fn wildcard(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("wildcard", field, value)
}

/// Clause matching terms that start with the given prefix
pub fn prefix(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("prefix", field, value)
}

/// Clause matching terms within edit distance of the given term
pub fn fuzzy(field: impl Into<String>, value: impl Into<Value>) -> Value {
    single_field("fuzzy", field, value)
}
