//! Boolean compositional constructors
//!
//! Assembles leaf clauses into the named boolean sub-clauses and merges
//! sub-clauses into a full query document:
//!
//! ```json
//! {
//!   "query": {
//!     "bool": {
//!       "must": [
//!         { "match": { "content": "rust programming" } }
//!       ],
//!       "filter": [
//!         { "range": { "created_at": { "gte": "2024-01-01" } } }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Every constructor accepts any `IntoIterator` whose items convert into
//! `Option<Value>`, so a clause list may mix present clauses with `None`
//! placeholders. A caller can thereby omit a sub-clause conditionally without
//! restructuring the call site:
//!
//! ```
//! use esdsl::{bool, filter, must, query, r#match, term};
//!
//! let status_filter = Some(term("status", "published"));
//! let document = query([
//!     bool([
//!         must([r#match("content", "rust")]),
//!         filter([status_filter, None]),
//!     ]),
//! ]);
//! assert_eq!(document["query"]["bool"]["filter"].as_array().unwrap().len(), 1);
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::types::MinimumShouldMatch;

/// Return the ordered sub-sequence of present clauses.
///
/// `None` and JSON `null` both count as absent and are dropped; everything
/// else passes through in order. This is a presence filter, not a validator:
/// clause shape is never inspected.
pub fn compact<I, T>(clauses: I) -> Vec<Value>
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    clauses
        .into_iter()
        .filter_map(|clause| {
            let clause: Option<Value> = clause.into();
            clause.filter(|value| !value.is_null())
        })
        .collect()
}

/// Build the `{ kind: [clauses...] }` shape shared by the sequence sub-clauses.
fn sequence(kind: &str, clauses: Vec<Value>) -> Value {
    let mut sub_clause = Map::new();
    sub_clause.insert(kind.to_string(), Value::Array(clauses));
    Value::Object(sub_clause)
}

/// Shallow-merge the present object parts left to right.
///
/// Later keys overwrite earlier keys of the same name. Non-object parts that
/// survive the presence filter are ignored; only mappings merge.
fn merge<I, T>(parts: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    let mut merged = Map::new();
    for part in compact(parts) {
        if let Value::Object(entries) = part {
            for (key, value) in entries {
                merged.insert(key, value);
            }
        }
    }
    Value::Object(merged)
}

/// Sub-clause whose clauses must all match, contributing to the score
///
/// Absent entries are dropped; the key is always present, so an all-absent
/// input yields `{ "must": [] }`.
///
/// # Example
///
/// ```
/// use esdsl::{must, term};
/// use serde_json::json;
///
/// let sub_clause = must([term("status", "published")]);
/// assert_eq!(sub_clause, json!({ "must": [{ "term": { "status": "published" } }] }));
/// ```
pub fn must<I, T>(clauses: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    sequence("must", compact(clauses))
}

/// Sub-clause whose clauses must not match any document
pub fn must_not<I, T>(clauses: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    sequence("must_not", compact(clauses))
}

/// Sub-clause whose clauses must all match in filter context
///
/// Filter context produces a yes/no match decision without contributing to
/// relevance scoring, which lets the search engine cache the clause.
pub fn filter<I, T>(clauses: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    sequence("filter", compact(clauses))
}

/// Sub-clause where at least `minimum_should_match` clauses should match
///
/// The count converts from a plain `usize` or a percentage string and is
/// passed through verbatim; no bounds check is made against the number of
/// present clauses.
///
/// # Example
///
/// ```
/// use esdsl::{should, term};
/// use serde_json::json;
///
/// let sub_clause = should(2, [term("tag", "rust"), term("tag", "go")]);
/// assert_eq!(
///     sub_clause,
///     json!({
///         "should": [
///             { "term": { "tag": "rust" } },
///             { "term": { "tag": "go" } }
///         ],
///         "minimum_should_match": 2
///     })
/// );
/// ```
pub fn should<I, T>(minimum_should_match: impl Into<MinimumShouldMatch>, clauses: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    let minimum_should_match: MinimumShouldMatch = minimum_should_match.into();
    let mut sub_clause = Map::new();
    sub_clause.insert("should".to_string(), Value::Array(compact(clauses)));
    sub_clause.insert(
        "minimum_should_match".to_string(),
        Value::from(minimum_should_match),
    );
    Value::Object(sub_clause)
}

/// Boolean clause combining several sub-clauses into one context
///
/// The present sub-clauses are shallow-merged left to right into a single
/// mapping. When two arguments define the same key, the later argument's
/// value replaces the earlier one entirely; `bool([must([a]), must([b])])`
/// yields `{ "bool": { "must": [b] } }`, not a concatenation. Callers that
/// want several clauses under one key must build that key once.
pub fn bool<I, T>(parts: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    let mut clause = Map::new();
    clause.insert("bool".to_string(), merge(parts));
    Value::Object(clause)
}

/// Top-level query document wrapping the full matching context
///
/// Merges the present parts with the same left-to-right overwrite rule as
/// [`bool`], so a leaf clause and a boolean clause can sit side by side at
/// the top query level. The assembled document is emitted as a debug event
/// for applications that log outgoing query bodies.
pub fn query<I, T>(parts: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Option<Value>>,
{
    let mut document = Map::new();
    document.insert("query".to_string(), merge(parts));
    let document = Value::Object(document);
    debug!(%document, "assembled query document");
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{r#match, range, term};
    use serde_json::json;

    #[test]
    fn test_compact_drops_absent_entries() {
        let clauses = compact([Some(term("a", 1)), None, Some(term("b", 2))]);
        assert_eq!(
            clauses,
            vec![json!({ "term": { "a": 1 } }), json!({ "term": { "b": 2 } })]
        );
    }

    #[test]
    fn test_compact_drops_json_null() {
        assert_eq!(compact([json!(null), term("a", 1)]), vec![term("a", 1)]);
    }

    #[test]
    fn test_compact_accepts_bare_values() {
        assert_eq!(compact([term("a", 1)]).len(), 1);
    }

    #[test]
    fn test_must_drops_absent_preserves_order() {
        assert_eq!(
            must([Some(term("a", 1)), None, Some(term("b", 2))]),
            json!({ "must": [
                { "term": { "a": 1 } },
                { "term": { "b": 2 } }
            ] })
        );
    }

    #[test]
    fn test_must_empty_keeps_key() {
        assert_eq!(must(Vec::<Value>::new()), json!({ "must": [] }));
        assert_eq!(must([None::<Value>, None]), json!({ "must": [] }));
    }

    #[test]
    fn test_must_not_and_filter_shapes() {
        assert_eq!(
            must_not([term("status", "draft")]),
            json!({ "must_not": [{ "term": { "status": "draft" } }] })
        );
        assert_eq!(
            filter([term("status", "published")]),
            json!({ "filter": [{ "term": { "status": "published" } }] })
        );
    }

    #[test]
    fn test_should_carries_minimum_should_match() {
        assert_eq!(
            should(2, [term("a", 1), term("b", 2), term("c", 3)]),
            json!({
                "should": [
                    { "term": { "a": 1 } },
                    { "term": { "b": 2 } },
                    { "term": { "c": 3 } }
                ],
                "minimum_should_match": 2
            })
        );
    }

    #[test]
    fn test_should_percentage_passes_verbatim() {
        assert_eq!(
            should("75%", [term("a", 1)]),
            json!({
                "should": [{ "term": { "a": 1 } }],
                "minimum_should_match": "75%"
            })
        );
    }

    #[test]
    fn test_should_count_above_clause_count_accepted() {
        // Passed through verbatim, no bounds check
        assert_eq!(
            should(5, [term("a", 1)]),
            json!({
                "should": [{ "term": { "a": 1 } }],
                "minimum_should_match": 5
            })
        );
    }

    #[test]
    fn test_bool_merges_sub_clauses() {
        assert_eq!(
            bool([filter([term("status", "published")]), must([r#match("content", "rust")])]),
            json!({
                "bool": {
                    "filter": [{ "term": { "status": "published" } }],
                    "must": [{ "match": { "content": "rust" } }]
                }
            })
        );
    }

    #[test]
    fn test_bool_later_key_overwrites_earlier() {
        // Same-key arguments do not concatenate; the last one wins.
        assert_eq!(
            bool([must([term("a", 1)]), must([term("b", 2)])]),
            json!({ "bool": { "must": [{ "term": { "b": 2 } }] } })
        );
    }

    #[test]
    fn test_bool_empty() {
        assert_eq!(bool(Vec::<Value>::new()), json!({ "bool": {} }));
    }

    #[test]
    fn test_bool_skips_absent_parts() {
        assert_eq!(
            bool([None, Some(must([term("a", 1)]))]),
            json!({ "bool": { "must": [{ "term": { "a": 1 } }] } })
        );
    }

    #[test]
    fn test_query_merges_leaf_and_bool() {
        let document = query([
            term("status", "published"),
            bool([filter([range("date", json!({ "gte": "2015-01-01" }))])]),
        ]);
        assert_eq!(
            document,
            json!({
                "query": {
                    "term": { "status": "published" },
                    "bool": {
                        "filter": [{ "range": { "date": { "gte": "2015-01-01" } } }]
                    }
                }
            })
        );
    }

    #[test]
    fn test_query_empty() {
        assert_eq!(query(Vec::<Value>::new()), json!({ "query": {} }));
    }

    #[test]
    fn test_merge_ignores_non_object_parts() {
        assert_eq!(
            query([json!("not a mapping"), term("a", 1)]),
            json!({ "query": { "term": { "a": 1 } } })
        );
    }
}
