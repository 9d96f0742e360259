//! Query document builder for the Elasticsearch query DSL
//!
//! This crate assembles search queries as plain `serde_json::Value` mappings
//! that mirror the wire format the search engine expects. Each clause kind
//! has one pure constructor function, and the compositional constructors
//! combine clauses into boolean contexts and full query documents:
//!
//! ```
//! use esdsl::{bool, filter, must, query, range, term, RangeBounds};
//! use serde_json::json;
//!
//! let document = query([
//!     bool([
//!         must([term("status", "published")]),
//!         filter([range("date", RangeBounds::new().gte("2015-01-01"))]),
//!     ]),
//! ]);
//!
//! assert_eq!(
//!     document,
//!     json!({
//!         "query": {
//!             "bool": {
//!                 "must": [{ "term": { "status": "published" } }],
//!                 "filter": [{ "range": { "date": { "gte": "2015-01-01" } } }]
//!             }
//!         }
//!     })
//! );
//! ```
//!
//! Every constructor is a stateless, synchronous transformation that only
//! reads its arguments and allocates a new mapping, so calls may run
//! concurrently without coordination. Nothing is validated against an index
//! schema and no request is ever sent; the produced document is handed as
//! opaque structured data to whatever search client the application uses.

pub mod clause;
pub mod compose;
pub mod types;

pub use clause::{
    fuzzy, match_all, match_none, match_phrase, prefix, r#match, range, term, terms, wildcard,
};
pub use compose::{bool, compact, filter, must, must_not, query, should};
pub use types::{MinimumShouldMatch, RangeBounds, RangeValue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
