//! Core types for the query builder

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Value type for range bounds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),
    /// String (for dates, keywords)
    String(String),
}

impl From<i64> for RangeValue {
    fn from(value: i64) -> Self {
        RangeValue::Long(value)
    }
}

impl From<i32> for RangeValue {
    fn from(value: i32) -> Self {
        RangeValue::Long(value as i64)
    }
}

impl From<f64> for RangeValue {
    fn from(value: f64) -> Self {
        RangeValue::Double(value)
    }
}

impl From<&str> for RangeValue {
    fn from(value: &str) -> Self {
        RangeValue::String(value.to_string())
    }
}

impl From<String> for RangeValue {
    fn from(value: String) -> Self {
        RangeValue::String(value)
    }
}

impl From<RangeValue> for Value {
    fn from(value: RangeValue) -> Self {
        match value {
            RangeValue::Long(v) => Value::Number(v.into()),
            RangeValue::Double(v) => Number::from_f64(v)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RangeValue::String(s) => Value::String(s),
        }
    }
}

/// Bounds descriptor for range clauses
///
/// All fields are optional and only populated fields appear in the produced
/// mapping. No relationship between bounds is enforced (`gt` above `lt` is
/// accepted as given); the search engine decides what a bound means.
///
/// # Example
///
/// ```
/// use esdsl::RangeBounds;
///
/// let bounds = RangeBounds::new()
///     .gte("2024-01-01")
///     .lt("2025-01-01")
///     .format("yyyy-MM-dd");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Greater than or equal to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<RangeValue>,
    /// Greater than
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<RangeValue>,
    /// Less than or equal to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<RangeValue>,
    /// Less than
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<RangeValue>,
    /// Time zone applied to date bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Date format used to parse string bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Boost factor for scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
}

impl RangeBounds {
    /// Create an empty bounds descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the greater-than-or-equal bound
    pub fn gte(mut self, value: impl Into<RangeValue>) -> Self {
        self.gte = Some(value.into());
        self
    }

    /// Set the greater-than bound
    pub fn gt(mut self, value: impl Into<RangeValue>) -> Self {
        self.gt = Some(value.into());
        self
    }

    /// Set the less-than-or-equal bound
    pub fn lte(mut self, value: impl Into<RangeValue>) -> Self {
        self.lte = Some(value.into());
        self
    }

    /// Set the less-than bound
    pub fn lt(mut self, value: impl Into<RangeValue>) -> Self {
        self.lt = Some(value.into());
        self
    }

    /// Set the time zone for date bounds
    pub fn time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    /// Set the date format for string bounds
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the boost factor
    pub fn boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl From<RangeBounds> for Value {
    fn from(bounds: RangeBounds) -> Self {
        let mut descriptor = Map::new();
        if let Some(gte) = bounds.gte {
            descriptor.insert("gte".to_string(), gte.into());
        }
        if let Some(gt) = bounds.gt {
            descriptor.insert("gt".to_string(), gt.into());
        }
        if let Some(lte) = bounds.lte {
            descriptor.insert("lte".to_string(), lte.into());
        }
        if let Some(lt) = bounds.lt {
            descriptor.insert("lt".to_string(), lt.into());
        }
        if let Some(tz) = bounds.time_zone {
            descriptor.insert("time_zone".to_string(), Value::String(tz));
        }
        if let Some(format) = bounds.format {
            descriptor.insert("format".to_string(), Value::String(format));
        }
        if let Some(boost) = bounds.boost {
            descriptor.insert(
                "boost".to_string(),
                Number::from_f64(boost as f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
            );
        }
        Value::Object(descriptor)
    }
}

/// Minimum should match configuration
///
/// Passed through to the wire verbatim, either as an exact count or a
/// percentage string such as `"75%"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    /// Exact count
    Count(usize),
    /// Percentage (e.g., "75%")
    Percentage(String),
}

impl From<usize> for MinimumShouldMatch {
    fn from(count: usize) -> Self {
        MinimumShouldMatch::Count(count)
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(percentage: &str) -> Self {
        MinimumShouldMatch::Percentage(percentage.to_string())
    }
}

impl From<String> for MinimumShouldMatch {
    fn from(percentage: String) -> Self {
        MinimumShouldMatch::Percentage(percentage)
    }
}

impl From<MinimumShouldMatch> for Value {
    fn from(msm: MinimumShouldMatch) -> Self {
        match msm {
            MinimumShouldMatch::Count(n) => Value::Number(n.into()),
            MinimumShouldMatch::Percentage(s) => Value::String(s),
        }
    }
}
