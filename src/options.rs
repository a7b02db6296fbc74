//! Request options: pagination, sorting, filtering and authentication.
//!
//! Options are applied in order to an [`ApiRequest`]. Set-style options
//! (limit, page, sort, match, include, ...) replace an earlier value for the
//! same key. Negation, exclusion and comparison filters append raw fragments
//! instead, because the API's `field!=value` and `field<180` syntax does not
//! fit one value per key; applying two of them keeps both.
//!
//! # Example
//! ```rust
//! use one_api_sdk::http::ApiRequest;
//! use one_api_sdk::options::RequestOption;
//!
//! let mut req = ApiRequest::new("https://the-one-api.dev/v2", "/character");
//! for opt in [
//!     RequestOption::limit(1000),
//!     RequestOption::filter_include("race", ["Hobbit", "Human"]),
//!     RequestOption::comparison("height", ">", 100),
//!     RequestOption::limit(3),
//! ] {
//!     opt.apply(&mut req);
//! }
//! assert_eq!(req.query_param("limit"), Some("3"));
//! assert!(req.query_string().ends_with("&height>100"));
//! ```

use itertools::Itertools;
use reqwest::header::AUTHORIZATION;

use crate::http::ApiRequest;

/// Pagination settings. Zero fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of records per response
    pub limit: u32,

    /// 1-based page number
    pub page: u32,

    /// Number of records to skip
    pub offset: u32,
}

/// A single request modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// `limit=n`
    Limit(u32),
    /// `page=n`
    Page(u32),
    /// `offset=n`
    Offset(u32),
    /// `sort=field:direction`, direction is normally `asc` or `dsc`
    Sort { field: String, direction: String },
    /// `Authorization: Bearer <key>`
    ApiKey(String),
    /// `field=value`
    FilterMatch { field: String, value: String },
    /// `field!=value`, appended
    FilterNegate { field: String, value: String },
    /// `field=v1,v2`
    FilterInclude { field: String, values: Vec<String> },
    /// `field!=v1,v2`, appended
    FilterExclude { field: String, values: Vec<String> },
    /// `field=<expr>`, expression passed through unchecked
    RegexInclude { field: String, expr: String },
    /// `field!=<expr>`, appended
    RegexExclude { field: String, expr: String },
    /// `field<op><value>`, appended; op is normally `<`, `>` or `>=`
    Comparison {
        field: String,
        op: String,
        value: i64,
    },
    /// Limit, page and offset in one option
    Pagination(Pagination),
}

impl RequestOption {
    /// Return at most `limit` records (`limit=n`).
    ///
    /// # Example
    /// ```rust
    /// use one_api_sdk::http::ApiRequest;
    /// use one_api_sdk::RequestOption;
    ///
    /// let mut req = ApiRequest::new("https://the-one-api.dev/v2", "/quote");
    /// RequestOption::limit(10).apply(&mut req);
    /// assert_eq!(req.query_string(), "limit=10");
    /// ```
    pub fn limit(limit: u32) -> Self {
        Self::Limit(limit)
    }

    /// Select a 1-based result page (`page=n`).
    pub fn page(page: u32) -> Self {
        Self::Page(page)
    }

    /// Skip the first `offset` records (`offset=n`).
    pub fn offset(offset: u32) -> Self {
        Self::Offset(offset)
    }

    /// Sort by `field` in `direction` (`"asc"` or `"dsc"`).
    ///
    /// The direction is not checked; the server decides what to do with it.
    pub fn sort(field: impl Into<String>, direction: impl Into<String>) -> Self {
        Self::Sort {
            field: field.into(),
            direction: direction.into(),
        }
    }

    /// Authenticate this request with `key`.
    ///
    /// Not needed when the client was configured with a key; use it to swap
    /// keys or to authenticate a single call on a read-only client.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Keep records whose `field` equals `value` (`field=value`).
    ///
    /// Replaces an earlier match, include or regex include on the same field.
    pub fn filter_match(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FilterMatch {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Drop records whose `field` equals `value` (`field!=value`).
    ///
    /// Appended, so it can be combined with a match on the same field.
    pub fn filter_negate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FilterNegate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Keep records whose `field` is one of `values` (`field=v1,v2`).
    ///
    /// # Example
    /// ```rust
    /// use one_api_sdk::http::ApiRequest;
    /// use one_api_sdk::RequestOption;
    ///
    /// let mut req = ApiRequest::new("https://the-one-api.dev/v2", "/character");
    /// RequestOption::filter_include("race", ["Hobbit", "Human"]).apply(&mut req);
    /// assert_eq!(req.query_param("race"), Some("Hobbit,Human"));
    /// ```
    pub fn filter_include<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::FilterInclude {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Drop records whose `field` is one of `values` (`field!=v1,v2`), appended.
    pub fn filter_exclude<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::FilterExclude {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Match `field` against a regular expression such as `/foot/i`.
    pub fn regex_include(field: impl Into<String>, expr: impl Into<String>) -> Self {
        Self::RegexInclude {
            field: field.into(),
            expr: expr.into(),
        }
    }

    /// Drop records whose `field` matches `expr` (`field!=<expr>`), appended.
    pub fn regex_exclude(field: impl Into<String>, expr: impl Into<String>) -> Self {
        Self::RegexExclude {
            field: field.into(),
            expr: expr.into(),
        }
    }

    /// Compare `field` against `value`; `op` is sent as given.
    pub fn comparison(field: impl Into<String>, op: impl Into<String>, value: i64) -> Self {
        Self::Comparison {
            field: field.into(),
            op: op.into(),
            value,
        }
    }

    /// Set limit, page and offset together; zero fields are skipped.
    pub fn pagination(pagination: Pagination) -> Self {
        Self::Pagination(pagination)
    }

    /// Apply this option to `req`.
    pub fn apply(&self, req: &mut ApiRequest) {
        match self {
            Self::Limit(n) => req.set_query("limit", n.to_string()),
            Self::Page(n) => req.set_query("page", n.to_string()),
            Self::Offset(n) => req.set_query("offset", n.to_string()),
            Self::Sort { field, direction } => {
                req.set_query("sort", format!("{}:{}", field, direction))
            }
            Self::ApiKey(key) => req.set_header(AUTHORIZATION.as_str(), format!("Bearer {}", key)),
            Self::FilterMatch { field, value } => req.set_query(field, value),
            Self::FilterNegate { field, value } => negate(req, field, value),
            Self::FilterInclude { field, values } => req.set_query(field, values.iter().join(",")),
            Self::FilterExclude { field, values } => negate(req, field, &values.iter().join(",")),
            Self::RegexInclude { field, expr } => req.set_query(field, expr),
            Self::RegexExclude { field, expr } => negate(req, field, expr),
            Self::Comparison { field, op, value } => {
                req.append_fragment(format!("{}{}{}", field, op, value))
            }
            Self::Pagination(p) => {
                if p.offset > 0 {
                    req.set_query("offset", p.offset.to_string());
                }
                if p.limit > 0 {
                    req.set_query("limit", p.limit.to_string());
                }
                if p.page > 0 {
                    req.set_query("page", p.page.to_string());
                }
            }
        }
    }
}

fn negate(req: &mut ApiRequest, field: &str, value: &str) {
    req.append_fragment(format!("{}!={}", field, value));
}

impl From<Pagination> for RequestOption {
    fn from(p: Pagination) -> Self {
        Self::Pagination(p)
    }
}

/// Apply `options` to `req` in order.
pub fn apply_all<'a>(req: &mut ApiRequest, options: impl IntoIterator<Item = &'a RequestOption>) {
    for option in options {
        option.apply(req);
    }
}
