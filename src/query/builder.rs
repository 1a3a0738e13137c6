//! Outward query-builder surface for chunked fields.
//!
//! These builders render the JSON bodies the host engine's API accepts for
//! the named `chunked_term` and `chunked_wildcard` query/filter kinds. They
//! are pass-through plumbing: the chunking itself happens server-side when
//! the host engine hands the field's value to the rewriter.

use serde_json::{json, Map, Value};

/// Builder for an exact-term query or filter on a chunked field.
#[derive(Debug, Clone)]
pub struct TermQueryBuilder {
    field: String,
    value: String,
    name: Option<String>,
    cache: Option<bool>,
    cache_key: Option<String>,
}

impl TermQueryBuilder {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            name: None,
            cache: None,
            cache_key: None,
        }
    }

    /// Label reported back with matched queries per hit.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether the host engine should cache the filter's result.
    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Explicit cache key for the filter's result.
    pub fn cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    /// JSON body of the query form.
    pub fn to_query_json(&self) -> Value {
        json!({ "chunked_term": body(&self.field, &self.value, &self.name, None, None) })
    }

    /// JSON body of the filter form, carrying the cache hints.
    pub fn to_filter_json(&self) -> Value {
        json!({
            "chunked_term": body(
                &self.field,
                &self.value,
                &self.name,
                self.cache,
                self.cache_key.as_deref(),
            )
        })
    }
}

/// Builder for a wildcard query or filter on a chunked field.
///
/// The pattern is rewritten server-side when possible; a non-rewritable
/// pattern makes the host engine fall back to term iteration, which can be
/// slow.
#[derive(Debug, Clone)]
pub struct WildcardQueryBuilder {
    field: String,
    pattern: String,
    name: Option<String>,
    cache: Option<bool>,
    cache_key: Option<String>,
}

impl WildcardQueryBuilder {
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
            name: None,
            cache: None,
            cache_key: None,
        }
    }

    /// Label reported back with matched queries per hit.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether the host engine should cache the filter's result.
    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Explicit cache key for the filter's result.
    pub fn cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    /// JSON body of the query form.
    pub fn to_query_json(&self) -> Value {
        json!({ "chunked_wildcard": body(&self.field, &self.pattern, &self.name, None, None) })
    }

    /// JSON body of the filter form, carrying the cache hints.
    pub fn to_filter_json(&self) -> Value {
        json!({
            "chunked_wildcard": body(
                &self.field,
                &self.pattern,
                &self.name,
                self.cache,
                self.cache_key.as_deref(),
            )
        })
    }
}

fn body(
    field: &str,
    value: &str,
    name: &Option<String>,
    cache: Option<bool>,
    cache_key: Option<&str>,
) -> Value {
    let mut map = Map::new();
    map.insert(field.to_string(), Value::String(value.to_string()));
    if let Some(name) = name {
        map.insert("_name".to_string(), Value::String(name.clone()));
    }
    if let Some(cache) = cache {
        map.insert("_cache".to_string(), Value::Bool(cache));
    }
    if let Some(key) = cache_key {
        map.insert("_cache_key".to_string(), Value::String(key.to_string()));
    }
    Value::Object(map)
}
