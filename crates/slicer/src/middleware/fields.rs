//! Requested fields extraction.
//!
//! Reads the comma-separated field list from the query string, e.g.
//! `GET /persons?fields=firstName,lastName`. A parameter given more than
//! once contributes all of its values.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
};

use crate::config::DEFAULT_FIELDS_PARAM;
use crate::fields::FieldSpec;

/// Name of the query parameter holding the field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldsParam(pub String);

impl FieldsParam {
    /// Returns the parameter name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldsParam {
    fn default() -> Self {
        Self(DEFAULT_FIELDS_PARAM.to_string())
    }
}

/// Axum extractor for the requested field list.
///
/// Never rejects: a missing or empty parameter yields an empty
/// [`FieldSpec`], which disables projection.
#[derive(Debug, Clone, Default)]
pub struct RequestedFields(pub FieldSpec);

impl RequestedFields {
    /// Parses the field list out of a raw query string.
    pub fn from_query(query: Option<&str>, param: &str) -> FieldSpec {
        let Some(query) = query else {
            return FieldSpec::new();
        };

        let mut names = Vec::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == param {
                names.extend(value.split(',').map(str::to_string));
            }
        }

        names.into_iter().collect()
    }

    /// Returns the parsed field list.
    pub fn spec(&self) -> &FieldSpec {
        &self.0
    }

    /// Consumes the extractor, returning the field list.
    pub fn into_inner(self) -> FieldSpec {
        self.0
    }
}

impl<S> FromRequestParts<S> for RequestedFields
where
    FieldsParam: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let param = FieldsParam::from_ref(state);
        Ok(RequestedFields(Self::from_query(
            parts.uri.query(),
            param.as_str(),
        )))
    }
}
