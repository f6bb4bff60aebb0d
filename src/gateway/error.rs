// Lakegate: S3-compatible gateway for a versioned object store
// Copyright 2025 Lakegate Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for gateway operations

use crate::gateway::utils::get_default_text;
use thiserror::Error;
use xml::escape::escape_str_pcdata;
use xmltree::Element;

/// Errors raised while reading a request document.
///
/// Any of these aborts the whole batch before a single key is looked at.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("request body is empty")]
    EmptyBody,

    #[error("XML parse error: {0}")]
    XmlParse(#[from] xmltree::ParseError),

    #[error("unexpected root element <{found}>; expected <{expected}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    #[error("<{0}> tag not found")]
    MissingTag(&'static str),

    #[error("invalid boolean value '{value}' in <{tag}>")]
    InvalidBool { tag: &'static str, value: String },

    #[error("request contains {count} objects; at most {max} are allowed")]
    TooManyObjects { count: usize, max: usize },

    #[error("Content-MD5 header is not a valid base64 encoded MD5 digest")]
    InvalidDigest,

    #[error("Content-MD5 does not match the request body")]
    BadDigest,
}

impl ValidationErr {
    /// S3 error code reported to the client for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErr::InvalidDigest => "InvalidDigest",
            ValidationErr::BadDigest => "BadDigest",
            _ => "MalformedXML",
        }
    }
}

/// Errors raised while mapping an object key to a (ref, path) pair.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("object key is empty")]
    EmptyKey,

    #[error("key '{0}' names a ref but no object path")]
    MissingPath(String),

    #[error("key '{0}' is not of the form <ref>/<path>")]
    Malformed(String),
}

/// Failures reported by the versioned object store.
///
/// "Object does not exist" is not an error; see
/// [`DeleteOutcome::NotFound`](crate::gateway::index::DeleteOutcome::NotFound).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("repository '{0}' not found")]
    RepositoryNotFound(String),

    #[error("reference '{0}' not found")]
    RefNotFound(String),

    #[error("reference '{0}' is read-only")]
    ReadOnlyRef(String),

    #[error("index unavailable: {0}")]
    Unavailable(String),
}

/// Refusal from the authorization gate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("access denied for action {action} on {resource}")]
    AccessDenied { action: String, resource: String },
}

/// Batch-level errors. Per-key failures never surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bad request: {0}")]
    Validation(#[from] ValidationErr),

    #[error("{0}")]
    Auth(#[from] AuthError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(e) => e.code(),
            Error::Auth(_) => "AccessDenied",
        }
    }
}

/// S3 error document returned for batch-level failures
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub resource: String,
    pub request_id: String,
}

impl ErrorResponse {
    pub fn new(err: &Error, resource: impl Into<String>, request_id: impl Into<String>) -> Self {
        ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
            resource: resource.into(),
            request_id: request_id.into(),
        }
    }

    pub fn from_xml(body: &[u8]) -> Result<ErrorResponse, ValidationErr> {
        let root = Element::parse(body)?;
        if root.name != "Error" {
            return Err(ValidationErr::UnexpectedRoot {
                expected: "Error",
                found: root.name,
            });
        }

        Ok(ErrorResponse {
            code: get_default_text(&root, "Code"),
            message: get_default_text(&root, "Message"),
            resource: get_default_text(&root, "Resource"),
            request_id: get_default_text(&root, "RequestId"),
        })
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        data.push_str("<Error>");
        data.push_str("<Code>");
        data.push_str(&escape_str_pcdata(&self.code));
        data.push_str("</Code>");
        data.push_str("<Message>");
        data.push_str(&escape_str_pcdata(&self.message));
        data.push_str("</Message>");
        data.push_str("<Resource>");
        data.push_str(&escape_str_pcdata(&self.resource));
        data.push_str("</Resource>");
        data.push_str("<RequestId>");
        data.push_str(&escape_str_pcdata(&self.request_id));
        data.push_str("</RequestId>");
        data.push_str("</Error>");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_codes() {
        assert_eq!(ValidationErr::EmptyBody.code(), "MalformedXML");
        assert_eq!(ValidationErr::MissingTag("Key").code(), "MalformedXML");
        assert_eq!(ValidationErr::BadDigest.code(), "BadDigest");
        assert_eq!(ValidationErr::InvalidDigest.code(), "InvalidDigest");

        let err: Error = AuthError::AccessDenied {
            action: "delete-object".to_string(),
            resource: "arn:lakegate:repos:::r/main/a".to_string(),
        }
        .into();
        assert_eq!(err.code(), "AccessDenied");
    }

    #[test]
    fn test_error_display() {
        let err = ValidationErr::TooManyObjects {
            count: 1001,
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "request contains 1001 objects; at most 1000 are allowed"
        );

        let err = IndexError::RefNotFound("feature-x".to_string());
        assert_eq!(err.to_string(), "reference 'feature-x' not found");
    }

    #[test]
    fn test_error_response_xml() {
        let err: Error = ValidationErr::MissingTag("Key").into();
        let resp = ErrorResponse::new(&err, "/repo", "req-1");
        let xml = resp.to_xml();
        assert!(xml.contains("<Code>MalformedXML</Code>"));
        assert!(xml.contains("<Message>bad request: &lt;Key&gt; tag not found</Message>"));

        let parsed = ErrorResponse::from_xml(xml.as_bytes()).unwrap();
        assert_eq!(parsed, resp);
    }
}
