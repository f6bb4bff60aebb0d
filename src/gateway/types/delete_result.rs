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

use crate::gateway::error::ValidationErr;
use crate::gateway::header_constants::S3_XML_NAMESPACE;
use crate::gateway::utils::get_text;
use xml::escape::escape_str_pcdata;
use xmltree::Element;

/// Error code reported for every key that could not be deleted.
pub const ERR_DELETING_KEY: &str = "ErrDeletingKey";

/// A key reported as deleted. Keys that were already absent count as deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletedObject {
    pub key: String,
}

/// A key that could not be deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteError {
    pub code: String,
    pub key: String,
    pub message: String,
}

impl DeleteError {
    pub fn deleting_key(key: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self {
            code: ERR_DELETING_KEY.to_string(),
            key: key.into(),
            message: format!("error deleting object: {cause}"),
        }
    }
}

/// Body of a DeleteObjects response.
///
/// A `None` list is omitted from the document altogether.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted: Option<Vec<DeletedObject>>,
    pub errors: Option<Vec<DeleteError>>,
}

impl DeleteResult {
    /// Builds the response from the accumulated outcomes of a batch.
    ///
    /// Errors are always reported; successes only outside quiet mode.
    pub fn build(deleted: Vec<DeletedObject>, errors: Vec<DeleteError>, quiet: bool) -> Self {
        DeleteResult {
            deleted: (!quiet && !deleted.is_empty()).then_some(deleted),
            errors: (!errors.is_empty()).then_some(errors),
        }
    }

    pub fn deleted(&self) -> &[DeletedObject] {
        self.deleted.as_deref().unwrap_or_default()
    }

    pub fn errors(&self) -> &[DeleteError] {
        self.errors.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.deleted.is_none() && self.errors.is_none()
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        data.push_str(r#"<DeleteResult xmlns=""#);
        data.push_str(S3_XML_NAMESPACE);
        data.push_str(r#"">"#);

        for deleted in self.deleted() {
            data.push_str("<Deleted><Key>");
            data.push_str(&escape_str_pcdata(&deleted.key));
            data.push_str("</Key></Deleted>");
        }

        for error in self.errors() {
            data.push_str("<Error>");
            data.push_str("<Code>");
            data.push_str(&escape_str_pcdata(&error.code));
            data.push_str("</Code>");
            data.push_str("<Key>");
            data.push_str(&escape_str_pcdata(&error.key));
            data.push_str("</Key>");
            data.push_str("<Message>");
            data.push_str(&escape_str_pcdata(&error.message));
            data.push_str("</Message>");
            data.push_str("</Error>");
        }

        data.push_str("</DeleteResult>");
        data
    }

    pub fn from_xml(body: &[u8]) -> Result<DeleteResult, ValidationErr> {
        let root = Element::parse(body)?;
        if root.name != "DeleteResult" {
            return Err(ValidationErr::UnexpectedRoot {
                expected: "DeleteResult",
                found: root.name,
            });
        }

        let mut deleted = Vec::new();
        let mut errors = Vec::new();
        for elem in root.children.iter().filter_map(|n| n.as_element()) {
            match elem.name.as_str() {
                "Deleted" => deleted.push(DeletedObject {
                    key: get_text(elem, "Key")?,
                }),
                "Error" => errors.push(DeleteError {
                    code: get_text(elem, "Code")?,
                    key: get_text(elem, "Key")?,
                    message: get_text(elem, "Message")?,
                }),
                _ => {}
            }
        }

        Ok(DeleteResult {
            deleted: (!deleted.is_empty()).then_some(deleted),
            errors: (!errors.is_empty()).then_some(errors),
        })
    }
}
