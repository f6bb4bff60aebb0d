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
use crate::gateway::utils::{get_default_text, get_option_text, parse_bool};
use xml::escape::escape_str_pcdata;
use xmltree::Element;

/// An object named in a `<Delete>` document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectToDelete {
    pub key: String,
    /// Accepted for wire compatibility; refs already pin the version.
    pub version_id: Option<String>,
}

impl From<&str> for ObjectToDelete {
    fn from(key: &str) -> Self {
        Self {
            key: key.to_string(),
            version_id: None,
        }
    }
}

impl From<String> for ObjectToDelete {
    fn from(key: String) -> Self {
        Self {
            key,
            version_id: None,
        }
    }
}

/// Decoded body of a [`DeleteObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjects.html) request.
///
/// Objects keep the order they had in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteRequest {
    pub objects: Vec<ObjectToDelete>,
    pub quiet: bool,
}

impl DeleteRequest {
    pub fn new(objects: Vec<ObjectToDelete>, quiet: bool) -> Self {
        Self { objects, quiet }
    }

    /// Decodes a `<Delete>` document naming at most `max_keys` objects.
    pub fn from_xml(body: &[u8], max_keys: usize) -> Result<DeleteRequest, ValidationErr> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationErr::EmptyBody);
        }

        let root = Element::parse(body)?;
        if root.name != "Delete" {
            return Err(ValidationErr::UnexpectedRoot {
                expected: "Delete",
                found: root.name,
            });
        }

        let quiet = parse_bool("Quiet", get_option_text(&root, "Quiet").as_deref())?;

        let mut objects = Vec::new();
        for elem in root.children.iter().filter_map(|n| n.as_element()) {
            if elem.name != "Object" {
                continue;
            }
            objects.push(ObjectToDelete {
                key: get_default_text(elem, "Key"),
                version_id: get_option_text(elem, "VersionId"),
            });
        }

        if objects.len() > max_keys {
            return Err(ValidationErr::TooManyObjects {
                count: objects.len(),
                max: max_keys,
            });
        }

        Ok(DeleteRequest { objects, quiet })
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<Delete>");
        if self.quiet {
            data.push_str("<Quiet>true</Quiet>");
        }
        for object in &self.objects {
            data.push_str("<Object>");
            data.push_str("<Key>");
            data.push_str(&escape_str_pcdata(&object.key));
            data.push_str("</Key>");
            if let Some(v) = &object.version_id {
                data.push_str("<VersionId>");
                data.push_str(&escape_str_pcdata(v));
                data.push_str("</VersionId>");
            }
            data.push_str("</Object>");
        }
        data.push_str("</Delete>");
        data
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|o| o.key.as_str())
    }
}
