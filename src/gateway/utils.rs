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

//! Various utility and helper functions

use crate::gateway::error::ValidationErr;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use md5::compute as md5compute;
use xmltree::Element;

pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Base64 encoded MD5 digest of `data`, as carried by the `Content-MD5` header.
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

/// Checks a `Content-MD5` header value against the request body.
pub fn check_content_md5(header_value: &str, body: &[u8]) -> Result<(), ValidationErr> {
    let digest = BASE64
        .decode(header_value.trim())
        .map_err(|_| ValidationErr::InvalidDigest)?;
    if digest.len() != 16 {
        return Err(ValidationErr::InvalidDigest);
    }
    if digest.as_slice() != md5compute(body).as_slice() {
        return Err(ValidationErr::BadDigest);
    }
    Ok(())
}

/// Gets text value of given XML element for given tag.
pub fn get_text(element: &Element, tag: &'static str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::MissingTag(tag))?
        .get_text()
        .unwrap_or_default()
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_option_text(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets default text value of given XML element for given tag.
pub fn get_default_text(element: &Element, tag: &str) -> String {
    element.get_child(tag).map_or(String::new(), |v| {
        v.get_text().unwrap_or_default().to_string()
    })
}

/// Parses an XML boolean. Missing or empty text counts as `false`.
///
/// Accepts `1`, `t`, `T`, `true`, `TRUE`, `True` and their `false` counterparts.
pub fn parse_bool(tag: &'static str, value: Option<&str>) -> Result<bool, ValidationErr> {
    match value.map(str::trim) {
        None | Some("") => Ok(false),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(v) => Err(ValidationErr::InvalidBool {
            tag,
            value: v.to_string(),
        }),
    }
}
