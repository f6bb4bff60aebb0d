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

//! Mapping of client object keys to locations in the versioned store
//!
//! A key is addressed relative to the repository and starts with the ref it
//! lives on: `main/datasets/a.csv` is `datasets/a.csv` on branch `main`.

use crate::gateway::error::ResolveError;
use lazy_static::lazy_static;
use regex::Regex;

/// A key split into the ref it addresses and the object path on that ref.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPath {
    pub reference: String,
    pub path: String,
}

/// Turns an object key into a [`ResolvedPath`].
pub trait KeyResolver: Send + Sync {
    fn resolve(&self, key: &str) -> Result<ResolvedPath, ResolveError>;
}

/// Resolver for `[/]<ref>/<path>` keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefPathResolver;

lazy_static! {
    static ref REF_AND_PATH_REGEX: Regex = Regex::new(r"(?s)^/?(?P<ref>[^/]+)/(?P<path>.*)$").unwrap();
    static ref REF_ONLY_REGEX: Regex = Regex::new(r"^/?(?P<ref>[^/]+)/?$").unwrap();
}

impl KeyResolver for RefPathResolver {
    fn resolve(&self, key: &str) -> Result<ResolvedPath, ResolveError> {
        resolve_path(key)
    }
}

pub fn resolve_path(key: &str) -> Result<ResolvedPath, ResolveError> {
    if key.is_empty() {
        return Err(ResolveError::EmptyKey);
    }

    match REF_AND_PATH_REGEX.captures(key) {
        Some(caps) if !caps["path"].is_empty() => Ok(ResolvedPath {
            reference: caps["ref"].to_string(),
            path: caps["path"].to_string(),
        }),
        _ if REF_ONLY_REGEX.is_match(key) => Err(ResolveError::MissingPath(key.to_string())),
        _ => Err(ResolveError::Malformed(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(reference: &str, path: &str) -> ResolvedPath {
        ResolvedPath {
            reference: reference.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_resolve_ref_and_path() {
        assert_eq!(resolve_path("main/a.txt"), Ok(resolved("main", "a.txt")));
        assert_eq!(
            resolve_path("/main/dir/sub/b.parquet"),
            Ok(resolved("main", "dir/sub/b.parquet"))
        );
        assert_eq!(
            resolve_path("c0ffee12/dir//trailing/"),
            Ok(resolved("c0ffee12", "dir//trailing/"))
        );
        assert_eq!(
            resolve_path("main/line\nbreak"),
            Ok(resolved("main", "line\nbreak"))
        );
    }

    #[test]
    fn test_resolve_ref_only() {
        assert_eq!(
            resolve_path("main"),
            Err(ResolveError::MissingPath("main".to_string()))
        );
        assert_eq!(
            resolve_path("/main/"),
            Err(ResolveError::MissingPath("/main/".to_string()))
        );
    }

    #[test]
    fn test_resolve_invalid() {
        assert_eq!(resolve_path(""), Err(ResolveError::EmptyKey));
        assert_eq!(
            resolve_path("/"),
            Err(ResolveError::Malformed("/".to_string()))
        );
        assert_eq!(
            resolve_path("//a.txt"),
            Err(ResolveError::Malformed("//a.txt".to_string()))
        );
    }

    #[test]
    fn test_resolver_trait() {
        let resolver: &dyn KeyResolver = &RefPathResolver;
        assert_eq!(resolver.resolve("dev/x"), Ok(resolved("dev", "x")));
    }
}
