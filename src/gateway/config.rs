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

//! Tunables for the multi-object delete operation

use typed_builder::TypedBuilder;

/// Largest batch accepted by S3's DeleteObjects.
pub const DEFAULT_MAX_KEYS: usize = 1000;

pub const ENV_MAX_KEYS: &str = "LAKEGATE_DELETE_MAX_KEYS";
pub const ENV_CONCURRENCY: &str = "LAKEGATE_DELETE_CONCURRENCY";

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct DeleteObjectsConfig {
    /// Requests naming more objects than this are rejected as malformed.
    #[builder(default = DEFAULT_MAX_KEYS)]
    pub max_keys: usize,
    /// Number of keys processed at the same time. `1` processes keys strictly
    /// in request order.
    #[builder(default = 1)]
    pub concurrency: usize,
}

impl Default for DeleteObjectsConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DeleteObjectsConfig {
    /// Reads the configuration from the environment; unset or unparsable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_keys = parse_positive(ENV_MAX_KEYS, lookup(ENV_MAX_KEYS), DEFAULT_MAX_KEYS);
        log::debug!("{ENV_MAX_KEYS}={max_keys}");
        let concurrency = parse_positive(ENV_CONCURRENCY, lookup(ENV_CONCURRENCY), 1);
        log::debug!("{ENV_CONCURRENCY}={concurrency}");

        Self {
            max_keys,
            concurrency,
        }
    }
}

fn parse_positive(name: &str, value: Option<String>, default: usize) -> usize {
    match value {
        None => default,
        Some(v) => match v.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                log::warn!("ignoring invalid value {v:?} for {name}, using {default}");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DeleteObjectsConfig::default();
        assert_eq!(config.max_keys, 1000);
        assert_eq!(config.concurrency, 1);
        assert_eq!(DeleteObjectsConfig::from_lookup(lookup(&[])), config);
    }

    #[test]
    fn test_builder_overrides() {
        let config = DeleteObjectsConfig::builder()
            .max_keys(10)
            .concurrency(4)
            .build();
        assert_eq!(config.max_keys, 10);
        assert_eq!(config.concurrency, 4);
    }

    #[test]
    fn test_from_lookup() {
        let config = DeleteObjectsConfig::from_lookup(lookup(&[
            (ENV_MAX_KEYS, "250"),
            (ENV_CONCURRENCY, " 8 "),
        ]));
        assert_eq!(config.max_keys, 250);
        assert_eq!(config.concurrency, 8);
    }

    #[test]
    fn test_from_lookup_invalid_values() {
        let config = DeleteObjectsConfig::from_lookup(lookup(&[
            (ENV_MAX_KEYS, "lots"),
            (ENV_CONCURRENCY, "0"),
        ]));
        assert_eq!(config, DeleteObjectsConfig::default());
    }
}
