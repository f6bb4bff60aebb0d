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

use lakegate::gateway::types::{DeleteRequest, ObjectToDelete};
use rand::distr::{Alphanumeric, SampleString};

pub fn rand_repo_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

/// Logs go to the test harness; honours `RUST_LOG`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn delete_request<S: AsRef<str>>(keys: &[S], quiet: bool) -> DeleteRequest {
    DeleteRequest::new(
        keys.iter()
            .map(|k| ObjectToDelete::from(k.as_ref()))
            .collect(),
        quiet,
    )
}
