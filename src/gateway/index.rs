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

//! Port to the versioned object store

use crate::gateway::error::IndexError;
use async_trait::async_trait;

/// Result of asking the store to delete one object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The object existed and is now staged for deletion.
    Deleted,
    /// Nothing exists at that ref and path.
    NotFound,
    Failed(IndexError),
}

/// The versioned object store the gateway writes through.
///
/// Implementations own retries and timeouts; callers issue exactly one
/// `delete_object` per key.
#[async_trait]
pub trait Index: Send + Sync {
    async fn delete_object(&self, repo_id: &str, reference: &str, path: &str) -> DeleteOutcome;
}
