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

//! In-memory [`Index`] used for embedding, tests and benchmarks

use crate::gateway::error::IndexError;
use crate::gateway::index::{DeleteOutcome, Index};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::{DashMap, DashSet};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

type RefKey = (String, String);
type ObjectKey = (String, String, String);

#[derive(Debug, Default)]
struct RefState {
    read_only: bool,
    objects: BTreeMap<String, Bytes>,
}

/// Repositories, refs and objects held in memory.
///
/// Refs are created implicitly by [`MemoryIndex::create_branch`] and
/// [`MemoryIndex::put_object`]. Refs marked with [`MemoryIndex::protect_ref`]
/// behave like commits and reject deletes.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    repositories: DashSet<String>,
    refs: DashMap<RefKey, RefState>,
    failures: DashMap<ObjectKey, String>,
    delete_calls: AtomicUsize,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_repository(&self, repo_id: &str) {
        self.repositories.insert(repo_id.to_string());
    }

    pub fn create_branch(&self, repo_id: &str, branch: &str) {
        self.create_repository(repo_id);
        self.refs
            .entry((repo_id.to_string(), branch.to_string()))
            .or_default();
    }

    pub fn protect_ref(&self, repo_id: &str, reference: &str) {
        self.create_repository(repo_id);
        self.refs
            .entry((repo_id.to_string(), reference.to_string()))
            .or_default()
            .read_only = true;
    }

    pub fn put_object(&self, repo_id: &str, reference: &str, path: &str, data: impl Into<Bytes>) {
        self.create_repository(repo_id);
        self.refs
            .entry((repo_id.to_string(), reference.to_string()))
            .or_default()
            .objects
            .insert(path.to_string(), data.into());
    }

    pub fn get_object(&self, repo_id: &str, reference: &str, path: &str) -> Option<Bytes> {
        self.refs
            .get(&(repo_id.to_string(), reference.to_string()))
            .and_then(|state| state.objects.get(path).cloned())
    }

    pub fn object_count(&self, repo_id: &str, reference: &str) -> usize {
        self.refs
            .get(&(repo_id.to_string(), reference.to_string()))
            .map_or(0, |state| state.objects.len())
    }

    /// Makes every delete of `path` on `reference` fail with `message`.
    pub fn fail_path(&self, repo_id: &str, reference: &str, path: &str, message: &str) {
        self.failures.insert(
            (repo_id.to_string(), reference.to_string(), path.to_string()),
            message.to_string(),
        );
    }

    /// Number of `delete_object` calls received so far.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Index for MemoryIndex {
    async fn delete_object(&self, repo_id: &str, reference: &str, path: &str) -> DeleteOutcome {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        let failure = self
            .failures
            .get(&(repo_id.to_string(), reference.to_string(), path.to_string()))
            .map(|m| m.value().clone());
        if let Some(message) = failure {
            return DeleteOutcome::Failed(IndexError::Unavailable(message));
        }

        if !self.repositories.contains(repo_id) {
            return DeleteOutcome::Failed(IndexError::RepositoryNotFound(repo_id.to_string()));
        }

        let Some(mut state) = self
            .refs
            .get_mut(&(repo_id.to_string(), reference.to_string()))
        else {
            return DeleteOutcome::Failed(IndexError::RefNotFound(reference.to_string()));
        };
        if state.read_only {
            return DeleteOutcome::Failed(IndexError::ReadOnlyRef(reference.to_string()));
        }

        match state.objects.remove(path) {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::NotFound,
        }
    }
}
