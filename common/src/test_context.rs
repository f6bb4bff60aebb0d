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

use crate::utils::{init_logger, rand_object_name, rand_repo_name};
use lakegate::gateway::config::DeleteObjectsConfig;
use lakegate::gateway::memory::MemoryIndex;
use lakegate::gateway::operations::RepoOperation;
use std::sync::Arc;

/// A fresh repository in an in-memory index.
#[derive(Clone)]
pub struct TestContext {
    pub index: Arc<MemoryIndex>,
    pub repo_id: String,
    pub op: RepoOperation,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(DeleteObjectsConfig::default())
    }

    pub fn new_from_env() -> Self {
        Self::with_config(DeleteObjectsConfig::from_env())
    }

    pub fn with_config(config: DeleteObjectsConfig) -> Self {
        init_logger();

        let index = Arc::new(MemoryIndex::new());
        let repo_id = rand_repo_name();
        index.create_repository(&repo_id);
        log::debug!("repo_id={repo_id} config={config:?}");

        let op = RepoOperation::builder()
            .repo_id(repo_id.as_str())
            .index(index.clone())
            .config(config)
            .build();

        Self { index, repo_id, op }
    }

    /// Creates `count` random objects on `branch` and returns their keys.
    pub fn seed_objects(&self, branch: &str, count: usize) -> Vec<String> {
        self.index.create_branch(&self.repo_id, branch);
        (0..count)
            .map(|_| {
                let path = rand_object_name();
                self.index
                    .put_object(&self.repo_id, branch, &path, path.clone().into_bytes());
                format!("{branch}/{path}")
            })
            .collect()
    }

    pub fn exists(&self, key: &str) -> bool {
        match key.split_once('/') {
            Some((branch, path)) => self.index.get_object(&self.repo_id, branch, path).is_some(),
            None => false,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
