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

//! Gateway operations bound to a single repository

mod delete_objects;

pub use delete_objects::{DeleteObjects, KeyOutcome};

use crate::gateway::config::DeleteObjectsConfig;
use crate::gateway::index::Index;
use crate::gateway::path::{KeyResolver, RefPathResolver};
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// Everything an operation needs to act on one repository.
#[derive(Clone, TypedBuilder)]
pub struct RepoOperation {
    #[builder(setter(into))]
    repo_id: String,
    index: Arc<dyn Index>,
    #[builder(default = Arc::new(RefPathResolver) as Arc<dyn KeyResolver>)]
    resolver: Arc<dyn KeyResolver>,
    #[builder(default)]
    config: DeleteObjectsConfig,
}

impl RepoOperation {
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    pub fn index(&self) -> &dyn Index {
        self.index.as_ref()
    }

    pub fn resolver(&self) -> &dyn KeyResolver {
        self.resolver.as_ref()
    }

    pub fn config(&self) -> &DeleteObjectsConfig {
        &self.config
    }
}

impl std::fmt::Debug for RepoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoOperation")
            .field("repo_id", &self.repo_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
