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

//! Permission assertions derived from requests, and the gate that checks them

use crate::gateway::error::AuthError;
use async_trait::async_trait;
use std::fmt;

pub const REPO_ARN_PREFIX: &str = "arn:lakegate:repos:::";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    DeleteObject,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::DeleteObject => "delete-object",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One action on one resource that must be allowed before an operation runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permission {
    pub action: Action,
    pub resource: String,
}

/// Resource name of an object key inside a repository.
pub fn object_arn(repo_id: &str, key: &str) -> String {
    format!("{REPO_ARN_PREFIX}{repo_id}/{key}")
}

/// Authorization gate evaluated before an operation touches the store.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, permissions: &[Permission]) -> Result<(), AuthError>;
}

/// Gate that approves everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

#[async_trait]
impl Authorizer for AllowAll {
    async fn authorize(&self, _permissions: &[Permission]) -> Result<(), AuthError> {
        Ok(())
    }
}
