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

//! The [DeleteObjects](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjects.html) operation
//!
//! The request body is decoded once. The decoded request yields the permission
//! list for the authorization gate and then drives the per-key loop. A failing
//! key is reported in the response and never stops the batch; only a body that
//! cannot be decoded fails the whole request.

use super::RepoOperation;
use crate::gateway::error::{Error, ValidationErr};
use crate::gateway::index::DeleteOutcome;
use crate::gateway::permissions::{Action, Authorizer, Permission, object_arn};
use crate::gateway::types::{DeleteError, DeleteRequest, DeleteResult, DeletedObject};
use futures_util::{StreamExt, stream};

/// Terminal classification of a single key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Deleted(String),
    /// The object did not exist; reported to the client as deleted.
    AlreadyAbsent(String),
    Failed(DeleteError),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteObjects;

impl DeleteObjects {
    /// Decodes the request body, enforcing the configured batch size.
    pub fn decode(&self, op: &RepoOperation, body: &[u8]) -> Result<DeleteRequest, ValidationErr> {
        DeleteRequest::from_xml(body, op.config().max_keys).inspect_err(|e| {
            log::warn!("repo={}: malformed delete objects request: {e}", op.repo_id())
        })
    }

    /// One `delete-object` permission per requested key, in request order.
    pub fn required_permissions(&self, request: &DeleteRequest, repo_id: &str) -> Vec<Permission> {
        request
            .keys()
            .map(|key| Permission {
                action: Action::DeleteObject,
                resource: object_arn(repo_id, key),
            })
            .collect()
    }

    /// Decodes `body`, has `authorizer` approve every key, then deletes.
    ///
    /// Nothing reaches the index unless decoding and authorization succeed.
    pub async fn run(
        &self,
        op: &RepoOperation,
        body: &[u8],
        authorizer: &dyn Authorizer,
    ) -> Result<DeleteResult, Error> {
        let request = self.decode(op, body)?;
        let permissions = self.required_permissions(&request, op.repo_id());
        authorizer.authorize(&permissions).await?;
        Ok(self.handle(op, &request).await)
    }

    /// Deletes every key of an already authorized request.
    pub async fn handle(&self, op: &RepoOperation, request: &DeleteRequest) -> DeleteResult {
        let concurrency = op.config().concurrency.max(1);
        let outcomes: Vec<KeyOutcome> = stream::iter(request.keys())
            .map(|key| self.delete_key(op, key))
            .buffered(concurrency)
            .collect()
            .await;

        let mut deleted = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                KeyOutcome::Deleted(key) | KeyOutcome::AlreadyAbsent(key) => {
                    deleted.push(DeletedObject { key })
                }
                KeyOutcome::Failed(err) => errors.push(err),
            }
        }
        log::debug!(
            "repo={}: delete objects processed {} keys, {} failed",
            op.repo_id(),
            request.objects.len(),
            errors.len()
        );

        DeleteResult::build(deleted, errors, request.quiet)
    }

    /// Resolves one key and issues a single delete for it.
    pub async fn delete_key(&self, op: &RepoOperation, key: &str) -> KeyOutcome {
        let resolved = match op.resolver().resolve(key) {
            Ok(v) => v,
            Err(e) => {
                log::error!("repo={} key={key}: failed resolving object path: {e}", op.repo_id());
                return KeyOutcome::Failed(DeleteError::deleting_key(key, e));
            }
        };

        match op
            .index()
            .delete_object(op.repo_id(), &resolved.reference, &resolved.path)
            .await
        {
            DeleteOutcome::Deleted => {
                log::debug!("repo={} key={key}: object set for deletion", op.repo_id());
                KeyOutcome::Deleted(key.to_string())
            }
            DeleteOutcome::NotFound => {
                log::debug!(
                    "repo={} key={key}: tried to delete a non-existent object",
                    op.repo_id()
                );
                KeyOutcome::AlreadyAbsent(key.to_string())
            }
            DeleteOutcome::Failed(e) => {
                log::error!("repo={} key={key}: failed deleting object: {e}", op.repo_id());
                KeyOutcome::Failed(DeleteError::deleting_key(key, e))
            }
        }
    }
}
