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

//! # Lakegate
//!
//! Server-side building blocks for an S3-compatible gateway sitting in front of
//! a versioned object store. Object keys carry the branch (or commit) they live
//! on, e.g. `main/datasets/2024/part-0001.parquet`.
//!
//! The crate currently implements the
//! [`DeleteObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjects.html)
//! operation: a batch of keys is decoded once, turned into the permission
//! assertions an authorization gate has to approve, and then deleted one key at
//! a time with per-key failure isolation.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use lakegate::gateway::memory::MemoryIndex;
//! use lakegate::gateway::operations::{DeleteObjects, RepoOperation};
//! use lakegate::gateway::types::DeleteRequest;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let index = Arc::new(MemoryIndex::new());
//!     let op = RepoOperation::builder().repo_id("my-repo").index(index).build();
//!
//!     let body = b"<Delete><Object><Key>main/a.txt</Key></Object></Delete>";
//!     let request = DeleteRequest::from_xml(body, 1000).expect("malformed request");
//!
//!     let controller = DeleteObjects::default();
//!     let _permissions = controller.required_permissions(&request, op.repo_id());
//!     let result = controller.handle(&op, &request).await;
//!     println!("{}", result.to_xml());
//! }
//! ```
//!
//! ## Design
//! - Stores, key resolvers and authorization gates are traits; the crate only
//!   sequences calls to them and classifies their results
//! - Request and response documents are plain structs with `from_xml` / `to_xml`
//! - [`gateway::http`] adapts the operation to `http::Request` / `http::Response`

#![allow(clippy::result_large_err)]
pub mod gateway;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
