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

//! S3-compatible gateway operations over a versioned object store

pub mod config;
pub mod error;
pub mod header_constants;
pub mod http;
pub mod index;
pub mod memory;
pub mod operations;
pub mod path;
pub mod permissions;
pub mod types;
pub mod utils;


pub use config::DeleteObjectsConfig;
pub use index::{DeleteOutcome, Index};
pub use operations::{DeleteObjects, RepoOperation};
