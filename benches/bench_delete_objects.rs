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

use criterion::{Criterion, criterion_group, criterion_main};
use lakegate::gateway::config::DeleteObjectsConfig;
use lakegate::gateway::operations::DeleteObjects;
use lakegate::gateway::types::DeleteRequest;
use lakegate_common::test_context::TestContext;
use lakegate_common::utils::delete_request;

fn bench_decode(c: &mut Criterion) {
    let keys: Vec<String> = (0..1000).map(|i| format!("main/data/part-{i:05}.parquet")).collect();
    let body = delete_request(&keys, false).to_xml();

    c.bench_function("decode 1000 keys", |b| {
        b.iter(|| DeleteRequest::from_xml(body.as_bytes(), 1000))
    });
}

fn bench_handle(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    for concurrency in [1, 16] {
        let ctx = TestContext::with_config(
            DeleteObjectsConfig::builder()
                .concurrency(concurrency)
                .build(),
        );
        c.bench_function(&format!("handle 100 keys, concurrency {concurrency}"), |b| {
            b.iter(|| {
                let keys = ctx.seed_objects("main", 100);
                let request = delete_request(&keys, true);
                runtime.block_on(DeleteObjects.handle(&ctx.op, &request))
            })
        });
    }
}

criterion_group!(benches, bench_decode, bench_handle);
criterion_main!(benches);
