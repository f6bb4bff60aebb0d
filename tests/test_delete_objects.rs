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

use lakegate::gateway::config::DeleteObjectsConfig;
use lakegate::gateway::operations::DeleteObjects;
use lakegate::gateway::permissions::{Action, AllowAll};
use lakegate::gateway::types::ERR_DELETING_KEY;
use lakegate_common::test_context::TestContext;
use lakegate_common::utils::{delete_request, rand_object_name};

#[tokio::test]
async fn delete_objects_verbose() {
    let ctx = TestContext::new_from_env();
    let keys = ctx.seed_objects("main", 3);

    let result = DeleteObjects
        .handle(&ctx.op, &delete_request(&keys, false))
        .await;

    let deleted: Vec<String> = result.deleted().iter().map(|d| d.key.clone()).collect();
    assert_eq!(deleted, keys);
    assert!(result.errors.is_none());
    for key in &keys {
        assert!(!ctx.exists(key));
    }
}

#[tokio::test]
async fn delete_objects_already_absent_is_success() {
    let ctx = TestContext::new();
    ctx.index.create_branch(&ctx.repo_id, "main");
    let key = format!("main/{}", rand_object_name());

    for _ in 0..2 {
        let result = DeleteObjects
            .handle(&ctx.op, &delete_request(&[&key], false))
            .await;
        assert_eq!(result.deleted().len(), 1);
        assert!(result.errors.is_none());
    }
    assert_eq!(ctx.index.delete_calls(), 2);
}

#[tokio::test]
async fn delete_objects_partial_failure_isolation() {
    let ctx = TestContext::new();
    let seeded = ctx.seed_objects("main", 2);
    let keys = vec![seeded[0].clone(), "not-a-path".to_string(), seeded[1].clone()];

    let result = DeleteObjects
        .handle(&ctx.op, &delete_request(&keys, false))
        .await;

    let deleted: Vec<&str> = result.deleted().iter().map(|d| d.key.as_str()).collect();
    assert_eq!(deleted, vec![seeded[0].as_str(), seeded[1].as_str()]);
    let errors = result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ERR_DELETING_KEY);
    assert_eq!(errors[0].key, "not-a-path");
    assert!(errors[0].message.starts_with("error deleting object: "));
    assert_eq!(ctx.index.delete_calls(), 2);
}

#[tokio::test]
async fn delete_objects_store_failure_does_not_stop_batch() {
    let ctx = TestContext::new();
    let keys = ctx.seed_objects("main", 4);
    let (_, failing_path) = keys[1].split_once('/').unwrap();
    ctx.index
        .fail_path(&ctx.repo_id, "main", failing_path, "connection reset");

    let result = DeleteObjects
        .handle(&ctx.op, &delete_request(&keys, false))
        .await;

    assert_eq!(result.deleted().len(), 3);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].key, keys[1]);
    assert_eq!(
        result.errors()[0].message,
        "error deleting object: index unavailable: connection reset"
    );
    assert!(ctx.exists(&keys[1]));
    assert!(!ctx.exists(&keys[3]));
}

#[tokio::test]
async fn delete_objects_unknown_branch_is_an_error() {
    let ctx = TestContext::new();

    let result = DeleteObjects
        .handle(&ctx.op, &delete_request(&["feature/a.txt"], false))
        .await;

    assert!(result.deleted.is_none());
    assert_eq!(
        result.errors()[0].message,
        "error deleting object: reference 'feature' not found"
    );
}

#[tokio::test]
async fn delete_objects_quiet_without_errors() {
    let ctx = TestContext::new();
    let keys = ctx.seed_objects("main", 5);

    let result = DeleteObjects
        .handle(&ctx.op, &delete_request(&keys, true))
        .await;

    assert!(result.deleted.is_none());
    assert!(result.errors.is_none());
    assert_eq!(ctx.index.object_count(&ctx.repo_id, "main"), 0);
}

#[tokio::test]
async fn delete_objects_quiet_with_failure() {
    let ctx = TestContext::new();
    let mut keys = ctx.seed_objects("main", 2);
    keys.push("main/".to_string());

    let result = DeleteObjects
        .handle(&ctx.op, &delete_request(&keys, true))
        .await;

    assert!(result.deleted.is_none());
    let errors = result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "main/");
}

#[tokio::test]
async fn delete_objects_empty_request() {
    let ctx = TestContext::new();

    let result = DeleteObjects
        .run(&ctx.op, b"<Delete></Delete>", &AllowAll)
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(ctx.index.delete_calls(), 0);
}

#[tokio::test]
async fn delete_objects_malformed_body_touches_nothing() {
    let ctx = TestContext::new();
    let keys = ctx.seed_objects("main", 1);
    let body = format!("<Delete><Object><Key>{}</Key></Object>", keys[0]);

    let err = DeleteObjects
        .run(&ctx.op, body.as_bytes(), &AllowAll)
        .await
        .unwrap_err();

    assert_eq!(err.code(), "MalformedXML");
    assert_eq!(ctx.index.delete_calls(), 0);
    assert!(ctx.exists(&keys[0]));
}

#[tokio::test]
async fn delete_objects_rejects_oversized_batch() {
    let ctx = TestContext::with_config(DeleteObjectsConfig::builder().max_keys(2).build());
    let keys = ctx.seed_objects("main", 3);
    let body = delete_request(&keys, false).to_xml();

    let err = DeleteObjects
        .run(&ctx.op, body.as_bytes(), &AllowAll)
        .await
        .unwrap_err();

    assert_eq!(err.code(), "MalformedXML");
    assert_eq!(ctx.index.delete_calls(), 0);
}

#[tokio::test]
async fn delete_objects_permissions_match_decoded_keys() {
    let ctx = TestContext::new();
    let keys = ctx.seed_objects("main", 4);
    let body = delete_request(&keys, false).to_xml();

    let request = DeleteObjects.decode(&ctx.op, body.as_bytes()).unwrap();
    let permissions = DeleteObjects.required_permissions(&request, &ctx.repo_id);

    assert_eq!(permissions.len(), keys.len());
    for (perm, key) in permissions.iter().zip(&keys) {
        assert_eq!(perm.action, Action::DeleteObject);
        assert_eq!(
            perm.resource,
            format!("arn:lakegate:repos:::{}/{}", ctx.repo_id, key)
        );
    }
    assert_eq!(ctx.index.delete_calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delete_objects_concurrent() {
    let ctx = TestContext::with_config(DeleteObjectsConfig::builder().concurrency(16).build());
    let keys = ctx.seed_objects("main", 200);

    let result = DeleteObjects
        .handle(&ctx.op, &delete_request(&keys, false))
        .await;

    let deleted: Vec<String> = result.deleted().iter().map(|d| d.key.clone()).collect();
    assert_eq!(deleted, keys);
    assert_eq!(ctx.index.delete_calls(), 200);
    assert_eq!(ctx.index.object_count(&ctx.repo_id, "main"), 0);
}
