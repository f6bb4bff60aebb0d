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

//! HTTP adaptation of the gateway operations

use crate::gateway::error::{Error, ErrorResponse};
use crate::gateway::header_constants::*;
use crate::gateway::operations::{DeleteObjects, RepoOperation};
use crate::gateway::permissions::Authorizer;
use crate::gateway::utils::check_content_md5;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};
use uuid::Uuid;

/// Serves `POST /{repo}?delete`.
///
/// Per-key failures are part of a `200 OK` body. A body that cannot be decoded
/// (or fails its `Content-MD5` check) yields `400`, a refused permission `403`;
/// in both cases no object is touched.
pub async fn serve_delete_objects(
    op: &RepoOperation,
    request: Request<Bytes>,
    authorizer: &dyn Authorizer,
) -> Response<Bytes> {
    let request_id = Uuid::new_v4().simple().to_string();
    let resource = request.uri().path().to_string();

    let outcome = match content_md5(&request) {
        Some(digest) => check_content_md5(digest, request.body()).map_err(Error::from),
        None => Ok(()),
    };
    let outcome = match outcome {
        Ok(()) => DeleteObjects.run(op, request.body(), authorizer).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => xml_response(StatusCode::OK, result.to_xml(), &request_id),
        Err(err) => {
            let status = match err {
                Error::Validation(_) => StatusCode::BAD_REQUEST,
                Error::Auth(_) => StatusCode::FORBIDDEN,
            };
            log::debug!("request_id={request_id}: delete objects rejected with {status}: {err}");
            let body = ErrorResponse::new(&err, resource, request_id.as_str()).to_xml();
            xml_response(status, body, &request_id)
        }
    }
}

fn content_md5(request: &Request<Bytes>) -> Option<&str> {
    request
        .headers()
        .get(CONTENT_MD5)
        .map(|v| v.to_str().unwrap_or_default())
}

fn xml_response(status: StatusCode, body: String, request_id: &str) -> Response<Bytes> {
    let body = Bytes::from(body);
    let length = body.len();
    let mut response = Response::new(body);
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static(CONTENT_TYPE),
        HeaderValue::from_static(APPLICATION_XML),
    );
    headers.insert(
        HeaderName::from_static(CONTENT_LENGTH),
        HeaderValue::from(length),
    );
    if let Ok(v) = HeaderValue::from_str(request_id) {
        headers.insert(HeaderName::from_static(X_AMZ_REQUEST_ID), v);
    }
    response
}
