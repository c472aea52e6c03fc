//! Backblaze B2 native API (v2) client.
//!
//! Authorization is performed lazily on first use and cached inside the client. The
//! cached token is discarded once it is older than `AUTH_LIFETIME` or as soon as B2
//! answers `401`, so the next call re-authorizes.

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use dioxus_logger::tracing;
use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::{
    error::storage::StorageError,
    storage::{MediaStream, ObjectStore, StoredObject},
};

const AUTHORIZE_URL: &str = "https://api.backblazeb2.com/b2api/v2/b2_authorize_account";

/// B2 tokens are valid for 24 hours; refresh an hour early.
const AUTH_LIFETIME: Duration = Duration::from_secs(23 * 60 * 60);

/// Maximum page size accepted by `b2_list_file_names`.
const LIST_PAGE_SIZE: u32 = 1000;

/// Cached result of `b2_authorize_account`.
#[derive(Clone)]
struct B2Auth {
    token: String,
    api_url: String,
    download_url: String,
    obtained_at: Instant,
}

impl B2Auth {
    fn is_expired(&self) -> bool {
        self.obtained_at.elapsed() >= AUTH_LIFETIME
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorizeResponse {
    authorization_token: String,
    api_url: String,
    download_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListFileNamesRequest<'a> {
    bucket_id: &'a str,
    prefix: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    delimiter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_file_name: Option<String>,
    max_file_count: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListFileNamesResponse {
    files: Vec<FileInfo>,
    next_file_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileInfo {
    file_name: String,
    #[serde(default)]
    file_id: Option<String>,
    #[serde(default)]
    content_length: u64,
    #[serde(default)]
    content_type: Option<String>,
    action: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetUploadUrlRequest<'a> {
    bucket_id: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetUploadUrlResponse {
    upload_url: String,
    authorization_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteFileVersionRequest<'a> {
    file_name: &'a str,
    file_id: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

/// `ObjectStore` implementation backed by a single B2 bucket.
pub struct B2Client {
    http: reqwest::Client,
    key_id: String,
    application_key: String,
    bucket_id: String,
    bucket_name: String,
    auth: RwLock<Option<B2Auth>>,
}

impl B2Client {
    /// Creates a client for one bucket. No network call is made until first use.
    pub fn new(
        http: reqwest::Client,
        key_id: String,
        application_key: String,
        bucket_id: String,
        bucket_name: String,
    ) -> Self {
        Self {
            http,
            key_id,
            application_key,
            bucket_id,
            bucket_name,
            auth: RwLock::new(None),
        }
    }

    /// Returns a valid authorization, performing `b2_authorize_account` when the cache is
    /// empty or expired.
    async fn auth(&self) -> Result<B2Auth, StorageError> {
        if let Some(auth) = self.auth.read().await.as_ref() {
            if !auth.is_expired() {
                return Ok(auth.clone());
            }
        }

        let mut guard = self.auth.write().await;

        // Another task may have refreshed while we waited for the write lock
        if let Some(auth) = guard.as_ref() {
            if !auth.is_expired() {
                return Ok(auth.clone());
            }
        }

        tracing::debug!("Authorizing with B2");

        let response = self
            .http
            .get(AUTHORIZE_URL)
            .basic_auth(&self.key_id, Some(&self.application_key))
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;
        let body: AuthorizeResponse = response.json().await?;

        let auth = B2Auth {
            token: body.authorization_token,
            api_url: body.api_url,
            download_url: body.download_url,
            obtained_at: Instant::now(),
        };
        *guard = Some(auth.clone());

        Ok(auth)
    }

    /// Checks a response, discarding the cached token when B2 rejects it.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        if response.status() == StatusCode::UNAUTHORIZED {
            *self.auth.write().await = None;
        }
        Self::error_for_status(response).await
    }

    /// Converts non-success responses into `StorageError::Api` using B2's error body.
    async fn error_for_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let (code, message) = match response.json::<ErrorResponse>().await {
            Ok(body) => (body.code, body.message),
            Err(_) => ("unknown".to_string(), status.to_string()),
        };

        Err(StorageError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    /// Calls `b2_list_file_names` until every page under `prefix` has been read.
    async fn list_file_names(
        &self,
        prefix: &str,
        delimiter: Option<&str>,
    ) -> Result<Vec<FileInfo>, StorageError> {
        let mut files = Vec::new();
        let mut start_file_name = None;

        loop {
            let auth = self.auth().await?;
            let response = self
                .http
                .post(format!("{}/b2api/v2/b2_list_file_names", auth.api_url))
                .header(header::AUTHORIZATION, &auth.token)
                .json(&ListFileNamesRequest {
                    bucket_id: &self.bucket_id,
                    prefix,
                    delimiter,
                    start_file_name: start_file_name.take(),
                    max_file_count: LIST_PAGE_SIZE,
                })
                .send()
                .await?;
            let page: ListFileNamesResponse = self.check(response).await?.json().await?;

            files.extend(page.files);

            match page.next_file_name {
                Some(next) => start_file_name = Some(next),
                None => break,
            }
        }

        Ok(files)
    }

    /// Builds the `download_file_by_name` URL for `key`.
    fn download_url(&self, auth: &B2Auth, key: &str) -> String {
        format!(
            "{}/file/{}/{}",
            auth.download_url,
            self.bucket_name,
            encode_key(key)
        )
    }

    async fn get_file(
        &self,
        key: &str,
        range: Option<&str>,
    ) -> Result<reqwest::Response, StorageError> {
        let auth = self.auth().await?;

        let mut request = self
            .http
            .get(self.download_url(&auth, key))
            .header(header::AUTHORIZATION, &auth.token);
        if let Some(range) = range {
            request = request.header(header::RANGE, range);
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(StorageError::NotFound(key.to_string())),
            StatusCode::RANGE_NOT_SATISFIABLE => Ok(response),
            _ => self.check(response).await,
        }
    }
}

#[async_trait]
impl ObjectStore for B2Client {
    async fn list_folders(&self) -> Result<Vec<String>, StorageError> {
        let files = self.list_file_names("", Some("/")).await?;

        Ok(files
            .into_iter()
            .filter(|file| file.action == "folder")
            .map(|file| file.file_name.trim_end_matches('/').to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }

    async fn list_files(&self, prefix: &str) -> Result<Vec<StoredObject>, StorageError> {
        let files = self.list_file_names(prefix, None).await?;

        Ok(files
            .into_iter()
            .filter(|file| file.action == "upload")
            .map(|file| StoredObject {
                key: file.file_name,
                file_id: file.file_id.unwrap_or_default(),
                size: file.content_length,
                content_type: file
                    .content_type
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
            })
            .collect())
    }

    async fn download(&self, key: &str) -> Result<Bytes, StorageError> {
        let response = self.get_file(key, None).await?;
        Ok(response.bytes().await?)
    }

    async fn open_stream(
        &self,
        key: &str,
        range: Option<&str>,
    ) -> Result<MediaStream, StorageError> {
        let response = self.get_file(key, range).await?;

        let header_str = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let content_type = header_str(header::CONTENT_TYPE);
        let content_range = header_str(header::CONTENT_RANGE);
        let content_length = header_str(header::CONTENT_LENGTH).and_then(|v| v.parse().ok());

        Ok(MediaStream {
            status: response.status().as_u16(),
            content_type,
            content_length,
            content_range,
            body: Body::from_stream(response.bytes_stream()),
        })
    }

    async fn upload(
        &self,
        key: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<StoredObject, StorageError> {
        let auth = self.auth().await?;

        let response = self
            .http
            .post(format!("{}/b2api/v2/b2_get_upload_url", auth.api_url))
            .header(header::AUTHORIZATION, &auth.token)
            .json(&GetUploadUrlRequest {
                bucket_id: &self.bucket_id,
            })
            .send()
            .await?;
        let upload: GetUploadUrlResponse = self.check(response).await?.json().await?;

        let size = data.len() as u64;
        let response = self
            .http
            .post(upload.upload_url)
            .header(header::AUTHORIZATION, upload.authorization_token)
            .header("X-Bz-File-Name", encode_key(key))
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, size)
            .header("X-Bz-Content-Sha1", "do_not_verify")
            .body(data)
            .send()
            .await?;

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct UploadResponse {
            file_id: String,
        }
        let uploaded: UploadResponse = self.check(response).await?.json().await?;

        Ok(StoredObject {
            key: key.to_string(),
            file_id: uploaded.file_id,
            size,
            content_type: content_type.to_string(),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let file = self
            .list_files(key)
            .await?
            .into_iter()
            .find(|file| file.key == key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;

        let auth = self.auth().await?;
        let response = self
            .http
            .post(format!("{}/b2api/v2/b2_delete_file_version", auth.api_url))
            .header(header::AUTHORIZATION, &auth.token)
            .json(&DeleteFileVersionRequest {
                file_name: &file.key,
                file_id: &file.file_id,
            })
            .send()
            .await?;
        self.check(response).await?;

        Ok(())
    }
}

/// Percent-encodes every path segment of a key, keeping the `/` separators.
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
