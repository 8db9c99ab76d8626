//! HTTP client for the remote document store
//!
//! Talks to a plain JSON collection API: the store owns id assignment and the
//! creation/update timestamps, and can list the collection ordered by a
//! field. Nothing above this module knows the wire shape.
//!
//! No retry and no backoff anywhere: a failed call surfaces as
//! `RosterError::Remote` and the synchronizer decides what falling back
//! means. "Retry" is the user re-triggering the action.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use roster_core::RemoteRecordStore;
use roster_domain::{RecordDraft, RemoteStoreConfig, Result, RosterError, RosterRecord};
use tracing::debug;

/// Path of the record collection on the remote store.
const COLLECTION: &str = "users";

/// reqwest-backed implementation of [`RemoteRecordStore`]
pub struct HttpRemoteStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRemoteStore {
    /// Build a client from configuration.
    ///
    /// Construction failure here is what makes the synchronizer report the
    /// remote store unavailable for the whole process lifetime.
    pub fn new(config: &RemoteStoreConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RosterError::Remote(format!("failed to build http client: {e}")))?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, COLLECTION)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, COLLECTION, id)
    }
}

#[async_trait]
impl RemoteRecordStore for HttpRemoteStore {
    async fn create(&self, draft: &RecordDraft) -> Result<RosterRecord> {
        let url = self.collection_url();
        debug!(%url, "creating record remotely");

        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(map_transport_error)?;

        decode_record(check_status(response)?).await
    }

    async fn update(&self, id: &str, draft: &RecordDraft) -> Result<RosterRecord> {
        let url = self.document_url(id);
        debug!(%url, "updating record remotely");

        let response = self
            .http
            .patch(&url)
            .json(draft)
            .send()
            .await
            .map_err(map_transport_error)?;

        decode_record(check_status(response)?).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.document_url(id);
        debug!(%url, "deleting record remotely");

        let response = self.http.delete(&url).send().await.map_err(map_transport_error)?;
        check_status(response)?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<RosterRecord>> {
        let url = format!("{}?order=createdAt.desc", self.collection_url());
        debug!(%url, "fetching all records remotely");

        let response = self.http.get(&url).send().await.map_err(map_transport_error)?;
        let response = check_status(response)?;
        response
            .json::<Vec<RosterRecord>>()
            .await
            .map_err(|e| RosterError::Remote(format!("invalid record list payload: {e}")))
    }
}

fn map_transport_error(err: reqwest::Error) -> RosterError {
    if err.is_timeout() {
        RosterError::Remote("request timeout".into())
    } else {
        RosterError::Remote(err.to_string())
    }
}

fn check_status(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => {
            Err(RosterError::NotFound("remote record not found".into()))
        }
        status => Err(RosterError::Remote(format!("remote store returned {status}"))),
    }
}

async fn decode_record(response: Response) -> Result<RosterRecord> {
    response
        .json::<RosterRecord>()
        .await
        .map_err(|e| RosterError::Remote(format!("invalid record payload: {e}")))
}
