//! Request shapes shared by the resource services.
//!
//! Every resource answers the same four GET forms under its own path
//! segment; services expose the subset the server supports for them.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::client::{ClientInner, QueryParams};
use crate::models::{ChangeWindow, StageRange};
use crate::{Error, Result};

pub(crate) struct Endpoint {
    inner: Arc<ClientInner>,
    path: &'static str,
    cancel: Option<CancellationToken>,
}

impl Endpoint {
    pub(crate) fn new(inner: Arc<ClientInner>, path: &'static str) -> Self {
        Self {
            inner,
            path,
            cancel: None,
        }
    }

    pub(crate) fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancel = Some(token);
    }

    /// `GET {path}`
    pub(crate) async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.fetch(self.path, QueryParams::new()).await
    }

    /// `GET {path}/{id}?fromStageNumber&toStageNumber`
    pub(crate) async fn by_id<T: DeserializeOwned>(
        &self,
        id: &str,
        stages: Option<StageRange>,
    ) -> Result<Vec<T>> {
        let id = require_id(id)?;
        let path = format!("{}/{}", self.path, urlencoding::encode(id));
        let mut query = QueryParams::new();
        query.push_stage_range(stages.unwrap_or_default());
        self.fetch(&path, query).await
    }

    /// `GET {path}?fromChangeUtc&toChangeUtc&fromStageNumber&toStageNumber`
    pub(crate) async fn by_change_utc<T: DeserializeOwned>(
        &self,
        window: ChangeWindow,
        stages: Option<StageRange>,
    ) -> Result<Vec<T>> {
        let mut query = QueryParams::new();
        query
            .push_change_window(window)
            .push_stage_range(stages.unwrap_or_default());
        self.fetch(self.path, query).await
    }

    /// `GET {path}?fromStageNumber&toStageNumber`
    pub(crate) async fn by_stage_number<T: DeserializeOwned>(
        &self,
        stages: StageRange,
    ) -> Result<Vec<T>> {
        let mut query = QueryParams::new();
        query.push_stage_range(stages);
        self.fetch(self.path, query).await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<Vec<T>> {
        let items: Vec<T> = self
            .inner
            .get_json(path, &query, self.cancel.as_ref())
            .await?;
        tracing::debug!(endpoint = self.path, count = items.len(), "decoded records");
        Ok(items)
    }
}

/// Trim `id` and reject it if blank.
pub(crate) fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::InvalidInput(
            "Job ID must be a GUID or an API number".to_string(),
        ));
    }
    Ok(id)
}
