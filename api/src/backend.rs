//! HTTP client for the upstream OpenDeepWiki backend (server builds only).

use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::envelope;
use crate::error::ApiError;
use crate::types::{HomeStats, Repository, RepositoryFormValues, RepositoryPage, SubmitResponse};

const WAREHOUSE_LIST: &str = "api/Warehouse/WarehouseList";
const SUBMIT_WAREHOUSE: &str = "api/Warehouse/SubmitWarehouse";
const LAST_WAREHOUSE: &str = "api/Warehouse/LastWarehouse";
const HOME_STATS: &str = "api/Statistics/HomeStats";

static SHARED: OnceCell<Backend> = OnceCell::new();

pub struct Backend {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Backend {
    /// Process-wide instance, built from `ApiConfig::load()` on first use.
    pub fn shared() -> Result<&'static Backend, ApiError> {
        SHARED.get_or_try_init(|| Backend::new(ApiConfig::load()?))
    }

    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| ApiError::Config(format!("http client: {err}")))?;
        debug!(base_url = %config.base_url, "backend client ready");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn warehouse_list(
        &self,
        page: u32,
        page_size: u32,
        keyword: &str,
    ) -> Result<RepositoryPage, ApiError> {
        let page_size = if page_size == 0 {
            self.config.default_page_size
        } else {
            page_size
        };
        let query = [
            ("page", page.max(1).to_string()),
            ("pageSize", page_size.to_string()),
            ("keyword", keyword.to_string()),
        ];
        let page: Option<RepositoryPage> = self.get(WAREHOUSE_LIST, &query).await?;
        Ok(page.unwrap_or_default())
    }

    pub async fn home_stats(&self) -> Result<HomeStats, ApiError> {
        let stats: Option<HomeStats> = self.get(HOME_STATS, &[]).await?;
        Ok(stats.unwrap_or_default())
    }

    pub async fn last_warehouse(&self, address: &str) -> Result<Option<Repository>, ApiError> {
        self.get(LAST_WAREHOUSE, &[("address", address.to_string())]).await
    }

    /// Declared backend rejections become `success: false`; only transport
    /// and decoding problems are errors.
    pub async fn submit_warehouse(
        &self,
        values: &RepositoryFormValues,
    ) -> Result<SubmitResponse, ApiError> {
        match self.post::<_, serde_json::Value>(SUBMIT_WAREHOUSE, values).await {
            Ok(_) => Ok(SubmitResponse::accepted()),
            Err(err) => match err.backend_message() {
                Some(message) => {
                    warn!(address = %values.address, %message, "submission rejected by backend");
                    Ok(SubmitResponse::rejected(message))
                }
                None if matches!(err, ApiError::Backend { .. }) => Ok(SubmitResponse {
                    success: false,
                    error: None,
                }),
                None => Err(err),
            },
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        debug!(endpoint, "GET");
        let request = self.http.get(self.config.endpoint(endpoint)).query(query);
        self.send(endpoint, request).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        debug!(endpoint, "POST");
        let request = self.http.post(self.config.endpoint(endpoint)).json(body);
        self.send(endpoint, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = request.send().await.map_err(|err| ApiError::Transport {
            endpoint,
            message: err.to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| ApiError::Transport {
            endpoint,
            message: err.to_string(),
        })?;

        if !status.is_success() {
            // The backend still wraps most 4xx answers in an envelope with a message.
            if let Err(err @ ApiError::Backend { .. }) =
                envelope::decode::<serde_json::Value>(endpoint, &body)
            {
                return Err(err);
            }
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        envelope::decode(endpoint, &body)
    }
}
