//! Server functions and wire types for the OpenDeepWiki home page.
//!
//! The functions below run on the fullstack server and forward to the
//! upstream backend configured through [`config::ApiConfig`]; on the client
//! they compile to RPC stubs.

use dioxus::prelude::*;

pub mod config;
mod error;
mod types;

#[cfg(any(feature = "server", test))]
mod envelope;

#[cfg(feature = "server")]
pub mod backend;

pub use error::ApiError;
pub use types::{
    HomeStats, Repository, RepositoryFormValues, RepositoryPage, SubmitResponse, WarehouseStatus,
};

/// One page of repositories, optionally filtered by `keyword`.
#[server(ListRepositories)]
pub async fn list_repositories(
    page: u32,
    page_size: u32,
    keyword: String,
) -> Result<RepositoryPage, ServerFnError> {
    let backend = backend::Backend::shared().map_err(ApiError::into_server_error)?;
    backend
        .warehouse_list(page, page_size, keyword.trim())
        .await
        .map_err(|err| {
            tracing::error!(%err, page, page_size, "listing repositories failed");
            err.into_server_error()
        })
}

/// Header/hero counters. Missing counters are left as `None`.
#[server(HomeStatsQuery)]
pub async fn home_stats() -> Result<HomeStats, ServerFnError> {
    let backend = backend::Backend::shared().map_err(ApiError::into_server_error)?;
    backend.home_stats().await.map_err(|err| {
        tracing::warn!(%err, "loading home stats failed");
        err.into_server_error()
    })
}

/// Queue a repository for indexing.
#[server(SubmitWarehouse)]
pub async fn submit_warehouse(
    values: RepositoryFormValues,
) -> Result<SubmitResponse, ServerFnError> {
    let values = values.normalized();
    if values.address.is_empty() {
        return Ok(SubmitResponse::rejected("repository address is required"));
    }

    let backend = backend::Backend::shared().map_err(ApiError::into_server_error)?;
    tracing::info!(address = %values.address, "submitting repository");
    backend.submit_warehouse(&values).await.map_err(|err| {
        tracing::error!(%err, "submitting repository failed");
        err.into_server_error()
    })
}

/// Most recent processing record for a repository address, if any.
#[server(LastWarehouse)]
pub async fn last_warehouse(address: String) -> Result<Option<Repository>, ServerFnError> {
    let address = address.trim().to_string();
    if address.is_empty() {
        return Ok(None);
    }

    let backend = backend::Backend::shared().map_err(ApiError::into_server_error)?;
    backend
        .last_warehouse(&address)
        .await
        .map_err(ApiError::into_server_error)
}
