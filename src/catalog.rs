use crate::errors::{CatalogError, Result};
use crate::model::{Movie, Tag};
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub endpoint: &'static str,
    pub params: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone)]
pub struct Graph {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub trait Catalog {
    async fn movies(&self, request: &ListingRequest) -> Result<Vec<Movie>>;
    async fn tags(&self, movie_id: u64) -> Result<Vec<Tag>>;
    async fn review_graph(&self, movie_id: u64) -> Result<Graph>;
}

pub struct ApiCatalog {
    client: Client,
    base: Url,
}

#[derive(Deserialize)]
struct ApiError {
    error: String,
}

impl ApiCatalog {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(ApiCatalog { client, base })
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Response> {
        let url = self
            .base
            .join(path)
            .map_err(|source| CatalogError::Endpoint {
                path: path.to_owned(),
                source,
            })?;
        debug!("GET {} {:?}", url, params);
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                debug!("unreadable {} body from {}: {}", status, path, err);
                Default::default()
            }
        };
        Err(CatalogError::Status {
            status: status.as_u16(),
            path: path.to_owned(),
            message: serde_json::from_slice::<ApiError>(&body)
                .ok()
                .map(|e| e.error),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let body = self.get(path, params).await?.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            path: path.to_owned(),
            source,
        })
    }
}

impl Catalog for ApiCatalog {
    async fn movies(&self, request: &ListingRequest) -> Result<Vec<Movie>> {
        self.get_json(request.endpoint, &request.params).await
    }

    async fn tags(&self, movie_id: u64) -> Result<Vec<Tag>> {
        self.get_json(&format!("api/movies/{}/tags", movie_id), &[])
            .await
    }

    async fn review_graph(&self, movie_id: u64) -> Result<Graph> {
        let response = self
            .get(&format!("api/movies/{}/review-graph", movie_id), &[])
            .await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_owned();
        let bytes = response.bytes().await?.to_vec();
        Ok(Graph {
            content_type,
            bytes,
        })
    }
}
