//! HTTP Adapter
//!
//! `PersonApi` over the REST endpoints of the person service.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use super::{wire, PersonApi};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Person, PersonId, PersonPayload};

#[derive(Debug, Clone)]
pub struct HttpPersonApi {
    client: Client,
    config: ApiConfig,
}

impl HttpPersonApi {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a request and turn non-2xx responses into `ApiError::Status`
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: wire::error_message(&body),
        })
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.get_json_at(self.config.endpoint(path)).await
    }

    async fn get_json_at(&self, url: String) -> Result<Value, ApiError> {
        debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json::<Value>().await?)
    }
}

#[async_trait(?Send)]
impl PersonApi for HttpPersonApi {
    async fn list_persons(&self) -> Result<Vec<Person>, ApiError> {
        let body = self.get_json("persons").await?;
        wire::decode_list(body)
    }

    async fn get_person(&self, id: &PersonId) -> Result<Person, ApiError> {
        let body = self.get_json_at(self.config.resource("person", id)?).await?;
        wire::decode_detail(body)
    }

    async fn create_person(&self, payload: &PersonPayload) -> Result<(), ApiError> {
        let url = self.config.endpoint("add-person");
        debug!("POST {} {:?}", url, payload);
        self.send(self.client.post(url).json(payload)).await?;
        Ok(())
    }

    async fn update_person(&self, id: &PersonId, payload: &PersonPayload) -> Result<(), ApiError> {
        let url = self.config.resource("update-person", id)?;
        debug!("PUT {} {:?}", url, payload);
        self.send(self.client.put(url).json(payload)).await?;
        Ok(())
    }

    async fn delete_person(&self, id: &PersonId) -> Result<(), ApiError> {
        let url = self.config.resource("remove-person", id)?;
        debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
