use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Result, TuidoError};
use crate::service::TodoService;
use crate::types::{NewTodo, Todo};

/// REST backend over a plain `{base_url}/todos` collection
/// (JSONPlaceholder-compatible).
pub struct RestService {
    client: Client,
    base_url: String,
}

impl RestService {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TuidoError::Api(format!("todo API {}: {}", status, text)));
        }
        Ok(response)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TuidoError::Api(e.to_string()))
    }
}

#[async_trait]
impl TodoService for RestService {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let response = self
            .client
            .get(self.api_url("/todos"))
            .send()
            .await
            .map_err(|e| TuidoError::Api(e.to_string()))?;
        Self::decode(response).await
    }

    async fn create_todo(&self, new: &NewTodo) -> Result<Todo> {
        let response = self
            .client
            .post(self.api_url("/todos"))
            .json(new)
            .send()
            .await
            .map_err(|e| TuidoError::Api(e.to_string()))?;
        Self::decode(response).await
    }

    async fn update_todo(&self, todo: &Todo) -> Result<Todo> {
        let response = self
            .client
            .put(self.api_url(&format!("/todos/{}", todo.id)))
            .json(todo)
            .send()
            .await
            .map_err(|e| TuidoError::Api(e.to_string()))?;
        Self::decode(response).await
    }

    async fn delete_todo(&self, id: u64) -> Result<()> {
        let response = self
            .client
            .delete(self.api_url(&format!("/todos/{}", id)))
            .send()
            .await
            .map_err(|e| TuidoError::Api(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }
}
