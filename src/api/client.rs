use async_trait::async_trait;
use log::{debug, trace};
use reqwest::RequestBuilder;

use super::BookApi;
use crate::config::Config;
use crate::error::TransportError;
use crate::models::{Book, BookPayload};

/// # Book Client
/// `BookApi` over HTTP with reqwest.
pub struct BookClient {
    base_url: String,
    client: reqwest::Client,
}

impl BookClient {
    pub fn new(config: &Config) -> Result<BookClient, TransportError> {
        let client = reqwest::Client::builder().build()?;

        Ok(BookClient {
            base_url: config.base_url(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        let url = format!("{}{}", self.base_url, path);
        debug!("url = {}", url);
        url
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<String, TransportError> {
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("status = {}", status);

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl BookApi for BookClient {
    async fn list_all(&self) -> Result<Vec<Book>, TransportError> {
        trace!("BookClient::list_all()");
        let body = self.send(self.client.get(&self.url("/all"))).await?;

        Ok(serde_json::from_str::<Vec<Book>>(&body)?)
    }

    async fn create(&self, payload: &BookPayload) -> Result<(), TransportError> {
        trace!("BookClient::create()");
        self.send(self.client.post(&self.url("/add")).json(payload))
            .await?;

        Ok(())
    }

    async fn update(&self, payload: &BookPayload) -> Result<(), TransportError> {
        trace!("BookClient::update()");
        self.send(self.client.put(&self.url("/update")).json(payload))
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<String, TransportError> {
        trace!("BookClient::delete()");
        let path = format!("/delete/{}", id);

        self.send(self.client.delete(&self.url(&path))).await
    }

    async fn get(&self, id: i64) -> Result<Book, TransportError> {
        trace!("BookClient::get()");
        let path = format!("/get/{}", id);
        let body = self.send(self.client.get(&self.url(&path))).await?;

        Ok(serde_json::from_str::<Book>(&body)?)
    }
}
