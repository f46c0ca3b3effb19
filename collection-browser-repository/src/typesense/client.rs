//! Typesense client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! over the Typesense HTTP API using `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::types::{CollectionSchema, SearchParams, SearchResult};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

/// Typesense client implementation.
///
/// Holds the server address and API key. Requests go out one at a time as
/// the caller awaits them; there is no retry and no timeout beyond the
/// transport default.
///
/// # Example
///
/// ```ignore
/// let client = TypesenseClient::new("http://localhost:8108", "xyz")?;
/// let collections = client.retrieve_collections().await?;
/// ```
pub struct TypesenseClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl TypesenseClient {
    /// Create a new Typesense client for the specified server.
    ///
    /// # Arguments
    ///
    /// * `url` - The server URL (e.g., "http://localhost:8108")
    /// * `api_key` - The API key sent with every request
    ///
    /// # Returns
    ///
    /// * `Ok(TypesenseClient)` - A new client instance
    /// * `Err(SearchError)` - If the URL is invalid or the HTTP client cannot be built
    pub fn new(url: &str, api_key: impl Into<String>) -> Result<Self, SearchError> {
        let base_url =
            Url::parse(url).map_err(|e| SearchError::connection(format!("Invalid URL {}: {}", url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SearchError::connection(format!(
                "Invalid URL {}: cannot be used as a base",
                url
            )));
        }

        let http = Client::builder()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(url = %base_url, "Created Typesense client");

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Build an endpoint URL, encoding each segment on its own so collection
    /// names cannot escape their path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SearchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SearchError::connection(format!("Invalid URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send an authenticated request and decode the JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, SearchError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Typesense request failed");
            return Err(SearchError::query(format!(
                "Request failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| SearchError::parse(e.to_string()))
    }
}

#[async_trait]
impl SearchEngineClient for TypesenseClient {
    async fn retrieve_collections(&self) -> Result<Vec<CollectionSchema>, SearchError> {
        let url = self.endpoint(&["collections"])?;
        let collections: Vec<CollectionSchema> = self.send(self.http.get(url)).await?;

        debug!(count = collections.len(), "Retrieved collections");
        Ok(collections)
    }

    async fn retrieve_collection(&self, name: &str) -> Result<CollectionSchema, SearchError> {
        let url = self.endpoint(&["collections", name])?;
        let collection: CollectionSchema = self.send(self.http.get(url)).await?;

        debug!(collection = %name, num_documents = ?collection.num_documents, "Retrieved collection");
        Ok(collection)
    }

    async fn search(&self, name: &str, params: &SearchParams) -> Result<SearchResult, SearchError> {
        let url = self.endpoint(&["collections", name, "documents", "search"])?;
        let result: SearchResult = self.send(self.http.get(url).query(params)).await?;

        debug!(
            collection = %name,
            found = ?result.found,
            hits = result.hits.as_ref().map_or(0, Vec::len),
            "Search completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = TypesenseClient::new("not a url", "key");
        assert!(matches!(result, Err(SearchError::ConnectionError(_))));
    }

    #[test]
    fn test_cannot_be_a_base_url_is_rejected() {
        let result = TypesenseClient::new("mailto:search@example.com", "key");
        assert!(matches!(result, Err(SearchError::ConnectionError(_))));
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = TypesenseClient::new("http://localhost:8108/", "key").unwrap();

        let url = client.endpoint(&["collections", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8108/collections/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_retrieve_collections_sends_api_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections"))
            .and(header(API_KEY_HEADER, "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "name": "books",
                    "fields": [{ "name": "title", "type": "string" }],
                    "num_documents": 2
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = TypesenseClient::new(&server.uri(), "test-key").unwrap();
        let collections = client.retrieve_collections().await.unwrap();

        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].name, "books");
        assert_eq!(collections[0].num_documents, Some(2));
    }

    #[tokio::test]
    async fn test_retrieve_collection() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections/books"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "books",
                "fields": [],
                "num_documents": 12
            })))
            .mount(&server)
            .await;

        let client = TypesenseClient::new(&server.uri(), "test-key").unwrap();
        let collection = client.retrieve_collection("books").await.unwrap();

        assert_eq!(collection.num_documents, Some(12));
    }

    #[tokio::test]
    async fn test_search_sends_wildcard_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections/books/documents/search"))
            .and(query_param("q", "*"))
            .and(query_param("query_by", ""))
            .and(query_param("per_page", "250"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "found": 1,
                "hits": [{ "document": { "id": "1", "title": "Dune" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TypesenseClient::new(&server.uri(), "test-key").unwrap();
        let result = client
            .search("books", &SearchParams::wildcard(250, 1))
            .await
            .unwrap();

        assert_eq!(result.found, Some(1));
        assert_eq!(result.hits.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_error_status_is_query_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Forbidden - a valid `x-typesense-api-key` header must be sent."))
            .mount(&server)
            .await;

        let client = TypesenseClient::new(&server.uri(), "wrong").unwrap();
        let err = client.retrieve_collections().await.unwrap_err();

        match err {
            SearchError::QueryError(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("Forbidden"));
            }
            other => panic!("expected QueryError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections/books"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = TypesenseClient::new(&server.uri(), "test-key").unwrap();
        let err = client.retrieve_collection("books").await.unwrap_err();

        assert!(matches!(err, SearchError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = TypesenseClient::new(&format!("http://127.0.0.1:{}", port), "test-key").unwrap();
        let err = client.retrieve_collections().await.unwrap_err();

        assert!(matches!(err, SearchError::ConnectionError(_)));
    }
}
