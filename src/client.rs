//! HTTP client for interacting with the server.

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    types::*,
};
use reqwest::{
    Method,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

/// HTTP client for the API.
///
/// One `Client` owns one reusable connection pool. Calls take `&self`, so a
/// client can be shared between tasks (behind an `Arc` or a plain borrow) and
/// used concurrently. The pool is released exactly once: on [`Client::close`],
/// when the client is dropped, or at the end of [`Client::scoped`].
///
/// # Example
///
/// ```rust,no_run
/// use axum_leptos_htmx_wc_sdk::{Client, CreateKnowledgeBaseRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("http://localhost:3000")?;
///
/// let chat = client.chat("Hello!", None).await?;
/// println!("stream: {}", chat.stream_url);
///
/// let kb = client
///     .create_knowledge_base(CreateKnowledgeBaseRequest::new("docs"))
///     .await?;
/// let hits = client.search(&kb.id, "install").await?;
///
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the server (e.g., "http://localhost:3000").
    ///   Surrounding whitespace and trailing slashes are stripped.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        tracing::debug!(name: "sdk.client.opened", base_url = %base_url, "HTTP client opened");
        Ok(Self { base_url, http })
    }

    /// Create a client from loaded configuration.
    ///
    /// Sends `User-Agent` on every request, plus `Authorization: Bearer` when
    /// an API key is configured.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Self::with_client(&config.base_url, http)
    }

    /// Open a client, run `f` with it and release the client before
    /// returning `f`'s result, whether it succeeded or not.
    ///
    /// ```rust,no_run
    /// # use axum_leptos_htmx_wc_sdk::Client;
    /// # async fn example() -> axum_leptos_htmx_wc_sdk::error::Result<()> {
    /// let kbs = Client::scoped("http://localhost:3000", async |client| {
    ///     client.list_knowledge_bases().await
    /// })
    /// .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scoped<F, T>(base_url: impl AsRef<str>, f: F) -> Result<T>
    where
        F: AsyncFnOnce(&Client) -> Result<T>,
    {
        let client = Self::new(base_url)?;
        let result = f(&client).await;
        client.close();
        result
    }

    /// Release the underlying connection pool.
    ///
    /// Consumes the client, so no call can be made on it afterwards.
    pub fn close(self) {
        drop(self);
    }

    /// Get the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chat API
    // ─────────────────────────────────────────────────────────────────────────

    /// Send a chat message, optionally continuing an existing session.
    ///
    /// Returns the session ID and stream URL for receiving events.
    pub async fn chat(
        &self,
        message: impl Into<String>,
        session_id: Option<String>,
    ) -> Result<ChatResponse> {
        let req = ChatRequest {
            message: message.into(),
            session_id,
        };
        self.send_json(Method::POST, "/api/chat", Some(&req)).await
    }

    /// Get messages for a session, oldest first.
    pub async fn get_messages(&self, session_id: &str) -> Result<Vec<Message>> {
        self.send_json::<(), _>(
            Method::GET,
            &format!("/api/sessions/{session_id}/messages"),
            None,
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Runs API
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a new run.
    pub async fn create_run(
        &self,
        input: impl Into<String>,
        context: Option<Metadata>,
    ) -> Result<RunResponse> {
        let req = CreateRunRequest {
            input: input.into(),
            context,
        };
        self.send_json(Method::POST, "/api/runs", Some(&req)).await
    }

    /// Get the stream URL for a run.
    ///
    /// Pure string composition: the server is not asked whether the run exists.
    pub fn run_stream_url(&self, run_id: &str) -> String {
        self.url(&format!("/api/runs/{run_id}/stream"))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Knowledge Base API
    // ─────────────────────────────────────────────────────────────────────────

    /// List all knowledge bases.
    pub async fn list_knowledge_bases(&self) -> Result<Vec<KnowledgeBase>> {
        self.send_json::<(), _>(Method::GET, "/api/knowledge", None)
            .await
    }

    /// Create a new knowledge base.
    pub async fn create_knowledge_base(
        &self,
        req: CreateKnowledgeBaseRequest,
    ) -> Result<KnowledgeBase> {
        self.send_json(Method::POST, "/api/knowledge", Some(&req))
            .await
    }

    /// Get a knowledge base by ID.
    pub async fn get_knowledge_base(&self, id: &str) -> Result<KnowledgeBase> {
        self.send_json::<(), _>(Method::GET, &format!("/api/knowledge/{id}"), None)
            .await
    }

    /// Update the name and/or description of a knowledge base.
    pub async fn update_knowledge_base(
        &self,
        id: &str,
        req: UpdateKnowledgeBaseRequest,
    ) -> Result<KnowledgeBase> {
        self.send_json(Method::PUT, &format!("/api/knowledge/{id}"), Some(&req))
            .await
    }

    /// Delete a knowledge base.
    pub async fn delete_knowledge_base(&self, id: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, &format!("/api/knowledge/{id}"), None)
            .await
            .map(drop)
    }

    /// List documents in a knowledge base.
    pub async fn list_documents(&self, kb_id: &str) -> Result<Vec<Document>> {
        self.send_json::<(), _>(
            Method::GET,
            &format!("/api/knowledge/{kb_id}/documents"),
            None,
        )
        .await
    }

    /// Get a single document of a knowledge base.
    pub async fn get_document(&self, kb_id: &str, doc_id: &str) -> Result<Document> {
        self.send_json::<(), _>(
            Method::GET,
            &format!("/api/knowledge/{kb_id}/documents/{doc_id}"),
            None,
        )
        .await
    }

    /// Delete a document and its chunks.
    pub async fn delete_document(&self, kb_id: &str, doc_id: &str) -> Result<()> {
        self.send::<()>(
            Method::DELETE,
            &format!("/api/knowledge/{kb_id}/documents/{doc_id}"),
            None,
        )
        .await
        .map(drop)
    }

    /// Search a knowledge base with [`DEFAULT_SEARCH_LIMIT`] and [`DEFAULT_MIN_SCORE`].
    pub async fn search(&self, kb_id: &str, query: impl Into<String>) -> Result<SearchResponse> {
        self.search_with_options(kb_id, query, DEFAULT_SEARCH_LIMIT, DEFAULT_MIN_SCORE)
            .await
    }

    /// Search a knowledge base with options.
    pub async fn search_with_options(
        &self,
        kb_id: &str,
        query: impl Into<String>,
        limit: usize,
        min_score: f32,
    ) -> Result<SearchResponse> {
        let req = SearchRequest {
            query: query.into(),
            limit,
            min_score,
        };
        self.send_json(
            Method::POST,
            &format!("/api/knowledge/{kb_id}/search"),
            Some(&req),
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ingest API
    // ─────────────────────────────────────────────────────────────────────────

    /// Ingest content.
    pub async fn ingest(
        &self,
        content: impl Into<String>,
        metadata: Option<Metadata>,
    ) -> Result<IngestResponse> {
        let req = IngestRequest {
            content: content.into(),
            metadata,
        };
        self.send_json(Method::POST, "/api/ingest", Some(&req)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and return the body of a successful response.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let url = self.url(path);
        tracing::debug!(name: "sdk.request.sent", method = %method, url = %url, "Sending request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        Self::handle_response(&method, &url, response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let text = self.send(method, path, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn handle_response(
        method: &Method,
        url: &str,
        response: reqwest::Response,
    ) -> Result<String> {
        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            tracing::warn!(
                name: "sdk.request.failed",
                method = %method,
                url = %url,
                status = status.as_u16(),
                "API returned an error status"
            );
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        tracing::debug!(name: "sdk.client.released", base_url = %self.base_url, "HTTP client released");
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)?;
    if parsed.cannot_be_a_base() {
        return Err(Error::InvalidUrl(
            url::ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }
    Ok(trimmed.to_string())
}
