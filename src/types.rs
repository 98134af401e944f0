//! Shared types for the SDK.
//!
//! These types mirror the server's API DTOs. Response records are only ever
//! produced by deserializing a server payload; request records omit absent
//! optional members on the wire.

use serde::{Deserialize, Serialize};

/// Free-form JSON object used for run context, ingest metadata and search
/// result metadata.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Default number of results returned by a knowledge base search.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Default minimum similarity score for a knowledge base search.
pub const DEFAULT_MIN_SCORE: f32 = 0.7;

// =============================================================================
// Chat API Types
// =============================================================================

/// Request to start a chat session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Optional session ID to continue an existing conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Response from starting a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The session ID for this conversation.
    pub session_id: String,
    /// URL to stream chat events from.
    pub stream_url: String,
}

/// A message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: String,
    /// The message content.
    pub content: String,
}

// =============================================================================
// Runs API Types
// =============================================================================

/// Request to create a new agent run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRunRequest {
    /// The input prompt for the run.
    pub input: String,
    /// Optional context or configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Metadata>,
}

/// Response from creating a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResponse {
    /// The unique run ID.
    pub id: String,
    /// URL to stream run events from.
    pub stream_url: String,
}

// =============================================================================
// Knowledge Base API Types
// =============================================================================

/// A knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Configuration settings.
    #[serde(default)]
    pub config: KnowledgeBaseConfig,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Knowledge base configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    /// Embedding provider name.
    #[serde(default)]
    pub embedding_provider: String,
    /// Embedding model name.
    #[serde(default)]
    pub embedding_model: String,
    /// Vector dimensions (if known).
    pub vector_dimensions: Option<usize>,
    /// File processor to use.
    #[serde(default)]
    pub file_processor: String,
    /// Chunking strategy.
    #[serde(default)]
    pub chunk_strategy: String,
}

/// Request to create a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateKnowledgeBaseRequest {
    /// Name of the knowledge base.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateKnowledgeBaseRequest {
    /// Request with a name and no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of a knowledge base. Only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateKnowledgeBaseRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A document in a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier.
    pub id: String,
    /// Knowledge base ID.
    pub kb_id: String,
    /// Original filename.
    pub filename: String,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Number of chunks created.
    pub chunk_count: usize,
    /// Processing status.
    pub status: String,
    /// Error message if failed.
    pub error_message: Option<String>,
}

/// Request to search a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    /// The search query.
    pub query: String,
    /// Maximum number of results.
    pub limit: usize,
    /// Minimum similarity score.
    pub min_score: f32,
}

impl SearchRequest {
    /// Search with [`DEFAULT_SEARCH_LIMIT`] and [`DEFAULT_MIN_SCORE`].
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_SEARCH_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Response from a knowledge base search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The search results, best match first.
    pub results: Vec<SearchResult>,
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The content of the matching chunk.
    pub content: String,
    /// Similarity score.
    pub score: f32,
    /// Additional metadata.
    pub metadata: Metadata,
    /// Optional document ID.
    pub document_id: Option<String>,
}

// =============================================================================
// Ingest API Types
// =============================================================================

/// Request to ingest content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestRequest {
    /// The content to ingest.
    pub content: String,
    /// Optional metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Response from ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    /// Whether ingestion was successful.
    pub success: bool,
    /// Number of chunks created.
    pub chunk_count: usize,
}
