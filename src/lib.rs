//! Rust SDK for axum-leptos-htmx-wc
//!
//! A typed async HTTP client for the server's REST API: chat sessions, agent
//! runs, knowledge base management, semantic search and ingestion.
//!
//! ```rust,no_run
//! use axum_leptos_htmx_wc_sdk::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("http://localhost:3000")?;
//!
//!     // Chat API
//!     let response = client.chat("Hello!", None).await?;
//!     println!("Stream URL: {}", response.stream_url);
//!
//!     // Knowledge Base API
//!     let kbs = client.list_knowledge_bases().await?;
//!     for kb in kbs {
//!         println!("KB: {} ({})", kb.name, kb.id);
//!     }
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`client`]: the HTTP client
//! - [`types`]: request and response records
//! - [`error`]: error taxonomy
//! - [`config`]: layered configuration for building a client
//! - [`cli`]: command-line front end used by the `uar-client` binary

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-exports
pub use client::Client;
pub use error::{Error, Result};
pub use types::*;
