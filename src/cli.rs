//! Command-line front end.
//!
//! Each subcommand maps onto exactly one [`Client`] call; results are returned
//! as JSON so the binary can print them verbatim.

use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use crate::{
    client::Client,
    config::ConnectionArgs,
    error::Result,
    types::{
        CreateKnowledgeBaseRequest, DEFAULT_MIN_SCORE, DEFAULT_SEARCH_LIMIT, Metadata,
        UpdateKnowledgeBaseRequest,
    },
};

#[derive(Parser, Debug)]
#[command(name = "uar-client", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Send a chat message
    Chat {
        message: String,
        /// Continue an existing session
        #[arg(long)]
        session: Option<String>,
    },
    /// List the messages of a session
    Messages { session_id: String },
    /// Start an agent run
    Run {
        input: String,
        /// JSON object passed as run context
        #[arg(long, value_parser = parse_json_object)]
        context: Option<Metadata>,
    },
    /// Print the event stream URL of a run
    RunUrl { run_id: String },
    /// Ingest raw text content
    Ingest {
        content: String,
        /// JSON object stored alongside the content
        #[arg(long, value_parser = parse_json_object)]
        metadata: Option<Metadata>,
    },
    /// Knowledge base management
    #[command(subcommand)]
    Kb(KbCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum KbCommand {
    /// List knowledge bases
    List,
    /// Create a knowledge base
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Show a knowledge base
    Get { id: String },
    /// Rename or redescribe a knowledge base
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a knowledge base
    Delete { id: String },
    /// List documents of a knowledge base
    Documents { id: String },
    /// Show a single document
    Document { id: String, doc_id: String },
    /// Delete a single document
    DeleteDocument { id: String, doc_id: String },
    /// Semantic search within a knowledge base
    Search {
        id: String,
        query: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
        min_score: f32,
    },
}

/// Parse a JSON object argument.
pub fn parse_json_object(raw: &str) -> std::result::Result<Metadata, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("expected a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {e}")),
    }
}

/// Run one command against the server.
pub async fn execute(client: &Client, command: Command) -> Result<Value> {
    let value = match command {
        Command::Chat { message, session } => {
            serde_json::to_value(client.chat(message, session).await?)?
        }
        Command::Messages { session_id } => {
            serde_json::to_value(client.get_messages(&session_id).await?)?
        }
        Command::Run { input, context } => {
            serde_json::to_value(client.create_run(input, context).await?)?
        }
        Command::RunUrl { run_id } => json!({ "stream_url": client.run_stream_url(&run_id) }),
        Command::Ingest { content, metadata } => {
            serde_json::to_value(client.ingest(content, metadata).await?)?
        }
        Command::Kb(kb) => execute_kb(client, kb).await?,
    };
    Ok(value)
}

async fn execute_kb(client: &Client, command: KbCommand) -> Result<Value> {
    let value = match command {
        KbCommand::List => serde_json::to_value(client.list_knowledge_bases().await?)?,
        KbCommand::Create { name, description } => {
            let req = CreateKnowledgeBaseRequest { name, description };
            serde_json::to_value(client.create_knowledge_base(req).await?)?
        }
        KbCommand::Get { id } => serde_json::to_value(client.get_knowledge_base(&id).await?)?,
        KbCommand::Update {
            id,
            name,
            description,
        } => {
            let req = UpdateKnowledgeBaseRequest { name, description };
            serde_json::to_value(client.update_knowledge_base(&id, req).await?)?
        }
        KbCommand::Delete { id } => {
            client.delete_knowledge_base(&id).await?;
            json!({ "deleted": id })
        }
        KbCommand::Documents { id } => serde_json::to_value(client.list_documents(&id).await?)?,
        KbCommand::Document { id, doc_id } => {
            serde_json::to_value(client.get_document(&id, &doc_id).await?)?
        }
        KbCommand::DeleteDocument { id, doc_id } => {
            client.delete_document(&id, &doc_id).await?;
            json!({ "deleted": doc_id })
        }
        KbCommand::Search {
            id,
            query,
            limit,
            min_score,
        } => serde_json::to_value(
            client
                .search_with_options(&id, query, limit, min_score)
                .await?,
        )?,
    };
    Ok(value)
}
