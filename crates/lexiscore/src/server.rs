//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scorers over MCP on stdio so assistants and editors can score
//! text without going through files. The server wraps the same core library
//! the CLI commands use; each `#[tool]` method delegates to `lexiscore_core`.
//!
//! The lexicon is loaded once at startup and shared read-only by every call.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use lexiscore_core::{
    Document, DocumentScores, Lexicon, ReadabilityScores, score_readability, text,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreTextParams {
    /// Body text to score.
    pub text: String,
    /// Optional title, echoed back but not scored.
    #[serde(default)]
    pub title: String,
    /// Optional document identifier, echoed back.
    #[serde(default)]
    pub id: String,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum acceptable Fog Index.
    pub max_fog: Option<f64>,
}

/// Parameters for the `clean_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CleanTextParams {
    /// The text to clean.
    pub text: String,
}

#[derive(Serialize)]
struct ReadabilityReport {
    #[serde(flatten)]
    scores: ReadabilityScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_fog: Option<f64>,
    over_max: bool,
}

#[derive(Serialize)]
struct CleanedText {
    count: usize,
    words: Vec<String>,
}

/// MCP server exposing the scorers.
#[derive(Clone)]
pub struct ScoreServer {
    lexicon: Arc<Lexicon>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ScoreServer {
    fn default() -> Self {
        Self::new(Lexicon::default(), None)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ScoreServer {
    /// Create a server around a loaded lexicon.
    pub fn new(lexicon: Lexicon, max_input_bytes: Option<usize>) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, description, and loaded lexicon sizes")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let stop_words = self.lexicon.stop_words().len();
        let positive_words = self.lexicon.positive_words().len();
        let negative_words = self.lexicon.negative_words().len();

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "lexicon": {
                    "stop_words": stop_words,
                    "positive_words": positive_words,
                    "negative_words": negative_words,
                },
            }))?
        } else {
            format!(
                "{} v{}\n{}\nLexicon: {stop_words} stop words, {positive_words} positive, {negative_words} negative",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text for sentiment, readability, and lexical statistics.
    #[tool(
        description = "Score text: positive/negative counts, polarity, subjectivity, Fog Index, complex words, syllables, personal pronouns, and average word length."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_text(
        &self,
        Parameters(params): Parameters<ScoreTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_text", text_len = params.text.len(), "executing MCP tool");
        self.check_size(&params.text)?;

        let document = Document::new(params.id, params.title, params.text);
        let result = DocumentScores::score(&document, &self.lexicon);
        let scores = result.scores;

        tracing::info!(
            tool = "score_text",
            polarity = scores.polarity_score,
            fog_index = scores.fog_index,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&result)?)]))
    }

    /// Score readability using the Gunning Fog Index.
    #[tool(
        description = "Check readability of text. Returns the Gunning Fog Index, sentence and word counts, and complex word ratio."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_readability", max_fog = ?params.max_fog, "executing MCP tool");
        self.check_size(&params.text)?;

        let scores = score_readability(&params.text);
        let report = ReadabilityReport {
            scores,
            max_fog: params.max_fog,
            over_max: params.max_fog.is_some_and(|max| scores.fog_index > max),
        };

        tracing::info!(
            tool = "check_readability",
            fog_index = scores.fog_index,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }

    /// Tokenize, lowercase, and strip stop words and non-alphabetic tokens.
    #[tool(
        description = "Clean text into lowercase alphabetic words with stop words removed, as used for sentiment scoring."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn clean_text(
        &self,
        Parameters(params): Parameters<CleanTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "clean_text", text_len = params.text.len(), "executing MCP tool");
        self.check_size(&params.text)?;

        let words = text::clean_words(&params.text, self.lexicon.stop_words());
        let cleaned = CleanedText {
            count: words.len(),
            words,
        };

        tracing::info!(tool = "clean_text", count = cleaned.count, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&cleaned)?)]))
    }
}

#[tool_handler]
impl ServerHandler for ScoreServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use score_text for full metrics, check_readability for the Fog Index, and clean_text to see the words sentiment scoring uses.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
