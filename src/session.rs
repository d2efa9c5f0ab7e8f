use crate::error::Result;
use crate::ingestion;
use crate::knowledge_base::KnowledgeBase;
use crate::table::{Table, MAX_PROMPT_ROWS};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[cfg(feature = "gemini")]
use crate::llm::FaqAssistant;
#[cfg(feature = "gemini")]
use log::warn;

/// Prefix identifying an answer that is actually a degraded generation
/// failure. The type system separates the two ([`FaqAssistant::ask`] returns
/// a typed error); this prefix exists for the UI path where the failure is
/// rendered as a normal answer so the conversation can continue.
pub const GENERATION_ERROR_PREFIX: &str = "An error occurred:";

/// One completed (question, answer) exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub question: String,
    pub answer: String,
}

/// What a file upload produced, so the caller can surface the truncation
/// warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub filename: String,
    /// Row count before truncation.
    pub total_rows: usize,
    pub truncated: bool,
}

/// Per-user session context: the current table, the conversation history, and
/// the knowledge-base archive. One owner per session, no shared state.
///
/// Uploads replace the table wholesale and clear the history; a failed upload
/// leaves both untouched (aside from the unconditional archive write, which
/// happens before parsing and is not rolled back).
#[derive(Debug)]
pub struct ChatSession {
    knowledge_base: KnowledgeBase,
    table: Option<Table>,
    truncated: bool,
    history: Vec<Turn>,
}

impl ChatSession {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self {
            knowledge_base,
            table: None,
            truncated: false,
            history: Vec::new(),
        }
    }

    /// Ingest an uploaded file: archive the raw bytes, parse them into a
    /// table, truncate to [`MAX_PROMPT_ROWS`], then swap in the new table and
    /// reset the conversation.
    pub fn load_file(&mut self, filename: &str, bytes: &[u8]) -> Result<LoadSummary> {
        self.knowledge_base.save(filename, bytes)?;

        let table = ingestion::load_table(bytes, filename)?;
        let total_rows = table.len();
        let truncated = total_rows > MAX_PROMPT_ROWS;
        if truncated {
            debug!(
                "Table from '{}' has {} rows; keeping the first {}",
                filename, total_rows, MAX_PROMPT_ROWS
            );
        }

        self.table = Some(if truncated {
            table.head(MAX_PROMPT_ROWS)
        } else {
            table
        });
        self.truncated = truncated;
        self.history.clear();

        info!("Loaded '{}' ({} rows)", filename, total_rows);
        Ok(LoadSummary {
            filename: filename.to_string(),
            total_rows,
            truncated,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// The current table, already truncated to [`MAX_PROMPT_ROWS`].
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Whether the current table was truncated at load time.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// The loaded table rendered as the plain-text block used for display and
    /// prompting.
    pub fn context_text(&self) -> Option<String> {
        self.table.as_ref().map(Table::to_text)
    }

    /// Run one chat turn: ask the assistant, record the exchange, return it.
    ///
    /// A generation failure never aborts the turn; it is substituted with a
    /// [`GENERATION_ERROR_PREFIX`]-prefixed answer string so the conversation
    /// can continue.
    #[cfg(feature = "gemini")]
    pub async fn exchange(&mut self, assistant: &FaqAssistant, question: &str) -> Turn {
        let answer = match assistant.ask(question).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Generation failed, substituting error answer: {}", e);
                format!("{} {}", GENERATION_ERROR_PREFIX, e)
            }
        };

        let turn = Turn {
            question: question.to_string(),
            answer,
        };
        self.history.push(turn.clone());
        turn
    }
}
