//! # FAQ Chatbot Core
//!
//! The non-UI core of a FAQ chatbot: ingest a tabular knowledge file, keep a
//! per-user session context, and answer questions through a hosted
//! text-generation API. A small balance [`Ledger`] rides along as an
//! independent component.
//!
//! ## Core Concepts
//!
//! - **Table**: the uniform row view produced from an uploaded CSV, JSON, or
//!   `|`-delimited TXT file, truncated to [`MAX_PROMPT_ROWS`] rows for display
//!   and prompting
//! - **Knowledge base**: a filesystem archive of every raw upload, keyed by
//!   the original filename
//! - **Session**: the single-owner context holding the current table and the
//!   ordered (question, answer) history; replaced wholesale on each upload
//! - **Assistant** (feature `gemini`): prompt assembly plus one Gemini
//!   `generateContent` call per turn, with fixed generation parameters
//!
//! ## Example
//!
//! ```rust,ignore
//! use faq_chatbot::{ChatSession, FaqAssistant, GeminiClient, KnowledgeBase};
//!
//! let mut session = ChatSession::new(KnowledgeBase::open_default()?);
//! let summary = session.load_file("faq.csv", &std::fs::read("faq.csv")?)?;
//! if summary.truncated {
//!     println!("Data too large. Displaying only the first 100 rows.");
//! }
//!
//! let assistant = FaqAssistant::new(GeminiClient::new(api_key));
//! let turn = session.exchange(&assistant, "What is the refund policy?").await;
//! println!("{}", turn.answer);
//! ```

pub mod error;
pub mod ingestion;
pub mod knowledge_base;
pub mod ledger;
pub mod session;
pub mod table;

#[cfg(feature = "gemini")]
pub mod llm;

pub use error::{FaqChatbotError, Result};
pub use ingestion::{load_table, FileFormat};
pub use knowledge_base::{KnowledgeBase, DEFAULT_KNOWLEDGE_BASE_DIR};
pub use ledger::Ledger;
pub use session::{ChatSession, LoadSummary, Turn, GENERATION_ERROR_PREFIX};
pub use table::{Table, MAX_PROMPT_ROWS};

#[cfg(feature = "gemini")]
pub use llm::{FaqAssistant, GeminiClient, DEFAULT_MODEL};
