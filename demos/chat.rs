use anyhow::{Context, Result};
use dotenv::dotenv;
use faq_chatbot::llm::{FaqAssistant, GeminiClient};
use faq_chatbot::{ChatSession, KnowledgeBase};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;

    let file_path = std::env::args()
        .nth(1)
        .context("Usage: chat <faq-file.{csv,json,txt}>")?;

    println!("💬 Starting FAQ Chat...\n");

    let mut session = ChatSession::new(KnowledgeBase::open_default()?);
    let bytes = std::fs::read(&file_path).with_context(|| format!("reading {}", file_path))?;
    let file_name = std::path::Path::new(&file_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&file_path);

    let summary = session.load_file(file_name, &bytes)?;
    println!("✅ Loaded {} ({} rows).", summary.filename, summary.total_rows);
    if summary.truncated {
        println!("⚠️  Data too large. Only the first 100 rows will be used.");
    }
    if let Some(text) = session.context_text() {
        println!("\n{}\n", text);
    }

    let assistant = FaqAssistant::new(GeminiClient::new(api_key));

    println!("🤖 Ready! Ask questions about your file (type 'quit' to exit).");
    println!("------------------------------------------------------------------");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let question = input.trim();

        if question.eq_ignore_ascii_case("quit") || question.eq_ignore_ascii_case("exit") {
            break;
        }

        if question.is_empty() {
            continue;
        }

        println!("\nThinking...");
        let turn = session.exchange(&assistant, question).await;
        println!("\n{}\n", turn.answer);
        println!("------------------------------------------------------------------");
    }

    if !session.history().is_empty() {
        println!("\nSession history:");
        for (idx, turn) in session.history().iter().enumerate() {
            println!("{}. {} — {}", idx + 1, turn.question, turn.answer);
        }
    }

    Ok(())
}
