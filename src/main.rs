use clap::Parser;
use colored::*;
use std::process;
use std::time::Duration;

use tamly::api::EscalationClient;
use tamly::cli::Args;
use tamly::config::Config;
use tamly::corpus::Corpus;
use tamly::engine::{ChatEngine, ReplySource};
use tamly::store::{ConversationStore, FilesystemStorage};
use tamly::ui;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let mut store = ConversationStore::initialize(FilesystemStorage::new());

    // Handle --reset: clear history and start over, nothing is sent.
    if args.reset {
        store.reset();
        println!("{}", "Đã tạo cuộc trò chuyện mới.".green());
        ui::display_history(store.messages());
        return;
    }

    if args.history {
        ui::display_history(store.messages());
        return;
    }

    if args.message.is_empty() {
        print_usage();
        process::exit(1);
    }

    let corpus = match Corpus::load(config.corpus_path.as_deref()) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("{} failed to load training corpus: {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let client = match EscalationClient::new(
        config.api_endpoint.clone(),
        config.model.clone(),
        Duration::from_secs(config.request_timeout),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let mut engine = ChatEngine::new(
        store,
        corpus,
        client,
        Duration::from_millis(config.typing_delay_ms),
    );

    if args.new_conversation {
        engine.reset();
    }

    if config.verbose {
        eprintln!("{}", format!("[AI] Using model: {}", config.model).dimmed());
        eprintln!(
            "{}",
            format!("[AI] Endpoint: {}", config.api_endpoint).dimmed()
        );
    }

    let text = args.message.join(" ");
    match engine.submit(&text).await {
        Some(reply) => {
            if config.verbose {
                match &reply.source {
                    ReplySource::Corpus => {
                        eprintln!("{}", "[AI] Answered from training data".dimmed())
                    }
                    ReplySource::Remote => eprintln!("{}", "[AI] Answered by remote model".dimmed()),
                    ReplySource::Fallback(err) => {
                        eprintln!("{}", format!("[AI] Escalation failed: {}", err).dimmed())
                    }
                }
            }
            ui::display_message(&reply.message);
        }
        None => {
            // Whitespace-only input is silently ignored.
        }
    }
}

fn print_usage() {
    eprintln!("{}", "Usage: tamly [OPTIONS] <message>".red());
    eprintln!(
        "{}",
        "  -n, --new                  Start a new conversation before sending".dimmed()
    );
    eprintln!(
        "{}",
        "      --reset                Clear the conversation history and start over".dimmed()
    );
    eprintln!(
        "{}",
        "      --history              Print the stored conversation".dimmed()
    );
    eprintln!(
        "{}",
        "      --api-endpoint <URL>   Custom chat endpoint base URL".dimmed()
    );
    eprintln!(
        "{}",
        "      --model <MODEL>        Model identifier for remote escalation".dimmed()
    );
    eprintln!(
        "{}",
        "      --corpus <PATH>        Training data JSON file".dimmed()
    );
    eprintln!("{}", "  -v, --verbose              Diagnostic output".dimmed());
}
