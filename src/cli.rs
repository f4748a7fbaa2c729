use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tamly")]
#[command(about = "Psychology support chat assistant for students", long_about = None)]
pub struct Args {
    #[arg(
        short = 'n',
        long = "new",
        help = "Start a new conversation before sending"
    )]
    pub new_conversation: bool,

    #[arg(
        long = "reset",
        help = "Clear the conversation history and start over"
    )]
    pub reset: bool,

    #[arg(long = "history", help = "Print the stored conversation and exit")]
    pub history: bool,

    #[arg(
        long = "api-endpoint",
        help = "Custom chat endpoint base URL (e.g., http://localhost:11434)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(long = "model", help = "Model identifier for remote escalation")]
    pub model: Option<String>,

    #[arg(
        long = "corpus",
        help = "Path to a training data JSON file (defaults to the bundled corpus)"
    )]
    pub corpus: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output")]
    pub verbose: bool,

    #[arg(help = "Message to send to the assistant")]
    pub message: Vec<String>,
}
