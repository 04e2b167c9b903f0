use std::io::Write;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelrec_rs::client::{HttpRecommendClient, QueryInput, SearchController, TerminalRenderer};

#[derive(Parser, Debug)]
#[command(name = "reelrec-search")]
#[command(about = "Interactive movie recommendation search", long_about = None)]
struct Args {
    /// Base URL of the recommendation server
    #[arg(short, long, default_value = "http://localhost:8080")]
    server: String,
}

/// The input field of the session: holds the most recently submitted
/// line, read by the controller at trigger time.
#[derive(Clone, Default)]
struct LineBuffer(Arc<Mutex<String>>);

impl LineBuffer {
    fn set(&self, value: String) {
        *self.0.lock().unwrap() = value;
    }
}

impl QueryInput for LineBuffer {
    fn current_value(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

fn prompt() {
    print!("movie> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelrec_rs=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let service = match HttpRecommendClient::new(&args.server) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let input = LineBuffer::default();
    let mut controller = SearchController::new(input.clone(), service, TerminalRenderer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    loop {
        match lines.next_line().await {
            // A submitted line is the trigger; blank lines do nothing.
            Ok(Some(line)) => {
                input.set(line);
                controller.search().await;
                prompt();
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
