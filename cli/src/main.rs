use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use common::{ErrorResponse, LogEntry, RecordRequest, RecordResponse, RecordsResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// API base URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    api: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record what you just did
    Record {
        content: String,

        /// Time spent, in minutes
        #[arg(short, long)]
        duration: Option<String>,
    },

    /// List today's records
    Today,

    /// List records for a day (YYYY-MM-DD)
    Day { date: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = Client::new();
    let base = cli.api.trim_end_matches('/');

    match cli.command {
        Commands::Record { content, duration } => {
            let body = RecordRequest { content, duration };
            let resp = client
                .post(format!("{base}/api/record"))
                .json(&body)
                .send()
                .await
                .context("failed to reach server")?;
            let created: RecordResponse = read_json(resp).await?;
            println!("{}", created.message);
            print_entry(&created.data);
        }

        Commands::Today => {
            let resp = client
                .get(format!("{base}/api/records"))
                .send()
                .await
                .context("failed to reach server")?;
            print_day(read_json(resp).await?);
        }

        Commands::Day { date } => {
            let resp = client
                .get(format!("{base}/api/records/{date}"))
                .send()
                .await
                .context("failed to reach server")?;
            print_day(read_json(resp).await?);
        }
    }

    Ok(())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> anyhow::Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let message = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => String::from("no error message"),
        };
        bail!("server returned {status}: {message}");
    }
    resp.json().await.context("unexpected response body")
}

fn print_day(records: RecordsResponse) {
    if records.data.is_empty() {
        println!("No records for {}", records.date);
        return;
    }
    println!("{} ({} records)", records.date, records.data.len());
    for entry in &records.data {
        print_entry(entry);
    }
}

fn print_entry(entry: &LogEntry) {
    if entry.duration.is_empty() {
        println!("[{}] {}", entry.timestamp, entry.content);
    } else {
        println!("[{}] {} ({} min)", entry.timestamp, entry.content, entry.duration);
    }
}
