//! Exploratory probe for the Supabase REST client: insert, list, update and
//! delete rows in one table by primary key. Not part of the API surface;
//! useful when pointing the service at a fresh project.

use clap::{Parser, Subcommand};
use serde_json::json;

use mentorhub_api::config::AppConfig;
use mentorhub_api::supabase::SupabaseClient;

#[derive(Parser)]
#[command(name = "probe", about = "Poke a Supabase table through the REST client")]
struct Cli {
    /// Table to operate on
    #[arg(long, default_value = "todos")]
    table: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert a row with the given name
    Insert { name: String },
    /// List all rows
    List,
    /// Rename a row by primary key
    Update { id: i64, name: String },
    /// Delete a row by primary key
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let client = SupabaseClient::new(&config.supabase_url, &config.supabase_key)?;

    let cli = Cli::parse();
    let rows = match cli.command {
        Command::Insert { name } => {
            client
                .from(&cli.table)
                .insert(json!({
                    "name": name,
                    "created_at": chrono::Utc::now().to_rfc3339(),
                }))
                .execute()
                .await?
        }
        Command::List => client.from(&cli.table).execute().await?,
        Command::Update { id, name } => {
            client
                .from(&cli.table)
                .update(json!({ "name": name }))
                .eq("id", id)
                .execute()
                .await?
        }
        Command::Delete { id } => {
            client.from(&cli.table).delete().eq("id", id).execute().await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
