//! Todo Server - REST API over the todo list

use clap::Parser;
use todo_server::{connect_database, init_logging, logging::default_level, serve, Cli};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    init_logging(default_level(cli.verbose), cli.log_format)?;

    let database = match connect_database(&config).await {
        Ok(database) => database,
        Err(e) => {
            error!("DB Error: {}", e);
            std::process::exit(1);
        }
    };

    serve(&config, database).await
}
