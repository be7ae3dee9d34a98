use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ong_portal::config::Config;
use ong_portal::error::AppError;
use ong_portal::routes::create_routes;
use ong_portal::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Create the schema, default settings and upload directories, then exit
    InitDb,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ong_portal=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let state = AppState::initialize(config).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::InitDb => {
            tracing::info!("database initialized");
            Ok(())
        }
        Command::Serve => {
            let addr = format!("{}:{}", state.config.host, state.config.port);
            let app = create_routes(state);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on {}", listener.local_addr()?);
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
