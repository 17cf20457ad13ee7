use clap::Parser;
use quizfunnel::{db::Db, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL. The file is created when missing.
    #[arg(long, env, default_value = "sqlite://quizfunnel.db")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Do not insert the demo quizzes into an empty database.
    #[arg(long, env)]
    skip_seed: bool,

    /// Size of the database connection pool.
    #[arg(long, env, default_value_t = quizfunnel::db::DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower_http=debug,quizfunnel=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::with_max_connections(&args.database_url, args.max_connections).await?;
    if !args.skip_seed {
        db.ensure_seed_data().await?;
    }

    let app = quizfunnel::router(AppState::new(db));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
