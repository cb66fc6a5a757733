//! Nutrition Tracker web API server.

use std::net::SocketAddr;

use clap::Parser;

use nutrition_tracker::cli::StoreArgs;
use nutrition_tracker::logging;
use nutrition_tracker::state::{IngredientCatalog, MealHistoryLog};
use nutrition_tracker::web::{AppState, create_app};

#[derive(Parser, Debug)]
#[command(name = "nutrition-server")]
#[command(author, version, about = "Serve the Nutrition Tracker web API", long_about = None)]
struct ServerArgs {
    #[command(flatten)]
    stores: StoreArgs,

    /// Address to listen on.
    #[arg(long, env = "NUTRITION_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("nutrition_tracker=info,nutrition_server=info,tower_http=info");

    let args = ServerArgs::parse();

    tracing::info!("Starting Nutrition Tracker server");
    let catalog = IngredientCatalog::load(&args.stores.ingredients);
    let history = MealHistoryLog::load(&args.stores.history);
    tracing::info!(
        ingredients = catalog.len(),
        meals = history.len(),
        "stores loaded"
    );

    let app = create_app(AppState::new(catalog, history));

    tracing::info!("Listening on {}", args.bind);
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
