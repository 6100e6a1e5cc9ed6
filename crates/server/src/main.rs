//! churn-server binary: load the model, bind, serve.

use std::env;
use std::net::SocketAddr;

use churn_model::ChurnModel;
use churn_server::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churn_server=info,tower_http=info".into()),
        )
        .init();

    // The model file is required; refuse to start without it.
    let model_path =
        env::var("MODEL_PATH").unwrap_or_else(|_| "models/churn_full.json".to_string());
    let model = match ChurnModel::load(&model_path) {
        Ok(model) => model,
        Err(err) => {
            tracing::error!("Cannot start, model artifact unusable: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded churn model from {} ({} features, threshold {})",
        model_path,
        model.num_features(),
        model.threshold()
    );

    let app = app(model);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "churn-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
