use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use subway_server::service::Subway;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Bind address from the environment, with a local default
    let addr: SocketAddr = std::env::var("SUBWAY_ADDR")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    let state = AppState::new(Subway::new());
    let app = create_router(state);

    println!("Subway network service listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health           - Health check");
    println!("  POST   /lines            - Create a line");
    println!("  GET    /lines            - List lines");
    println!("  GET    /lines/{{id}}       - Find a line by id");
    println!("  POST   /line/stations    - Insert a station into a line");
    println!("  DELETE /line/stations    - Remove a station from a line");
    println!("  GET    /routes/shortest  - Shortest route with fare");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
