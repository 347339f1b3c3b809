use env_logger::{Builder, Env};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("countries mock listening on http://{addr}/rest/v1");
    countries_mock_server::run(listener).await
}
