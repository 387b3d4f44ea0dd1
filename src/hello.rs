//! Platform health-check endpoint: any method, any path, `Hello World!`.

use axum::Router;
use tokio::net::TcpListener;

pub fn app() -> Router {
    // The fallback catches every method and path, including `/`.
    Router::new().fallback(hello)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> &'static str {
    "Hello World!"
}
