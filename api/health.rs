use puzzle_solutions::models::problem::Problem;
use puzzle_solutions::version;
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    run(handler).await
}

/// GET /api/health — Liveness check listing the problems served.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let problems: Vec<_> = Problem::ALL
        .iter()
        .map(|p| json!({ "number": p.number(), "slug": p.slug(), "title": p.title() }))
        .collect();
    let payload = json!({
        "status": "ok",
        "version": version(),
        "problems": problems,
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
