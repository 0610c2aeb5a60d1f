use puzzle_solutions::models::problem::GcdOfStringsRequest;
use puzzle_solutions::solutions::{answer_gcd, parse_request};
use puzzle_solutions::PuzzleError;
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    run(handler).await
}

/// POST /api/gcd_of_strings — Longest string tiling both `a` and `b`.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        let error = json!({
            "error": "Method not allowed",
            "message": "Use POST with a JSON body {\"a\": ..., \"b\": ...}"
        });
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "application/json")
            .body(Body::Text(error.to_string()))?);
    }

    let body: &[u8] = req.body();
    let result = parse_request::<GcdOfStringsRequest>(body).and_then(|r| answer_gcd(&r));

    match result {
        Ok(response) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(Body::Text(serde_json::to_string(&response)?))?),
        Err(err) => bad_request(&err),
    }
}

fn bad_request(err: &PuzzleError) -> Result<Response<Body>, Error> {
    tracing::warn!(kind = err.kind(), "rejected gcd_of_strings request: {err}");
    let error = json!({
        "error": err.kind(),
        "message": err.to_string(),
    });
    Ok(Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "application/json")
        .body(Body::Text(error.to_string()))?)
}
