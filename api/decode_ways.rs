use puzzle_solutions::models::problem::DecodeWaysRequest;
use puzzle_solutions::solutions::{answer_decode, parse_request};
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

/// POST /api/decode_ways — Number of letter decodings of a digit string.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        let error = json!({
            "error": "Method not allowed",
            "message": "Use POST with a JSON body {\"digits\": ...}"
        });
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "application/json")
            .body(Body::Text(error.to_string()))?);
    }

    let body: &[u8] = req.body();
    let result = parse_request::<DecodeWaysRequest>(body).and_then(|r| answer_decode(&r));

    match result {
        Ok(response) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(Body::Text(serde_json::to_string(&response)?))?),
        Err(err) => bad_request(&err),
    }
}

fn bad_request(err: &PuzzleError) -> Result<Response<Body>, Error> {
    tracing::warn!(kind = err.kind(), "rejected decode_ways request: {err}");
    let error = json!({
        "error": err.kind(),
        "message": err.to_string(),
    });
    Ok(Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "application/json")
        .body(Body::Text(error.to_string()))?)
}
