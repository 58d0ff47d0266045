use pfsense_assistant_api::{http::handle, logging::init_tracing, GeminiSettings};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing("info");
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let settings = GeminiSettings::from_env();
    handle(req, &settings).await
}
