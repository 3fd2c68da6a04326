//! HTTP transport
//!
//! Builds the Rocket application: shared [`AppContext`] state, API routes
//! and permissive CORS. Browser preflight requests under `/api` are
//! answered with `204 No Content`.

use crate::constants::API_BASE_PATH;
use crate::handlers::process_text::process_text;
use crate::handlers::redis_check;
use rcc_infrastructure::config::ServerConfig;
use rcc_infrastructure::di::AppContext;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{Build, Request, Response, Rocket, options, routes};
use tracing::info;

/// Build the Rocket application around a wired context
pub fn rocket(context: AppContext) -> Rocket<Build> {
    rocket::build()
        .manage(context)
        .mount(API_BASE_PATH, routes![redis_check, process_text, preflight])
        .attach(Cors)
}

/// Serve until Rocket shuts down (Ctrl+C)
pub async fn serve(context: AppContext, server: &ServerConfig) -> Result<(), rocket::Error> {
    info!(host = %server.host, port = server.port, "HTTP server listening");

    let figment = rocket::Config::figment()
        .merge(("address", server.host.clone()))
        .merge(("port", server.port));

    rocket(context).configure(figment).launch().await?;
    Ok(())
}

#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}

/// Allows any origin on every response, errors included
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Permissive CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}
