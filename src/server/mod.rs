use crate::api::*;
use crate::config::Config;
use crate::database::DbPool;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{catchers, options, routes, Build, Request, Response, Rocket};

pub mod routes;

pub struct ServerState {
    pub config: Config,
    pub db_pool: DbPool,
}

/// Permissive CORS: the site frontend may be served from anywhere, so every
/// origin, method and header is allowed. Deliberate openness, not a security
/// boundary.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Permissive CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "*"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

// Preflight requests match here so the CORS fairing can attach its headers.
#[options("/<_..>")]
pub fn all_options() {}

pub fn build_rocket(config: Config, db_pool: DbPool) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", config.server.port))
        .merge(("address", "0.0.0.0"));

    let state = ServerState { config, db_pool };

    rocket::custom(figment)
        .attach(Cors)
        .manage(state)
        .register("/", catchers![malformed_request, unprocessable_request])
        .mount(
            "/",
            routes![routes::health::index, all_options, health_check],
        )
        .mount("/api", routes![company_info, list_products, create_lead])
}
