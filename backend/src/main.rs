mod config;
mod services;

use crate::config::Config;
use crate::services::upstream::Upstream;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded single-page app. Unknown paths get `index.html` so
/// client-side routes survive a reload.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("ignoring unreadable .env file: {}", err);
        }
    }
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|err| {
        error!("invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;
    let upstream = Upstream::new(config.backend_url.clone(), config.upstream_timeout)
        .map_err(|err| io::Error::other(format!("cannot build HTTP client: {}", err)))?;
    let upstream = web::Data::new(upstream);
    let url = config.public_url();

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("frontend bundle not embedded; run `trunk build` in frontend/ and rebuild");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open browser: {}", err);
            }
        });
    }

    info!("Proxying document service at {}", config.backend_url);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(upstream.clone())
            .service(services::templates::configure_routes())
            .service(services::generator::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
