mod catalog;
mod config;
mod errors;
mod listing;
mod model;
mod panel;
mod views;

use actix_web::{error, middleware::Logger, web, App, HttpResponse, HttpServer};
use catalog::{ApiCatalog, Catalog};
use config::Settings;
use listing::Listing;
use log::{debug, info, warn};
use panel::{FormParams, Panel};
use std::io;
use views::{render_details, Page};

type Tera = web::Data<tera::Tera>;
type Query = web::Query<Vec<(String, String)>>;

fn log_error<E: std::fmt::Debug>(err: E, message: &'static str) -> error::Error {
    debug!("{:?}", err);
    error::ErrorInternalServerError(message)
}

fn render(tera: &tera::Tera, page: &Page) -> actix_web::Result<HttpResponse> {
    let body = page
        .render(tera)
        .map_err(|err| log_error(err, "Template error"))?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

async fn index(query: Query, tera: Tera) -> actix_web::Result<HttpResponse> {
    let params = FormParams::from(query.into_inner());
    let active = Panel::from_slug(params.get("tab")).unwrap_or(Panel::Search);
    let form = FormParams::default();
    render(&tera, &Page::new(active, &form, Listing::Idle))
}

async fn panel_page<C: Catalog + 'static>(
    slug: web::Path<String>,
    query: Query,
    tera: Tera,
    catalog: web::Data<C>,
) -> actix_web::Result<HttpResponse> {
    let panel = Panel::from_slug(&slug).ok_or_else(|| error::ErrorNotFound("No such panel"))?;
    let form = FormParams::from(query.into_inner());
    let listing = listing::fetch_listing(catalog.get_ref(), panel, &form).await;
    render(&tera, &Page::new(panel, &form, listing))
}

async fn movie_details<C: Catalog + 'static>(
    movie_id: web::Path<u64>,
    tera: Tera,
    catalog: web::Data<C>,
) -> actix_web::Result<HttpResponse> {
    let details = listing::fetch_details(catalog.get_ref(), movie_id.into_inner()).await;
    let body =
        render_details(&tera, &details).map_err(|err| log_error(err, "Template error"))?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

async fn review_graph<C: Catalog + 'static>(
    movie_id: web::Path<u64>,
    catalog: web::Data<C>,
) -> actix_web::Result<HttpResponse> {
    let movie_id = movie_id.into_inner();
    let graph = catalog.review_graph(movie_id).await.map_err(|err| {
        warn!("review graph for movie {} failed: {}", movie_id, err);
        error::ErrorBadGateway("Review graph unavailable")
    })?;
    Ok(HttpResponse::Ok()
        .content_type(graph.content_type)
        .body(graph.bytes))
}

fn routes<C: Catalog + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/movies/{id}/details", web::get().to(movie_details::<C>))
        .route("/movies/{id}/review-graph", web::get().to(review_graph::<C>))
        .route("/{panel}", web::get().to(panel_page::<C>));
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("reelfinder=debug,actix_web=info"),
    )
    .init();

    let settings =
        Settings::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let tera = tera::Tera::new(&settings.templates)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    let catalog =
        ApiCatalog::new(settings.api_url.clone(), settings.timeout).map_err(io::Error::other)?;

    info!(
        "serving on {} against catalog {}",
        settings.bind, settings.api_url
    );
    let tera = web::Data::new(tera);
    let catalog = web::Data::new(catalog);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(tera.clone())
            .app_data(catalog.clone())
            .configure(routes::<ApiCatalog>)
    })
    .bind(settings.bind.as_str())?
    .run()
    .await
}
