use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use restaurant_service::catalog::Catalog;

mod api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("fail to setup logging");

    let catalog = web::Data::new(Catalog::builtin());

    tracing::info!("starting restaurant service on port 6000");
    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .service(api::index)
            .service(api::health)
            .service(api::restaurants)
            .service(api::menu)
    })
    .bind(("0.0.0.0", 6000))?
    .run()
    .await?;
    Ok(())
}
