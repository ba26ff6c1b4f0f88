mod cors;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    HttpServer::new(move || {
        let jwt_secret = config_data.jwt_config.secret.clone();
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(logger::middleware())
            .wrap(cors::middleware(&origin))
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(api_billing::mount_public())
                    .service(api_reviews::mount_public())
                    .service(api_profiles::mount_directory())
                    .service(api_contact::mount_contact())
                    .service(
                        web::scope("/dashboard")
                            .wrap(api_auth::auth_middleware(&jwt_secret))
                            .service(api_billing::mount_billing())
                            .service(api_profiles::mount_vendor())
                            .service(api_profiles::mount_couple())
                            .service(api_profiles::mount_onboarding())
                            .service(api_profiles::mount_notifications())
                            .service(api_reviews::mount_dashboard())
                            .service(api_planner::mount_saved_vendors())
                            .service(api_planner::mount_seating())
                            .service(api_auth::mount_user()),
                    ),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
