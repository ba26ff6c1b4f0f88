use actix_web::web::{self};

pub mod routes {
    pub mod activity;
    pub mod directory;
    pub mod notification;
    pub mod onboarding;
    pub mod package;
    pub mod profile;
}

pub mod services {
    pub mod onboarding;
}

mod dtos {
    pub(crate) mod activity;
    pub(crate) mod directory;
    pub(crate) mod notification;
    pub(crate) mod onboarding;
    pub(crate) mod package;
    pub(crate) mod profile;
}

pub fn mount_vendor() -> actix_web::Scope {
    web::scope("/vendor")
        .service(routes::profile::get_vendor_profile)
        .service(routes::profile::put_vendor_profile)
        .service(routes::package::get_packages)
        .service(routes::package::post_package)
        .service(routes::package::put_package_order)
        .service(routes::package::put_package)
        .service(routes::package::delete_package)
        .service(routes::activity::post_activity)
        .service(routes::activity::get_metrics)
}

pub fn mount_couple() -> actix_web::Scope {
    web::scope("/couple")
        .service(routes::profile::get_couple_profile)
        .service(routes::profile::put_couple_profile)
}

pub fn mount_onboarding() -> actix_web::Scope {
    web::scope("/onboarding")
        .service(routes::onboarding::get_draft)
        .service(routes::onboarding::put_draft)
        .service(routes::onboarding::post_complete)
}

pub fn mount_notifications() -> actix_web::Scope {
    web::scope("/notifications")
        .service(routes::notification::get_preferences)
        .service(routes::notification::put_preferences)
}

/// Public, unauthenticated vendor directory.
pub fn mount_directory() -> actix_web::Scope {
    web::scope("/vendors")
        .service(routes::directory::get_vendors)
        .service(routes::directory::get_vendor)
}
