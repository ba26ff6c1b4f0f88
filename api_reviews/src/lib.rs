use actix_web::web::{self};

pub mod routes {
    pub mod link;
    pub mod review;
}

pub mod services {
    pub mod review;
}

mod dtos {
    pub(crate) mod review;
}

/// Vendor-side link management, inside the authenticated scope.
pub fn mount_dashboard() -> actix_web::Scope {
    web::scope("/reviews")
        .service(routes::link::post_link)
        .service(routes::link::get_links)
}

/// Public review pages: token resolution, submission and the per-vendor
/// listing.
pub fn mount_public() -> actix_web::Scope {
    web::scope("/reviews")
        .service(routes::review::get_vendor_reviews)
        .service(routes::review::get_review_form)
        .service(routes::review::post_review)
}
