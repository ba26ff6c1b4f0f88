use actix_web::web::{self};

pub mod routes {
    pub mod saved;
    pub mod seating;
}

mod dtos {
    pub(crate) mod planner;
}

pub fn mount_saved_vendors() -> actix_web::Scope {
    web::scope("/saved-vendors")
        .service(routes::saved::get_saved_vendors)
        .service(routes::saved::post_saved_vendor)
        .service(routes::saved::delete_saved_vendor)
}

pub fn mount_seating() -> actix_web::Scope {
    web::scope("/seating")
        .service(routes::seating::get_layouts)
        .service(routes::seating::post_layout)
        .service(routes::seating::put_layout)
        .service(routes::seating::delete_layout)
}
