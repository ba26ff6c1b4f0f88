use actix_web::web::{self};

pub mod routes {
    pub mod contact;
}

pub mod services {
    pub mod relay;
}

mod dtos {
    pub(crate) mod contact;
}

pub fn mount_contact() -> actix_web::Scope {
    web::scope("/contact").service(routes::contact::post_contact)
}
