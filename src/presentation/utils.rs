use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use std::future::{Ready, ready};

/// Identity placed in request extensions by the admin middleware once
/// Basic credentials verify. Handlers take it as an argument so every
/// moderation operation states the capability it needs.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AdminUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(ErrorUnauthorized("missing admin identity"))),
        }
    }
}
