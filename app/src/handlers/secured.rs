//! Routes that need an authenticated user.

use actix_web::{get, HttpResponse, Responder};

use basic_auth_db_core::http::security::AuthenticatedUser;

/// Personalized greeting for the user behind the Basic credentials.
///
/// The authorizer already rejects anonymous requests to this path; the
/// extractor answers 401 on its own if that rule is ever removed.
#[get("/secured")]
pub async fn secured(user: AuthenticatedUser) -> impl Responder {
    let user = user.into_inner();
    log::debug!("Greeting {}", user);
    HttpResponse::Ok().body(format!(
        "Hello {} {}",
        user.get_first_name(),
        user.get_last_name()
    ))
}
