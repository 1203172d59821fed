//! Public routes (no authentication required).

use actix_web::{HttpResponse, Responder};

/// Catch-all greeting, registered for every path not claimed by another route.
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Hello World")
}
