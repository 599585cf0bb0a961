use crate::api::models::ApiError;
use crate::auth::jwt::{JwtService, Role};
use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::header;
use std::sync::Arc;

async fn require_role(jwt: &JwtService, role: Role, mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let authorization = req.headers().get(header::AUTHORIZATION).and_then(|h| h.to_str().ok());
    let claims = jwt.authorize(authorization, role)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Route layer for admin-only endpoints.
pub async fn require_admin(
    State(jwt): State<Arc<JwtService>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(&jwt, Role::Admin, req, next).await
}
