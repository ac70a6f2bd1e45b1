//! Acting-principal extraction.
//!
//! Standing in for the host's authenticated session, the acting user id
//! arrives in a request header. Authorization decisions stay behind the
//! injected `EditPolicy`; this extractor only establishes identity.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use draftlock_core::policy::Principal;

use crate::error::ErrorBody;

/// Header carrying the authenticated user id.
pub const ACTING_USER_HEADER: &str = "x-acting-user";

/// Extractor for the request's authenticated principal.
#[derive(Debug, Clone, Copy)]
pub struct ActingUser(pub Principal);

/// Rejection returned when no usable principal is attached to the request.
#[derive(Debug, Clone, Copy)]
pub enum PrincipalRejection {
    /// The header is absent.
    Missing,
    /// The header is present but not a positive integer.
    Invalid,
}

impl IntoResponse for PrincipalRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Missing => format!("missing {ACTING_USER_HEADER} header"),
            Self::Invalid => format!("{ACTING_USER_HEADER} header must be a positive integer"),
        };

        let body = ErrorBody {
            error: "missing_principal",
            message,
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = PrincipalRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTING_USER_HEADER)
            .ok_or(PrincipalRejection::Missing)?;

        let id: i64 = raw
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .ok_or(PrincipalRejection::Invalid)?;

        if id <= 0 {
            return Err(PrincipalRejection::Invalid);
        }

        Ok(Self(Principal(id)))
    }
}
