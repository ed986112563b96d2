use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, SuccessDto},
    server::{error::Error, model::session::principal::SessionPrincipal},
};

pub static AUTH_TAG: &str = "auth";

/// Logs the user out by clearing their provider session
///
/// # Responses
/// - 200 (OK): Logged out, also returned when there was nothing to clear
/// - 500 (Internal Server Error): There was an issue reading or clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails with the redis store
    if SessionPrincipal::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            success: true,
            message: "Logged out".to_string(),
        }),
    ))
}

/// Development sign-in, compiled into debug builds or with the `dev-auth` feature
#[cfg(any(debug_assertions, feature = "dev-auth"))]
pub mod dev {
    use axum::{
        extract::{rejection::JsonRejection, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    };
    use axum_extra::extract::CookieJar;

    use crate::{
        model::{
            api::{ErrorDto, SuccessDto},
            auth::{AuthUserDto, DevSignInDto, DevSignInResponseDto},
        },
        server::{
            controller::util::json_body,
            error::{auth::AuthError, Error},
            identity::{
                dev_cookie::{removal_cookie, DevSession, DevSessionUser},
                Principal,
            },
            model::app::AppState,
            service::user::UserService,
        },
    };

    use super::AUTH_TAG;

    /// Signs in as any email without a password (development builds only)
    ///
    /// Finds or creates the user and stores it in the `dev-session` cookie.
    ///
    /// # Responses
    /// - 200 (OK): Signed in, cookie set
    /// - 400 (Bad Request): Missing email or malformed body
    /// - 500 (Internal Server Error): Database error
    #[utoipa::path(
        post,
        path = "/api/auth/dev-signin",
        tag = AUTH_TAG,
        request_body = DevSignInDto,
        responses(
            (status = 200, description = "Signed in", body = DevSignInResponseDto),
            (status = 400, description = "Email is required", body = ErrorDto),
            (status = 500, description = "Internal server error", body = ErrorDto)
        ),
    )]
    pub async fn dev_signin(
        State(state): State<AppState>,
        jar: CookieJar,
        body: Result<Json<DevSignInDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, Error> {
        let body = json_body(body)?;

        let email = body
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or(AuthError::EmailRequired)?;
        let principal = Principal {
            email,
            name: body.name.filter(|n| !n.trim().is_empty()),
        };

        let user_service = UserService::new(&state.db);
        let user = user_service.get_or_create_by_principal(&principal).await?;
        let has_completed_onboarding = user_service.has_completed_onboarding(user.id).await?;

        let session = DevSession {
            user: DevSessionUser {
                id: user.id,
                email: user.email.clone(),
                name: user.display_name.clone(),
            },
        };
        let jar = jar.add(session.cookie()?);

        tracing::debug!(user_id = %user.id, "Development sign-in");

        Ok((
            StatusCode::OK,
            jar,
            Json(DevSignInResponseDto {
                success: true,
                user: AuthUserDto {
                    id: user.id,
                    email: user.email,
                    name: user.display_name,
                },
                has_completed_onboarding,
            }),
        ))
    }

    /// Clears the development sign-in cookie
    #[utoipa::path(
        post,
        path = "/api/auth/dev-signout",
        tag = AUTH_TAG,
        responses(
            (status = 200, description = "Signed out", body = SuccessDto)
        ),
    )]
    pub async fn dev_signout(jar: CookieJar) -> impl IntoResponse {
        (
            StatusCode::OK,
            jar.remove(removal_cookie()),
            Json(SuccessDto {
                success: true,
                message: "Signed out".to_string(),
            }),
        )
    }
}
