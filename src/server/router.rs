//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/logout` - Clear the provider session
/// - `POST /api/auth/dev-signin`, `POST /api/auth/dev-signout` - Development sign-in (debug
///   builds or the `dev-auth` feature)
/// - `GET|PUT /api/users/me` - Profile
/// - `GET|POST /api/user/preferences` - Onboarding preferences
/// - `GET|POST /api/leagues` - Caller's leagues, create league
/// - `GET /api/leagues/public` - Browse public leagues
/// - `GET /api/leagues/{league_id}/details` - League details for members
/// - `POST /api/leagues/{league_id}/join` - Join a league
/// - `POST /api/leagues/{league_id}/start-draft` - Start the draft
/// - `GET|POST /api/leagues/{league_id}/invite` - Invitation summary, send invitation
/// - `GET /api/news`, `GET /api/news/personalized` - News feed
/// - `GET /api/players` - Player browser
/// - `GET /api/teams` - Reference leagues and clubs
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, news, identity };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Matchday", description = "Matchday fantasy football API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User profile API routes"),
        (name = controller::preferences::PREFERENCES_TAG, description = "Onboarding preferences API routes"),
        (name = controller::league::LEAGUE_TAG, description = "League lifecycle API routes"),
        (name = controller::news::NEWS_TAG, description = "News feed API routes"),
        (name = controller::player::PLAYER_TAG, description = "Player browser API routes"),
        (name = controller::team::TEAM_TAG, description = "Reference team API routes"),
    ))]
    struct ApiDoc;

    let router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::user::get_me, controller::user::update_me))
        .routes(routes!(
            controller::preferences::get_preferences,
            controller::preferences::save_preferences
        ))
        .routes(routes!(
            controller::league::list_my_leagues,
            controller::league::create_league
        ))
        .routes(routes!(controller::league::list_public_leagues))
        .routes(routes!(controller::league::get_league_details))
        .routes(routes!(controller::league::join_league))
        .routes(routes!(controller::league::start_draft))
        .routes(routes!(
            controller::league::get_invite_details,
            controller::league::invite
        ))
        .routes(routes!(controller::news::list_news))
        .routes(routes!(controller::news::personalized_news))
        .routes(routes!(controller::player::list_players))
        .routes(routes!(controller::team::list_teams));

    #[cfg(any(debug_assertions, feature = "dev-auth"))]
    let router = router
        .routes(routes!(controller::auth::dev::dev_signin))
        .routes(routes!(controller::auth::dev::dev_signout));

    let (routes, api) = router.split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
