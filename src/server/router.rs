//! Route composition and API documentation.
//!
//! Feature routers are merged in declaration order. Protected routers carry their auth
//! middleware as a route layer so it only runs for requests that matched one of their
//! routes; everything unmatched falls through to the 404 view, including a known path
//! requested with a method it does not serve.

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        news::{NewsArticleDto, NewsCategory, NewsPageDto, NewsSourceDto},
        theme::{Theme, ThemeUpdatedDto, UpdateThemeDto},
    },
    server::{
        controller::{auth, dashboard, donate, error, home, news, settings, weight},
        middleware::auth::{load_current_user, require_api_user, require_web_user},
        state::AppState,
    },
};

/// Adds the session cookie security scheme to the generated document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "id",
                "Session cookie issued after login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Weight Loss Watch API",
        description = "JSON endpoints used by the Weight Loss Watch pages."
    ),
    security(("SessionCookie" = [])),
    paths(news::get_news, settings::update_theme, weight::delete_photo),
    components(schemas(
        ErrorDto,
        SuccessDto,
        NewsArticleDto,
        NewsCategory,
        NewsPageDto,
        NewsSourceDto,
        Theme,
        ThemeUpdatedDto,
        UpdateThemeDto
    )),
    tags(
        (name = "news", description = "Fitness and nutrition news"),
        (name = "settings", description = "Account preferences"),
        (name = "weight", description = "Weight tracking and progress photos")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// The session layer is applied by the caller so tests can supply their own store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(home_routes())
        .merge(auth_routes())
        .merge(donate_routes())
        .merge(news_routes())
        .merge(dashboard_routes(&state))
        .merge(settings_routes(&state))
        .merge(weight_routes(&state))
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::not_found)
        .layer(from_fn_with_state(state.clone(), load_current_user))
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home::index))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login))
        .route("/logout", post(auth::logout))
}

fn donate_routes() -> Router<AppState> {
    Router::new()
        .route("/donate", get(donate::index))
        .route("/donate/thank-you", get(donate::thank_you))
}

fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(news::index))
        .route("/api/news", get(news::get_news))
}

fn dashboard_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::index))
        .route_layer(from_fn_with_state(state.clone(), require_web_user))
}

fn settings_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/settings/theme", post(settings::update_theme))
        .route_layer(from_fn_with_state(state.clone(), require_api_user))
}

fn weight_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/photo/{photo_id}", delete(weight::delete_photo))
        .route_layer(from_fn_with_state(state.clone(), require_web_user))
}
