//! Request authentication.
//!
//! [`load_current_user`] runs on every request and attaches a [`CurrentUser`] so pages can
//! show layout state for anonymous and logged-in visitors alike. Protected routes add
//! [`require_api_user`] or [`require_web_user`] as a route layer; both attach an
//! [`AuthUser`] and never let the handler run without one.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    state::AppState,
};

/// Path unauthenticated page requests are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Authenticated user attached to the request by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// User of the current request, if logged in.
///
/// Populated by [`load_current_user`]; extracts as `CurrentUser(None)` when the loader
/// did not run for the request.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<User>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default())
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user that still exists in the database.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(AuthError::UserNotInSession))` - Nobody is logged in
    /// - `Err(AppError::AuthErr(AuthError::UserNotInDatabase))` - Session refers to a deleted user
    /// - `Err(AppError::SessionErr | AppError::DbErr)` - Session or database failure
    pub async fn require(&self) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Gets the logged-in user if there is one.
    ///
    /// A session pointing at a deleted user counts as anonymous.
    pub async fn current(&self) -> Result<Option<User>, AppError> {
        match self.require().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(AuthError::UserNotInSession)) => Ok(None),
            Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
                tracing::debug!(user_id, "Session refers to a user that no longer exists");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Attaches [`CurrentUser`] to every request.
pub async fn load_current_user(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).current().await?;
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Guards JSON endpoints; unauthenticated requests get a 401 JSON error.
pub async fn require_api_user(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cached = cached_user(&request);
    let user = authenticate(&state, &session, cached).await?;
    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

/// Guards page and form endpoints; unauthenticated requests are redirected to the login page.
pub async fn require_web_user(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let cached = cached_user(&request);
    match authenticate(&state, &session, cached).await {
        Ok(user) => {
            request.extensions_mut().insert(AuthUser(user));
            next.run(request).await
        }
        Err(AppError::AuthErr(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {
            Redirect::to(LOGIN_PATH).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// User already loaded by [`load_current_user`] for this request.
fn cached_user(request: &Request) -> Option<User> {
    request
        .extensions()
        .get::<CurrentUser>()
        .and_then(|current| current.0.clone())
}

async fn authenticate(
    state: &AppState,
    session: &Session,
    cached: Option<User>,
) -> Result<User, AppError> {
    match cached {
        Some(user) => Ok(user),
        None => AuthGuard::new(&state.db, session).require().await,
    }
}
