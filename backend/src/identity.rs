use rocket::http::{Cookie, SameSite};
use rocket::request::{FromRequest, Outcome};
use rocket::time::Duration;
use rocket::Request;
use shared::validation::is_valid_identity_token;
use tracing::debug;
use uuid::Uuid;
use crate::config::AppConfig;

pub const USER_ID_COOKIE: &str = "userId";
pub const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Anonymous per-browser identity carried in the `userId` cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub is_new: bool,
}

pub fn identity_cookie(user_id: String, secure: bool) -> Cookie<'static> {
    Cookie::build((USER_ID_COOKIE, user_id))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(COOKIE_MAX_AGE_DAYS))
        .build()
}

fn resolve(req: &Request<'_>) -> Identity {
    let jar = req.cookies();
    if let Some(user_id) = jar
        .get(USER_ID_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| is_valid_identity_token(v))
    {
        return Identity { user_id, is_new: false };
    }

    let secure = req
        .rocket()
        .state::<AppConfig>()
        .map(|config| config.secure_cookies)
        .unwrap_or(true);

    let user_id = Uuid::new_v4().to_string();
    jar.add(identity_cookie(user_id.clone(), secure));
    debug!("Issued new identity cookie");

    Identity { user_id, is_new: true }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Identity {
    type Error = std::convert::Infallible;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        // Cached so a second guard in the same request cannot mint another token.
        Outcome::Success(req.local_cache(|| resolve(req)).clone())
    }
}
