use serde::Serialize;

/// Parameters of `user.login`.
#[derive(Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
