use serde::Deserialize;

/// `user.login` answers with the bare session id as `result`.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct LoginResponse {
    pub session_id: String,
}
