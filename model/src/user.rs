use serde::{Deserialize, Serialize};

/// Used to store information about the caller of a request.
/// The gateway verifies the bearer token before the request reaches us; the
/// `user_id` here is the verified subject claim from that token.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct UserContext {
    /// The identity provider subject of the user
    pub user_id: String,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            user_id: "".to_string(),
        }
    }
}
