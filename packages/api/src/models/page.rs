use serde::{Deserialize, Serialize};

use super::UserRecord;

/// One page of the user list plus the pagination metadata the server computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_users: u64,
}
