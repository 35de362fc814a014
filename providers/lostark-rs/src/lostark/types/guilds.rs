use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Guild ranking entry for one server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildRanking {
    pub rank: i64,
    pub guild_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guild_message: String,
    pub master_name: String,
    pub rating: i64,
    pub member_count: i64,
    pub max_member_count: i64,
    pub updated_date: Option<NaiveDateTime>,
}
