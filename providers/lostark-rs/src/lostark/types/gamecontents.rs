//! Weekly challenge content and the contents calendar

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChallengeAbyssDungeon {
    pub name: String,
    pub description: String,
    pub min_character_level: i64,
    pub min_item_level: i64,
    pub area_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reward_items: Vec<RewardItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RewardItem {
    pub name: String,
    pub icon: String,
    pub grade: String,
    /// `None` means the reward is always available
    pub start_times: Option<Vec<NaiveDateTime>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChallengeGuardianRaid {
    #[serde(default, deserialize_with = "null_as_default")]
    pub raids: Vec<GuardianRaid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reward_items: Vec<LevelRewardItems>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuardianRaid {
    pub name: String,
    pub description: String,
    pub min_character_level: i64,
    pub min_item_level: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_clear_raid: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LevelRewardItems {
    pub expedition_item_level: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<RewardItem>,
}

/// One entry of the weekly contents calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentsCalendar {
    pub category_name: String,
    pub contents_name: String,
    pub contents_icon: String,
    pub min_item_level: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_times: Vec<NaiveDateTime>,
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reward_items: Vec<RewardItem>,
}
