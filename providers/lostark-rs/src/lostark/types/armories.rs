//! Armory records: per-character profile, gear, skills and collections

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Summary of a character's basic stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmoryProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub character_image: String,
    pub expedition_level: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pvp_grade_name: String,
    pub town_level: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub town_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guild_member_grade: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guild_name: String,
    pub using_skill_point: i64,
    pub total_skill_point: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<Stat>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tendencies: Vec<Tendency>,
    pub server_name: String,
    pub character_name: String,
    pub character_level: i64,
    pub character_class_name: String,
    pub item_avg_level: String,
    pub item_max_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stat {
    #[serde(rename = "Type")]
    pub kind: String,
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tendency {
    #[serde(rename = "Type")]
    pub kind: String,
    pub point: i64,
    pub max_point: i64,
}

/// One equipped item; `tooltip` is the raw JSON tooltip document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmoryEquipment {
    #[serde(rename = "Type")]
    pub kind: String,
    pub name: String,
    pub icon: String,
    pub grade: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmoryAvatar {
    #[serde(rename = "Type")]
    pub kind: String,
    pub name: String,
    pub icon: String,
    pub grade: String,
    pub is_set: bool,
    pub is_inner: bool,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmorySkill {
    pub name: String,
    pub icon: String,
    pub level: i64,
    #[serde(rename = "Type")]
    pub kind: String,
    pub is_awakening: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tripods: Vec<SkillTripod>,
    pub rune: Option<SkillRune>,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillTripod {
    pub tier: i64,
    pub slot: i64,
    pub name: String,
    pub icon: String,
    pub level: i64,
    pub is_selected: bool,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillRune {
    pub name: String,
    pub icon: String,
    pub grade: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmoryEngraving {
    #[serde(default, deserialize_with = "null_as_default")]
    pub engravings: Vec<Engraving>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Engraving {
    pub slot: i64,
    pub name: String,
    pub icon: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Effect {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmoryCard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards: Vec<Card>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub effects: Vec<CardEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Card {
    pub slot: i64,
    pub name: String,
    pub icon: String,
    pub awake_count: i64,
    pub awake_total: i64,
    pub grade: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CardEffect {
    pub index: i64,
    pub card_slots: Vec<i64>,
    pub items: Vec<Effect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmoryGem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub gems: Vec<Gem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub effects: Vec<GemEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gem {
    pub slot: i64,
    pub name: String,
    pub icon: String,
    pub level: i64,
    pub grade: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GemEffect {
    pub gem_slot: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tooltip: String,
}

/// Proving grounds (PvP) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColosseumInfo {
    pub rank: i64,
    pub pre_rank: i64,
    pub exp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub colosseums: Vec<Colosseum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Colosseum {
    pub season_name: String,
    pub competitive: Option<AggregationTeamDeathMatchRank>,
    pub team_death_match: Option<Aggregation>,
    pub death_match: Option<Aggregation>,
    pub team_elimination: Option<AggregationElimination>,
    pub co_op_battle: Option<Aggregation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregationTeamDeathMatchRank {
    pub rank: i64,
    pub rank_name: String,
    pub rank_icon: String,
    pub rank_last_mmr: i64,
    pub play_count: i64,
    pub victory_count: i64,
    pub lose_count: i64,
    pub tie_count: i64,
    pub kill_count: i64,
    pub ace_count: i64,
    pub death_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Aggregation {
    pub play_count: i64,
    pub victory_count: i64,
    pub lose_count: i64,
    pub tie_count: i64,
    pub kill_count: i64,
    pub ace_count: i64,
    pub death_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregationElimination {
    pub first_win_count: i64,
    pub second_win_count: i64,
    pub third_win_count: i64,
    pub first_play_count: i64,
    pub second_play_count: i64,
    pub third_play_count: i64,
    pub all_kill_count: i64,
    pub play_count: i64,
    pub victory_count: i64,
    pub lose_count: i64,
    pub tie_count: i64,
    pub kill_count: i64,
    pub ace_count: i64,
    pub death_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Collectible {
    #[serde(rename = "Type")]
    pub kind: String,
    pub icon: String,
    pub point: i64,
    pub max_point: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collectible_points: Vec<CollectiblePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectiblePoint {
    pub point_name: String,
    pub point: i64,
    pub max_point: i64,
}
