//! Auction house search options, requests and listings

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{null_as_default, Category, SortCondition};

/// Search options accepted by `/auctions/items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuctionOption {
    pub max_item_level: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_grade_qualities: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_options: Vec<SkillOption>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub etc_options: Vec<EtcOption>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_grades: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_tiers: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillOption {
    pub value: i64,
    #[serde(rename = "Class")]
    pub character_class: String,
    pub text: String,
    pub is_skill_group: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tripods: Vec<Tripod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tripod {
    pub value: i64,
    pub text: String,
    pub is_gem: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EtcOption {
    pub value: i64,
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub etc_subs: Vec<EtcSub>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EtcSub {
    pub value: i64,
    pub text: String,
    #[serde(rename = "Class")]
    pub character_class: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionSort {
    #[default]
    BidstartPrice,
    BuyPrice,
    Expiredate,
    ItemGrade,
    ItemLevel,
    ItemQuality,
}

/// Body of a `/auctions/items` search; unset filters are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestAuctionItems {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_level_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_level_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_grade_quality: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skill_options: Vec<SearchDetailOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub etc_options: Vec<SearchDetailOption>,
    pub sort: AuctionSort,
    pub category_code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_tier: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    pub page_no: i64,
    pub sort_condition: SortCondition,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchDetailOption {
    pub first_option: i64,
    pub second_option: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

/// One page of auction search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Auction {
    pub page_no: i64,
    pub page_size: i64,
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<AuctionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuctionItem {
    pub name: String,
    pub grade: String,
    pub tier: i64,
    pub level: Option<i64>,
    pub icon: String,
    pub grade_quality: Option<i64>,
    pub auction_info: AuctionInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<ItemOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuctionInfo {
    pub start_price: i64,
    pub buy_price: Option<i64>,
    pub bid_price: i64,
    pub end_date: NaiveDateTime,
    pub bid_count: i64,
    pub bid_start_price: i64,
    pub is_competitive: bool,
    pub trade_allow_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemOptionType {
    None,
    #[serde(rename = "SKILL")]
    Skill,
    #[serde(rename = "STAT")]
    Stat,
    #[serde(rename = "ABILITY_ENGRAVE")]
    AbilityEngrave,
    #[serde(rename = "BRACELET_SPECIAL_EFFECTS")]
    BraceletSpecialEffects,
    #[serde(rename = "GEM_SKILL_COOLDOWN_REDUCTION")]
    GemSkillCooldownReduction,
    #[serde(rename = "GEM_SKILL_COOLDOWN_REDUCTION_IDENTITY")]
    GemSkillCooldownReductionIdentity,
    #[serde(rename = "GEM_SKILL_DAMAGE")]
    GemSkillDamage,
    #[serde(rename = "GEM_SKILL_DAMAGE_IDENTITY")]
    GemSkillDamageIdentity,
    #[serde(rename = "BRACELET_RANDOM_SLOT")]
    BraceletRandomSlot,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemOption {
    #[serde(rename = "Type")]
    pub kind: ItemOptionType,
    pub option_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub option_name_tripod: String,
    pub value: f64,
    pub is_penalty: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_name: String,
}
