//! Market search options, requests and listings

use serde::{Deserialize, Serialize};

use super::{null_as_default, Category, SortCondition};

/// Search options accepted by `/markets/items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketOption {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_grades: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_tiers: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub classes: Vec<String>,
}

/// Trade history of one market item, as returned by `/markets/items/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketItemStats {
    pub name: String,
    pub trade_remain_count: Option<i64>,
    pub bundle_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<MarketStatsInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketStatsInfo {
    pub date: String,
    pub avg_price: f64,
    pub trade_count: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketSort {
    #[default]
    Grade,
    YdayAvgPrice,
    RecentPrice,
    CurrentMinPrice,
}

/// Body of a `/markets/items` search; unset filters are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestMarketItems {
    pub sort: MarketSort,
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

/// One page of market search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketList {
    pub page_no: i64,
    pub page_size: i64,
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<MarketItem>,
}

/// Prices are gold per bundle; yesterday's average may be fractional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketItem {
    pub id: i64,
    pub name: String,
    pub grade: String,
    pub icon: String,
    pub bundle_count: i64,
    pub trade_remain_count: Option<i64>,
    pub y_day_avg_price: f64,
    pub recent_price: f64,
    pub current_min_price: f64,
}
