//! Lost Ark API Type Definitions
//!
//! Response and request records for the Lost Ark developer API. Field names
//! on the wire are PascalCase; several string and list fields come back as
//! `null` for characters that lack the data, those map to their empty value.

use serde::{Deserialize, Deserializer, Serialize};

pub mod armories;
pub mod auctions;
pub mod characters;
pub mod gamecontents;
pub mod guilds;
pub mod markets;
pub mod news;

pub use armories::*;
pub use auctions::*;
pub use characters::CharacterInfo;
pub use gamecontents::*;
pub use guilds::GuildRanking;
pub use markets::*;
pub use news::{Event, Notice, NoticeType};

/// Item category shared by the auction house and market option listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub subs: Vec<CategoryItem>,
    pub code: i64,
    pub code_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryItem {
    pub code: i64,
    pub code_name: String,
}

/// Sort direction for search requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortCondition {
    #[default]
    Asc,
    Desc,
}

/// Deserializes `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
