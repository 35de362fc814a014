use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An in-game event currently in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    pub title: String,
    pub thumbnail: String,
    pub link: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub reward_date: Option<NaiveDateTime>,
}

/// Category of an official notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeType {
    #[serde(rename = "공지")]
    Notice,
    #[serde(rename = "점검")]
    Maintenance,
    #[serde(rename = "상점")]
    Shop,
    #[serde(rename = "이벤트")]
    Event,
}

impl NoticeType {
    /// Value used for the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeType::Notice => "공지",
            NoticeType::Maintenance => "점검",
            NoticeType::Shop => "상점",
            NoticeType::Event => "이벤트",
        }
    }
}

/// An official notice from the game's news board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Notice {
    pub title: String,
    pub date: NaiveDateTime,
    pub link: String,
    #[serde(rename = "Type")]
    pub kind: NoticeType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_dates() {
        let json = r#"{
            "Title": "여름 이벤트",
            "Thumbnail": "https://cdn-lostark.game.onstove.com/thumb.jpg",
            "Link": "https://lostark.game.onstove.com/News/Event/Views/1",
            "StartDate": "2023-07-19T06:00:00",
            "EndDate": "2023-08-16T06:00:00",
            "RewardDate": null
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.start_date.to_string(), "2023-07-19 06:00:00");
        assert!(event.end_date.is_some());
        assert!(event.reward_date.is_none());
    }

    #[test]
    fn test_notice_type() {
        let json = r#"{
            "Title": "정기 점검 안내",
            "Date": "2023-07-19T00:00:00.123",
            "Link": "https://lostark.game.onstove.com/News/Notice/Views/2",
            "Type": "점검"
        }"#;
        let notice: Notice = serde_json::from_str(json).unwrap();
        assert_eq!(notice.kind, NoticeType::Maintenance);
        assert_eq!(notice.kind.as_str(), "점검");
    }
}
