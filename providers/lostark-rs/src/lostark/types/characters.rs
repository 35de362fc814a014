use serde::{Deserialize, Serialize};

/// One character of an account, as returned by `/characters/{name}/siblings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterInfo {
    pub server_name: String,
    pub character_name: String,
    pub character_level: i64,
    pub character_class_name: String,
    pub item_avg_level: String,
    pub item_max_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_info_deserialization() {
        let json = r#"{
            "ServerName": "루페온",
            "CharacterName": "모코코",
            "CharacterLevel": 60,
            "CharacterClassName": "바드",
            "ItemAvgLevel": "1,620.00",
            "ItemMaxLevel": "1,620.00"
        }"#;
        let info: CharacterInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.character_name, "모코코");
        assert_eq!(info.character_level, 60);
    }
}
