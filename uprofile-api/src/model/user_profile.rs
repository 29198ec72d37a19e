use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::UserProfile;

    #[test]
    fn decodes_minimal_payload() {
        let profile: UserProfile = serde_json::from_str(r#"{"id":"u1","name":"Alice"}"#)
            .expect("failed to decode profile");
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.display_name, None);
        assert_eq!(profile.avatar_url, None);
    }

    #[test]
    fn tolerates_unknown_fields() {
        let raw = r#"{
            "id": "u1",
            "name": "Alice",
            "display_name": "alice",
            "follower_count": 42
        }"#;
        let profile: UserProfile = serde_json::from_str(raw).expect("failed to decode profile");
        assert_eq!(profile.display_name.as_deref(), Some("alice"));
    }
}
