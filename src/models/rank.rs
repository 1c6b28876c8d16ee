use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// One row of a ranking page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub likes: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rank_deserialization() {
        let ranks: Vec<Rank> = serde_json::from_value(json!([
            {"position": 1, "user": {"id": "u1", "name": "Ana"}, "likes": 42},
            {"position": 2, "likes": 17}
        ]))
        .unwrap();

        assert_eq!(ranks[0].user.as_ref().and_then(|u| u.name.as_deref()), Some("Ana"));
        assert_eq!(ranks[1].user, None);
        assert_eq!(ranks[1].likes, Some(17));
    }
}
