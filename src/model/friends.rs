use serde_json::Value;

/// Amount of friend ids that are kept.
pub const FRIENDS_PREVIEW_LEN: usize = 50;

#[derive(Default)]
pub struct FriendList {
    /// Total amount of friends, regardless of the preview length.
    pub count: usize,
    pub preview: Vec<Option<Box<str>>>,
}

impl FriendList {
    pub fn from_response(value: &Value) -> Self {
        let friends = value
            .get("friendslist")
            .and_then(|list| list.get("friends"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let preview = friends
            .iter()
            .take(FRIENDS_PREVIEW_LEN)
            .map(|friend| friend.get("steamid").and_then(Value::as_str).map(Box::from))
            .collect();

        Self {
            count: friends.len(),
            preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn friends(count: usize) -> Value {
        let friends: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "steamid": format!("7656119800000{i:04}"),
                    "relationship": "friend",
                    "friend_since": 1_500_000_000 + i,
                })
            })
            .collect();

        json!({ "friendslist": { "friends": friends } })
    }

    #[test]
    fn preview_is_truncated() {
        let list = FriendList::from_response(&friends(73));

        assert_eq!(list.count, 73);
        assert_eq!(list.preview.len(), FRIENDS_PREVIEW_LEN);

        for (i, steam_id) in list.preview.iter().enumerate() {
            assert_eq!(steam_id.as_deref(), Some(&*format!("7656119800000{i:04}")));
        }
    }

    #[test]
    fn small_list_is_kept_whole() {
        let list = FriendList::from_response(&friends(3));

        assert_eq!(list.count, 3);
        assert_eq!(list.preview.len(), 3);
    }

    #[test]
    fn missing_steam_id() {
        let value = json!({ "friendslist": { "friends": [{ "relationship": "friend" }] } });
        let list = FriendList::from_response(&value);

        assert_eq!(list.count, 1);
        assert_eq!(list.preview, [None]);
    }

    #[test]
    fn no_friends_list() {
        let list = FriendList::from_response(&json!({}));

        assert_eq!(list.count, 0);
        assert!(list.preview.is_empty());
    }
}
