use serde::{Deserialize, Deserializer};

pub const MIN_USERNAME_LEN: usize = 3;

/// Each field is `None` when absent from the body, `Some(None)` for `null`.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "present")]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub full_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub avatar_url: Option<Option<String>>,
}

fn present<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Some)
}

/// What a profile update does to one column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Keep,
    Clear,
    Set(String),
}

impl FieldUpdate {
    // null and blank strings both clear.
    fn from_request(raw: Option<Option<String>>) -> Self {
        match raw {
            None => Self::Keep,
            Some(v) => match v.map(|s| s.trim().to_string()) {
                Some(s) if !s.is_empty() => Self::Set(s),
                _ => Self::Clear,
            },
        }
    }

    pub fn touches(&self) -> bool {
        !matches!(self, Self::Keep)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }
}

/// Validated profile fields; cleared ones are stored as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileChanges {
    pub username: FieldUpdate,
    pub full_name: FieldUpdate,
    pub avatar_url: FieldUpdate,
}

impl TryFrom<UpdateProfileRequest> for ProfileChanges {
    type Error = String;

    fn try_from(req: UpdateProfileRequest) -> Result<Self, Self::Error> {
        let username = FieldUpdate::from_request(req.username);
        if let FieldUpdate::Set(name) = &username {
            if name.chars().count() < MIN_USERNAME_LEN {
                return Err(format!(
                    "Username must be at least {MIN_USERNAME_LEN} characters"
                ));
            }
        }
        Ok(Self {
            username,
            full_name: FieldUpdate::from_request(req.full_name),
            avatar_url: FieldUpdate::from_request(req.avatar_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn changes(body: serde_json::Value) -> Result<ProfileChanges, String> {
        let req: UpdateProfileRequest = serde_json::from_value(body).unwrap();
        ProfileChanges::try_from(req)
    }

    #[test]
    fn blanks_and_nulls_clear() {
        let c = changes(json!({"username": "  ", "full_name": "", "avatar_url": null})).unwrap();
        assert_eq!(c.username, FieldUpdate::Clear);
        assert_eq!(c.full_name, FieldUpdate::Clear);
        assert_eq!(c.avatar_url, FieldUpdate::Clear);
        assert!(c.avatar_url.touches());
    }

    #[test]
    fn omitted_fields_are_kept() {
        let c = changes(json!({"username": "sora", "full_name": "Sora"})).unwrap();
        assert_eq!(c.avatar_url, FieldUpdate::Keep);
        assert!(!c.avatar_url.touches());
        assert_eq!(c.avatar_url.value(), None);
        assert_eq!(c.full_name.value(), Some("Sora"));
    }

    #[test]
    fn short_usernames_are_rejected() {
        assert!(changes(json!({"username": "ab"})).is_err());
        let ok = changes(json!({"username": " sora ", "full_name": "Sora Aoi"})).unwrap();
        assert_eq!(ok.username, FieldUpdate::Set("sora".into()));
        assert_eq!(ok.full_name.value(), Some("Sora Aoi"));
    }
}
