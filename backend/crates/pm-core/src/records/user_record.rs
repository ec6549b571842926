use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub name: String,
    pub password_hash: Option<String>,

    /// Public URL path of the avatar image, e.g. `/uploads/avatars/abc.png`.
    pub avatar: Option<String>,
    pub avatar_color: Option<String>,

    pub is_system_admin: bool,
    pub is_active: bool,

    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub password_changed_at: Option<String>,
}

impl UserRecord {
    /// Rebuilds the record with no avatar reference. Every other field is
    /// carried over explicitly.
    pub fn without_avatar(self) -> Self {
        Self {
            id: self.id,
            username: self.username,
            email: self.email,
            name: self.name,
            password_hash: self.password_hash,
            avatar: None,
            avatar_color: self.avatar_color,
            is_system_admin: self.is_system_admin,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login_at: self.last_login_at,
            password_changed_at: self.password_changed_at,
        }
    }

    /// Avatar path if it points at a locally served file.
    pub fn local_avatar(&self) -> Option<&str> {
        self.avatar
            .as_deref()
            .filter(|path| path.starts_with('/') && !path.starts_with("//"))
    }
}
