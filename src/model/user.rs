use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Stored value of `role` that grants access to administrative routes.
pub const ADMIN_ROLE: &str = "admin";

/// A registered user, kept as the document the client sent.
///
/// `email` and `role` are read through accessors so that documents missing
/// them, or holding other types, still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        User::from_fields(doc! { "email": email.into() })
    }

    pub fn admin(email: impl Into<String>) -> Self {
        let mut user = User::new(email);
        user.fields.insert("role", ADMIN_ROLE);
        user
    }

    pub fn from_fields(fields: Document) -> Self {
        User { id: None, fields }
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.get_str("email").ok()
    }

    pub fn role(&self) -> Option<&str> {
        self.fields.get_str("role").ok()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_check() {
        assert!(!User::new("a@b.com").is_admin());
        assert!(User::admin("a@b.com").is_admin());

        let mut user = User::new("a@b.com");
        user.fields.insert("role", "moderator");
        assert!(!user.is_admin());
        user.fields.insert("role", true);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_profile_fields_are_kept() {
        let json = serde_json::json!({ "email": "a@b.com", "name": "Rahim", "photo": "p.png" });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.email(), Some("a@b.com"));
        assert!(user.role().is_none());
        assert_eq!(user.fields.get_str("name").unwrap(), "Rahim");
    }

    #[test]
    fn test_stored_documents_without_email_still_load() {
        let id = ObjectId::new();
        let user: User = bson::from_document(doc! { "_id": id, "name": "no email" }).unwrap();
        assert_eq!(user.id, Some(id));
        assert!(user.email().is_none());

        let user: User = bson::from_document(doc! { "_id": id, "email": 5_i32 }).unwrap();
        assert!(user.email().is_none());
        assert_eq!(user.fields.get_i32("email").unwrap(), 5);
    }

    #[test]
    fn test_round_trip_keeps_extra_keys() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "email": "a@b.com",
            "role": "admin",
            "photo": "p.png",
            "camps": [{ "name": "Eye Camp", "paid": false }],
        };
        let user: User = bson::from_document(stored.clone()).unwrap();
        assert!(user.is_admin());
        assert_eq!(bson::to_document(&user).unwrap(), stored);
    }
}
