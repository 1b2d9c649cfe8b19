use serde::{Deserialize, Serialize};
use crate::models::task::FIELD_SEPARATOR;

/// Username of the built-in administrator
pub const ADMIN_USERNAME: &str = "admin";

/// Password written for the administrator when `user.txt` is created
pub const DEFAULT_ADMIN_PASSWORD: &str = "adm1n";

/// Task manager user, one `username, password` line of `user.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Parse a `user.txt` line; returns None unless it has exactly two fields
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        match parts.as_slice() {
            [username, password] if !username.is_empty() => {
                Some(Self::new(username.to_string(), password.to_string()))
            }
            _ => None,
        }
    }

    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.username, FIELD_SEPARATOR, self.password)
    }

    pub fn is_admin(&self) -> bool {
        self.username == ADMIN_USERNAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line() {
        let user = User::from_line("admin, adm1n\n").unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.password, "adm1n");
        assert!(user.is_admin());
    }

    #[test]
    fn test_from_line_rejects_malformed() {
        assert!(User::from_line("admin").is_none());
        assert!(User::from_line("a, b, c").is_none());
        assert!(User::from_line("").is_none());
    }

    #[test]
    fn test_password_not_serialized() {
        let user = User::new("sam".to_string(), "secret".to_string());
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("sam"));
        assert!(!json.contains("secret"));
    }
}
