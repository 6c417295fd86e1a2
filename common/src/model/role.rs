use serde::{Deserialize, Serialize};

/// Account role returned by the sign-in endpoint. Each role owns exactly one
/// dashboard; the spellings are the backend's and must not be localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    State,
    Municipality,
    Colony,
    Area,
}

impl Role {
    /// Parses the backend spelling. Returns `None` for anything the four
    /// known roles do not cover, so callers can refuse to open a session
    /// for a role they cannot route.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "State" => Some(Role::State),
            "Municipality" => Some(Role::Municipality),
            "Colony" => Some(Role::Colony),
            "Area" => Some(Role::Area),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::State => "State",
            Role::Municipality => "Municipality",
            Role::Colony => "Colony",
            Role::Area => "Area",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_backend_spellings() {
        for name in ["State", "Municipality", "Colony", "Area"] {
            let role = Role::parse(name).unwrap();
            assert_eq!(role.as_str(), name);
        }
    }

    #[test]
    fn rejects_unknown_and_misspelled_roles() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("municipality"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn serde_round_trip_keeps_backend_spelling() {
        let json = serde_json::to_string(&Role::Municipality).unwrap();
        assert_eq!(json, "\"Municipality\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Municipality);
    }
}
