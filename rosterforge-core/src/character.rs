use serde::{Deserialize, Serialize};

/// A single playable character as reported by the generation service.
///
/// `name` and `role` together form the matching key component used to align
/// teams with their explanation segments; `element` and `tier` are
/// display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Element")]
    pub element: String,
    #[serde(rename = "Tier")]
    pub tier: String,
}

impl Character {
    #[must_use]
    pub fn new(name: &str, role: &str, element: &str, tier: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            element: element.to_string(),
            tier: tier.to_string(),
        }
    }

    /// Key component for explanation matching: `"Name (Role)"`.
    ///
    /// The role-inclusive form is the canonical scheme; name-only keys from
    /// earlier service revisions silently fell back for multi-role rosters.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_field_names() {
        let json = r#"{
            "Name": "Kuki Shinobu",
            "Role": "Support",
            "Element": "Electro",
            "Tier": "A"
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.name, "Kuki Shinobu");
        assert_eq!(character.role, "Support");
        assert_eq!(character.element, "Electro");
        assert_eq!(character.tier, "A");
    }

    #[test]
    fn display_label_includes_role() {
        let character = Character::new("Aether", "DPS", "Anemo", "B");
        assert_eq!(character.display_label(), "Aether (DPS)");
    }
}
