use serde::{Deserialize, Serialize};

/// Top-level organizational unit a task is owned by.
///
/// Declaration order is the canonical taxonomy order and drives `Ord`,
/// so sorted group lists always read Creation first and Other last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OwnerGroup {
    Creation,
    Media,
    Production,
    Operations,
    #[serde(rename = "BI")]
    Bi,
    Strategy,
    Other,
}

impl OwnerGroup {
    /// The six groups that may appear as the first segment of an ownership path.
    pub const CANONICAL: [OwnerGroup; 6] = [
        Self::Creation,
        Self::Media,
        Self::Production,
        Self::Operations,
        Self::Bi,
        Self::Strategy,
    ];

    pub const ALL: [OwnerGroup; 7] = [
        Self::Creation,
        Self::Media,
        Self::Production,
        Self::Operations,
        Self::Bi,
        Self::Strategy,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creation => "Creation",
            Self::Media => "Media",
            Self::Production => "Production",
            Self::Operations => "Operations",
            Self::Bi => "BI",
            Self::Strategy => "Strategy",
            Self::Other => "Other",
        }
    }

    /// Label used inside ownership paths and on exported documents.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Creation => "Criação",
            Self::Media => "Mídia",
            Self::Production => "Produção",
            Self::Operations => "Operações",
            Self::Bi => "BI",
            Self::Strategy => "Estratégia",
            Self::Other => "Outros",
        }
    }

    /// Exact match of a path segment against the canonical labels.
    pub fn from_label(segment: &str) -> Option<Self> {
        Self::CANONICAL.into_iter().find(|g| g.label() == segment)
    }

    /// Lenient lookup for user input: English name or label, any case.
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|g| {
            g.as_str().to_lowercase() == wanted || g.label().to_lowercase() == wanted
        })
    }
}

impl std::fmt::Display for OwnerGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(OwnerGroup::from_label("Criação"), Some(OwnerGroup::Creation));
        assert_eq!(OwnerGroup::from_label("criação"), None);
        assert_eq!(OwnerGroup::from_label("Outros"), None);
    }

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!(OwnerGroup::from_str("operations"), Some(OwnerGroup::Operations));
        assert_eq!(OwnerGroup::from_str("OPERAÇÕES"), Some(OwnerGroup::Operations));
        assert_eq!(OwnerGroup::from_str("bi"), Some(OwnerGroup::Bi));
        assert_eq!(OwnerGroup::from_str("Outros"), Some(OwnerGroup::Other));
        assert_eq!(OwnerGroup::from_str("Marketing"), None);
    }

    #[test]
    fn test_serializes_as_english_name() {
        let v = serde_json::to_value([OwnerGroup::Creation, OwnerGroup::Bi]).unwrap();
        assert_eq!(v, serde_json::json!(["Creation", "BI"]));
    }
}
