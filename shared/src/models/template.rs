//! Ticket template selection

use serde::{Deserialize, Serialize};

/// Which ticket layout to render
///
/// Invariants:
/// - `Kitchen` output never contains pricing fields (kitchen tickets
///   are customer-visible in open kitchens)
/// - `Invoice` output always carries a recomputed grand total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Invoice,
    Kitchen,
}

impl TemplateKind {
    /// Path-segment / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::Kitchen => "kitchen",
        }
    }

    /// Human-facing job title prefix
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::Kitchen => "Kitchen order",
        }
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoice" => Ok(Self::Invoice),
            "kitchen" => Ok(Self::Kitchen),
            other => Err(UnknownTemplate(other.to_string())),
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown template selector in a request path
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown template: {0}")]
pub struct UnknownTemplate(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_kind() {
        assert_eq!("invoice".parse::<TemplateKind>().unwrap(), TemplateKind::Invoice);
        assert_eq!("kitchen".parse::<TemplateKind>().unwrap(), TemplateKind::Kitchen);
        assert!("label".parse::<TemplateKind>().is_err());
    }
}
