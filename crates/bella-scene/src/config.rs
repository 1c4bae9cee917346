//! Site-wide settings

use serde::{Deserialize, Serialize};

use crate::layout::Breakpoint;
use crate::presets::SectionId;

/// Static configuration for the whole page
///
/// `Default` carries the production values; every field can be overridden
/// from JSON, with missing fields falling back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Restaurant name shown in the navbar and copy
    pub brand: String,
    /// Name in the footer copyright line
    pub owner: String,
    /// Sections linked from the navbar, in order
    pub nav_sections: Vec<SectionId>,
    /// Below this width the navbar collapses its links
    pub nav_breakpoint: Breakpoint,
    /// Scroll offset (px) after which the navbar turns translucent
    pub scroll_threshold: f64,
    /// Whether decorative 3-D layers are drawn at all
    pub ornaments_enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Bella Vista".to_string(),
            owner: "Areeba Farhan".to_string(),
            nav_sections: SectionId::all().to_vec(),
            nav_breakpoint: Breakpoint::Md,
            scroll_threshold: 50.0,
            ornaments_enabled: true,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Footer copyright line for the given year
    pub fn copyright(&self, year: u32) -> String {
        format!("\u{a9} {} {}. All rights reserved.", year, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.brand, "Bella Vista");
        assert_eq!(config.nav_sections.len(), 4);
        assert_eq!(config.nav_breakpoint, Breakpoint::Md);
        assert!((config.scroll_threshold - 50.0).abs() < 0.001);
        assert!(config.ornaments_enabled);
    }

    #[test]
    fn test_site_config_partial_override() {
        let config = SiteConfig::from_json(r#"{ "brand": "Casa Nova", "ornaments_enabled": false }"#).unwrap();
        assert_eq!(config.brand, "Casa Nova");
        assert!(!config.ornaments_enabled);
        // Untouched fields keep their defaults
        assert_eq!(config.owner, "Areeba Farhan");
        assert_eq!(config.nav_sections, SectionId::all().to_vec());
    }

    #[test]
    fn test_site_config_rejects_bad_breakpoint() {
        assert!(SiteConfig::from_json(r#"{ "nav_breakpoint": "xl" }"#).is_err());
    }

    #[test]
    fn test_copyright_line() {
        let line = SiteConfig::default().copyright(2025);
        assert_eq!(line, "\u{a9} 2025 Areeba Farhan. All rights reserved.");
    }
}
