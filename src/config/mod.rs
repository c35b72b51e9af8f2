//! Site-wide page configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site-wide constants merged into every rendered view.
///
/// Immutable for the lifetime of a renderer instance; field names are
/// camelCase on the wire to match the template placeholder contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Site title
    pub page_title: String,

    /// Site base URL
    pub root: String,

    /// Base URL under which uploaded media is served
    pub content_root: String,

    /// Social link descriptors, in display order
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl PageConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: PageConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded page config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// A social link shown in page chrome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Display name, e.g. "GitHub"
    pub name: String,

    /// Link target
    pub url: String,

    /// Icon identifier, theme-defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_yaml() {
        let yaml = concat!(
            "pageTitle: My Blog\n",
            "root: https://here.com\n",
            "contentRoot: https://content.here.com\n",
            "social:\n",
            "- name: GitHub\n",
            "  url: https://github.com/someone\n",
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        fs::write(&path, yaml).unwrap();

        let config = PageConfig::load(&path).unwrap();
        assert_eq!(config.page_title, "My Blog");
        assert_eq!(config.content_root, "https://content.here.com");
        assert_eq!(config.social.len(), 1);
        assert_eq!(config.social[0].name, "GitHub");
        assert_eq!(config.social[0].icon, None);
    }

    #[test]
    fn test_social_defaults_to_empty() {
        let config: PageConfig = serde_yaml::from_str(
            "pageTitle: T\nroot: https://here.com\ncontentRoot: https://content.here.com\n",
        )
        .unwrap();
        assert!(config.social.is_empty());
    }
}
