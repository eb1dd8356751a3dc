// SPDX-License-Identifier: MPL-2.0
//! Static content catalog.
//!
//! The copy and image paths of every section ship inside the binary as
//! `assets/content/portfolio.toml`. Every field has a default, so a partial
//! or damaged catalog still renders whatever it does contain.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

const CATALOG_FILE: &str = "portfolio.toml";

/// Whole-site content.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Catalog {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub skills: SkillsContent,
    pub education: EducationContent,
    pub experience: ExperienceContent,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
    pub splash: SplashContent,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeroContent {
    pub name: String,
    pub tagline: String,
    pub intro: String,
    pub scroll_hint: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AboutContent {
    pub heading: String,
    pub objective: String,
    pub closing: String,
    /// Labels of the icons circling the objective.
    pub orbit: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillsContent {
    pub heading: String,
    /// Label shown at the ring's centre while no skill is highlighted.
    pub idle_label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EducationEntry {
    pub title: String,
    pub year: String,
    pub place: String,
    pub extra: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EducationContent {
    pub title: String,
    pub heading: String,
    pub entries: Vec<EducationEntry>,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub subtitle: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub period: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LeadershipItem {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExperienceContent {
    pub heading: String,
    pub ladder_caption: String,
    pub leadership_heading: String,
    pub certificates_heading: String,
    pub timeline: Vec<TimelineEntry>,
    pub certificates: Vec<Certificate>,
    pub leadership: Vec<LeadershipItem>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub tech: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectsContent {
    pub heading: String,
    pub subtitle: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// A photo scattered over the contact backdrop; `top`/`left` are fractions
/// of the section size.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FloatingPhoto {
    pub src: String,
    pub top: f32,
    pub left: f32,
    pub rotate: f32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactContent {
    pub heading: String,
    pub subtitle: String,
    pub links: Vec<ContactLink>,
    pub photos: Vec<FloatingPhoto>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SplashContent {
    pub tag: String,
    pub title: String,
    pub tagline: String,
}

impl Default for SplashContent {
    fn default() -> Self {
        Self {
            tag: "Hi! This is my".to_string(),
            title: "PORTFOLIO".to_string(),
            tagline: "Creative • Code • Craft".to_string(),
        }
    }
}

impl Catalog {
    /// Parses catalog TOML.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| Error::Content(err.to_string()))
    }

    /// Loads the embedded catalog.
    ///
    /// Returns a tuple of (catalog, optional_warning); a missing or invalid
    /// catalog yields the defaults plus a warning.
    pub fn embedded() -> (Self, Option<String>) {
        let Some(file) = ContentAsset::get(CATALOG_FILE) else {
            return (
                Self::default(),
                Some(format!("embedded {CATALOG_FILE} is missing")),
            );
        };
        let source = String::from_utf8_lossy(file.data.as_ref());
        match Self::from_toml(&source) {
            Ok(catalog) => (catalog, None),
            Err(err) => (Self::default(), Some(err.to_string())),
        }
    }
}

/// Resolves a catalog path against the asset base path.
///
/// URLs (anything with a scheme) pass through untouched; leading slashes are
/// dropped so `"/photo1.jpeg"` and `"photo1.jpeg"` resolve the same. The
/// result is not checked for existence.
#[must_use]
pub fn resolve_asset(base: &Path, relative: &str) -> PathBuf {
    if is_external(relative) {
        return PathBuf::from(relative);
    }
    base.join(relative.trim_start_matches('/'))
}

/// True for `https:`, `mailto:` and similar targets.
#[must_use]
pub fn is_external(target: &str) -> bool {
    target
        .split_once(':')
        .is_some_and(|(scheme, _)| {
            scheme.len() > 1 && scheme.chars().all(|c| c.is_ascii_alphabetic())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_without_warning() {
        let (catalog, warning) = Catalog::embedded();
        assert!(warning.is_none(), "unexpected warning: {warning:?}");
        assert_eq!(catalog.hero.name, "Palak Goyal");
        assert_eq!(catalog.about.orbit.len(), 12);
        assert_eq!(catalog.skills.items.len(), 13);
        assert_eq!(catalog.education.entries.len(), 3);
        assert_eq!(catalog.education.photos.len(), 10);
        assert_eq!(catalog.experience.certificates.len(), 3);
        assert_eq!(catalog.projects.items.len(), 4);
        assert_eq!(catalog.contact.links.len(), 4);
    }

    #[test]
    fn partial_catalog_fills_defaults() {
        let catalog = Catalog::from_toml("[hero]\nname = \"Someone\"\n").expect("parse");
        assert_eq!(catalog.hero.name, "Someone");
        assert!(catalog.hero.photos.is_empty());
        assert!(catalog.projects.items.is_empty());
        assert_eq!(catalog.splash, SplashContent::default());
    }

    #[test]
    fn invalid_catalog_is_a_content_error() {
        assert!(matches!(
            Catalog::from_toml("[hero\nname = 1"),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn resolve_asset_joins_relative_paths() {
        let base = Path::new("/srv/public");
        assert_eq!(
            resolve_asset(base, "/photo1.jpeg"),
            PathBuf::from("/srv/public/photo1.jpeg")
        );
        assert_eq!(
            resolve_asset(base, "ic.jpeg"),
            PathBuf::from("/srv/public/ic.jpeg")
        );
    }

    #[test]
    fn resolve_asset_keeps_urls() {
        let base = Path::new("/srv/public");
        assert_eq!(
            resolve_asset(base, "mailto:someone@example.com"),
            PathBuf::from("mailto:someone@example.com")
        );
        assert!(is_external("https://github.com/pgoyal19"));
        assert!(!is_external("Resume.pdf"));
        assert!(!is_external("C:\\photos\\a.jpeg"));
    }
}
