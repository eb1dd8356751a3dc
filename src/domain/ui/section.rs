// SPDX-License-Identifier: MPL-2.0
//! Section identifiers and their fixed page order.

use std::fmt;

/// One of the portfolio's content sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Education,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable anchor name, also used as the catalog table key.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation rail.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in [`SectionId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a section by anchor name.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
