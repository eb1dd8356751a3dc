// SPDX-License-Identifier: MPL-2.0
//! Domain layer - presentation-independent value types with ZERO external
//! dependencies.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`Progress`](ui::newtypes::Progress),
//!   [`LayoutClass`](ui::newtypes::LayoutClass)) and the
//!   [`SectionId`](ui::section::SectionId) catalog order

pub mod ui;
