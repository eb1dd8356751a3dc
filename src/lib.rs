// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an animated, theme-aware personal portfolio built with the
//! Iced GUI toolkit.
//!
//! A splash screen counts up to 100% and hands over to a single scrolling
//! page of sections that reveal as they enter the viewport. The light/dark
//! choice is remembered between runs.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
