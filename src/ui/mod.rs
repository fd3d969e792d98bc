// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`editor`] - Card editor with live preview and control panel
//! - [`settings`] - Application preferences (language, theme mode)
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Shared color helpers
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar

pub mod about;
pub mod design_tokens;
pub mod editor;
pub mod navbar;
pub mod settings;
pub mod styles;
pub mod theme;
pub mod theming;
