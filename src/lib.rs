// SPDX-License-Identifier: MPL-2.0
//! `iced_card` is a thumbnail card designer built with the Iced GUI framework.
//!
//! A single editor screen mirrors form inputs (title, subtitle, background
//! color, technology badges, accent color, uploaded image) into a live card
//! preview. It also demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_card/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
