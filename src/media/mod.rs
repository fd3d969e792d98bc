// SPDX-License-Identifier: MPL-2.0
//! Media handling: decoding user-selected images for the card preview.

pub mod image;

pub use image::{load_path, placeholder, ImageData};
