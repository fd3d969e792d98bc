// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::about;
use crate::ui::editor;
use crate::ui::navbar;
use crate::ui::settings;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    About(about::Message),
    /// Result from the image file dialog (`None` means cancelled).
    ImageDialogResult(Option<PathBuf>),
    /// Result from decoding the picked file.
    ImageDecoded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
