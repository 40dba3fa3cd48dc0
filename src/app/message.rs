// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::home;
use crate::ui::lesson;
use crate::ui::notifications;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Lesson(lesson::Message),
    Notification(notifications::Message),
    /// Result from reading a lesson file in the background.
    LessonLoaded {
        title: String,
        path: PathBuf,
        result: Result<String, Error>,
    },
    /// Retry control of the route-level crash surface.
    RetryRoute,
    /// Retry control of the application-level crash surface.
    RetryApplication,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional lesson directory to scan on startup.
    /// Takes precedence over the `[lessons] directory` config entry.
    pub lesson_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_PRIMER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
