// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler receives an [`UpdateContext`] of mutable borrows into the
//! root state, so the update logic can live outside the `App` struct without
//! cloning anything. Errors raised here never throw: they are reported
//! through the notification store and the handler keeps going.

use super::message::Message;
use super::screen::Screen;
use crate::error::Error;
use crate::lesson_scanner::LessonList;
use crate::ui::home;
use crate::ui::lesson;
use crate::ui::notifications::{Metadata, NotificationStore};
use crate::ui::supervision::CrashGuard;
use iced::Task;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Mutable view of the root state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub lessons: &'a mut LessonList,
    pub lesson: &'a mut Option<lesson::State>,
    pub lesson_dir: &'a Option<PathBuf>,
    pub notifications: &'a mut NotificationStore,
    pub route_guard: &'a mut CrashGuard,
    pub app_guard: &'a mut CrashGuard,
}

/// Handles messages from the home screen.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match message {
        home::Message::Open(index) => {
            let Some(lesson) = ctx.lessons.get(index) else {
                // The catalog changed between render and click; rescanning is
                // more useful than reporting a stale index.
                rescan_lessons(ctx);
                return Task::none();
            };
            let title = lesson.title().to_string();
            let path = lesson.path().to_path_buf();
            Task::perform(load_lesson(title, path), std::convert::identity)
        }
        home::Message::Rescan => {
            rescan_lessons(ctx);
            Task::none()
        }
    }
}

/// Handles messages from the lesson screen.
pub fn handle_lesson_message(
    ctx: &mut UpdateContext<'_>,
    message: lesson::Message,
) -> Task<Message> {
    match message {
        lesson::Message::Back => {
            *ctx.screen = Screen::Home;
            *ctx.lesson = None;
            // Leaving the screen remounts the route granularity.
            ctx.route_guard.reset();
            Task::none()
        }
    }
}

/// Handles the completion of a background lesson read.
pub fn handle_lesson_loaded(
    ctx: &mut UpdateContext<'_>,
    title: String,
    path: PathBuf,
    result: Result<String, Error>,
) -> Task<Message> {
    match result {
        Ok(body) => {
            *ctx.lesson = Some(lesson::State::new(title, path, body));
            *ctx.screen = Screen::Lesson;
            ctx.route_guard.reset();
        }
        Err(err) => {
            let metadata = path_metadata(&path, Some(&err));
            ctx.notifications
                .reporter()
                .push("Failed to load lesson", Some(metadata));
        }
    }
    Task::none()
}

/// Re-scans the configured lesson directory into the catalog.
///
/// A scan failure leaves the previous catalog in place and reports the error.
pub fn rescan_lessons(ctx: &mut UpdateContext<'_>) {
    let Some(dir) = ctx.lesson_dir else {
        ctx.notifications.reporter().push(
            "No lesson directory configured. Pass one on the command line or set it in settings.toml.",
            None,
        );
        return;
    };

    match LessonList::scan_directory(dir) {
        Ok(lessons) => *ctx.lessons = lessons,
        Err(err) => {
            let metadata = path_metadata(dir, Some(&err));
            ctx.notifications
                .reporter()
                .push("Failed to scan lesson directory", Some(metadata));
        }
    }
}

/// Builds the `{path, detail}` metadata attached to filesystem errors.
fn path_metadata(path: &Path, detail: Option<&Error>) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("path".to_string(), json!(path.display().to_string()));
    if let Some(err) = detail {
        metadata.insert("detail".to_string(), json!(err.to_string()));
    }
    metadata
}

/// Reads a lesson file off the UI thread.
async fn load_lesson(title: String, path: PathBuf) -> Message {
    let result = tokio::fs::read_to_string(&path)
        .await
        .map_err(Error::from);
    Message::LessonLoaded {
        title,
        path,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CrashScope;

    struct Harness {
        screen: Screen,
        lessons: LessonList,
        lesson: Option<lesson::State>,
        lesson_dir: Option<PathBuf>,
        notifications: NotificationStore,
        route_guard: CrashGuard,
        app_guard: CrashGuard,
    }

    impl Harness {
        fn new(lesson_dir: Option<PathBuf>) -> Self {
            Self {
                screen: Screen::Home,
                lessons: LessonList::new(),
                lesson: None,
                lesson_dir,
                notifications: NotificationStore::new(),
                route_guard: CrashGuard::new(CrashScope::Route),
                app_guard: CrashGuard::new(CrashScope::Application),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                screen: &mut self.screen,
                lessons: &mut self.lessons,
                lesson: &mut self.lesson,
                lesson_dir: &self.lesson_dir,
                notifications: &mut self.notifications,
                route_guard: &mut self.route_guard,
                app_guard: &mut self.app_guard,
            }
        }
    }

    #[test]
    fn rescan_without_directory_reports_once() {
        let mut harness = Harness::new(None);
        rescan_lessons(&mut harness.ctx());

        assert_eq!(harness.notifications.len(), 1);
        let record = harness.notifications.errors().next().unwrap();
        assert!(record.message().contains("No lesson directory configured"));
        assert!(record.metadata().is_none());
    }

    #[test]
    fn rescan_of_missing_directory_attaches_path_metadata() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("gone");
        let mut harness = Harness::new(Some(missing.clone()));

        rescan_lessons(&mut harness.ctx());

        let record = harness.notifications.errors().next().unwrap();
        assert_eq!(record.message(), "Failed to scan lesson directory");
        let metadata = record.metadata().expect("scan errors carry metadata");
        assert_eq!(
            metadata.get("path").and_then(|v| v.as_str()),
            Some(missing.display().to_string().as_str())
        );
        assert!(metadata.contains_key("detail"));
    }

    #[test]
    fn failed_lesson_load_reports_instead_of_switching_screens() {
        let mut harness = Harness::new(None);
        let path = PathBuf::from("/lessons/closures.md");

        let _ = handle_lesson_loaded(
            &mut harness.ctx(),
            "closures".to_string(),
            path.clone(),
            Err(Error::Io("permission denied".to_string())),
        );

        assert_eq!(harness.screen, Screen::Home);
        assert!(harness.lesson.is_none());
        let record = harness.notifications.errors().next().unwrap();
        assert_eq!(record.message(), "Failed to load lesson");
        assert_eq!(
            record.metadata().and_then(|m| m.get("path")).and_then(|v| v.as_str()),
            Some("/lessons/closures.md")
        );
    }

    #[test]
    fn successful_lesson_load_opens_the_lesson_screen() {
        let mut harness = Harness::new(None);

        let _ = handle_lesson_loaded(
            &mut harness.ctx(),
            "variables".to_string(),
            PathBuf::from("/lessons/variables.md"),
            Ok("Variables hold values.".to_string()),
        );

        assert_eq!(harness.screen, Screen::Lesson);
        let state = harness.lesson.as_ref().expect("lesson state should exist");
        assert_eq!(state.title(), "variables");
        assert!(harness.notifications.is_empty());
    }

    #[test]
    fn leaving_the_lesson_screen_resets_the_route_guard() {
        let mut harness = Harness::new(None);
        harness.screen = Screen::Lesson;
        harness
            .route_guard
            .supervise(|| -> () { panic!("screen broke") }, |_| ());
        assert!(harness.route_guard.is_tripped());

        let _ = handle_lesson_message(&mut harness.ctx(), lesson::Message::Back);

        assert_eq!(harness.screen, Screen::Home);
        assert!(!harness.route_guard.is_tripped());
    }
}
