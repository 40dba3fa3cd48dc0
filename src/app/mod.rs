// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and the
//! error-reporting core.
//!
//! The `App` struct wires together the lesson catalog, the notification
//! store, the diagnostics log and the two crash guards, and translates
//! messages into side effects like lesson loading. The store and the guards
//! are constructed exactly once here and lent by reference into handlers and
//! views; nothing else in the tree owns error-reporting state.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::diagnostics::{CrashScope, DiagnosticsLog};
use crate::lesson_scanner::LessonList;
use crate::ui::lesson;
use crate::ui::notifications::{NotificationStore, Toast};
use crate::ui::supervision::CrashGuard;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::path::PathBuf;

const APP_NAME: &str = "Iced Primer";

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    /// Directory the lesson catalog is scanned from.
    lesson_dir: Option<PathBuf>,
    lessons: LessonList,
    /// State of the open lesson, when on the lesson screen.
    lesson: Option<lesson::State>,
    /// Live reported errors, rendered as the toast overlay.
    notifications: NotificationStore,
    /// Crash log shared with the guards.
    diagnostics: DiagnosticsLog,
    /// Supervises the current screen's render.
    route_guard: CrashGuard,
    /// Supervises the entire view, shell included.
    app_guard: CrashGuard,
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsLog::new();
        let mut route_guard = CrashGuard::new(CrashScope::Route);
        route_guard.set_diagnostics(diagnostics.clone());
        let mut app_guard = CrashGuard::new(CrashScope::Application);
        app_guard.set_diagnostics(diagnostics.clone());

        Self {
            screen: Screen::Home,
            theme_mode: ThemeMode::System,
            lesson_dir: None,
            lessons: LessonList::new(),
            lesson: None,
            notifications: NotificationStore::new(),
            diagnostics,
            route_guard,
            app_guard,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the persisted
    /// configuration, then scans the lesson catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load(config_dir.as_deref());

        let mut app = App::default();
        app.theme_mode = config.general.theme_mode;
        app.lesson_dir = flags
            .lesson_dir
            .map(PathBuf::from)
            .or(config.lessons.directory);

        if let Some(warning) = config_warning {
            let mut metadata = crate::ui::notifications::Metadata::new();
            metadata.insert(
                "path".to_string(),
                serde_json::json!(warning.path.display().to_string()),
            );
            metadata.insert("detail".to_string(), serde_json::json!(warning.detail));
            app.notifications
                .push("Failed to read settings", Some(metadata));
        }

        update::rescan_lessons(&mut app.update_context());

        let task = app.supervise_render();
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            lessons: &mut self.lessons,
            lesson: &mut self.lesson,
            lesson_dir: &self.lesson_dir,
            notifications: &mut self.notifications,
            route_guard: &mut self.route_guard,
            app_guard: &mut self.app_guard,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = {
            let mut ctx = self.update_context();
            match message {
                Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
                Message::Lesson(lesson_message) => {
                    update::handle_lesson_message(&mut ctx, lesson_message)
                }
                Message::Notification(notification_message) => {
                    ctx.notifications.handle_message(&notification_message);
                    Task::none()
                }
                Message::LessonLoaded {
                    title,
                    path,
                    result,
                } => update::handle_lesson_loaded(&mut ctx, title, path, result),
                Message::RetryRoute => {
                    ctx.route_guard.reset();
                    Task::none()
                }
                Message::RetryApplication => {
                    // Restarting the shell: back to a freshly mounted home screen.
                    ctx.app_guard.reset();
                    ctx.route_guard.reset();
                    *ctx.screen = Screen::Home;
                    *ctx.lesson = None;
                    Task::none()
                }
            }
        };

        Task::batch([task, self.supervise_render()])
    }

    /// Renders once under the crash guards so a render failure is latched
    /// during the update cycle that caused it.
    ///
    /// The framework's own render pass then draws the already-latched
    /// fallback, and a freshly tripped guard gets a focus task here so
    /// keyboard focus lands on the retry control the moment the crash
    /// surface mounts.
    fn supervise_render(&self) -> Task<Message> {
        let route_was_tripped = self.route_guard.is_tripped();
        let app_was_tripped = self.app_guard.is_tripped();

        drop(self.view());

        let fresh_trip = (self.route_guard.is_tripped() && !route_was_tripped)
            || (self.app_guard.is_tripped() && !app_was_tripped);
        if fresh_trip {
            iced::widget::operation::focus_next()
        } else {
            Task::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.app_guard.view(Message::RetryApplication, || {
            let content = self.route_guard.view(Message::RetryRoute, || {
                view::screen(view::ViewContext {
                    screen: self.screen,
                    lessons: &self.lessons,
                    lesson: self.lesson.as_ref(),
                    lesson_dir: self.lesson_dir.as_deref(),
                })
            });

            if self.notifications.is_empty() {
                content
            } else {
                // Non-modal overlay: toasts stack above the page without
                // blocking interaction with it.
                iced::widget::stack![
                    content,
                    Toast::view_overlay(&self.notifications).map(Message::Notification)
                ]
                .into()
            }
        })
    }

    fn title(&self) -> String {
        match self.lesson.as_ref() {
            Some(state) if self.screen == Screen::Lesson => {
                format!("{} - {APP_NAME}", state.title())
            }
            _ => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    /// Returns the diagnostics log (crash history) for inspection.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}
