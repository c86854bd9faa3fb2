// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the editor, the editing service,
//! localization and configuration.
//!
//! `App` owns the editor state and the service handle. Every user action goes
//! through [`crate::ui::editor::State::update`]; the effect it returns is
//! executed here as an Iced task.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{EditService, InitializeReply, ServiceError, ServiceResult};
use crate::domain::editing::ParameterSet;
use crate::domain::media::SourceImage;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpEditService, ServiceSettings};
use crate::ui::editor;
use crate::ui::theming::ThemeMode;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1040;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    editor: editor::State,
    service: Arc<dyn EditService>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("image", &self.editor.image().map(|image| image.file_name()))
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from an explicit service. Used by `new` and tests.
    pub fn with_service(
        i18n: I18n,
        service: Arc<dyn EditService>,
        debounce: std::time::Duration,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            i18n,
            editor: editor::State::new(debounce),
            service,
            theme_mode,
        }
    }

    /// Loads configuration, builds the HTTP service and optionally opens the
    /// startup image.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let env_base_url = std::env::var(config::ENV_API_BASE_URL).ok();
        let base_url = config::resolve_base_url(
            flags.api_base_url.as_deref(),
            env_base_url.as_deref(),
            &config.service,
        );
        let settings =
            ServiceSettings::new(base_url).with_timeout(config.service.request_timeout());
        log::info!("Editing service at {}", settings.base_url);

        let service: Arc<dyn EditService> = match HttpEditService::new(settings) {
            Ok(service) => Arc::new(service),
            Err(err) => {
                log::error!("HTTP client setup failed, edits are unavailable: {err}");
                Arc::new(UnavailableService(err))
            }
        };

        let debounce = flags
            .debounce_ms
            .map(config::debounce_from_millis)
            .unwrap_or_else(|| config.editor.debounce());

        let app = Self::with_service(i18n, service, debounce, config.general.theme_mode);

        let task = match flags.file_path {
            Some(path) => Task::done(Message::FileDropped(path.into())),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.editor.image() {
            Some(image) => format!("{} - {}", image.file_name(), app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            editor: &mut self.editor,
            service: &self.service,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            editor: &self.editor,
        })
    }

    #[must_use]
    pub fn editor(&self) -> &editor::State {
        &self.editor
    }
}

/// Stand-in used when the HTTP client cannot be built. Every call fails with
/// the construction error and the editor logs it like any other failure.
struct UnavailableService(ServiceError);

impl EditService for UnavailableService {
    fn initialize(&self, _image: SourceImage) -> BoxFuture<'static, ServiceResult<InitializeReply>> {
        let err = self.0.clone();
        async move { Err(err) }.boxed()
    }

    fn edit(
        &self,
        _image: SourceImage,
        _parameters: ParameterSet,
    ) -> BoxFuture<'static, ServiceResult<Vec<u8>>> {
        let err = self.0.clone();
        async move { Err(err) }.boxed()
    }
}
