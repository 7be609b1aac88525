//! Wallboard - desktop client for a wallpaper board.
//!
//! Browses and searches a remote bulletin board's wallpaper posts, caches
//! them in an in-memory store, and applies a selected attachment as the OS
//! wallpaper through the platform bridge.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::collections::HashMap;
use std::sync::Arc;

use iced::keyboard::{self, Key};
use iced::widget::{column, container, image, row, text};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallboard_api::{BoardClient, PostPage};
use wallboard_core::{DEFAULT_BOARD, PostKey, PostStore, Session};
use wallboard_platform::{NativeBridge, PlatformBridge};

use message::Message;
use model::{
    AppSettings, DetailState, FetchTicket, GalleryState, LoginForm, StatusLine, ThumbnailState,
    near_bottom,
};
use style::widgets::palette::{self, ThemeMode};
use style::widgets::error_banner_style;

/// Posts per gallery page.
const GALLERY_PAGE_SIZE: u32 = 30;

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallboard=debug,wallboard_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wallboard");

    iced::application(Wallboard::new, Wallboard::update, Wallboard::view)
        .title("Wallboard")
        .subscription(Wallboard::subscription)
        .run()
}

/// Main application state.
struct Wallboard {
    /// Client for the configured board deployment.
    client: BoardClient,
    /// OS bridge; absent only if its HTTP client could not be built.
    bridge: Option<Arc<NativeBridge>>,
    /// Current auth state.
    session: Session,
    /// Every post fetched for the current board/search.
    store: PostStore,
    /// Browsing state machine.
    gallery: GalleryState,
    /// Thumbnail fetch state per post.
    thumbnails: HashMap<PostKey, ThumbnailState>,
    /// Open detail view, if any.
    detail: Option<DetailState>,
    /// Search input contents.
    search_query: String,
    /// Header login form.
    login: LoginForm,
    /// Blocking notice shown over the gallery (entitlement gate).
    notice: Option<String>,
    /// Current theme.
    theme_mode: ThemeMode,
    /// Configured base URL, kept for saving settings back.
    base_url: String,
}

impl Wallboard {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let settings = AppSettings::default();
        let bridge = match NativeBridge::new() {
            Ok(bridge) => Some(Arc::new(bridge)),
            Err(error) => {
                warn!(%error, "platform bridge unavailable");
                None
            }
        };

        let app = Self {
            client: build_client(&settings.base_url),
            bridge,
            session: Session::logged_out(),
            store: PostStore::new(),
            gallery: GalleryState::new(),
            thumbnails: HashMap::new(),
            detail: None,
            search_query: String::new(),
            login: LoginForm::default(),
            notice: None,
            theme_mode: settings.theme_mode,
            base_url: settings.base_url,
        };
        palette::set_theme(app.theme_mode);

        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        info!(base_url = %settings.base_url, "settings loaded");
                        self.theme_mode = settings.theme_mode;
                        palette::set_theme(self.theme_mode);
                        self.client = build_client(&settings.base_url);
                        self.base_url = settings.base_url;
                    }
                    Err(error) => {
                        info!("no usable settings, using defaults: {error}");
                    }
                }
                // First load happens once the base URL is known.
                return self.load_board(DEFAULT_BOARD);
            }
            Message::SettingsSaved(result) => {
                if let Err(error) = result {
                    warn!("failed to save settings: {error}");
                }
            }
            Message::ToggleTheme => {
                self.theme_mode = match self.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                palette::set_theme(self.theme_mode);
                let settings = AppSettings {
                    base_url: self.base_url.clone(),
                    theme_mode: self.theme_mode,
                };
                return Task::perform(save_settings(settings), Message::SettingsSaved);
            }
            Message::BoardSelected(board) => {
                if self.gallery.mode != model::BrowseMode::Board(board) {
                    return self.load_board(board);
                }
            }
            Message::SearchQueryChanged(query) => {
                self.search_query = query;
            }
            Message::SearchSubmitted => {
                let term = self.search_query.trim().to_string();
                if !term.is_empty() {
                    return self.run_search(term);
                }
            }
            Message::Refresh => {
                return match self.gallery.mode.clone() {
                    model::BrowseMode::Board(board) => self.load_board(board),
                    model::BrowseMode::Search(term) => self.run_search(term),
                };
            }
            Message::GalleryScrolled(viewport) => {
                let offset = viewport.absolute_offset();
                if near_bottom(
                    offset.y,
                    viewport.bounds().height,
                    viewport.content_bounds().height,
                ) && let Some(ticket) = self.gallery.begin_next_page(self.store.len())
                {
                    let client = self.client.clone();
                    return Task::perform(fetch_page(client, ticket), |(ticket, result)| {
                        Message::PageLoaded(ticket, result)
                    });
                }
            }
            Message::PageLoaded(ticket, result) => {
                if !self.gallery.accepts(ticket.generation) {
                    debug!(?ticket, "discarding stale page response");
                    return Task::none();
                }
                match result {
                    Ok(page) => {
                        let before = self.store.len();
                        self.store.append_from_board(&ticket.board, page.posts);
                        self.gallery.page_loaded(&ticket, page.total_count);
                        return self.fetch_new_thumbnails(before);
                    }
                    Err(error) => {
                        // Fresh loads clear the pane; pagination failures
                        // keep what is already rendered.
                        if ticket.page == 1 {
                            self.store.reset();
                            self.thumbnails.clear();
                        }
                        self.gallery.load_failed(error);
                    }
                }
            }
            Message::SearchLoaded(generation, result) => {
                if !self.gallery.accepts(generation) {
                    debug!(generation, "discarding stale search response");
                    return Task::none();
                }
                match result {
                    Ok(results) => {
                        let before = self.store.len();
                        self.store.append_tagged(results.posts);
                        self.gallery.search_loaded(results.total_count);
                        return self.fetch_new_thumbnails(before);
                    }
                    Err(error) => {
                        self.store.reset();
                        self.thumbnails.clear();
                        self.gallery.load_failed(error);
                    }
                }
            }
            Message::ThumbnailLoaded(key, result) => {
                if let Some(state) = self.thumbnails.get_mut(&key) {
                    *state = match result {
                        Ok(handle) => ThumbnailState::Ready(handle),
                        Err(error) => ThumbnailState::Failed(error),
                    };
                }
            }
            Message::PostOpened(key) => {
                return self.open_detail(key);
            }
            Message::DetailClosed => {
                self.detail = None;
            }
            Message::PreviewLoaded(key, result) => {
                if let Some(detail) = &mut self.detail
                    && detail.key == key
                {
                    detail.preview = match result {
                        Ok(handle) => ThumbnailState::Ready(handle),
                        Err(error) => ThumbnailState::Failed(error),
                    };
                }
            }
            Message::DisplaysLoaded(key, result) => {
                if let Some(detail) = &mut self.detail
                    && detail.key == key
                {
                    detail.targets_loaded(result);
                }
            }
            Message::TargetSelected(target) => {
                if let Some(detail) = &mut self.detail {
                    detail.selected = target;
                }
            }
            Message::ApplyPressed => {
                return self.start_apply();
            }
            Message::WallpaperApplied(result) => {
                if let Some(detail) = &mut self.detail {
                    let succeeded = result.is_ok();
                    detail.finish_apply(result);
                    if succeeded {
                        notify_applied();
                    }
                }
            }
            Message::DownloadPressed => {
                return self.start_browser_download();
            }
            Message::DownloadOpened(result) => {
                if let Some(detail) = &mut self.detail
                    && let Err(error) = result
                {
                    detail.note(StatusLine::error(error));
                }
            }
            Message::UsernameChanged(username) => {
                self.login.username = username;
            }
            Message::PasswordChanged(password) => {
                self.login.password = password;
            }
            Message::LoginSubmitted => {
                if !self.login.is_pending {
                    self.login.is_pending = true;
                    self.login.error = None;
                    let client = self.client.clone();
                    let username = self.login.username.clone();
                    let password = self.login.password.clone();
                    return Task::perform(
                        async move {
                            wallboard_core::login(&client, &username, &password)
                                .await
                                .map_err(|error| error.to_string())
                        },
                        Message::LoggedIn,
                    );
                }
            }
            Message::LoggedIn(result) => {
                self.login.is_pending = false;
                match result {
                    Ok(session) => {
                        self.session = session;
                        self.login.clear();
                    }
                    Err(error) => {
                        self.login.error = Some(error);
                    }
                }
            }
            Message::LogoutPressed => {
                // Local state clears first; the server-side invalidation
                // is best-effort and its outcome is irrelevant here.
                let old = std::mem::replace(&mut self.session, Session::logged_out());
                let client = self.client.clone();
                return Task::perform(
                    async move { wallboard_core::logout(&client, old).await },
                    |_session| Message::LogoutFinished,
                );
            }
            Message::LogoutFinished => {}
        }
        Task::none()
    }

    /// Begins a fresh load of `board`, dropping everything from the
    /// previous source.
    fn load_board(&mut self, board: &'static str) -> Task<Message> {
        let ticket = self.gallery.begin_board(board);
        self.store.reset();
        self.thumbnails.clear();
        self.detail = None;
        self.notice = None;
        let client = self.client.clone();
        Task::perform(fetch_page(client, ticket), |(ticket, result)| {
            Message::PageLoaded(ticket, result)
        })
    }

    /// Begins a fresh search for `term`.
    fn run_search(&mut self, term: String) -> Task<Message> {
        let generation = self.gallery.begin_search(term.clone());
        self.store.reset();
        self.thumbnails.clear();
        self.detail = None;
        self.notice = None;
        let client = self.client.clone();
        Task::perform(
            async move {
                let result = client
                    .search_posts(&term)
                    .await
                    .map_err(|error| error.to_string());
                (generation, result)
            },
            |(generation, result)| Message::SearchLoaded(generation, result),
        )
    }

    /// Opens the detail view for a stored post, unless the entitlement
    /// gate blocks it.
    fn open_detail(&mut self, key: PostKey) -> Task<Message> {
        let Some(post) = self.store.get(&key) else {
            return Task::none();
        };
        if !self.session.is_entitled(&post.board_id) {
            self.notice = Some(wallboard_core::Error::NotEntitled.to_string());
            return Task::none();
        }
        self.notice = None;

        let preview_url = wallboard_core::preview_url(&self.client, post);
        let mut detail = DetailState::open(key.clone(), preview_url.clone());
        let mut tasks = Vec::new();

        if let Some(url) = preview_url {
            let preview_key = key.clone();
            tasks.push(Task::perform(fetch_image(url), move |result| {
                Message::PreviewLoaded(preview_key.clone(), result)
            }));
        } else {
            detail.preview = ThumbnailState::Failed("no preview available".into());
        }

        // Monitor topology can change between openings; always re-query.
        if let Some(bridge) = self.bridge.clone() {
            let displays_key = key;
            tasks.push(Task::perform(
                async move {
                    bridge
                        .get_displays()
                        .await
                        .map_err(|error| error.to_string())
                },
                move |result| Message::DisplaysLoaded(displays_key.clone(), result),
            ));
        } else {
            detail.targets_loaded(Err("platform integration unavailable".into()));
        }

        self.detail = Some(detail);
        Task::batch(tasks)
    }

    /// Kicks off the download-then-set pipeline for the open detail view.
    fn start_apply(&mut self) -> Task<Message> {
        let Some(detail) = &mut self.detail else {
            return Task::none();
        };
        let Some(post) = self.store.get(&detail.key).cloned() else {
            detail.note(StatusLine::error("This post is no longer loaded.".into()));
            return Task::none();
        };
        let Some(bridge) = self.bridge.clone() else {
            detail.note(StatusLine::error(
                "Platform integration is unavailable.".into(),
            ));
            return Task::none();
        };
        if !detail.begin_apply() {
            return Task::none();
        }

        let client = self.client.clone();
        let session = self.session.clone();
        let target = detail.selected.clone();
        Task::perform(
            async move {
                wallboard_core::apply_wallpaper(bridge.as_ref(), &client, &session, &post, &target)
                    .await
                    .map_err(|error| error.to_string())
            },
            Message::WallpaperApplied,
        )
    }

    /// Opens the post's first attachment in the browser via the download
    /// endpoint.
    fn start_browser_download(&mut self) -> Task<Message> {
        let Some(detail) = &mut self.detail else {
            return Task::none();
        };
        let Some(post) = self.store.get(&detail.key).cloned() else {
            detail.note(StatusLine::error("This post is no longer loaded.".into()));
            return Task::none();
        };
        let Some(bridge) = self.bridge.clone() else {
            detail.note(StatusLine::error(
                "Platform integration is unavailable.".into(),
            ));
            return Task::none();
        };

        let client = self.client.clone();
        let session = self.session.clone();
        Task::perform(
            async move {
                wallboard_core::open_download_page(bridge.as_ref(), &client, &session, &post)
                    .await
                    .map_err(|error| error.to_string())
            },
            Message::DownloadOpened,
        )
    }

    /// Starts thumbnail fetches for posts appended at or after
    /// `from_index`.
    fn fetch_new_thumbnails(&mut self, from_index: usize) -> Task<Message> {
        let mut tasks = Vec::new();
        for post in self.store.all().skip(from_index) {
            let key = post.key();
            if self.thumbnails.contains_key(&key) {
                continue;
            }
            if post.thumbnail.is_empty() {
                self.thumbnails
                    .insert(key, ThumbnailState::Failed("no thumbnail".into()));
                continue;
            }
            let url = self.client.asset_url(&post.thumbnail);
            self.thumbnails.insert(key.clone(), ThumbnailState::Loading);
            tasks.push(Task::perform(fetch_image(url), move |result| {
                Message::ThumbnailLoaded(key.clone(), result)
            }));
        }
        Task::batch(tasks)
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(
            &self.search_query,
            &self.session,
            &self.login,
            self.theme_mode,
        );

        let body: Element<'_, Message> = if let Some(detail) = &self.detail
            && let Some(post) = self.store.get(&detail.key)
        {
            view::view_detail(detail, post)
        } else {
            row![
                view::view_sidebar(&self.gallery.mode),
                view::view_gallery(&self.gallery, &self.store, &self.thumbnails),
            ]
            .into()
        };

        let mut content = column![header];
        if let Some(notice) = &self.notice {
            content = content.push(
                container(text(notice.clone()).size(13).style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.danger),
                    }
                }))
                .width(Length::Fill)
                .padding([8, 16])
                .style(error_banner_style),
            );
        }

        content
            .push(container(body).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Subscribe to keyboard shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(keyboard::key::Named::Escape) => Some(Message::DetailClosed),
            Key::Named(keyboard::key::Named::F5) => Some(Message::Refresh),
            _ => None,
        })
    }
}

/// Builds a client for `base_url`, falling back to the default deployment
/// URL when the configured one does not parse.
#[allow(clippy::expect_used)]
fn build_client(base_url: &str) -> BoardClient {
    BoardClient::new(base_url).unwrap_or_else(|error| {
        warn!(%error, base_url, "invalid base URL, using default");
        BoardClient::new(&AppSettings::default().base_url).expect("default base URL parses")
    })
}

/// Fires a desktop notification after a successful apply.
fn notify_applied() {
    if let Err(error) = notify_rust::Notification::new()
        .summary("Wallboard")
        .body("Wallpaper applied successfully!")
        .show()
    {
        debug!(%error, "desktop notification failed");
    }
}

/// Fetches one board page, echoing the ticket so the response can be
/// matched to (or discarded against) the browsing generation.
async fn fetch_page(
    client: BoardClient,
    ticket: FetchTicket,
) -> (FetchTicket, Result<PostPage, String>) {
    let result = client
        .list_posts(&ticket.board, ticket.page, GALLERY_PAGE_SIZE)
        .await
        .map_err(|error| error.to_string());
    (ticket, result)
}

/// Fetches an image into an iced handle.
async fn fetch_image(url: String) -> Result<image::Handle, String> {
    let response = reqwest::get(&url).await.map_err(|error| error.to_string())?;
    if !response.status().is_success() {
        return Err(format!(
            "image request failed with status {}",
            response.status()
        ));
    }
    let bytes = response.bytes().await.map_err(|error| error.to_string())?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("wallboard")
        .join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|error| error.to_string())?;

    serde_json::from_str(&contents).map_err(|error| error.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("wallboard");

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|error| error.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|error| error.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|error| error.to_string())?;

    tracing::info!("settings saved to {:?}", settings_path);
    Ok(())
}
