//! Detail view state: the opened post, display targets, and the apply
//! pipeline's busy flag.

use wallboard_core::PostKey;
use wallboard_platform::{DisplayTarget, WallpaperTarget};

use super::thumbnail::ThumbnailState;

/// Display-target list for the opened post. Queried fresh on every
/// opening, since monitor topology can change between openings.
#[derive(Debug, Clone)]
pub enum TargetsState {
    /// Enumeration in progress.
    Loading,
    /// Targets ready to pick from.
    Ready(Vec<DisplayTarget>),
    /// Enumeration failed; only the synthetic All target is offered.
    Failed(String),
}

/// Transient status line under the detail actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Literal message shown to the user.
    pub text: String,
    /// Whether this is a failure (rendered in the danger color).
    pub is_error: bool,
}

impl StatusLine {
    /// A success confirmation.
    #[must_use]
    pub const fn ok(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    /// A failure message.
    #[must_use]
    pub const fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// State of the opened detail view.
#[derive(Debug)]
pub struct DetailState {
    /// Which stored post is open.
    pub key: PostKey,
    /// Resolved preview image URL, if the post has any art.
    pub preview_url: Option<String>,
    /// Preview fetch state.
    pub preview: ThumbnailState,
    /// Display enumeration state.
    pub targets: TargetsState,
    /// Currently selected wallpaper destination.
    pub selected: WallpaperTarget,
    /// True while the download-then-apply pipeline runs; the apply
    /// control is disabled exactly as long as this is set.
    pub is_applying: bool,
    /// Latest confirmation or failure, if any.
    pub status: Option<StatusLine>,
}

impl DetailState {
    /// Opens the detail view for `key`. Targets start loading; until they
    /// arrive only the synthetic All target exists and stays selected.
    #[must_use]
    pub const fn open(key: PostKey, preview_url: Option<String>) -> Self {
        Self {
            key,
            preview_url,
            preview: ThumbnailState::Loading,
            targets: TargetsState::Loading,
            selected: WallpaperTarget::All,
            is_applying: false,
            status: None,
        }
    }

    /// Applies the display enumeration result. On success the first
    /// display becomes the default selection, mirroring the enumeration
    /// order shown to the user.
    pub fn targets_loaded(&mut self, result: Result<Vec<DisplayTarget>, String>) {
        match result {
            Ok(displays) => {
                if let Some(first) = displays.first() {
                    self.selected = WallpaperTarget::Display(first.id.clone());
                }
                self.targets = TargetsState::Ready(displays);
            }
            Err(message) => {
                self.selected = WallpaperTarget::All;
                self.targets = TargetsState::Failed(message);
            }
        }
    }

    /// Marks the apply pipeline as running. Returns `false` (and changes
    /// nothing) when a run is already in progress.
    pub fn begin_apply(&mut self) -> bool {
        if self.is_applying {
            return false;
        }
        self.is_applying = true;
        self.status = None;
        true
    }

    /// Records the pipeline outcome. The busy flag clears on every exit
    /// path; the apply control must come back no matter what happened.
    pub fn finish_apply(&mut self, result: Result<(), String>) {
        self.is_applying = false;
        self.status = Some(match result {
            Ok(()) => StatusLine::ok("Wallpaper applied successfully!".into()),
            Err(message) => StatusLine::error(message),
        });
    }

    /// Shows a message without touching the busy flag (used by the
    /// browser-download path).
    pub fn note(&mut self, status: StatusLine) {
        self.status = Some(status);
    }
}
