//! Gallery browsing state: what is being browsed, what is in flight, and
//! which responses are still welcome.

use wallboard_core::DEFAULT_BOARD;

/// Pixel distance from the bottom of the scroll area that triggers the
/// next page fetch.
const SCROLL_THRESHOLD_PX: f32 = 100.0;

/// What the gallery is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseMode {
    /// One board, paginated.
    Board(&'static str),
    /// Aggregated search results for a term (single response, no
    /// pagination).
    Search(String),
}

/// Gallery loading phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryPhase {
    /// Nothing requested yet.
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// Content is on screen.
    Loaded,
    /// The last fetch failed; the message is rendered literally.
    Error(String),
}

/// Identifies one outstanding board-page fetch. Responses carry their
/// ticket back so anything issued before a board/search switch can be
/// recognized as stale and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Browsing generation the fetch belongs to.
    pub generation: u64,
    /// Board the page was requested from.
    pub board: String,
    /// Requested page number.
    pub page: u32,
}

/// Browsing state machine for the gallery.
#[derive(Debug)]
pub struct GalleryState {
    /// Current browse source.
    pub mode: BrowseMode,
    /// Current phase.
    pub phase: GalleryPhase,
    /// Server-reported total for the current source.
    pub total_count: u64,
    generation: u64,
    in_flight: bool,
    page: u32,
}

impl GalleryState {
    /// Starts idle on the default board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: BrowseMode::Board(DEFAULT_BOARD),
            phase: GalleryPhase::Idle,
            total_count: 0,
            generation: 0,
            in_flight: false,
            page: 0,
        }
    }

    /// Current browsing generation; responses from older generations are
    /// stale.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a response tagged `generation` should still be applied.
    #[must_use]
    pub const fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Begins a fresh load of `board`, invalidating every outstanding
    /// fetch.
    pub fn begin_board(&mut self, board: &'static str) -> FetchTicket {
        self.generation += 1;
        self.mode = BrowseMode::Board(board);
        self.phase = GalleryPhase::Loading;
        self.in_flight = true;
        self.page = 1;
        self.total_count = 0;
        FetchTicket {
            generation: self.generation,
            board: board.to_string(),
            page: 1,
        }
    }

    /// Begins a fresh search, invalidating every outstanding fetch.
    /// Returns the generation to tag the response with.
    pub fn begin_search(&mut self, term: String) -> u64 {
        self.generation += 1;
        self.mode = BrowseMode::Search(term);
        self.phase = GalleryPhase::Loading;
        self.in_flight = true;
        self.page = 1;
        self.total_count = 0;
        self.generation
    }

    /// Requests the next page of the current board, if pagination applies:
    /// boards only, nothing already in flight, and `loaded` posts short of
    /// the server total.
    pub fn begin_next_page(&mut self, loaded: usize) -> Option<FetchTicket> {
        if self.in_flight {
            return None;
        }
        let BrowseMode::Board(board) = &self.mode else {
            return None;
        };
        if self.phase != GalleryPhase::Loaded || loaded as u64 >= self.total_count {
            return None;
        }
        self.in_flight = true;
        Some(FetchTicket {
            generation: self.generation,
            board: board.to_string(),
            page: self.page + 1,
        })
    }

    /// Applies a successful page response for `ticket`.
    pub fn page_loaded(&mut self, ticket: &FetchTicket, total_count: u64) {
        self.in_flight = false;
        self.page = ticket.page;
        self.total_count = total_count;
        self.phase = GalleryPhase::Loaded;
    }

    /// Applies a successful search response.
    pub fn search_loaded(&mut self, total_count: u64) {
        self.in_flight = false;
        self.total_count = total_count;
        self.phase = GalleryPhase::Loaded;
    }

    /// Records a failed fetch. The grid itself only clears on fresh-load
    /// failures; the caller handles the store.
    pub fn load_failed(&mut self, message: String) {
        self.in_flight = false;
        self.phase = GalleryPhase::Error(message);
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a scroll position is within the trigger distance of the bottom
/// of the content.
#[must_use]
pub fn near_bottom(offset_y: f32, viewport_height: f32, content_height: f32) -> bool {
    content_height - (offset_y + viewport_height) <= SCROLL_THRESHOLD_PX
}
