use crate::music::catalog::Track;
use crate::weather::WeatherSnapshot;

/// Genre filter — exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum Genre {
    #[strum(to_string = "전체")]
    All,
    #[strum(to_string = "팝")]
    Pop,
    #[strum(to_string = "록")]
    Rock,
    #[strum(to_string = "재즈")]
    Jazz,
    #[strum(to_string = "클래식")]
    Classical,
    #[strum(to_string = "일렉트로닉")]
    Electronic,
    #[strum(to_string = "인디")]
    Indie,
}

impl Default for Genre {
    fn default() -> Self {
        Genre::All
    }
}

/// Every catalog track gets the same nominal length — playback is simulated,
/// the progress bar is purely cosmetic.
pub const SIMULATED_TRACK_MS: u32 = 180_000;

#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    pub current_index: usize,
    pub is_playing: bool,
    pub progress_ms: u32,
}

impl PlayerState {
    pub fn progress_percent(&self) -> f64 {
        (self.progress_ms as f64 / SIMULATED_TRACK_MS as f64).clamp(0.0, 1.0)
    }

    pub fn progress_formatted(&self) -> String {
        let secs = self.progress_ms / 1000;
        let dur_secs = SIMULATED_TRACK_MS / 1000;
        format!(
            "{}:{:02} / {}:{:02}",
            secs / 60,
            secs % 60,
            dur_secs / 60,
            dur_secs % 60
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub message: String,
    pub remaining_ticks: u8,
    pub is_error: bool,
}

impl Notification {
    pub fn info(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 30, is_error: false }
    }
    pub fn error(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 40, is_error: true }
    }
}

pub struct AppState {
    pub weather: Option<WeatherSnapshot>,
    pub weather_failed: bool,
    pub is_loading: bool,
    /// Refresh generation — a fetch result tagged with an older generation
    /// is stale and gets discarded (last requested wins).
    pub refresh_seq: u64,
    pub selected_genre: Genre,
    pub reason: String,
    pub playlist: Vec<Track>,
    pub selected_track: usize,
    pub player: PlayerState,
    pub notification: Option<Notification>,
    pub show_help: bool,
    pub should_quit: bool,
    pub eq_bars: [u8; 24],
    pub eq_tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            weather: None,
            weather_failed: false,
            is_loading: false,
            refresh_seq: 0,
            selected_genre: Genre::All,
            reason: String::new(),
            playlist: Vec::new(),
            selected_track: 0,
            player: PlayerState::default(),
            notification: None,
            show_help: false,
            should_quit: false,
            eq_bars: [4, 6, 8, 5, 7, 9, 4, 6, 8, 5, 7, 6, 4, 8, 5, 7, 9, 3, 6, 8, 5, 7, 4, 6],
            eq_tick: 0,
        }
    }
}

impl AppState {
    /// Replace the playlist wholesale. Selection and player position reset;
    /// any simulated playback stops.
    pub fn set_playlist(&mut self, reason: String, tracks: Vec<Track>) {
        self.reason = reason;
        self.playlist = tracks;
        self.selected_track = 0;
        self.player = PlayerState::default();
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.player.current_index)
    }

    /// Start (simulated) playback of the track at `index`. Out-of-bounds is
    /// a no-op.
    pub fn select_track(&mut self, index: usize) {
        if index >= self.playlist.len() {
            return;
        }
        self.player.current_index = index;
        self.player.progress_ms = 0;
        self.player.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.player.is_playing = !self.player.is_playing;
    }

    /// No wraparound: at index 0 this is a no-op.
    pub fn previous_track(&mut self) {
        if self.player.current_index > 0 {
            let idx = self.player.current_index - 1;
            self.select_track(idx);
        }
    }

    /// No wraparound: at the last index this is a no-op.
    pub fn next_track(&mut self) {
        if self.player.current_index + 1 < self.playlist.len() {
            let idx = self.player.current_index + 1;
            self.select_track(idx);
        }
    }

    pub fn navigate_up(&mut self) {
        if self.selected_track > 0 {
            self.selected_track -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        let max = self.playlist.len().saturating_sub(1);
        if self.selected_track < max {
            self.selected_track += 1;
        }
    }

    pub fn set_notification(&mut self, n: Notification) {
        self.notification = Some(n);
    }

    pub fn tick_notification(&mut self) {
        if let Some(ref mut n) = self.notification {
            if n.remaining_ticks > 0 {
                n.remaining_ticks -= 1;
            } else {
                self.notification = None;
            }
        }
    }

    pub fn update_eq_bars(&mut self) {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        self.eq_tick += 1;
        if self.player.is_playing {
            for bar in self.eq_bars.iter_mut() {
                let delta: i8 = rng.gen_range(-3..=3);
                *bar = (*bar as i8 + delta).clamp(1, 12) as u8;
            }
        } else {
            for bar in self.eq_bars.iter_mut() {
                if *bar > 1 {
                    *bar -= 1;
                }
            }
        }
    }

    /// Advance the cosmetic progress bar while "playing".
    pub fn tick_progress(&mut self, elapsed_ms: u32) {
        if self.player.is_playing {
            self.player.progress_ms =
                (self.player.progress_ms + elapsed_ms).min(SIMULATED_TRACK_MS);
        }
    }
}
