pub mod state;

use anyhow::Result;
use chrono::Timelike;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::{sync::Arc, time::Duration};
use strum::IntoEnumIterator;
use tokio::{sync::mpsc, time};
use tracing::{debug, info, warn};

use crate::{
    app::state::{AppState, Genre, Notification},
    config::Config,
    events::{map_key_to_action, UserAction},
    music::{catalog, link, mood},
    weather::{
        client::{WeatherApiClient, WeatherProvider},
        location::{resolve_location, IpLocationProvider, LocationProvider},
        Coordinates, WeatherSnapshot,
    },
};

const TICK_MS: u64 = 80; // UI tick (animations, EQ bars, simulated progress)

/// Outcome of one background refresh cycle. The location stage can never
/// fail (it falls back to the default city), so only the weather fetch
/// distinguishes success from the degraded path.
#[derive(Debug)]
pub enum FetchOutcome {
    Weather(WeatherSnapshot),
    Failed(String),
}

#[derive(Debug)]
pub struct FetchResult {
    pub seq: u64,
    pub outcome: FetchOutcome,
}

/// One full location → weather cycle, exactly one attempt each.
pub async fn fetch_weather_cycle(
    location: &dyn LocationProvider,
    weather: &dyn WeatherProvider,
    default: Coordinates,
) -> FetchOutcome {
    let coords = resolve_location(location, default).await;
    match weather.current(coords).await {
        Ok(snapshot) => FetchOutcome::Weather(snapshot),
        Err(e) => {
            warn!("Weather fetch failed: {e}");
            FetchOutcome::Failed(e.to_string())
        }
    }
}

pub struct App {
    pub state: AppState,
    config: Config,
    location: Arc<dyn LocationProvider>,
    weather: Arc<dyn WeatherProvider>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let weather = Arc::new(WeatherApiClient::new(&config));
        App {
            state: AppState::default(),
            config,
            location: Arc::new(IpLocationProvider::new()),
            weather,
        }
    }

    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        // ── Background fetch channel ─────────────────────────────────────
        let (fetch_tx, mut fetch_rx) = mpsc::channel::<FetchResult>(4);

        // Kick off the first refresh immediately
        self.start_refresh(&fetch_tx);

        // ── Main event loop ──────────────────────────────────────────────
        let mut tick_interval = time::interval(Duration::from_millis(TICK_MS));
        let mut event_stream = EventStream::new();

        loop {
            // Draw
            terminal.draw(|f| crate::ui::render(f, &self.state))?;

            // Wait for next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.state.update_eq_bars();
                    self.state.tick_notification();
                    self.state.tick_progress(TICK_MS as u32);
                }
                Some(result) = fetch_rx.recv() => {
                    self.apply_fetch_result(result);
                }
                maybe_event = event_stream.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        if let Some(action) = map_key_to_action(key) {
                            self.handle_action(action, &fetch_tx);
                        }
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Spawn a location → weather cycle tagged with a fresh generation.
    /// Earlier in-flight cycles keep running but their results get dropped
    /// on arrival (last requested wins).
    fn start_refresh(&mut self, fetch_tx: &mpsc::Sender<FetchResult>) {
        self.state.refresh_seq += 1;
        self.state.is_loading = true;
        let seq = self.state.refresh_seq;
        let location = self.location.clone();
        let weather = self.weather.clone();
        let default = Coordinates {
            latitude: self.config.default_latitude,
            longitude: self.config.default_longitude,
        };
        let tx = fetch_tx.clone();
        tokio::spawn(async move {
            let outcome = fetch_weather_cycle(location.as_ref(), weather.as_ref(), default).await;
            let _ = tx.send(FetchResult { seq, outcome }).await;
        });
    }

    pub(crate) fn apply_fetch_result(&mut self, result: FetchResult) {
        if result.seq != self.state.refresh_seq {
            debug!(
                "Discarding stale fetch result (seq {} < {})",
                result.seq, self.state.refresh_seq
            );
            return;
        }
        self.state.is_loading = false;
        match result.outcome {
            FetchOutcome::Weather(snapshot) => {
                info!("Applying weather for {}", snapshot.location_label());
                self.state.weather = Some(snapshot);
                self.state.weather_failed = false;
            }
            FetchOutcome::Failed(msg) => {
                self.state.weather = None;
                self.state.weather_failed = true;
                self.state
                    .set_notification(Notification::error(format!("날씨 업데이트 실패: {msg}")));
            }
        }
        self.rebuild_recommendation();
    }

    /// Re-run the mood → catalog stages against the cached snapshot. The
    /// playlist is rebuilt wholesale; an empty result degrades to the
    /// synthetic error track instead of failing the UI.
    pub(crate) fn rebuild_recommendation(&mut self) {
        let hour = chrono::Local::now().hour();
        let rec = mood::recommend(
            self.state.weather.as_ref(),
            self.state.selected_genre,
            hour,
        );
        let mut tracks = catalog::lookup_tracks(&rec.search_terms);
        if tracks.is_empty() {
            tracks = vec![catalog::error_track()];
        }
        self.state.set_playlist(rec.reason, tracks);
    }

    // ── Action handler ───────────────────────────────────────────────────
    fn handle_action(&mut self, action: UserAction, fetch_tx: &mpsc::Sender<FetchResult>) {
        match action {
            UserAction::Quit => {
                self.state.should_quit = true;
            }
            UserAction::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
            }
            UserAction::Back => {
                if self.state.show_help {
                    self.state.show_help = false;
                }
            }
            UserAction::NavigateUp => self.state.navigate_up(),
            UserAction::NavigateDown => self.state.navigate_down(),
            UserAction::Select => {
                let idx = self.state.selected_track;
                self.state.select_track(idx);
                let now_playing = self
                    .state
                    .current_track()
                    .map(|t| format!("재생 중: {} - {}", t.title, t.artist));
                if let Some(msg) = now_playing {
                    self.state.set_notification(Notification::info(msg));
                }
            }
            UserAction::TogglePlay => {
                if !self.state.playlist.is_empty() {
                    self.state.toggle_play();
                    let msg = if self.state.player.is_playing { "Resumed" } else { "Paused" };
                    self.state.set_notification(Notification::info(msg));
                }
            }
            UserAction::NextTrack => {
                self.state.next_track();
            }
            UserAction::PrevTrack => {
                self.state.previous_track();
            }
            UserAction::RefreshWeather => {
                self.state.set_notification(Notification::info("날씨 새로고침..."));
                self.start_refresh(fetch_tx);
            }
            UserAction::SelectGenre(n) => {
                if let Some(genre) = Genre::iter().nth(n.saturating_sub(1) as usize) {
                    self.select_genre(genre);
                }
            }
            UserAction::OpenExternal => {
                if let Some(track) = self.state.playlist.get(self.state.selected_track) {
                    link::open_search(&track.title, &track.artist);
                }
            }
        }
    }

    /// Genre change re-derives the recommendation from the cached weather;
    /// it never triggers a refetch.
    pub(crate) fn select_genre(&mut self, genre: Genre) {
        if self.state.selected_genre != genre {
            self.state.selected_genre = genre;
            self.state
                .set_notification(Notification::info(format!("장르: {genre}")));
            self.rebuild_recommendation();
        }
    }
}
