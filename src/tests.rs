#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio_test::block_on;

    use crate::app::state::{AppState, Genre, Notification, SIMULATED_TRACK_MS};
    use crate::app::{fetch_weather_cycle, App, FetchOutcome, FetchResult};
    use crate::config::Config;
    use crate::music::catalog::{error_track, lookup_tracks, Track, MAX_PLAYLIST_LEN};
    use crate::music::link::search_url;
    use crate::music::mood::{
        recommend, time_clause, Mood, DEFAULT_REASON, DEFAULT_SEARCH_TERMS,
    };
    use crate::weather::client::WeatherProvider;
    use crate::weather::location::{resolve_location, LocationProvider, DEFAULT_COORDINATES};
    use crate::weather::{Coordinates, LocationError, WeatherError, WeatherSnapshot};

    fn snapshot(condition: &str, temp_c: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: temp_c,
            feels_like_c: temp_c,
            humidity_pct: 60,
            wind_kph: 10.0,
            condition_text: condition.to_string(),
            condition_icon: String::new(),
            location_name: "Seoul".to_string(),
            country_name: "South Korea".to_string(),
        }
    }

    fn test_config() -> Config {
        Config {
            weather_api_key: "test-key".to_string(),
            weather_api_base: "http://127.0.0.1:0".to_string(),
            weather_lang: "ko".to_string(),
            default_latitude: 37.5665,
            default_longitude: 126.9780,
        }
    }

    // ── Mood rules ───────────────────────────────────────────────────────────

    #[test]
    fn test_rain_maps_to_chill() {
        assert_eq!(Mood::from_condition("Patchy rain nearby"), Mood::Chill);
        assert_eq!(Mood::from_condition("Light Drizzle"), Mood::Chill);
    }

    #[test]
    fn test_condition_match_is_case_insensitive() {
        assert_eq!(Mood::from_condition("SUNNY"), Mood::Upbeat);
        assert_eq!(Mood::from_condition("Overcast"), Mood::Mellow);
        assert_eq!(Mood::from_condition("Partly cloudy"), Mood::Mellow);
        assert_eq!(Mood::from_condition("Windy"), Mood::Energetic);
        assert_eq!(Mood::from_condition("Blowing snow"), Mood::Peaceful);
    }

    #[test]
    fn test_first_match_wins_over_lexical_order() {
        // "sunny" rule precedes "rain" in the table, so the sunny rule
        // applies even though "rain" also occurs in the text
        assert_eq!(Mood::from_condition("Sunny with rain"), Mood::Upbeat);
        // and "rain" precedes "snow"
        assert_eq!(Mood::from_condition("Rain turning to snow"), Mood::Chill);
    }

    #[test]
    fn test_unmatched_condition_falls_back_to_ambient() {
        assert_eq!(Mood::from_condition("Fog"), Mood::Ambient);
        assert_eq!(Mood::from_condition(""), Mood::Ambient);
    }

    // ── Time-of-day bands ────────────────────────────────────────────────────

    #[test]
    fn test_time_bands_half_open_lower_inclusive() {
        assert!(time_clause(6).contains("아침"));
        assert!(time_clause(11).contains("아침"));
        assert!(time_clause(12).contains("오후"));
        assert!(time_clause(17).contains("오후"));
        assert!(time_clause(18).contains("저녁"));
        assert!(time_clause(21).contains("저녁"));
        assert!(time_clause(22).contains("밤"));
        assert!(time_clause(0).contains("밤"));
        assert!(time_clause(5).contains("밤"));
    }

    #[test]
    fn test_every_hour_lands_in_exactly_one_band() {
        for hour in 0..24 {
            let clause = time_clause(hour);
            let hits = ["아침", "오후", "저녁", "밤"]
                .iter()
                .filter(|kw| clause.contains(*kw))
                .count();
            assert_eq!(hits, 1, "hour {hour} produced clause {clause:?}");
        }
    }

    // ── Recommendation derivation ────────────────────────────────────────────

    #[test]
    fn test_scenario_sunny_morning_all_genres() {
        let snap = snapshot("Sunny", 25.0);
        let rec = recommend(Some(&snap), Genre::All, 9);
        assert!(rec.reason.contains("맑은"));
        assert!(rec.reason.contains("25°C"));
        assert!(rec.reason.contains("아침"));
        assert_eq!(rec.search_terms, vec!["happy", "upbeat", "energetic"]);
    }

    #[test]
    fn test_missing_weather_takes_degraded_path() {
        let rec = recommend(None, Genre::Jazz, 14);
        assert_eq!(rec.reason, DEFAULT_REASON);
        assert_eq!(rec.search_terms, DEFAULT_SEARCH_TERMS.to_vec());
    }

    #[test]
    fn test_search_terms_never_exceed_three() {
        use strum::IntoEnumIterator;
        let snap = snapshot("Cloudy", 12.0);
        for genre in Genre::iter() {
            let rec = recommend(Some(&snap), genre, 9);
            assert!(rec.search_terms.len() <= 3);
        }
    }

    #[test]
    fn test_mood_terms_take_priority_over_genre_terms() {
        // Every mood supplies at least three terms, so the genre suffix is
        // always truncated away — cached-weather genre switches only change
        // the terms when the mood table is short (it never is)
        let snap = snapshot("Cloudy", 12.0);
        let rec = recommend(Some(&snap), Genre::Jazz, 9);
        assert_eq!(rec.search_terms, vec!["mellow", "smooth", "relaxing"]);
    }

    #[test]
    fn test_rounded_temperature_in_reason() {
        let snap = snapshot("Sunny", 24.6);
        let rec = recommend(Some(&snap), Genre::All, 9);
        assert!(rec.reason.contains("25°C"));
    }

    // ── Track catalog ────────────────────────────────────────────────────────

    #[test]
    fn test_lookup_uses_first_term_only() {
        let tracks = lookup_tracks(&["chill", "happy", "peaceful"]);
        assert_eq!(tracks[0].title, "drivers license");
    }

    #[test]
    fn test_unknown_key_falls_back_to_happy() {
        let tracks = lookup_tracks(&["mellow"]);
        assert_eq!(tracks[0].title, "Good 4 U");
        let tracks = lookup_tracks(&[]);
        assert_eq!(tracks[0].title, "Good 4 U");
    }

    #[test]
    fn test_playlist_length_bounds() {
        for terms in [&["happy"][..], &["chill"][..], &["peaceful"][..], &["nonsense"][..]] {
            let tracks = lookup_tracks(terms);
            assert!(tracks.len() <= MAX_PLAYLIST_LEN);
            assert!(tracks.len() >= 4, "filler alone guarantees 4 tracks");
        }
    }

    #[test]
    fn test_filler_always_appended() {
        let tracks = lookup_tracks(&["peaceful"]);
        let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert!(ids.ends_with(&["7", "8", "9", "10"]));
    }

    #[test]
    fn test_no_duplicate_track_ids() {
        for terms in [&["happy"][..], &["chill"][..], &["peaceful"][..]] {
            let tracks = lookup_tracks(terms);
            let mut ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), tracks.len());
        }
    }

    #[test]
    fn test_tracks_never_carry_preview_urls() {
        for track in lookup_tracks(&["happy"]) {
            assert!(track.preview_url.is_none());
        }
        assert!(error_track().preview_url.is_none());
    }

    // ── Player transport ─────────────────────────────────────────────────────

    fn state_with_playlist() -> AppState {
        let mut state = AppState::default();
        state.set_playlist("reason".to_string(), lookup_tracks(&["happy"]));
        state
    }

    #[test]
    fn test_previous_at_first_track_is_noop() {
        let mut state = state_with_playlist();
        state.select_track(0);
        state.previous_track();
        assert_eq!(state.player.current_index, 0);
    }

    #[test]
    fn test_next_at_last_track_is_noop() {
        let mut state = state_with_playlist();
        let last = state.playlist.len() - 1;
        state.select_track(last);
        state.next_track();
        assert_eq!(state.player.current_index, last);
    }

    #[test]
    fn test_select_out_of_bounds_is_noop() {
        let mut state = state_with_playlist();
        state.select_track(2);
        state.select_track(999);
        assert_eq!(state.player.current_index, 2);
        assert!(state.player.is_playing);
    }

    #[test]
    fn test_select_restarts_progress() {
        let mut state = state_with_playlist();
        state.select_track(0);
        state.tick_progress(5_000);
        assert_eq!(state.player.progress_ms, 5_000);
        state.select_track(1);
        assert_eq!(state.player.progress_ms, 0);
    }

    #[test]
    fn test_toggle_play_with_empty_playlist_is_noop() {
        let mut state = AppState::default();
        state.toggle_play();
        assert!(!state.player.is_playing);
    }

    #[test]
    fn test_set_playlist_stops_playback() {
        let mut state = state_with_playlist();
        state.select_track(3);
        state.set_playlist("new".to_string(), lookup_tracks(&["chill"]));
        assert_eq!(state.player.current_index, 0);
        assert!(!state.player.is_playing);
        assert_eq!(state.selected_track, 0);
    }

    #[test]
    fn test_progress_clamps_at_track_end() {
        let mut state = state_with_playlist();
        state.select_track(0);
        state.tick_progress(SIMULATED_TRACK_MS * 2);
        assert_eq!(state.player.progress_ms, SIMULATED_TRACK_MS);
        assert_eq!(state.player.progress_percent(), 1.0);
    }

    #[test]
    fn test_navigation_clamps_at_list_bounds() {
        let mut state = state_with_playlist();
        state.navigate_up();
        assert_eq!(state.selected_track, 0);
        for _ in 0..100 {
            state.navigate_down();
        }
        assert_eq!(state.selected_track, state.playlist.len() - 1);
    }

    // ── Notification ─────────────────────────────────────────────────────────

    #[test]
    fn test_notification_tick_decrements() {
        let mut state = AppState::default();
        state.set_notification(Notification::info("hello"));
        assert!(state.notification.is_some());
        // remaining_ticks=30: takes 30 ticks to reach 0, then 1 more tick to clear
        for _ in 0..31 {
            state.tick_notification();
        }
        assert!(state.notification.is_none());
    }

    // ── External link dispatcher ─────────────────────────────────────────────

    #[test]
    fn test_search_url_encodes_title_and_artist() {
        let url = search_url("Good 4 U", "Olivia Rodrigo");
        assert_eq!(
            url,
            "https://www.youtube.com/results?search_query=Good%204%20U%20Olivia%20Rodrigo"
        );
    }

    // ── Capability fakes: location + weather pipeline ────────────────────────

    struct FixedLocation(Coordinates);

    #[async_trait]
    impl LocationProvider for FixedLocation {
        async fn current_position(&self) -> Result<Coordinates, LocationError> {
            Ok(self.0)
        }
    }

    struct DeniedLocation;

    #[async_trait]
    impl LocationProvider for DeniedLocation {
        async fn current_position(&self) -> Result<Coordinates, LocationError> {
            Err(LocationError::NoPosition)
        }
    }

    struct FixedWeather(WeatherSnapshot);

    #[async_trait]
    impl WeatherProvider for FixedWeather {
        async fn current(&self, _coords: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
            Ok(self.0.clone())
        }
    }

    struct FailingWeather(u16);

    #[async_trait]
    impl WeatherProvider for FailingWeather {
        async fn current(&self, _coords: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
            Err(WeatherError::Api { status: self.0 })
        }
    }

    #[test]
    fn test_denied_geolocation_falls_back_to_default_city() {
        let coords = block_on(resolve_location(&DeniedLocation, DEFAULT_COORDINATES));
        assert_eq!(coords, DEFAULT_COORDINATES);
        assert!((coords.latitude - 37.5665).abs() < 1e-9);
        assert!((coords.longitude - 126.9780).abs() < 1e-9);
    }

    #[test]
    fn test_fetch_cycle_happy_path() {
        let location = FixedLocation(Coordinates { latitude: 1.0, longitude: 2.0 });
        let weather = FixedWeather(snapshot("Sunny", 25.0));
        let outcome = block_on(fetch_weather_cycle(&location, &weather, DEFAULT_COORDINATES));
        match outcome {
            FetchOutcome::Weather(s) => assert_eq!(s.condition_text, "Sunny"),
            other => panic!("expected weather, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_cycle_server_error_degrades() {
        let location = DeniedLocation;
        let weather = FailingWeather(500);
        let outcome = block_on(fetch_weather_cycle(&location, &weather, DEFAULT_COORDINATES));
        match outcome {
            FetchOutcome::Failed(msg) => assert!(msg.contains("500")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    // ── App pipeline ─────────────────────────────────────────────────────────

    #[test]
    fn test_failed_fetch_builds_default_playlist() {
        let mut app = App::new(test_config());
        app.state.refresh_seq = 1;
        app.apply_fetch_result(FetchResult {
            seq: 1,
            outcome: FetchOutcome::Failed("HTTP 500".to_string()),
        });
        assert!(app.state.weather.is_none());
        assert!(app.state.weather_failed);
        assert_eq!(app.state.reason, DEFAULT_REASON);
        // default terms key into the happy entry + filler
        assert!(app.state.playlist.len() >= 4);
    }

    #[test]
    fn test_stale_fetch_result_is_discarded() {
        let mut app = App::new(test_config());
        app.state.refresh_seq = 2;
        app.apply_fetch_result(FetchResult {
            seq: 1,
            outcome: FetchOutcome::Weather(snapshot("Sunny", 25.0)),
        });
        assert!(app.state.weather.is_none(), "stale result must not apply");
        assert!(app.state.playlist.is_empty());
    }

    #[test]
    fn test_latest_fetch_result_applies() {
        let mut app = App::new(test_config());
        app.state.refresh_seq = 2;
        app.apply_fetch_result(FetchResult {
            seq: 2,
            outcome: FetchOutcome::Weather(snapshot("Snow", -1.0)),
        });
        assert!(app.state.weather.is_some());
        assert!(app.state.reason.contains("눈"));
        assert_eq!(app.state.playlist[0].title, "Weightless");
    }

    #[test]
    fn test_genre_change_reuses_cached_weather() {
        let mut app = App::new(test_config());
        app.state.refresh_seq = 1;
        app.apply_fetch_result(FetchResult {
            seq: 1,
            outcome: FetchOutcome::Weather(snapshot("Cloudy", 12.0)),
        });
        let seq_before = app.state.refresh_seq;
        app.select_genre(Genre::Jazz);
        assert_eq!(app.state.selected_genre, Genre::Jazz);
        assert_eq!(app.state.refresh_seq, seq_before, "no refetch on genre change");
        assert!(app.state.weather.is_some());
        assert!(app.state.reason.contains("흐린"));
    }

    #[test]
    fn test_same_genre_selection_is_noop() {
        let mut app = App::new(test_config());
        app.state.refresh_seq = 1;
        app.apply_fetch_result(FetchResult {
            seq: 1,
            outcome: FetchOutcome::Weather(snapshot("Sunny", 20.0)),
        });
        let reason_before = app.state.reason.clone();
        app.state.notification = None;
        app.select_genre(Genre::All);
        assert_eq!(app.state.reason, reason_before);
        assert!(app.state.notification.is_none());
    }

    // ── Provider response parsing ────────────────────────────────────────────

    #[test]
    fn test_weather_response_parsing() {
        let body = r#"{
            "location": { "name": "Seoul", "country": "South Korea" },
            "current": {
                "temp_c": 18.4,
                "feelslike_c": 17.9,
                "humidity": 72,
                "wind_kph": 13.0,
                "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/64x64/day/116.png" }
            }
        }"#;
        let parsed: crate::weather::ApiResponse = serde_json::from_str(body).unwrap();
        let snap = WeatherSnapshot::from(parsed);
        assert_eq!(snap.location_label(), "Seoul, South Korea");
        assert_eq!(snap.humidity_pct, 72);
        assert_eq!(snap.condition_text, "Partly cloudy");
        assert_eq!(Mood::from_condition(&snap.condition_text), Mood::Mellow);
    }

    #[test]
    fn test_error_track_is_the_only_fallback_entry() {
        let track: Track = error_track();
        assert_eq!(track.title, "음악을 불러올 수 없습니다");
        assert_eq!(track.artist, "잠시 후 다시 시도해주세요");
    }
}
