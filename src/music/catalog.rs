//! Fixed in-memory track catalog. There is no real music search backend;
//! tracks are static records keyed by the first search term, padded with a
//! filler set to a consistent playlist length.

pub const MAX_PLAYLIST_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub artwork_url: String,
    pub preview_url: Option<String>,
}

impl Track {
    fn new(id: &str, title: &str, artist: &str, album: &str, artwork_url: &str) -> Track {
        Track {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            artwork_url: artwork_url.to_string(),
            preview_url: None,
        }
    }
}

/// Catalog keys are a smaller vocabulary than the Mood set: only `happy`,
/// `chill` and `peaceful` have entries, everything else falls back to the
/// `happy` list. This mirrors the shipped rule tables on purpose.
fn keyed_tracks(key: &str) -> Vec<Track> {
    match key {
        "chill" => vec![
            Track::new(
                "3",
                "drivers license",
                "Olivia Rodrigo",
                "SOUR",
                "https://via.placeholder.com/200x200/45b7d1/ffffff?text=🎼",
            ),
            Track::new(
                "4",
                "Cardigan",
                "Taylor Swift",
                "folklore",
                "https://via.placeholder.com/200x200/96ceb4/ffffff?text=🎹",
            ),
        ],
        "peaceful" => vec![
            Track::new(
                "5",
                "Weightless",
                "Marconi Union",
                "Ambient",
                "https://via.placeholder.com/200x200/ffeaa7/ffffff?text=🎺",
            ),
            Track::new(
                "6",
                "Clair de Lune",
                "Claude Debussy",
                "Classical",
                "https://via.placeholder.com/200x200/dda0dd/ffffff?text=🎻",
            ),
        ],
        _ => vec![
            Track::new(
                "1",
                "Good 4 U",
                "Olivia Rodrigo",
                "SOUR",
                "https://via.placeholder.com/200x200/ff6b6b/ffffff?text=🎵",
            ),
            Track::new(
                "2",
                "Levitating",
                "Dua Lipa",
                "Future Nostalgia",
                "https://via.placeholder.com/200x200/4ecdc4/ffffff?text=🎶",
            ),
        ],
    }
}

/// Appended to every lookup regardless of mood, so the playlist always has
/// a consistent length.
fn filler_tracks() -> Vec<Track> {
    vec![
        Track::new(
            "7",
            "Blinding Lights",
            "The Weeknd",
            "After Hours",
            "https://via.placeholder.com/200x200/74b9ff/ffffff?text=🎤",
        ),
        Track::new(
            "8",
            "Watermelon Sugar",
            "Harry Styles",
            "Fine Line",
            "https://via.placeholder.com/200x200/fd79a8/ffffff?text=🎸",
        ),
        Track::new(
            "9",
            "positions",
            "Ariana Grande",
            "Positions",
            "https://via.placeholder.com/200x200/a29bfe/ffffff?text=🎙️",
        ),
        Track::new(
            "10",
            "Therefore I Am",
            "Billie Eilish",
            "Therefore I Am",
            "https://via.placeholder.com/200x200/6c5ce7/ffffff?text=🎧",
        ),
    ]
}

/// Build a playlist from the search terms. Only the first term is used as
/// the lookup key; the result is padded with the filler set and truncated
/// to [`MAX_PLAYLIST_LEN`].
pub fn lookup_tracks(search_terms: &[&str]) -> Vec<Track> {
    let key = search_terms.first().copied().unwrap_or("happy");
    let mut tracks = keyed_tracks(key);
    tracks.extend(filler_tracks());
    tracks.truncate(MAX_PLAYLIST_LEN);
    tracks
}

/// Shown instead of a playlist when recommendation building fails. Never
/// propagates the failure to the UI shell.
pub fn error_track() -> Track {
    Track::new(
        "default1",
        "음악을 불러올 수 없습니다",
        "잠시 후 다시 시도해주세요",
        "Error",
        "https://via.placeholder.com/200x200/999999/ffffff?text=❌",
    )
}
