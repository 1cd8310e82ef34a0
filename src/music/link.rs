use tracing::{info, warn};

const SEARCH_BASE: &str = "https://www.youtube.com/results";

/// YouTube search URL for a track — "playback" in this app is a web search
/// in the system browser.
pub fn search_url(title: &str, artist: &str) -> String {
    let query = urlencoding::encode(&format!("{title} {artist}")).into_owned();
    format!("{SEARCH_BASE}?search_query={query}")
}

pub fn open_search(title: &str, artist: &str) {
    let url = search_url(title, artist);
    info!("Opening browser search: {title} - {artist}");
    if let Err(e) = open::that(&url) {
        warn!("Could not open browser: {e}");
    }
}
