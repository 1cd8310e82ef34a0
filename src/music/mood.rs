use crate::app::state::Genre;
use crate::weather::WeatherSnapshot;

/// Mood labels derived from the weather condition text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Mood {
    #[strum(to_string = "☀️ Upbeat")]
    Upbeat,
    #[strum(to_string = "🌧️ Chill")]
    Chill,
    #[strum(to_string = "❄️ Peaceful")]
    Peaceful,
    #[strum(to_string = "☁️ Mellow")]
    Mellow,
    #[strum(to_string = "💨 Energetic")]
    Energetic,
    #[strum(to_string = "🌤️ Ambient")]
    Ambient,
}

/// Ordered rule table over the lower-cased condition text. The first row
/// whose keyword matches wins — "sunny with rain" resolves by this order,
/// not by which keyword appears first in the text.
const CONDITION_RULES: &[(&[&str], Mood)] = &[
    (&["sunny", "clear"], Mood::Upbeat),
    (&["rain", "drizzle"], Mood::Chill),
    (&["snow"], Mood::Peaceful),
    (&["cloud", "overcast"], Mood::Mellow),
    (&["wind"], Mood::Energetic),
];

impl Mood {
    /// Never fails — unmatched condition text falls through to Ambient.
    pub fn from_condition(condition_text: &str) -> Mood {
        let condition = condition_text.to_lowercase();
        for (keywords, mood) in CONDITION_RULES {
            if keywords.iter().any(|kw| condition.contains(kw)) {
                return *mood;
            }
        }
        Mood::Ambient
    }

    fn reason_clause(&self, temp_c: f64) -> String {
        let temp = temp_c.round() as i64;
        match self {
            Mood::Upbeat => format!("☀️ 맑은 날씨 ({temp}°C)에 어울리는 밝고 경쾌한 음악"),
            Mood::Chill => format!("🌧️ 비 오는 날 ({temp}°C)에 어울리는 차분하고 감성적인 음악"),
            Mood::Peaceful => format!("❄️ 눈 오는 날 ({temp}°C)에 어울리는 고요하고 아름다운 음악"),
            Mood::Mellow => format!("☁️ 흐린 날 ({temp}°C)에 어울리는 부드럽고 편안한 음악"),
            Mood::Energetic => format!("💨 바람 부는 날 ({temp}°C)에 어울리는 역동적인 음악"),
            Mood::Ambient => format!("🌤️ 오늘 날씨 ({temp}°C)에 어울리는 음악"),
        }
    }

    fn search_terms(&self) -> &'static [&'static str] {
        match self {
            Mood::Upbeat => &["happy", "upbeat", "energetic", "positive", "sunshine"],
            Mood::Chill => &["chill", "rain", "mellow", "acoustic", "indie"],
            Mood::Peaceful => &["peaceful", "calm", "ambient", "winter", "soft"],
            Mood::Mellow => &["mellow", "smooth", "relaxing", "easy listening"],
            Mood::Energetic => &["energetic", "rock", "pop", "dance", "workout"],
            Mood::Ambient => &["ambient", "atmospheric", "dreamy", "ethereal"],
        }
    }
}

/// Hour bands are half-open, lower-inclusive: a boundary hour belongs to
/// the later band (6 is morning, 22 is night).
pub(crate) fn time_clause(hour: u32) -> &'static str {
    match hour {
        6..=11 => " - 상쾌한 아침을 위한 선곡",
        12..=17 => " - 활기찬 오후를 위한 선곡",
        18..=21 => " - 편안한 저녁을 위한 선곡",
        _ => " - 조용한 밤을 위한 선곡",
    }
}

fn genre_terms(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::All => &[],
        Genre::Pop => &["pop", "mainstream", "chart"],
        Genre::Rock => &["rock", "alternative", "indie rock"],
        Genre::Jazz => &["jazz", "smooth jazz", "blues"],
        Genre::Classical => &["classical", "instrumental", "piano"],
        Genre::Electronic => &["electronic", "edm", "synthwave"],
        Genre::Indie => &["indie", "alternative", "folk"],
    }
}

const MAX_SEARCH_TERMS: usize = 3;

pub const DEFAULT_REASON: &str = "🎵 오늘 하루를 위한 추천 음악";
pub const DEFAULT_SEARCH_TERMS: &[&str] = &["popular", "trending", "top hits"];

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub reason: String,
    pub search_terms: Vec<&'static str>,
}

/// Derive a recommendation from the current weather, the active genre and
/// the hour of day. A missing snapshot takes the degraded path and always
/// succeeds with the fixed defaults.
pub fn recommend(snapshot: Option<&WeatherSnapshot>, genre: Genre, hour: u32) -> Recommendation {
    let snapshot = match snapshot {
        Some(s) => s,
        None => {
            return Recommendation {
                reason: DEFAULT_REASON.to_string(),
                search_terms: DEFAULT_SEARCH_TERMS.to_vec(),
            }
        }
    };

    let mood = Mood::from_condition(&snapshot.condition_text);
    let reason = format!(
        "{}{}",
        mood.reason_clause(snapshot.temperature_c),
        time_clause(hour)
    );

    // Mood terms first, genre terms appended, then truncated — mood terms
    // take priority when the cut lands inside the genre suffix.
    let mut terms: Vec<&'static str> = mood.search_terms().to_vec();
    terms.extend_from_slice(genre_terms(genre));
    terms.truncate(MAX_SEARCH_TERMS);

    Recommendation {
        reason,
        search_terms: terms,
    }
}
