use ratatui::style::{Color, Modifier, Style};

// ─── Color Palette ───────────────────────────────────────────────────────────
pub const BG:          Color = Color::Rgb(14,  17,  23);
pub const SURFACE:     Color = Color::Rgb(26,  32,  44);
pub const SURFACE_SEL: Color = Color::Rgb(36,  48,  70);

pub const PRIMARY:     Color = Color::Rgb(96,  165, 250); // sky blue
pub const ACCENT:      Color = Color::Rgb(45,  212, 191); // sea teal
pub const SUN:         Color = Color::Rgb(251, 191, 36);  // sun gold
pub const RAIN:        Color = Color::Rgb(129, 140, 248); // rain indigo

pub const TEXT:        Color = Color::Rgb(222, 226, 235);
pub const TEXT_DIM:    Color = Color::Rgb(140, 148, 165);
pub const TEXT_MUTED:  Color = Color::Rgb(84,  92,  110);

pub const BORDER:      Color = Color::Rgb(45,  55,  75);
pub const BORDER_FOCUSED: Color = PRIMARY;

pub const ERROR:       Color = Color::Rgb(248, 113, 113);

// ─── Styles ──────────────────────────────────────────────────────────────────
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn accent_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(SURFACE_SEL)
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn muted_style() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUSED)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn playing_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn sun_style() -> Style {
    Style::default().fg(SUN).add_modifier(Modifier::BOLD)
}

pub fn rain_style() -> Style {
    Style::default().fg(RAIN)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}
