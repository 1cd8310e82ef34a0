pub mod genre_bar;
pub mod help;
pub mod player_bar;
pub mod recommendations;
pub mod weather_panel;
