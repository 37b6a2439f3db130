pub mod background;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod playback;
pub mod replay;
pub mod scoreboard;
pub mod team_abbrev;
pub mod timeline;
pub mod tui;
pub mod types;
