pub mod empty_state;
pub mod header;
pub mod lyrics;
pub mod progress;
pub mod song_card;
pub mod tab_bar;
