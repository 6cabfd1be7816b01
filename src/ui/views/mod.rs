pub mod categories;
pub mod favorites;
pub mod home;
pub mod lyrics;
pub mod settings;
pub mod share_sheet;
pub mod song_list;

pub use categories::CategoryList;
pub use favorites::SavedSongs;
pub use home::Home;
pub use lyrics::LyricsView;
pub use settings::SettingsView;
pub use share_sheet::ShareSheet;
pub use song_list::SongList;
