use std::sync::Arc;

use gracelyrics::{
    catalog::{Catalog, Category},
    reader::ReaderConfig,
    store::{FileStore, MemoryStore, Settings, Storage},
    ui::{app::App, state::Screen, traits::Action},
};

fn app_with(storage: Storage) -> App {
    App::with_parts(Catalog::builtin(), storage, ReaderConfig::default())
}

#[test]
fn browse_save_and_find_in_favorites() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with(Storage::new(FileStore::new(dir.path())));

    app.update(Action::Navigate(Screen::CategoryList));
    app.update(Action::SelectCategory(Category::Choir));
    assert_eq!(app.state.nav.header().title, "Choir Songs");

    let songs = app.ctx.catalog.in_category(Category::Choir);
    assert_eq!(songs.len(), 1);
    app.update(Action::SelectSong(Arc::clone(&songs[0])));
    assert_eq!(app.state.nav.active(), Screen::Lyrics);
    assert!(!app.state.nav.shows_tab_bar());

    app.update(Action::ToggleFavorite(songs[0].id.clone()));
    app.update(Action::Back);
    app.update(Action::Back);
    assert_eq!(app.state.nav.active(), Screen::CategoryList);

    app.update(Action::Navigate(Screen::Favorites));
    let saved = app
        .ctx
        .catalog
        .filter_favorites(|id| app.state.favorites.contains(id));
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Total Praise");

    drop(app);
    let reopened = app_with(Storage::new(FileStore::new(dir.path())));
    assert!(reopened.state.favorites.contains("6"));
    assert_eq!(reopened.state.nav.active(), Screen::Home);
}

#[test]
fn song_from_search_goes_back_home() {
    let mut app = app_with(Storage::new(MemoryStore::new()));
    let hit = app.ctx.catalog.search("hillsong");
    assert_eq!(hit.len(), 1);

    app.update(Action::SelectSong(Arc::clone(&hit[0])));
    app.update(Action::Back);

    assert_eq!(app.state.nav.active(), Screen::Home);
    assert!(app.state.nav.selected_song().is_none());
    assert!(app.state.nav.selected_category().is_none());
}

#[test]
fn corrupt_store_starts_with_defaults() {
    let storage = Storage::new(
        MemoryStore::new()
            .with_entry("settings", "{not json")
            .with_entry("favorites", "42"),
    );
    let app = app_with(storage);

    assert_eq!(app.state.settings, Settings::default());
    assert!(app.state.favorites.is_empty());
}

#[test]
fn out_of_range_settings_are_clamped_on_load() {
    let storage = Storage::new(MemoryStore::new().with_entry(
        "settings",
        r#"{"fontSize":99,"darkMode":true,"autoScrollSpeed":-4}"#,
    ));
    let app = app_with(storage);

    assert_eq!(
        app.state.settings,
        Settings {
            font_size: 36,
            dark_mode: true,
            auto_scroll_speed: 0,
        }
    );
}
