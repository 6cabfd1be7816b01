mod error;
mod songs;

use std::{collections::HashSet, fmt, path::Path, sync::Arc};

use serde::{Deserialize, Serialize};

pub use error::CatalogError;

/// Number of songs shown under "New & Trending" while the search box is empty.
pub const TRENDING_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Worship Songs")]
    Worship,
    #[serde(rename = "Praise Songs")]
    Praise,
    #[serde(rename = "Youth Songs")]
    Youth,
    #[serde(rename = "New Soul Songs")]
    NewSoul,
    #[serde(rename = "Choir Songs")]
    Choir,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Worship,
        Category::Praise,
        Category::Youth,
        Category::NewSoul,
        Category::Choir,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Worship => "Worship Songs",
            Category::Praise => "Praise Songs",
            Category::Youth => "Youth Songs",
            Category::NewSoul => "New Soul Songs",
            Category::Choir => "Choir Songs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub category: Category,
    pub lyrics: String,
    pub preview: String,
}

/// Read-only song collection handed to the UI at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Arc<Song>>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(songs.len());
        for song in &songs {
            if !seen.insert(song.id.as_str()) {
                return Err(CatalogError::DuplicateId(song.id.clone()));
            }
        }

        Ok(Self {
            songs: songs.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn builtin() -> Self {
        let songs = songs::BUILTIN
            .iter()
            .map(|entry| {
                Arc::new(Song {
                    id: entry.id.to_string(),
                    title: entry.title.to_string(),
                    artist: entry.artist.to_string(),
                    category: entry.category,
                    lyrics: entry.lyrics.to_string(),
                    preview: entry.preview.to_string(),
                })
            })
            .collect();

        Self { songs }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let songs: Vec<Song> = serde_json::from_str(json)?;
        Self::new(songs)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn songs(&self) -> &[Arc<Song>] {
        &self.songs
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Song>> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn in_category(&self, category: Category) -> Vec<Arc<Song>> {
        self.songs
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive title/artist match. An empty query yields the trending head.
    pub fn search(&self, query: &str) -> Vec<Arc<Song>> {
        if query.is_empty() {
            return self.songs.iter().take(TRENDING_LIMIT).cloned().collect();
        }

        let needle = query.to_lowercase();
        self.songs
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&needle)
                    || s.artist.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Songs whose id passes `is_favorite`, in catalog order. Unknown ids never show up.
    pub fn filter_favorites(&self, is_favorite: impl Fn(&str) -> bool) -> Vec<Arc<Song>> {
        self.songs
            .iter()
            .filter(|s| is_favorite(&s.id))
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, category: Category) -> Song {
        Song {
            id: id.to_string(),
            title: format!("Song {id}"),
            artist: "Someone".to_string(),
            category,
            lyrics: "line one\nline two".to_string(),
            preview: "line one...".to_string(),
        }
    }

    #[test]
    fn category_listing_keeps_only_matching_songs() {
        let catalog = Catalog::new(vec![
            song("1", Category::Worship),
            song("2", Category::Praise),
        ])
        .unwrap();

        let ids: Vec<_> = catalog
            .in_category(Category::Worship)
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn builtin_catalog_has_six_songs_in_declared_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog.songs().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(catalog.get("4").unwrap().title, "How Great Thou Art");
        assert_eq!(catalog.in_category(Category::Worship).len(), 2);
        assert!(catalog.in_category(Category::Choir)[0].lyrics.contains("total praise"));
    }

    #[test]
    fn empty_query_shows_trending_head() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.search("").len(), TRENDING_LIMIT);
    }

    #[test]
    fn search_matches_title_or_artist_ignoring_case() {
        let catalog = Catalog::builtin();

        let by_title: Vec<_> = catalog.search("GRACE").iter().map(|s| s.id.clone()).collect();
        assert_eq!(by_title, vec!["1"]);

        let by_artist: Vec<_> = catalog.search("hillsong").iter().map(|s| s.id.clone()).collect();
        assert_eq!(by_artist, vec!["3"]);

        assert!(catalog.search("no such hymn").is_empty());
    }

    #[test]
    fn json_catalog_uses_category_labels() {
        let json = r#"[
            {"id":"a","title":"T","artist":"A","category":"Youth Songs","lyrics":"x","preview":"x"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.songs()[0].category, Category::Youth);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![song("1", Category::Worship), song("1", Category::Choir)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn unknown_category_label_is_a_json_error() {
        let json = r#"[{"id":"a","title":"T","artist":"A","category":"Jazz","lyrics":"","preview":""}]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn orphan_favorites_are_ignored() {
        let catalog = Catalog::builtin();
        let favs = ["2", "999"];
        let ids: Vec<_> = catalog
            .filter_favorites(|id| favs.contains(&id))
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }
}
