mod command;
mod error;

use std::{env, ffi::OsStr, path::Path};

use crate::catalog::Song;

pub use command::CommandShare;
pub use error::ShareError;

pub const SHARE_CMD_ENV: &str = "GRACELYRICS_SHARE_CMD";
const ATTRIBUTION: &str = "Shared via GraceLyrics App";

/// Clipboard helpers tried in order when no explicit command is configured.
const CANDIDATES: &[&str] = &[
    "pbcopy",
    "wl-copy",
    "xclip -selection clipboard",
    "xsel --clipboard --input",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    pub fn for_song(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            text: format!(
                "{} - {}\n\n{}\n\n{ATTRIBUTION}",
                song.title, song.artist, song.lyrics
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user backed out. Not an error.
    Cancelled,
}

pub trait ShareCapability: Send + Sync {
    fn name(&self) -> &str;
    fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError>;
}

/// Resolved once per share request.
pub enum Share {
    Available(Box<dyn ShareCapability>),
    Unavailable,
}

impl Share {
    pub fn detect() -> Self {
        let configured = env::var(SHARE_CMD_ENV).ok();
        let path = env::var_os("PATH");
        Self::detect_with(configured.as_deref(), path.as_deref())
    }

    pub fn detect_with(configured: Option<&str>, path: Option<&OsStr>) -> Self {
        if let Some(cmd) = configured.and_then(CommandShare::parse) {
            return Share::Available(Box::new(cmd));
        }

        let Some(path) = path else {
            return Share::Unavailable;
        };

        CANDIDATES
            .iter()
            .filter_map(|line| CommandShare::parse(line))
            .find(|cmd| find_in_path(cmd.program(), path))
            .map_or(Share::Unavailable, |cmd| Share::Available(Box::new(cmd)))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Share::Available(_))
    }
}

fn find_in_path(program: &str, path: &OsStr) -> bool {
    env::split_paths(path).any(|dir| is_executable(&dir.join(program)))
}

#[cfg(unix)]
fn is_executable(candidate: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    candidate
        .metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(candidate: &Path) -> bool {
    candidate.is_file() || candidate.with_extension("exe").is_file()
}
