use ratatui::style::{Color, Modifier, Style};

use crate::{store::Settings, util::colors};

/// Resolved palette. Derived from settings on every frame; nothing global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub title: Color,
}

impl Theme {
    pub fn for_settings(settings: &Settings) -> Self {
        if settings.dark_mode {
            Self {
                background: colors::WARM_DARK,
                surface: colors::SURFACE_DARK,
                text: colors::PAPER,
                muted: colors::STONE,
                accent: colors::GOLD,
                title: colors::PAPER,
            }
        } else {
            Self {
                background: colors::CREAM,
                surface: colors::SURFACE_LIGHT,
                text: colors::NAVY,
                muted: colors::STONE_DARK,
                accent: colors::GOLD,
                title: colors::NAVY,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub fn heading(&self) -> Style {
        Style::new().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::new()
            .fg(self.accent)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_is_a_function_of_dark_mode() {
        let light = Settings::default();
        let dark = light.toggle_dark_mode();

        assert_ne!(Theme::for_settings(&light), Theme::for_settings(&dark));
        assert_eq!(
            Theme::for_settings(&light),
            Theme::for_settings(&light.step_font_size(2))
        );
        assert_eq!(Theme::for_settings(&dark).background, colors::WARM_DARK);
    }
}
