use serde::{Deserialize, Serialize};

pub const FONT_SIZE_MIN: i32 = 14;
pub const FONT_SIZE_MAX: i32 = 36;
pub const FONT_SIZE_STEP: i32 = 2;
pub const SCROLL_SPEED_MAX: i32 = 5;

/// Reading preferences. Persisted whole on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub font_size: i32,
    pub dark_mode: bool,
    pub auto_scroll_speed: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: 18,
            dark_mode: false,
            auto_scroll_speed: 2,
        }
    }
}

impl Settings {
    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    /// Moves the font size by `steps` slider notches, saturating at the ends.
    pub fn step_font_size(self, steps: i32) -> Self {
        Self {
            font_size: (self.font_size + steps * FONT_SIZE_STEP).clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            ..self
        }
    }

    pub fn step_scroll_speed(self, steps: i32) -> Self {
        Self {
            auto_scroll_speed: (self.auto_scroll_speed + steps).clamp(0, SCROLL_SPEED_MAX),
            ..self
        }
    }

    pub fn is_in_range(&self) -> bool {
        (FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&self.font_size)
            && (self.font_size - FONT_SIZE_MIN) % FONT_SIZE_STEP == 0
            && (0..=SCROLL_SPEED_MAX).contains(&self.auto_scroll_speed)
    }

    /// Nearest in-range record. Odd font sizes snap down to the slider grid.
    pub fn clamped(self) -> Self {
        let font_size = self.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        let font_size = font_size - (font_size - FONT_SIZE_MIN) % FONT_SIZE_STEP;

        Self {
            font_size,
            dark_mode: self.dark_mode,
            auto_scroll_speed: self.auto_scroll_speed.clamp(0, SCROLL_SPEED_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_record() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"fontSize":18,"darkMode":false,"autoScrollSpeed":2}"#);
    }

    #[test]
    fn sliders_saturate() {
        let s = Settings::default().step_font_size(100).step_scroll_speed(-9);
        assert_eq!(s.font_size, FONT_SIZE_MAX);
        assert_eq!(s.auto_scroll_speed, 0);

        let s = s.step_font_size(-1);
        assert_eq!(s.font_size, 34);
    }

    #[test]
    fn clamping_pulls_values_back_onto_the_grid() {
        let wild = Settings {
            font_size: 999,
            dark_mode: true,
            auto_scroll_speed: -4,
        };
        assert!(!wild.is_in_range());

        let fixed = wild.clamped();
        assert_eq!(
            fixed,
            Settings {
                font_size: 36,
                dark_mode: true,
                auto_scroll_speed: 0
            }
        );
        assert!(fixed.is_in_range());
        assert_eq!(Settings { font_size: 17, ..fixed }.clamped().font_size, 16);
    }
}
