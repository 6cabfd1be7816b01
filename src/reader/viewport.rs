/// Scroll position over a block of content, in viewport units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    offset: f64,
    content_height: f64,
    visible_height: f64,
}

impl Viewport {
    pub fn new(content_height: f64, visible_height: f64) -> Self {
        Self {
            offset: 0.0,
            content_height: content_height.max(0.0),
            visible_height: visible_height.max(0.0),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn visible_height(&self) -> f64 {
        self.visible_height
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.visible_height).max(0.0)
    }

    /// Re-measures after a layout change, keeping the offset inside the new bounds.
    pub fn measure(&mut self, content_height: f64, visible_height: f64) {
        self.content_height = content_height.max(0.0);
        self.visible_height = visible_height.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    pub fn is_at_bottom(&self, tolerance: f64) -> bool {
        self.offset + self.visible_height >= self.content_height - tolerance
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.offset + delta);
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_is_clamped_to_content() {
        let mut vp = Viewport::new(100.0, 40.0);
        vp.scroll_by(-5.0);
        assert_eq!(vp.offset(), 0.0);
        vp.scroll_by(500.0);
        assert_eq!(vp.offset(), 60.0);
        assert!(vp.is_at_bottom(1.0));
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut vp = Viewport::new(100.0, 40.0);
        vp.scroll_to(60.0);
        vp.measure(80.0, 40.0);
        assert_eq!(vp.offset(), 40.0);
    }

    #[test]
    fn short_content_is_already_at_bottom() {
        let vp = Viewport::new(10.0, 40.0);
        assert_eq!(vp.max_offset(), 0.0);
        assert!(vp.is_at_bottom(1.0));
    }
}
