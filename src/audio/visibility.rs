use super::types::ScrollSample;

/// Scroll-driven show/hide rule for the transport bar.
///
/// Near the bottom of the document the bar is always shown. Otherwise it hides
/// while the user scrolls down past `hide_threshold` and reappears as soon as
/// they scroll up or return near the top.
#[derive(Debug, Clone)]
pub struct ScrollVisibility {
    bottom_threshold: u32,
    hide_threshold: u32,
    last_position: u32,
}

impl ScrollVisibility {
    pub fn new(bottom_threshold: u32, hide_threshold: u32) -> Self {
        Self {
            bottom_threshold,
            hide_threshold,
            last_position: 0,
        }
    }

    /// Feed one scroll sample and return whether the bar should be visible.
    pub fn sample(&mut self, s: ScrollSample) -> bool {
        let near_bottom = s.viewport_height.saturating_add(s.position)
            >= s.document_height.saturating_sub(self.bottom_threshold);

        let visible = if near_bottom {
            true
        } else {
            !(s.position > self.last_position && s.position > self.hide_threshold)
        };

        self.last_position = s.position;
        visible
    }

    /// Forget the previous sample (new document).
    pub fn reset(&mut self) {
        self.last_position = 0;
    }
}
