use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Height of the fixed header that anchor scrolling has to clear.
pub const HEADER_OFFSET_PX: f64 = 70.0;

/// Scroll depth past which the header takes its compact styling.
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0;

/// Sections count as active slightly before their top reaches the header.
pub const SECTION_LEAD_PX: f64 = 100.0;

/// Scroll depth past which the back-to-top control shows.
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

/// Window for the unified scroll handler, roughly one frame.
pub const THROTTLE_WINDOW_MS: f64 = 16.0;

/// The hero drifts at half scroll speed while it is still on screen.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Drop-style rate limiter. A call inside the window is discarded outright;
/// there is no trailing-edge replay.
pub struct Throttle {
    window_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Throttle {
            window_ms,
            last: None,
        }
    }

    /// True when `now` falls outside the window of the last accepted call.
    /// Accepting a call restarts the window; the first call always passes.
    pub fn accept(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.window_ms => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    /// Membership range `[top - lead, top - lead + height)`, half-open so
    /// adjacent sections can never both claim the same offset.
    fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_LEAD_PX;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section owning `scroll_y`. The last match in document order
/// wins when ranges overlap; `None` when nothing matches.
pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| s.contains(scroll_y))
        .last()
        .map(|s| s.id.as_str())
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER_PX
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER_PX
}

/// Hero transform offset, or `None` once the hero has scrolled past.
pub fn parallax_offset(scroll_y: f64, hero_height: f64) -> Option<f64> {
    (scroll_y < hero_height).then_some(scroll_y * PARALLAX_FACTOR)
}

/// Measure every `section[id]` in document order.
pub fn measure_sections(document: &Document) -> Vec<SectionSpan> {
    let mut spans = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section[id]") {
        for i in 0..nodes.length() {
            if let Some(section) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let id = section.id();
                if !id.is_empty() {
                    spans.push(SectionSpan {
                        id,
                        top: section.offset_top() as f64,
                        height: section.offset_height() as f64,
                    });
                }
            }
        }
    }
    spans
}

/// Schedule the hero transform for the current scroll position on the next
/// animation frame. No hero on the page means nothing to do.
pub fn apply_hero_parallax(window: &Window, document: &Document, scroll_y: f64) {
    if let Some(hero) = document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        if let Some(offset) = parallax_offset(scroll_y, hero.offset_height() as f64) {
            let frame = Closure::once_into_js(move || {
                let _ = hero
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            });
            let _ = window.request_animation_frame(frame.unchecked_ref());
        }
    }
}

/// Smooth-scroll so the section named by `fragment` lands just under the
/// fixed header. Unknown fragments are a no-op.
pub fn scroll_to_fragment(fragment: &str) {
    if let Some(window) = window() {
        if let Some(target) = window.document().and_then(|d| d.get_element_by_id(fragment)) {
            let page_offset = window.scroll_y().unwrap_or(0.0);
            let absolute_top = target.get_bounding_client_rect().top() + page_offset;
            smooth_scroll_to(&window, absolute_top - HEADER_OFFSET_PX);
        }
    }
}

/// `scroll_to_fragment` deferred one animation frame, for anchors clicked
/// right after a route change: the target page renders its sections first,
/// then the scroll runs.
pub fn scroll_to_fragment_on_next_frame(fragment: &str) {
    if let Some(window) = window() {
        let fragment = fragment.to_string();
        let frame = Closure::once_into_js(move || scroll_to_fragment(&fragment));
        let _ = window.request_animation_frame(frame.unchecked_ref());
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        smooth_scroll_to(&window, 0.0);
    }
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn first_call_always_passes() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.accept(0.0));
    }

    #[test]
    fn drops_calls_inside_the_window() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.accept(1000.0));
        assert!(!throttle.accept(1010.0));
        assert!(!throttle.accept(1015.9));
    }

    #[test]
    fn accepts_again_once_the_window_has_passed() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.accept(1000.0));
        assert!(throttle.accept(1016.0));
        // the window restarts from the accepted call, not from dropped ones
        assert!(!throttle.accept(1031.0));
        assert!(throttle.accept(1032.0));
    }

    #[test]
    fn section_range_is_half_open() {
        let sections = [span("about", 500.0, 200.0)];
        assert_eq!(active_section(399.9, &sections), None);
        assert_eq!(active_section(400.0, &sections), Some("about"));
        assert_eq!(active_section(599.9, &sections), Some("about"));
        assert_eq!(active_section(600.0, &sections), None);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let sections = [span("a", 100.0, 400.0), span("b", 450.0, 200.0)];
        assert_eq!(active_section(340.0, &sections), Some("a"));
        assert_eq!(active_section(360.0, &sections), Some("b"));
    }

    #[test]
    fn top_of_page_sits_inside_the_first_section() {
        let sections = [span("home", 0.0, 600.0)];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(500.0, &sections), None);
    }

    #[test]
    fn header_flips_strictly_past_fifty() {
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(50.1));
    }

    #[test]
    fn back_to_top_shows_strictly_past_three_hundred() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
    }

    #[test]
    fn parallax_tracks_half_speed_until_the_hero_is_gone() {
        assert_eq!(parallax_offset(0.0, 600.0), Some(0.0));
        assert_eq!(parallax_offset(240.0, 600.0), Some(120.0));
        assert_eq!(parallax_offset(600.0, 600.0), None);
        assert_eq!(parallax_offset(601.0, 600.0), None);
    }
}
