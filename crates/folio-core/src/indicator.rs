/// Opacity of the "scroll down" affordance: hidden once the page has scrolled
/// strictly past `threshold`.
#[inline]
pub fn indicator_opacity(scroll_y: f64, threshold: f64) -> f32 {
    if scroll_y > threshold {
        0.0
    } else {
        1.0
    }
}
