use crate::page::BoundingBox;

/// Minimum fraction of an element's height that must overlap the viewport
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Decide whether an element is sufficiently visible to report
///
/// Only vertical position matters; horizontal overflow is ignored. An element
/// fully inside the viewport short-circuits to visible before any ratio is
/// computed — that branch is behavioral, not an optimization, because it is
/// what makes a zero-height element positioned on-screen count as visible
/// while the ratio branch would reject it.
pub fn is_sufficiently_visible(bbox: &BoundingBox, viewport_height: f64) -> bool {
    let top = bbox.top();
    let bottom = bbox.bottom();

    // Fast path: fully on-screen, height irrelevant
    if top >= 0.0 && bottom <= viewport_height {
        return true;
    }

    // Entirely above, entirely below, or degenerate height
    if bottom <= 0.0 || top >= viewport_height || bbox.height <= 0.0 {
        return false;
    }

    let overlap = bottom.min(viewport_height) - top.max(0.0);
    overlap / bbox.height >= VISIBILITY_THRESHOLD
}
