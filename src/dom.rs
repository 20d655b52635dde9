//! Synchronous layout queries against the live page via web_sys.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::MeasureError;
use crate::primitives::Rect;
use crate::scroll::ScrollMetrics;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique element id for a component that needs to measure itself.
pub fn next_id(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

fn window() -> Result<web_sys::Window, MeasureError> {
    web_sys::window().ok_or(MeasureError::NoWindow)
}

fn document() -> Result<web_sys::Document, MeasureError> {
    window()?.document().ok_or(MeasureError::NoDocument)
}

/// Current bounding client rect of the element with `id`.
pub fn element_rect(id: &str) -> Result<Rect, MeasureError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| MeasureError::not_mounted(id))?;
    let r = element.get_bounding_client_rect();
    let rect = Rect::new(r.x() as f32, r.y() as f32, r.width() as f32, r.height() as f32);
    if rect.is_measured() {
        Ok(rect)
    } else {
        Err(MeasureError::not_laid_out(id))
    }
}

/// Window inner height, scrollbar included.
pub fn viewport_height() -> Result<f32, MeasureError> {
    window()?
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|h| h as f32)
        .ok_or(MeasureError::NoViewportSize)
}

/// Scroll position of the root document.
///
/// The visible height is the root element's client height, which excludes a
/// horizontal scrollbar, so the bottom of the page maps to progress 1.
pub fn scroll_metrics() -> Result<ScrollMetrics, MeasureError> {
    let window = window()?;
    let root = window
        .document()
        .ok_or(MeasureError::NoDocument)?
        .document_element()
        .ok_or_else(|| MeasureError::not_mounted("html"))?;
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    Ok(ScrollMetrics {
        scroll_top: scroll_top as f32,
        scroll_height: root.scroll_height() as f32,
        viewport_height: root.client_height() as f32,
    })
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
