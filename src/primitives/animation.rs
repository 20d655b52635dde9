//! Animation - entrance keyframes and the page stylesheet
//!
//! Entrances run on a wrapper div so they never fight the tilt transform
//! applied to the content inside.

/// How a piece of content enters the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Entrance {
    /// Rendered as-is, no animation
    #[default]
    Visible,
    /// Waiting to scroll into view
    Hidden,
    /// Fade up from below after `delay_ms`
    RevealUp { delay_ms: u32 },
}

impl Entrance {
    pub const DURATION_MS: u32 = 600;

    /// CSS declarations for the entrance wrapper div
    pub fn to_css(&self) -> String {
        match self {
            Self::Visible => String::new(),
            Self::Hidden => "opacity: 0;".into(),
            Self::RevealUp { delay_ms } => format!(
                "animation: reveal-up {}ms cubic-bezier(0.22, 1, 0.36, 1) {}ms both;",
                Self::DURATION_MS,
                delay_ms,
            ),
        }
    }

    /// Keyframes, hover states and breakpoints. Inject once as a <style> block.
    pub fn stylesheet() -> &'static str {
        r#"
html { scroll-behavior: smooth; }
body { margin: 0; }
@keyframes reveal-up { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: translateY(0); } }
.nav-links { display: none; }
.nav-link { color: #4b5563; text-decoration: none; font-size: 14px; }
.nav-link:hover { color: #111827; }
.btn-primary:hover { background: #1d4ed8 !important; }
.btn-dark:hover { background: #000 !important; }
.btn-light:hover { background: #f9fafb !important; }
.variant-link { color: #6b7280; text-decoration: none; font-size: 12px; padding: 2px 8px; border-radius: 999px; }
.variant-link.active { background: #111827; color: white; }
.project-card { transition: background 0.2s, box-shadow 0.2s; }
.project-card:hover { background: rgba(255,255,255,0.9) !important; box-shadow: 0 4px 12px rgba(0,0,0,0.08) !important; }
.project-card:hover .project-title { color: #2563eb; }
.field:focus { outline: none; box-shadow: 0 0 0 2px #3b82f6; }
.hero-grid { display: grid; grid-template-columns: 1fr; gap: 40px; align-items: center; }
.project-grid { display: grid; grid-template-columns: 1fr; gap: 24px; }
@media (min-width: 640px) { .project-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 768px) {
  .nav-links { display: flex; align-items: center; gap: 24px; }
  .hero-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) { .project-grid { grid-template-columns: repeat(3, 1fr); } }
"#
    }
}
