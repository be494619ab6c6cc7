use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Slider transitions and observer hits show up while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Opacity applied to the logo and the non-hovered nav links.
pub const NAV_FADE_OPACITY: f64 = 0.5;

/// Share of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Images start loading this far before they scroll into view.
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "200px";

pub const STICKY_NAV_THRESHOLD: f64 = 0.0;

/// Section the "Learn more" button scrolls to.
pub const FIRST_SECTION_ID: &str = "section--1";
