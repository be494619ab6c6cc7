use thiserror::Error;

/// Rejected input read from markup attributes before it reaches page state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("indicator value {0:?} is not a slide number")]
    NotASlide(String),
    #[error("slide {index} is out of range for {count} slides")]
    SlideOutOfRange { index: usize, count: usize },
    #[error("unknown operations tab {0:?}")]
    UnknownTab(String),
    #[error("link target {0:?} is not a section anchor")]
    BadAnchor(String),
    #[error("element is missing the {0} attribute")]
    MissingAttribute(&'static str),
}
