use crate::error::InputError;
use crate::slider::controller::{SlideController, SlidePresenter};

/// One request from the buttons, the keyboard or the dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderInput {
    Next,
    Previous,
    GoTo(usize),
}

impl SliderInput {
    /// Maps a `KeyboardEvent::key()` value to a slider move.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }

    /// Reads the `data-slide` value of a clicked dot. Only indices of
    /// existing slides get through.
    pub fn from_indicator(raw: &str, count: usize) -> Result<Self, InputError> {
        let index: usize = raw
            .trim()
            .parse()
            .map_err(|_| InputError::NotASlide(raw.to_string()))?;
        if index >= count {
            return Err(InputError::SlideOutOfRange { index, count });
        }
        Ok(Self::GoTo(index))
    }

    pub fn apply<P: SlidePresenter>(self, slider: &mut SlideController<P>) {
        match self {
            Self::Next => slider.next(),
            Self::Previous => slider.previous(),
            Self::GoTo(index) => slider.go_to(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::controller::SlideFrame;

    struct Discard;

    impl SlidePresenter for Discard {
        fn render(&mut self, _frame: SlideFrame) {}
    }

    #[test]
    fn arrow_keys_map_to_moves() {
        assert_eq!(SliderInput::from_key("ArrowLeft"), Some(SliderInput::Previous));
        assert_eq!(SliderInput::from_key("ArrowRight"), Some(SliderInput::Next));
        assert_eq!(SliderInput::from_key("ArrowUp"), None);
        assert_eq!(SliderInput::from_key("Escape"), None);
    }

    #[test]
    fn indicator_values_are_parsed() {
        assert_eq!(SliderInput::from_indicator("2", 3), Ok(SliderInput::GoTo(2)));
        assert_eq!(SliderInput::from_indicator(" 0 ", 3), Ok(SliderInput::GoTo(0)));
    }

    #[test]
    fn bad_indicator_values_are_rejected() {
        assert_eq!(
            SliderInput::from_indicator("two", 3),
            Err(InputError::NotASlide("two".to_string()))
        );
        assert_eq!(
            SliderInput::from_indicator("-1", 3),
            Err(InputError::NotASlide("-1".to_string()))
        );
        assert_eq!(
            SliderInput::from_indicator("3", 3),
            Err(InputError::SlideOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn inputs_drive_the_controller() {
        let mut slider = SlideController::initialize(4, Discard);
        SliderInput::Previous.apply(&mut slider);
        assert_eq!(slider.current(), 3);
        SliderInput::Next.apply(&mut slider);
        assert_eq!(slider.current(), 0);
        SliderInput::GoTo(2).apply(&mut slider);
        assert_eq!(slider.current(), 2);
    }
}
