use log::debug;
use yew::Callback;

/// Snapshot handed to the presentation layer after every transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideFrame {
    pub current: usize,
    pub count: usize,
}

impl SlideFrame {
    pub fn new(current: usize, count: usize) -> Self {
        Self { current, count }
    }

    /// Horizontal offset of slide `index`, in percent of the slider width.
    pub fn offset(&self, index: usize) -> i64 {
        (index as i64 - self.current as i64) * 100
    }

    pub fn offsets(&self) -> Vec<i64> {
        (0..self.count).map(|i| self.offset(i)).collect()
    }

    pub fn transform(&self, index: usize) -> String {
        format!("transform: translateX({}%)", self.offset(index))
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }
}

/// Receives a frame after every slider transition.
pub trait SlidePresenter {
    fn render(&mut self, frame: SlideFrame);
}

impl SlidePresenter for Callback<SlideFrame> {
    fn render(&mut self, frame: SlideFrame) {
        self.emit(frame);
    }
}

/// Wrapping index state machine over a fixed number of slides.
///
/// `count` never changes after [`SlideController::initialize`]. With zero
/// slides nothing is rendered and every transition is a no-op.
pub struct SlideController<P: SlidePresenter> {
    count: usize,
    current: usize,
    presenter: P,
}

impl<P: SlidePresenter> SlideController<P> {
    pub fn initialize(count: usize, presenter: P) -> Self {
        let mut controller = Self {
            count,
            current: 0,
            presenter,
        };
        if count > 0 {
            controller.render();
        }
        controller
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn frame(&self) -> SlideFrame {
        SlideFrame::new(self.current, self.count)
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = if self.current == self.count - 1 {
            0
        } else {
            self.current + 1
        };
        self.render();
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = if self.current == 0 {
            self.count - 1
        } else {
            self.current - 1
        };
        self.render();
    }

    /// Jumps straight to `index`. Callers must pass `index < count`; the
    /// value is not clamped here.
    pub fn go_to(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        self.current = index;
        self.render();
    }

    fn is_empty(&self) -> bool {
        if self.count == 0 {
            debug!("slider has no slides, ignoring transition");
            return true;
        }
        false
    }

    fn render(&mut self) {
        debug!("slider moved to slide {} of {}", self.current, self.count);
        let frame = self.frame();
        self.presenter.render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder {
        frames: Rc<RefCell<Vec<SlideFrame>>>,
    }

    impl Recorder {
        fn frames(&self) -> Vec<SlideFrame> {
            self.frames.borrow().clone()
        }
    }

    impl SlidePresenter for Recorder {
        fn render(&mut self, frame: SlideFrame) {
            self.frames.borrow_mut().push(frame);
        }
    }

    fn controller(count: usize) -> (SlideController<Recorder>, Recorder) {
        let recorder = Recorder::default();
        (SlideController::initialize(count, recorder.clone()), recorder)
    }

    #[test]
    fn initialize_renders_first_slide() {
        for count in 1..6 {
            let (slider, recorder) = controller(count);
            assert_eq!(slider.current(), 0);
            assert_eq!(recorder.frames(), vec![SlideFrame::new(0, count)]);
        }
    }

    #[test]
    fn empty_slider_never_renders() {
        let (mut slider, recorder) = controller(0);
        slider.next();
        slider.previous();
        slider.go_to(2);
        assert_eq!(slider.current(), 0);
        assert!(recorder.frames().is_empty());
    }

    #[test]
    fn next_and_previous_wrap_at_both_ends() {
        let (mut slider, _) = controller(3);
        slider.go_to(2);
        slider.next();
        assert_eq!(slider.current(), 0);

        slider.previous();
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn next_then_previous_is_identity() {
        for start in 0..4 {
            let (mut slider, _) = controller(4);
            slider.go_to(start);
            slider.next();
            slider.previous();
            assert_eq!(slider.current(), start);
            slider.previous();
            slider.next();
            assert_eq!(slider.current(), start);
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let (mut slider, recorder) = controller(3);
        slider.next();
        slider.next();
        slider.next();
        assert_eq!(slider.current(), 0);
        let seen: Vec<usize> = recorder.frames().iter().map(|f| f.current).collect();
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn single_slide_stays_put() {
        let (mut slider, recorder) = controller(1);
        slider.next();
        slider.previous();
        assert_eq!(slider.current(), 0);
        assert_eq!(recorder.frames().len(), 3);
    }

    #[test]
    fn repeated_go_to_renders_identical_frames() {
        let (mut slider, recorder) = controller(5);
        slider.go_to(3);
        slider.go_to(3);
        let frames = recorder.frames();
        assert_eq!(slider.current(), 3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1], frames[2]);
    }

    #[test]
    fn offsets_follow_distance_from_current() {
        let frame = SlideFrame::new(1, 4);
        assert_eq!(frame.offsets(), vec![-100, 0, 100, 200]);
        assert_eq!(frame.transform(0), "transform: translateX(-100%)");
        assert_eq!(frame.transform(3), "transform: translateX(200%)");
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let (mut slider, recorder) = controller(4);
        slider.next();
        slider.previous();
        slider.previous();
        slider.go_to(2);
        for frame in recorder.frames() {
            let active: Vec<usize> = (0..frame.count).filter(|&i| frame.is_active(i)).collect();
            assert_eq!(active, vec![frame.current]);
        }
    }

    #[test]
    fn callback_presenter_receives_frames() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let callback = Callback::from(move |frame: SlideFrame| sink.borrow_mut().push(frame.current));
        let mut slider = SlideController::initialize(2, callback);
        slider.next();
        assert_eq!(*seen.borrow(), vec![0, 1]);
    }
}
