use std::rc::Rc;

use log::debug;
use web_sys::Event;
use yew::prelude::*;

use crate::config;
use crate::observer::{Observer, ObserverOptions, Watch};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStage {
    /// Low-resolution placeholder shown blurred.
    #[default]
    Placeholder,
    /// Full image requested, still blurred until it has loaded.
    Loading,
    Loaded,
}

pub enum ImageEvent {
    Intersected,
    /// `load` fired; `full` tells whether it was the full image or the placeholder.
    Load { full: bool },
}

impl ImageStage {
    pub fn shows_full(self) -> bool {
        self != ImageStage::Placeholder
    }

    pub fn is_blurred(self) -> bool {
        self != ImageStage::Loaded
    }
}

impl Reducible for ImageStage {
    type Action = ImageEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match (*self, action) {
            (ImageStage::Placeholder, ImageEvent::Intersected) => ImageStage::Loading,
            (ImageStage::Loading, ImageEvent::Load { full: true }) => ImageStage::Loaded,
            _ => return self,
        };
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub placeholder: AttrValue,
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let stage = use_reducer(ImageStage::default);

    {
        let node = node.clone();
        let dispatcher = stage.dispatcher();
        use_effect_with_deps(
            move |_| {
                let options = ObserverOptions::new(0.0).root_margin(config::LAZY_IMAGE_ROOT_MARGIN);
                let on_visible = dispatcher.clone();
                let observer = Observer::on_node(&node, &options, move |entry| {
                    let watch = Watch::until_visible(entry.is_intersecting());
                    if watch == Watch::Stop {
                        on_visible.dispatch(ImageEvent::Intersected);
                    }
                    watch
                });
                // No observer means no scroll trigger, so load the full image now
                if observer.is_none() {
                    dispatcher.dispatch(ImageEvent::Intersected);
                }
                move || drop(observer)
            },
            (),
        );
    }

    let on_load = {
        let dispatcher = stage.dispatcher();
        let full = stage.shows_full();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if full {
                debug!("lazy image {} loaded", src);
            }
            dispatcher.dispatch(ImageEvent::Load { full });
        })
    };

    let src = if stage.shows_full() {
        props.src.clone()
    } else {
        props.placeholder.clone()
    };

    html! {
        <img
            ref={node}
            src={src}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), stage.is_blurred().then(|| "lazy-img"))}
            onload={on_load}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: Vec<ImageEvent>) -> ImageStage {
        *events
            .into_iter()
            .fold(Rc::new(ImageStage::default()), |stage, event| stage.reduce(event))
    }

    #[test]
    fn starts_on_blurred_placeholder() {
        let stage = ImageStage::default();
        assert!(!stage.shows_full());
        assert!(stage.is_blurred());
    }

    #[test]
    fn intersection_swaps_in_full_source() {
        let stage = run(vec![ImageEvent::Intersected]);
        assert_eq!(stage, ImageStage::Loading);
        assert!(stage.shows_full());
        assert!(stage.is_blurred());
    }

    #[test]
    fn blur_lifts_only_after_full_image_loads() {
        let stage = run(vec![
            ImageEvent::Load { full: false },
            ImageEvent::Intersected,
            ImageEvent::Load { full: false },
        ]);
        assert_eq!(stage, ImageStage::Loading);

        let stage = run(vec![ImageEvent::Intersected, ImageEvent::Load { full: true }]);
        assert_eq!(stage, ImageStage::Loaded);
        assert!(!stage.is_blurred());
    }

    #[test]
    fn loaded_image_stays_loaded() {
        let stage = run(vec![
            ImageEvent::Intersected,
            ImageEvent::Load { full: true },
            ImageEvent::Intersected,
        ]);
        assert_eq!(stage, ImageStage::Loaded);
    }
}
