use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::dom::{self, Listener};
use crate::error::InputError;
use crate::slider::controller::{SlideController, SlideFrame};
use crate::slider::input::SliderInput;

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub header: &'static str,
    pub text: &'static str,
    pub author: &'static str,
    pub location: &'static str,
    pub photo: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub slides: Vec<Testimonial>,
}

type SharedSlider = Rc<RefCell<Option<SlideController<Callback<SlideFrame>>>>>;

fn dispatch(slider: &SharedSlider, input: SliderInput) {
    if let Some(controller) = slider.borrow_mut().as_mut() {
        input.apply(controller);
    }
}

fn dot_input(event: &MouseEvent, count: usize) -> Option<Result<SliderInput, InputError>> {
    let dot = dom::event_element(event)?;
    if !dom::has_class(&dot, "dots__dot") {
        return None;
    }
    Some(match dot.get_attribute("data-slide") {
        Some(raw) => SliderInput::from_indicator(&raw, count),
        None => Err(InputError::MissingAttribute("data-slide")),
    })
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let count = props.slides.len();
    let frame = use_state_eq(|| SlideFrame::new(0, count));
    let controller: SharedSlider = use_mut_ref(|| None);

    {
        let controller = controller.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |count| {
                let on_render = Callback::from(move |next: SlideFrame| frame.set(next));
                *controller.borrow_mut() = Some(SlideController::initialize(*count, on_render));
                || ()
            },
            count,
        );
    }

    // Arrow keys work anywhere on the page, not only while the slider has focus
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_document("keydown", move |event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
                        return;
                    };
                    if let Some(input) = SliderInput::from_key(&key) {
                        dispatch(&controller, input);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_previous = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| dispatch(&controller, SliderInput::Previous))
    };

    let on_next = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| dispatch(&controller, SliderInput::Next))
    };

    let on_dot_click = {
        let controller = controller.clone();
        Callback::from(move |e: MouseEvent| match dot_input(&e, count) {
            Some(Ok(input)) => dispatch(&controller, input),
            Some(Err(err)) => warn!("ignoring dot click: {}", err),
            None => {}
        })
    };

    html! {
        <div class="slider">
            <style>
                {r#"
                    .slider {
                        max-width: 100rem;
                        height: 50rem;
                        margin: 0 auto;
                        position: relative;
                        overflow: hidden;
                    }
                    .slide {
                        position: absolute;
                        top: 0;
                        width: 100%;
                        height: 50rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 1s;
                    }
                    .slider__btn {
                        position: absolute;
                        top: 50%;
                        z-index: 10;
                        border: none;
                        background: rgba(255, 255, 255, 0.7);
                        font-size: 3.25rem;
                        height: 5.5rem;
                        width: 5.5rem;
                        border-radius: 50%;
                        cursor: pointer;
                    }
                    .slider__btn--left {
                        left: 6%;
                        transform: translate(-50%, -50%);
                    }
                    .slider__btn--right {
                        right: 6%;
                        transform: translate(50%, -50%);
                    }
                    .dots {
                        position: absolute;
                        bottom: 5%;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                    }
                    .dots__dot {
                        border: none;
                        background-color: #b9b9b9;
                        opacity: 0.7;
                        height: 1rem;
                        width: 1rem;
                        border-radius: 50%;
                        margin-right: 1.75rem;
                        cursor: pointer;
                        transition: all 0.5s;
                    }
                    .dots__dot:last-child {
                        margin: 0;
                    }
                    .dots__dot--active {
                        background-color: #888;
                        opacity: 1;
                    }
                "#}
            </style>
            {
                for props.slides.iter().enumerate().map(|(i, slide)| html! {
                    <div class={classes!("slide", format!("slide--{}", i + 1))} style={frame.transform(i)}>
                        <div class="testimonial">
                            <h5 class="testimonial__header">{slide.header}</h5>
                            <blockquote class="testimonial__text">{slide.text}</blockquote>
                            <address class="testimonial__author">
                                <img src={slide.photo} alt="" class="testimonial__photo" />
                                <h6 class="testimonial__name">{slide.author}</h6>
                                <p class="testimonial__location">{slide.location}</p>
                            </address>
                        </div>
                    </div>
                })
            }
            <button class="slider__btn slider__btn--left" onclick={on_previous}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>
            <div class="dots" onclick={on_dot_click}>
                {
                    for (0..count).map(|i| html! {
                        <button
                            class={classes!("dots__dot", frame.is_active(i).then(|| "dots__dot--active"))}
                            data-slide={i.to_string()}
                        ></button>
                    })
                }
            </div>
        </div>
    }
}
