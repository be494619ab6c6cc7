use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::modal::{Modal, ModalAction, ModalState};
use crate::components::nav::{scroll_to_section, sticky_root_margin, Nav};
use crate::components::reveal::Section;
use crate::components::tabs::OperationTabs;
use crate::config;
use crate::dom::Listener;
use crate::observer::{Observer, ObserverOptions, Watch};
use crate::slider::component::{Slider, Testimonial};

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            header: "Best financial decision ever!",
            text: "Lorem ipsum dolor sit, amet consectetur adipisicing elit. Accusantium quas quisquam non? Quas voluptate nulla minima deleniti optio ullam nesciunt, numquam corporis et asperiores laboriosam sunt, praesentium suscipit blanditiis.",
            author: "Aarav Lynn",
            location: "San Francisco, USA",
            photo: "img/user-1.jpg",
        },
        Testimonial {
            header: "The last step to becoming a complete minimalist",
            text: "Quisquam itaque deserunt ullam, quia ea repellendus provident, ducimus neque ipsam modi voluptatibus doloremque, corrupti laborum. Incidunt numquam perferendis veritatis neque repellendus.",
            author: "Miyah Miles",
            location: "London, UK",
            photo: "img/user-2.jpg",
        },
        Testimonial {
            header: "Finally free from old-school banks",
            text: "Debitis, nihil sit minus suscipit magni aperiam vel tenetur incidunt commodi architecto numquam omnis nulla autem, necessitatibus blanditiis modi similique quidem. Odio aliquam culpa dicta beatae quod maiores ipsa minus consequatur error sunt, deleniti saepe aliquid quos inventore sequi.",
            author: "Francisco Gomes",
            location: "Lisbon, Portugal",
            photo: "img/user-3.jpg",
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let modal = use_reducer(ModalState::default);
    let sticky = use_state_eq(|| false);
    let nav_ref = use_node_ref();
    let header_ref = use_node_ref();

    // Escape closes the modal from anywhere on the page
    {
        let dispatcher = modal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_document("keydown", move |event| {
                    if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) {
                        dispatcher.dispatch(ModalAction::Key(key));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let nav_ref = nav_ref.clone();
        let header_ref = header_ref.clone();
        let sticky = sticky.clone();
        use_effect_with_deps(
            move |_| {
                let nav_height = nav_ref
                    .cast::<Element>()
                    .map(|nav| nav.get_bounding_client_rect().height())
                    .unwrap_or_default();
                let options = ObserverOptions::new(config::STICKY_NAV_THRESHOLD)
                    .root_margin(sticky_root_margin(nav_height));
                let observer = Observer::on_node(&header_ref, &options, move |entry| {
                    sticky.set(!entry.is_intersecting());
                    Watch::Keep
                });
                move || drop(observer)
            },
            (),
        );
    }

    let open_modal = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(ModalAction::Open);
        })
    };

    let close_modal = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ModalAction::Close))
    };

    let learn_more = Callback::from(|_: MouseEvent| scroll_to_section(config::FIRST_SECTION_ID));

    html! {
        <>
            <style>
                {r#"
                    body {
                        font-family: 'Poppins', sans-serif;
                        color: #444;
                        line-height: 1.9;
                        background-color: #f3f3f3;
                    }
                    .header {
                        padding: 0 3rem;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .header__title {
                        flex: 1;
                        max-width: 115rem;
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        align-content: center;
                        justify-items: start;
                    }
                    .header__img {
                        width: 100%;
                        grid-column: 2 / 3;
                        grid-row: 1 / span 4;
                    }
                    .highlight {
                        position: relative;
                    }
                    .btn--text {
                        display: inline-block;
                        background: none;
                        border: none;
                        border-bottom: 1px solid currentColor;
                        cursor: pointer;
                    }
                    .features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        margin: 0 12rem;
                    }
                    .features__img {
                        width: 100%;
                    }
                    .lazy-img {
                        filter: blur(20px);
                    }
                    .footer {
                        padding: 10rem 3rem;
                        background-color: #37383d;
                    }
                    .footer__copyright {
                        text-align: center;
                        color: #aaa;
                    }
                "#}
            </style>
            <header class="header" ref={header_ref}>
                <Nav sticky={*sticky} nav_ref={nav_ref} on_open_account={open_modal.clone()} />
                <div class="header__title">
                    <h1>
                        {"When "}<span class="highlight">{"banking"}</span>{" meets"}<br />
                        <span class="highlight">{"minimalist"}</span>
                    </h1>
                    <h4>{"A simpler banking experience for a simpler life."}</h4>
                    <button class="btn--text btn--scroll-to" onclick={learn_more}>{"Learn more ↓"}</button>
                    <img src="img/hero.png" class="header__img" alt="Minimalist bank items" />
                </div>
            </header>

            <Section
                id="section--1"
                class="section--features"
                description="Features"
                header={html! { {"Everything you need in a modern bank and more."} }}
            >
                <div class="features">
                    <LazyImage
                        placeholder="img/digital-lazy.jpg"
                        src="img/digital.jpg"
                        alt="Computer"
                        class="features__img"
                    />
                    <div class="features__feature">
                        <h5 class="features__header">{"100% digital bank"}</h5>
                        <p>{"Open an account and manage everything from your phone or computer, no branch visits required."}</p>
                    </div>
                    <div class="features__feature">
                        <h5 class="features__header">{"Watch your money grow"}</h5>
                        <p>{"Savings that compound daily, with rates you can actually see and understand."}</p>
                    </div>
                    <LazyImage
                        placeholder="img/grow-lazy.jpg"
                        src="img/grow.jpg"
                        alt="Plant"
                        class="features__img"
                    />
                    <LazyImage
                        placeholder="img/card-lazy.jpg"
                        src="img/card.jpg"
                        alt="Credit card"
                        class="features__img"
                    />
                    <div class="features__feature">
                        <h5 class="features__header">{"Free debit card included"}</h5>
                        <p>{"Pay anywhere in the world without fees, and freeze the card in one tap if you lose it."}</p>
                    </div>
                </div>
            </Section>

            <Section
                id="section--2"
                description="Operations"
                header={html! { {"Everything as simple as possible, but no simpler."} }}
            >
                <OperationTabs />
            </Section>

            <Section
                id="section--3"
                description="Not sure yet?"
                header={html! { {"Millions of Bankists are already making their lives simpler."} }}
            >
                <Slider slides={testimonials()} />
            </Section>

            <Section
                id="section--sign-up"
                class="section--sign-up"
                description="Sign up"
                header={html! { <>{"The best day to join Bankist was one year ago. The second best is "}<span class="highlight">{"today!"}</span></> }}
            >
                <button class="btn btn--show-modal" onclick={open_modal}>{"Open your free account today!"}</button>
            </Section>

            <footer class="footer">
                <p class="footer__copyright">{"© Bankist"}</p>
            </footer>

            <Modal open={modal.open} on_close={close_modal} />
        </>
    }
}
