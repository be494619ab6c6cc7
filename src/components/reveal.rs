use yew::prelude::*;

use crate::config;
use crate::observer::{Observer, ObserverOptions, Watch};

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    pub description: AttrValue,
    pub header: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Page section that fades in the first time it scrolls into view.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let options = ObserverOptions::new(config::REVEAL_THRESHOLD);
                let on_visible = revealed.clone();
                let observer = Observer::on_node(&node, &options, move |entry| {
                    let watch = Watch::until_visible(entry.is_intersecting());
                    if watch == Watch::Stop {
                        on_visible.set(true);
                    }
                    watch
                });
                // Without an observer the section would stay hidden for good
                if observer.is_none() {
                    revealed.set(true);
                }
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("section", props.class.clone(), (!*revealed).then(|| "section--hidden"))}
        >
            <style>
                {r#"
                    .section {
                        padding: 15rem 3rem;
                        border-top: 1px solid #ddd;
                        transition: transform 1s, opacity 1s;
                    }
                    .section--hidden {
                        opacity: 0;
                        transform: translateY(8rem);
                    }
                    .section__title {
                        max-width: 80rem;
                        margin: 0 auto 8rem auto;
                    }
                "#}
            </style>
            <div class="section__title">
                <h2 class="section__description">{props.description.clone()}</h2>
                <h3 class="section__header">{props.header.clone()}</h3>
            </div>
            { for props.children.iter() }
        </section>
    }
}
