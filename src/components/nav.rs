use log::{debug, warn};
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::error::InputError;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", href: "#section--1" },
    NavLink { label: "Operations", href: "#section--2" },
    NavLink { label: "Testimonials", href: "#section--3" },
];

/// Section id named by an in-page link such as `#section--2`.
pub fn section_id(href: &str) -> Result<&str, InputError> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Ok(id),
        _ => Err(InputError::BadAnchor(href.to_string())),
    }
}

pub fn fade_opacity(hovered: Option<usize>, index: usize) -> f64 {
    match hovered {
        Some(link) if link != index => config::NAV_FADE_OPACITY,
        _ => 1.0,
    }
}

pub fn logo_opacity(hovered: Option<usize>) -> f64 {
    if hovered.is_some() {
        config::NAV_FADE_OPACITY
    } else {
        1.0
    }
}

/// Header stops intersecting as soon as it is hidden behind the nav bar.
pub fn sticky_root_margin(nav_height: f64) -> String {
    format!("-{}px", nav_height)
}

pub fn scroll_to_section(id: &str) {
    let Some(section) = dom::document().and_then(|document| document.get_element_by_id(id)) else {
        warn!("no section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub sticky: bool,
    pub nav_ref: NodeRef,
    pub on_open_account: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let hovered = use_state_eq(|| None::<usize>);

    // One listener on the container instead of one per link
    let on_links_click = Callback::from(|e: MouseEvent| {
        let Some(target) = dom::event_element(&e) else {
            return;
        };
        if !dom::has_class(&target, "nav__link") || dom::has_class(&target, "btn--show-modal") {
            return;
        }
        e.prevent_default();
        let href = target.get_attribute("href").unwrap_or_default();
        match section_id(&href) {
            Ok(id) => {
                debug!("scrolling to {}", id);
                scroll_to_section(id);
            }
            Err(err) => warn!("ignoring nav click: {}", err),
        }
    });

    let fade_out = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <nav ref={props.nav_ref.clone()} class={classes!("nav", props.sticky.then(|| "sticky"))}>
            <style>
                {r#"
                    .nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 9rem;
                        width: 100%;
                        padding: 0 6rem;
                        z-index: 100;
                    }
                    .nav.sticky {
                        position: fixed;
                        background-color: rgba(255, 255, 255, 0.95);
                    }
                    .nav__logo {
                        height: 4.5rem;
                        transition: all 0.3s;
                    }
                    .nav__links {
                        display: flex;
                        align-items: center;
                        list-style: none;
                    }
                    .nav__item {
                        margin-left: 4rem;
                    }
                    .nav__link {
                        text-decoration: none;
                        color: inherit;
                        transition: all 0.3s;
                    }
                "#}
            </style>
            <img
                src="img/logo.png"
                alt="Bankist logo"
                class="nav__logo"
                style={format!("opacity: {}", logo_opacity(*hovered))}
            />
            <ul class="nav__links" onclick={on_links_click}>
                {
                    for NAV_LINKS.iter().enumerate().map(|(i, link)| {
                        let fade_in = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                        };
                        html! {
                            <li class="nav__item">
                                <a
                                    class="nav__link"
                                    href={link.href}
                                    style={format!("opacity: {}", fade_opacity(*hovered, i))}
                                    onmouseover={fade_in}
                                    onmouseout={fade_out.clone()}
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                }
                <li class="nav__item">
                    <a
                        class="nav__link nav__link--btn btn--show-modal"
                        href="#"
                        style={format!("opacity: {}", fade_opacity(*hovered, NAV_LINKS.len()))}
                        onmouseover={
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(NAV_LINKS.len())))
                        }
                        onmouseout={fade_out.clone()}
                        onclick={props.on_open_account.clone()}
                    >
                        {"Open account"}
                    </a>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_come_from_anchors() {
        assert_eq!(section_id("#section--1"), Ok("section--1"));
        for href in NAV_LINKS.iter().map(|link| link.href) {
            assert!(section_id(href).is_ok());
        }
    }

    #[test]
    fn malformed_anchors_are_rejected() {
        for href in ["#", "section--1", "", "# a", "https://example.com"] {
            assert_eq!(section_id(href), Err(InputError::BadAnchor(href.to_string())));
        }
    }

    #[test]
    fn hovering_fades_everything_else() {
        assert_eq!(fade_opacity(Some(1), 1), 1.0);
        assert_eq!(fade_opacity(Some(1), 0), 0.5);
        assert_eq!(fade_opacity(Some(1), 2), 0.5);
        assert_eq!(logo_opacity(Some(1)), 0.5);
    }

    #[test]
    fn leaving_restores_full_opacity() {
        for i in 0..4 {
            assert_eq!(fade_opacity(None, i), 1.0);
        }
        assert_eq!(logo_opacity(None), 1.0);
    }

    #[test]
    fn sticky_margin_is_negative_nav_height() {
        assert_eq!(sticky_root_margin(90.0), "-90px");
        assert_eq!(sticky_root_margin(72.5), "-72.5px");
    }
}
