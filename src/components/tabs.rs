use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::error::InputError;

pub struct Operation {
    pub tab: usize,
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const OPERATIONS: [Operation; 3] = [
    Operation {
        tab: 1,
        label: "Instant Transfers",
        title: "Transfer money to anyone, instantly! No fees, no BS.",
        body: "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    },
    Operation {
        tab: 2,
        label: "Instant Loans",
        title: "Buy a home or make your dreams come true, with instant loans.",
        body: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    },
    Operation {
        tab: 3,
        label: "Instant Closing",
        title: "No longer need your account? No problem! Close it instantly.",
        body: "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    },
];

/// Parses a `data-tab` value into the id of an existing operation.
pub fn parse_tab(raw: &str) -> Result<usize, InputError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|tab| OPERATIONS.iter().any(|op| op.tab == *tab))
        .ok_or_else(|| InputError::UnknownTab(raw.to_string()))
}

/// Clicks on the spans inside a tab still count; clicks between tabs don't.
fn clicked_tab(e: &MouseEvent) -> Option<Result<usize, InputError>> {
    let target = dom::event_element(e)?;
    let tab = target.closest(".operations__tab").ok().flatten()?;
    Some(match tab.get_attribute("data-tab") {
        Some(raw) => parse_tab(&raw),
        None => Err(InputError::MissingAttribute("data-tab")),
    })
}

#[function_component(OperationTabs)]
pub fn operation_tabs() -> Html {
    let active = use_state_eq(|| OPERATIONS[0].tab);

    let on_click = {
        let active = active.clone();
        Callback::from(move |e: MouseEvent| match clicked_tab(&e) {
            Some(Ok(tab)) => active.set(tab),
            Some(Err(err)) => warn!("ignoring tab click: {}", err),
            None => {}
        })
    };

    html! {
        <div class="operations">
            <style>
                {r#"
                    .operations {
                        max-width: 100rem;
                        margin: 12rem auto 0 auto;
                        background-color: #fff;
                    }
                    .operations__tab-container {
                        display: flex;
                        justify-content: center;
                    }
                    .operations__tab {
                        margin-right: 2.5rem;
                        transform: translateY(-50%);
                    }
                    .operations__tab--active {
                        transform: translateY(-66%);
                    }
                    .operations__content {
                        display: none;
                        padding: 2.5rem 7rem 6.5rem 7rem;
                    }
                    .operations__content--active {
                        display: grid;
                        grid-template-columns: 7rem 1fr;
                        column-gap: 3rem;
                        row-gap: 0.5rem;
                    }
                "#}
            </style>
            <div class="operations__tab-container" onclick={on_click}>
                {
                    for OPERATIONS.iter().map(|op| html! {
                        <button
                            class={classes!(
                                "btn",
                                "operations__tab",
                                format!("operations__tab--{}", op.tab),
                                (*active == op.tab).then(|| "operations__tab--active")
                            )}
                            data-tab={op.tab.to_string()}
                        >
                            <span>{format!("0{}", op.tab)}</span>{op.label}
                        </button>
                    })
                }
            </div>
            {
                for OPERATIONS.iter().map(|op| html! {
                    <div class={classes!(
                        "operations__content",
                        format!("operations__content--{}", op.tab),
                        (*active == op.tab).then(|| "operations__content--active")
                    )}>
                        <div class={classes!("operations__icon", format!("operations__icon--{}", op.tab))}></div>
                        <h5 class="operations__header">{op.title}</h5>
                        <p>{op.body}</p>
                    </div>
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tabs_parse() {
        assert_eq!(parse_tab("1"), Ok(1));
        assert_eq!(parse_tab("3"), Ok(3));
    }

    #[test]
    fn unknown_tabs_are_rejected() {
        for raw in ["0", "4", "two", ""] {
            assert_eq!(parse_tab(raw), Err(InputError::UnknownTab(raw.to_string())));
        }
    }

    #[test]
    fn tab_ids_are_unique() {
        let mut ids: Vec<usize> = OPERATIONS.iter().map(|op| op.tab).collect();
        ids.dedup();
        assert_eq!(ids.len(), OPERATIONS.len());
    }
}
