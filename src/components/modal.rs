use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
}

pub enum ModalAction {
    Open,
    Close,
    /// A `keydown` anywhere on the page; only Escape on an open modal matters.
    Key(String),
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            ModalAction::Open => true,
            ModalAction::Close => false,
            ModalAction::Key(key) => self.open && key != "Escape",
        };
        if open == self.open {
            return self;
        }
        Rc::new(Self { open })
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let hidden = (!props.open).then(|| "hidden");

    html! {
        <>
            <style>
                {r#"
                    .modal {
                        position: fixed;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        max-width: 60rem;
                        background-color: #f3f3f3;
                        padding: 5rem 6rem;
                        box-shadow: 0 4rem 6rem rgba(0, 0, 0, 0.3);
                        z-index: 1000;
                    }
                    .overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background-color: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                        z-index: 100;
                    }
                    .modal.hidden,
                    .overlay.hidden {
                        visibility: hidden;
                        opacity: 0;
                    }
                    .btn--close-modal {
                        position: absolute;
                        top: 0.5rem;
                        right: 2rem;
                        font-size: 4rem;
                        cursor: pointer;
                        border: none;
                        background: none;
                    }
                "#}
            </style>
            <div class={classes!("modal", hidden)}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {"Open your bank account "}<br />{"in just "}<span class="highlight">{"5 minutes"}</span>
                </h2>
                <form class="modal__form">
                    <label>{"First Name"}</label>
                    <input type="text" />
                    <label>{"Last Name"}</label>
                    <input type="text" />
                    <label>{"Email Address"}</label>
                    <input type="email" />
                    <button class="btn">{"Next step →"}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={close}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: Vec<ModalAction>) -> bool {
        actions
            .into_iter()
            .fold(Rc::new(ModalState::default()), |state, action| state.reduce(action))
            .open
    }

    #[test]
    fn starts_closed() {
        assert!(!ModalState::default().open);
    }

    #[test]
    fn open_and_close() {
        assert!(run(vec![ModalAction::Open]));
        assert!(!run(vec![ModalAction::Open, ModalAction::Close]));
        assert!(run(vec![ModalAction::Open, ModalAction::Open]));
    }

    #[test]
    fn escape_closes_only_an_open_modal() {
        assert!(!run(vec![ModalAction::Open, ModalAction::Key("Escape".into())]));
        assert!(!run(vec![ModalAction::Key("Escape".into())]));
        assert!(run(vec![ModalAction::Open, ModalAction::Key("Enter".into())]));
    }

    #[test]
    fn unchanged_state_is_reused() {
        let state = Rc::new(ModalState::default());
        let next = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
