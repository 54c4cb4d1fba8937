use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromoState {
    #[default]
    Hidden,
    Shown,
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromoAction {
    TimerElapsed,
    Dismiss,
}

impl PromoState {
    pub fn next(self, action: PromoAction) -> Self {
        match (self, action) {
            (PromoState::Hidden, PromoAction::TimerElapsed) => PromoState::Shown,
            (_, PromoAction::Dismiss) => PromoState::Dismissed,
            (state, PromoAction::TimerElapsed) => state,
        }
    }

    pub fn is_open(self) -> bool {
        self == PromoState::Shown
    }
}

impl Reducible for PromoState {
    type Action = PromoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Document-level key handling while the dialog is open.
pub fn action_for_key(key: &str) -> Option<PromoAction> {
    match key {
        "Escape" | "Esc" => Some(PromoAction::Dismiss),
        _ => None,
    }
}

/// Where keyboard focus sits among the dialog's focusable controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPosition {
    First,
    Inside,
    Last,
}

/// The control Tab (Shift+Tab when `backwards`) must jump to so focus never
/// leaves the dialog. `None` keeps the browser's own order.
pub fn wrapped_focus(position: FocusPosition, backwards: bool) -> Option<FocusPosition> {
    match (position, backwards) {
        (FocusPosition::Last, false) => Some(FocusPosition::First),
        (FocusPosition::First, true) => Some(FocusPosition::Last),
        _ => None,
    }
}

/// Contact page link carrying the site to scan in the subject.
pub fn scan_request_href(site_url: &str) -> String {
    let site_url = site_url.trim();
    if site_url.is_empty() {
        return "/contact?subject=Free%20accessibility%20scan".to_string();
    }
    let subject = format!("Free accessibility scan: {}", site_url);
    format!("/contact?subject={}", urlencoding::encode(&subject))
}

#[function_component(PromoModal)]
pub fn promo_modal() -> Html {
    let state = use_reducer_eq(PromoState::default);
    let site_url = use_state(String::new);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::site().promo_delay_ms, move || {
                    info!("Opening promotional modal");
                    state.dispatch(PromoAction::TimerElapsed);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let close_ref = use_node_ref();
    let submit_ref = use_node_ref();

    // While open: focus moves into the dialog, Escape works from anywhere on
    // the page, and focus goes back to where it was once the dialog closes.
    {
        let deps = *state;
        let state = state.clone();
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |current: &PromoState| {
                let mut listener = None;
                let mut opener = None;
                if current.is_open() {
                    if let Some(document) = window().and_then(|w| w.document()) {
                        opener = document
                            .active_element()
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                        if let Some(button) = close_ref.cast::<HtmlElement>() {
                            let _ = button.focus();
                        }
                        let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if let Some(action) = action_for_key(&e.key()) {
                                state.dispatch(action);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        if document
                            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
                            .is_ok()
                        {
                            listener = Some((document, on_key));
                        }
                    }
                }

                move || {
                    if let Some((document, on_key)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(opener) = opener {
                        let _ = opener.focus();
                    }
                }
            },
            deps,
        );
    }

    if !state.is_open() {
        return html! {};
    }

    let close = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(PromoAction::Dismiss);
        })
    };

    let trap_tab = {
        let close_ref = close_ref.clone();
        let submit_ref = submit_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Tab" {
                return;
            }
            let active = window()
                .and_then(|w| w.document())
                .and_then(|d| d.active_element());
            let holds_focus = |node: &NodeRef| match (&active, node.get()) {
                (Some(active), Some(node)) => active.is_same_node(Some(&node)),
                _ => false,
            };
            let position = if holds_focus(&close_ref) {
                FocusPosition::First
            } else if holds_focus(&submit_ref) {
                FocusPosition::Last
            } else {
                FocusPosition::Inside
            };
            let target = match wrapped_focus(position, e.shift_key()) {
                Some(FocusPosition::First) => &close_ref,
                Some(FocusPosition::Last) => &submit_ref,
                _ => return,
            };
            if let Some(el) = target.cast::<HtmlElement>() {
                e.prevent_default();
                let _ = el.focus();
            }
        })
    };

    let on_input = {
        let site_url = site_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            site_url.set(input.value());
        })
    };

    let on_submit = {
        let site_url = site_url.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let href = scan_request_href(&site_url);
            state.dispatch(PromoAction::Dismiss);
            if let Some(window) = window() {
                let _ = window.location().set_href(&href);
            }
        })
    };

    html! {
        <div
            class="promo-overlay fixed inset-0 z-50 flex items-center justify-center bg-slate-950/70 p-4"
            onkeydown={trap_tab}
        >
            <style>
                {r#"
                .promo-modal {
                    background-image: linear-gradient(135deg, rgba(30, 27, 75, 0.92), rgba(15, 118, 110, 0.88)), url('/assets/promo-bg.jpg');
                    background-size: cover;
                    background-position: center;
                }
                .promo-modal h2 {
                    color: #ffffff;
                    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.45);
                }
                .promo-modal input {
                    background: rgba(255, 255, 255, 0.95);
                    color: #0f172a;
                    border: 2px solid #a5b4fc;
                }
                "#}
            </style>
            <div
                class="promo-modal relative w-full max-w-lg rounded-2xl p-8 text-white shadow-2xl"
                role="dialog"
                aria-modal="true"
                aria-labelledby="promo-heading"
                aria-describedby="promo-description"
            >
                <button
                    type="button"
                    class="absolute right-4 top-4 rounded-full p-2 text-white/80 hover:text-white focus:outline-none focus-visible:ring-2 focus-visible:ring-white"
                    aria-label="Close"
                    onclick={close}
                    ref={close_ref}
                >
                    <span aria-hidden="true">{"×"}</span>
                </button>
                <h2 id="promo-heading" class="mb-3 text-3xl font-extrabold">{"Is your site accessible?"}</h2>
                <p id="promo-description" class="mb-6 text-slate-100">
                    {"Get a free automated WCAG scan of your home page and a short report from our auditors."}
                </p>
                <form class="flex flex-col gap-3 sm:flex-row" onsubmit={on_submit}>
                    <label for="promo-url" class="sr-only">{"Website address"}</label>
                    <input
                        id="promo-url"
                        type="url"
                        placeholder="https://example.com"
                        class="flex-1 rounded-lg px-4 py-3 focus:outline-none focus:ring-2 focus:ring-white"
                        value={(*site_url).clone()}
                        oninput={on_input}
                    />
                    <button
                        type="submit"
                        ref={submit_ref}
                        class="rounded-lg bg-amber-400 px-6 py-3 font-bold text-slate-900 hover:bg-amber-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-white"
                    >
                        {"Scan Your Website"}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_opens_only_from_hidden() {
        assert_eq!(PromoState::Hidden.next(PromoAction::TimerElapsed), PromoState::Shown);
        assert!(PromoState::Shown.is_open());
        assert_eq!(
            PromoState::Dismissed.next(PromoAction::TimerElapsed),
            PromoState::Dismissed
        );
    }

    #[test]
    fn dismissal_is_permanent() {
        let state = PromoState::Hidden
            .next(PromoAction::TimerElapsed)
            .next(PromoAction::Dismiss)
            .next(PromoAction::TimerElapsed);
        assert_eq!(state, PromoState::Dismissed);
        assert!(!state.is_open());
    }

    #[test]
    fn escape_dismisses_from_anywhere() {
        assert_eq!(action_for_key("Escape"), Some(PromoAction::Dismiss));
        assert_eq!(action_for_key("Esc"), Some(PromoAction::Dismiss));
        assert_eq!(action_for_key("Enter"), None);
        assert_eq!(action_for_key("Tab"), None);

        let state = PromoState::Hidden.next(PromoAction::TimerElapsed);
        let after = action_for_key("Escape").map_or(state, |action| state.next(action));
        assert_eq!(after, PromoState::Dismissed);
    }

    #[test]
    fn tab_wraps_at_both_ends() {
        assert_eq!(
            wrapped_focus(FocusPosition::Last, false),
            Some(FocusPosition::First)
        );
        assert_eq!(
            wrapped_focus(FocusPosition::First, true),
            Some(FocusPosition::Last)
        );
        assert_eq!(wrapped_focus(FocusPosition::First, false), None);
        assert_eq!(wrapped_focus(FocusPosition::Last, true), None);
        assert_eq!(wrapped_focus(FocusPosition::Inside, false), None);
        assert_eq!(wrapped_focus(FocusPosition::Inside, true), None);
    }

    #[tokio::test]
    async fn closed_dialog_renders_nothing() {
        let html = yew::ServerRenderer::<PromoModal>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(!html.contains(r#"role="dialog""#));
    }

    #[test]
    fn scan_link_encodes_the_site() {
        assert_eq!(
            scan_request_href(" https://a.io/x "),
            "/contact?subject=Free%20accessibility%20scan%3A%20https%3A%2F%2Fa.io%2Fx"
        );
        assert_eq!(
            scan_request_href(""),
            "/contact?subject=Free%20accessibility%20scan"
        );
    }
}
