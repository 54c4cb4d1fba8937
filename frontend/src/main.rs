use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod components {
    pub mod decor;
    pub mod cards;
    pub mod contact_fields;
    pub mod video_hero;
    pub mod promo_modal;
}
mod pages {
    pub mod sections;
    pub mod home;
    pub mod faq;
    pub mod contact;
}

use components::decor::DecorKeyframes;
use pages::{
    home::{Home, Services, NotFound},
    faq::FaqPage,
    contact::Contact,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <FaqPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Scroll offset after which the nav switches to its solid background.
const NAV_SCROLL_THRESHOLD: i32 = 80;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().and_then(|window| {
                let document = window.document()?;
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .ok()?;
                Some((window, scroll_callback))
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let site = config::site();

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))} aria-label="Main">
            <a href="#main-content" class="skip-link">{"Skip to content"}</a>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {site.site_name}
                </Link<Route>>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Toggle navigation menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    aria-controls="nav-menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="nav-menu" class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-cta-button">
                            {"Contact us"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    transition: background-color 0.3s ease, box-shadow 0.3s ease;
                    background: transparent;
                }
                .top-nav.scrolled {
                    background: rgba(30, 27, 75, 0.95);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 800;
                    font-size: 1.25rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }
                .nav-link {
                    color: #e0e7ff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .nav-link:hover, .nav-link:focus-visible {
                    color: #fff;
                    text-decoration: underline;
                }
                .nav-cta-button {
                    background: #fbbf24;
                    color: #0f172a;
                    padding: 0.6rem 1.4rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    text-decoration: none;
                }
                .skip-link {
                    position: absolute;
                    left: -9999px;
                }
                .skip-link:focus {
                    left: 1rem;
                    top: 1rem;
                    background: #fff;
                    color: #1e1b4b;
                    padding: 0.5rem 1rem;
                    z-index: 50;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(30, 27, 75, 0.98);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = config::site();
    let year = chrono::Local::now().year();

    html! {
        <footer class="bg-slate-950 py-12 text-slate-300">
            <div class="mx-auto flex max-w-6xl flex-col items-center justify-between gap-4 px-6 md:flex-row">
                <p>{format!("© {} {}", year, site.site_name)}</p>
                <p>
                    {"Questions? "}
                    <a
                        href={format!("mailto:{}", site.contact_email)}
                        aria-label={format!("Email {}", site.contact_email)}
                        class="font-semibold text-white underline-offset-4 hover:underline"
                    >
                        {site.contact_email}
                    </a>
                </p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Chrome shared by every route. The decor keyframes live here so each page's
/// blobs and shapes animate without mounting their own copy.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <DecorKeyframes />
            <Nav />
            <main id="main-content">
                { props.children.clone() }
            </main>
            <Footer />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
