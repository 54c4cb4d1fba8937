use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::decor::delay_style;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    /// Glyph or emoji shown above the title.
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    /// Route path for the "Learn more" link.
    pub link: AttrValue,
    /// Faint background picture behind the text.
    #[prop_or_default]
    pub image: Option<AttrValue>,
    /// CSS time for the entrance animation.
    #[prop_or_default]
    pub delay: Option<AttrValue>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <article
            class="service-card group relative flex h-full flex-col overflow-hidden rounded-2xl border border-slate-200 bg-white p-8 shadow-sm transition hover:-translate-y-1 hover:shadow-xl"
            style={delay_style(&props.delay)}
        >
            {
                if let Some(image) = &props.image {
                    html! {
                        <img
                            src={image.clone()}
                            alt=""
                            aria-hidden="true"
                            loading="lazy"
                            class="pointer-events-none absolute inset-0 h-full w-full object-cover opacity-10"
                        />
                    }
                } else {
                    html! {}
                }
            }
            <div class="relative z-10 flex flex-1 flex-col">
                <span class="mb-4 text-4xl" aria-hidden="true">{&props.icon}</span>
                <h3 class="mb-3 text-xl font-bold text-slate-900">{&props.title}</h3>
                <p class="mb-6 flex-1 text-slate-700">{&props.description}</p>
                <a
                    href={props.link.clone()}
                    aria-label={format!("Learn more about {}", props.title)}
                    class="inline-flex items-center gap-2 font-semibold text-indigo-700 underline-offset-4 hover:underline focus:outline-none focus-visible:ring-2 focus-visible:ring-indigo-600"
                >
                    {"Learn more"}
                    <span aria-hidden="true">{"→"}</span>
                </a>
            </div>
        </article>
    }
}

/// Load-failure state of a testimonial's two images.
///
/// The avatar is swapped for the site placeholder on its first failure and the
/// logo is hidden on its first failure. Neither is ever retried, so repeated
/// error events leave the state untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct CardImages {
    pub avatar_src: AttrValue,
    pub avatar_replaced: bool,
    pub logo_hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageEvent {
    AvatarFailed,
    LogoFailed,
}

impl CardImages {
    pub fn new(avatar_src: AttrValue) -> Self {
        Self {
            avatar_src,
            avatar_replaced: false,
            logo_hidden: false,
        }
    }

    /// Returns the next state, or `None` when the event changes nothing.
    pub fn apply(&self, event: ImageEvent) -> Option<Self> {
        match event {
            ImageEvent::AvatarFailed if !self.avatar_replaced => Some(Self {
                avatar_src: AttrValue::from(config::site().avatar_placeholder),
                avatar_replaced: true,
                ..self.clone()
            }),
            ImageEvent::LogoFailed if !self.logo_hidden => Some(Self {
                logo_hidden: true,
                ..self.clone()
            }),
            _ => None,
        }
    }
}

/// Inline style for a secondary image that may have been hidden after a load failure.
pub fn hidden_style(hidden: bool) -> Option<AttrValue> {
    hidden.then(|| AttrValue::from("display: none;"))
}

pub fn logo_style(images: &CardImages) -> Option<AttrValue> {
    hidden_style(images.logo_hidden)
}

impl Reducible for CardImages {
    type Action = ImageEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub quote: AttrValue,
    pub name: AttrValue,
    pub role: AttrValue,
    pub company: AttrValue,
    pub avatar: AttrValue,
    #[prop_or_default]
    pub company_logo: Option<AttrValue>,
    #[prop_or_default]
    pub delay: Option<AttrValue>,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let images = {
        let avatar = props.avatar.clone();
        use_reducer_eq(move || CardImages::new(avatar))
    };

    let on_avatar_error = {
        let images = images.clone();
        let name = props.name.clone();
        Callback::from(move |_: Event| {
            if !images.avatar_replaced {
                warn!("Avatar for {} failed to load, using placeholder", name);
            }
            images.dispatch(ImageEvent::AvatarFailed);
        })
    };

    let on_logo_error = {
        let images = images.clone();
        let company = props.company.clone();
        Callback::from(move |_: Event| {
            if !images.logo_hidden {
                warn!("Logo for {} failed to load, hiding it", company);
            }
            images.dispatch(ImageEvent::LogoFailed);
        })
    };

    html! {
        <figure
            class="testimonial-card relative flex h-full flex-col rounded-2xl bg-white p-8 shadow-lg ring-1 ring-slate-100"
            style={delay_style(&props.delay)}
        >
            <svg class="mb-4 h-8 w-8 text-indigo-300" viewBox="0 0 32 32" aria-hidden="true" focusable="false">
                <path fill="currentColor" d="M10 8C5.6 8 2 11.6 2 16v8h8v-8H6c0-2.2 1.8-4 4-4V8zm16 0c-4.4 0-8 3.6-8 8v8h8v-8h-4c0-2.2 1.8-4 4-4V8z" />
            </svg>
            <blockquote class="flex-1 text-lg leading-relaxed text-slate-800">
                <p>{&props.quote}</p>
            </blockquote>
            <figcaption class="mt-6 flex items-center gap-4">
                <img
                    src={images.avatar_src.clone()}
                    alt={format!("Portrait of {}", props.name)}
                    loading="lazy"
                    class="h-14 w-14 rounded-full object-cover"
                    onerror={on_avatar_error}
                />
                <div>
                    <p class="font-semibold text-slate-900">{&props.name}</p>
                    <p class="text-sm text-slate-600">{&props.role}{", "}{&props.company}</p>
                </div>
                {
                    if let Some(logo) = &props.company_logo {
                        html! {
                            <img
                                src={logo.clone()}
                                alt={format!("{} logo", props.company)}
                                loading="lazy"
                                class="company-logo ml-auto h-8 w-auto opacity-80"
                                style={logo_style(&images)}
                                onerror={on_logo_error}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </figcaption>
        </figure>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClientLogoProps {
    pub name: AttrValue,
    pub src: AttrValue,
}

/// A client's logo. Like a testimonial's company logo it is hidden for good
/// after its first load failure.
#[function_component(ClientLogo)]
pub fn client_logo(props: &ClientLogoProps) -> Html {
    let hidden = use_state_eq(|| false);

    let on_error = {
        let hidden = hidden.clone();
        let name = props.name.clone();
        Callback::from(move |_: Event| {
            if !*hidden {
                warn!("Client logo for {} failed to load, hiding it", name);
            }
            hidden.set(true);
        })
    };

    html! {
        <img
            src={props.src.clone()}
            alt={props.name.clone()}
            loading="lazy"
            class="client-logo h-10 w-auto grayscale hover:grayscale-0"
            style={hidden_style(*hidden)}
            onerror={on_error}
        />
    }
}
