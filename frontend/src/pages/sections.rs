//! Home page sections. Each one renders fixed copy or a fixed list, in list order.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{ClientLogo, ServiceCard, TestimonialCard};
use crate::components::decor::{Blob, FloatingShape, Wave};
use crate::Route;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "♿",
        title: "WCAG 2.2 Expertise",
        description: "Every recommendation maps to a success criterion, so your team knows exactly what to fix and why it matters.",
    },
    Feature {
        icon: "🧪",
        title: "Tested With Real Users",
        description: "Screen reader, switch and voice control users review your product alongside our auditors.",
    },
    Feature {
        icon: "🛠",
        title: "Fixes, Not Just Reports",
        description: "We pair with your engineers and designers until the issues are closed in your codebase.",
    },
    Feature {
        icon: "📈",
        title: "Lasting Compliance",
        description: "Regression checks in CI and quarterly reviews keep new releases accessible.",
    },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub image: Option<&'static str>,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🔍",
        title: "Accessibility Audits",
        description: "A full manual and automated review of your key user journeys against WCAG 2.2 AA, with prioritised findings.",
        link: "/contact?subject=Accessibility%20audit",
        image: Some("/assets/services/audit.jpg"),
    },
    Service {
        icon: "🎨",
        title: "Inclusive Design Reviews",
        description: "Early feedback on wireframes and design systems, before inaccessible patterns reach production.",
        link: "/contact?subject=Design%20review",
        image: Some("/assets/services/design.jpg"),
    },
    Service {
        icon: "💻",
        title: "Remediation Sprints",
        description: "Our engineers embed with your team to fix audit findings and leave behind tested, accessible components.",
        link: "/contact?subject=Remediation",
        image: None,
    },
    Service {
        icon: "🎓",
        title: "Team Training",
        description: "Hands-on workshops for designers, developers and content authors, tailored to your own product.",
        link: "/contact?subject=Training",
        image: Some("/assets/services/training.jpg"),
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub company_logo: Option<&'static str>,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Our checkout finally works with a screen reader, and conversions went up for everyone.",
        name: "Maya Lindqvist",
        role: "Head of Product",
        company: "Northwind Outfitters",
        avatar: "/assets/people/maya.jpg",
        company_logo: Some("/assets/logos/northwind.svg"),
    },
    Testimonial {
        quote: "The training changed how our designers work. Accessibility is now part of every review.",
        name: "Daniel Osei",
        role: "Design Director",
        company: "Brightline Health",
        avatar: "/assets/people/daniel.jpg",
        company_logo: Some("/assets/logos/brightline.svg"),
    },
    Testimonial {
        quote: "Clear findings, realistic priorities and engineers who actually helped us ship the fixes.",
        name: "Priya Raman",
        role: "Engineering Manager",
        company: "Civic Ledger",
        avatar: "/assets/people/priya.jpg",
        company_logo: None,
    },
];

pub const CLIENT_LOGOS: &[(&str, &str)] = &[
    ("Northwind Outfitters", "/assets/logos/northwind.svg"),
    ("Brightline Health", "/assets/logos/brightline.svg"),
    ("Civic Ledger", "/assets/logos/civic-ledger.svg"),
    ("Harbor University", "/assets/logos/harbor.svg"),
    ("Mosaic Bank", "/assets/logos/mosaic.svg"),
];

fn stagger(index: usize) -> AttrValue {
    AttrValue::from(format!("{}ms", index * 100))
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or(AttrValue::from("Book a consultation"))]
    pub cta_label: AttrValue,
    #[prop_or(AttrValue::from("/contact"))]
    pub cta_link: AttrValue,
}

/// Static page hero with decorative shapes and an optional side image.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero relative overflow-hidden bg-gradient-to-br from-indigo-950 via-indigo-900 to-teal-900 pb-32 pt-40 text-white">
            <Blob />
            <Blob position="-bottom-24 right-0" color="bg-teal-400/25" delay={AttrValue::from("3s")} />
            <FloatingShape shape="triangle" position="top-32 right-1/4" rotation={15} />
            <FloatingShape shape="square" position="bottom-40 left-16" size="w-10 h-10" rotation={30} color="bg-amber-300/40" />
            <div class="relative z-10 mx-auto grid max-w-6xl items-center gap-12 px-6 md:grid-cols-2">
                <div>
                    <h1 class="hero-title mb-6 text-4xl font-extrabold leading-tight md:text-6xl">{&props.title}</h1>
                    <p class="mb-8 text-lg text-indigo-100">{&props.subtitle}</p>
                    <a
                        href={props.cta_link.clone()}
                        aria-label={props.cta_label.clone()}
                        class="inline-block rounded-full bg-amber-400 px-8 py-4 font-bold text-slate-900 hover:bg-amber-300 focus:outline-none focus-visible:ring-4 focus-visible:ring-amber-200"
                    >
                        {&props.cta_label}
                    </a>
                </div>
                {
                    if let Some(image) = &props.image {
                        html! {
                            <img src={image.clone()} alt="" class="hidden rounded-3xl shadow-2xl md:block" />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <Wave color="text-slate-50" />
        </section>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section class="features bg-slate-50 py-24" aria-labelledby="features-heading">
            <div class="mx-auto max-w-6xl px-6">
                <h2 id="features-heading" class="mb-4 text-center text-4xl font-bold text-slate-900">
                    {"Accessibility, Done Properly"}
                </h2>
                <p class="mx-auto mb-16 max-w-2xl text-center text-lg text-slate-700">
                    {"One in four adults lives with a disability. We help you build products that work for all of them."}
                </p>
                <ul class="grid gap-8 md:grid-cols-2 lg:grid-cols-4">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <li
                            key={feature.title}
                            class="feature-item rounded-2xl bg-white p-6 shadow-sm ring-1 ring-slate-100"
                            style={format!("animation-delay: {};", stagger(i))}
                        >
                            <span class="mb-4 block text-3xl" aria-hidden="true">{feature.icon}</span>
                            <h3 class="mb-2 text-lg font-semibold text-slate-900">{feature.title}</h3>
                            <p class="text-slate-700">{feature.description}</p>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(PremiumServices)]
pub fn premium_services() -> Html {
    html! {
        <section id="services" class="premium-services bg-white py-24" aria-labelledby="services-heading">
            <div class="mx-auto max-w-6xl px-6">
                <h2 id="services-heading" class="mb-4 text-center text-4xl font-bold text-slate-900">
                    {"Our Services"}
                </h2>
                <p class="mx-auto mb-16 max-w-2xl text-center text-lg text-slate-700">
                    {"From a first audit to an accessible design system, pick the support your team needs."}
                </p>
                <div class="grid gap-8 md:grid-cols-2">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <ServiceCard
                            key={service.title}
                            icon={service.icon}
                            title={service.title}
                            description={service.description}
                            link={service.link}
                            image={service.image.map(AttrValue::from)}
                            delay={stagger(i)}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section class="testimonials bg-indigo-50 py-24" aria-labelledby="testimonials-heading">
            <div class="mx-auto max-w-6xl px-6">
                <h2 id="testimonials-heading" class="mb-16 text-center text-4xl font-bold text-slate-900">
                    {"What Our Clients Say"}
                </h2>
                <div class="grid gap-8 lg:grid-cols-3">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <TestimonialCard
                            key={t.name}
                            quote={t.quote}
                            name={t.name}
                            role={t.role}
                            company={t.company}
                            avatar={t.avatar}
                            company_logo={t.company_logo.map(AttrValue::from)}
                            delay={stagger(i)}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ClientLogos)]
pub fn client_logos() -> Html {
    html! {
        <section class="client-logos bg-white py-16" aria-labelledby="clients-heading">
            <div class="mx-auto max-w-6xl px-6 text-center">
                <h2 id="clients-heading" class="mb-10 text-sm font-semibold uppercase tracking-widest text-slate-600">
                    {"Trusted by teams at"}
                </h2>
                <ul class="flex flex-wrap items-center justify-center gap-x-12 gap-y-8">
                    { for CLIENT_LOGOS.iter().map(|(name, src)| html! {
                        <li key={*name}>
                            <ClientLogo name={*name} src={*src} />
                        </li>
                    }) }
                </ul>
                <Link<Route>
                    to={Route::Services}
                    classes="mt-10 inline-block font-semibold text-indigo-700 underline-offset-4 hover:underline"
                >
                    {"Read how we helped them"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    html! {
        <section class="cta relative overflow-hidden bg-indigo-900 py-24 text-white" aria-labelledby="cta-heading">
            <Wave color="text-white" position="top-0 left-0" flip=true />
            <FloatingShape position="top-20 right-20" size="w-24 h-24" color="bg-indigo-400/30" />
            <div class="relative z-10 mx-auto max-w-3xl px-6 text-center">
                <h2 id="cta-heading" class="mb-6 text-4xl font-bold">{"Ready to Open Your Product to Everyone?"}</h2>
                <p class="mb-10 text-lg text-indigo-100">
                    {"Start with a free scan of your website, or talk to an auditor about your roadmap."}
                </p>
                <div class="mb-12 flex flex-wrap justify-center gap-4">
                    <a
                        href="/contact?subject=Free%20accessibility%20scan"
                        aria-label="Scan Your Website"
                        class="rounded-full bg-amber-400 px-8 py-4 font-bold text-slate-900 hover:bg-amber-300 focus:outline-none focus-visible:ring-4 focus-visible:ring-amber-200"
                    >
                        {"Scan Your Website"}
                    </a>
                    <Link<Route>
                        to={Route::Contact}
                        classes="rounded-full border border-white/50 px-8 py-4 font-semibold hover:bg-white/10 focus:outline-none focus-visible:ring-4 focus-visible:ring-white/50"
                    >
                        {"Talk to an auditor"}
                    </Link<Route>>
                </div>
                // Placeholder until the newsletter provider is chosen; nothing is submitted.
                <div class="newsletter mx-auto max-w-md rounded-2xl bg-white/10 p-6" aria-disabled="true">
                    <label for="newsletter-email" class="mb-3 block font-semibold">{"Newsletter"}</label>
                    <div class="flex gap-2">
                        <input
                            id="newsletter-email"
                            type="email"
                            placeholder="you@example.com"
                            disabled=true
                            aria-describedby="newsletter-note"
                            class="flex-1 cursor-not-allowed rounded-lg bg-white/70 px-4 py-3 text-slate-700"
                        />
                        <button
                            type="button"
                            disabled=true
                            class="cursor-not-allowed rounded-lg bg-slate-400 px-5 py-3 font-semibold text-slate-800"
                        >
                            {"Subscribe"}
                        </button>
                    </div>
                    <p id="newsletter-note" class="mt-3 text-sm text-indigo-100">
                        {"Coming soon. Sign-ups are not open yet."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[function_component]
    fn RoutedCta() -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <CtaSection />
            </Router>
        }
    }

    #[function_component]
    fn RoutedLogos() -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <ClientLogos />
            </Router>
        }
    }

    #[tokio::test]
    async fn services_render_in_list_order() {
        let html = ServerRenderer::<PremiumServices>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(html.matches("service-card").count(), SERVICES.len());
        let positions: Vec<usize> = SERVICES
            .iter()
            .map(|s| html.find(s.title).expect("every service is rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn features_render_one_item_each() {
        let html = ServerRenderer::<FeaturesSection>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(html.matches("feature-item").count(), FEATURES.len());
        for feature in FEATURES {
            assert!(html.contains(feature.description));
        }
    }

    #[tokio::test]
    async fn newsletter_is_visibly_inert() {
        let html = ServerRenderer::<RoutedCta>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains("Coming soon"));
        assert_eq!(html.matches("cursor-not-allowed").count(), 2);
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(!html.contains("<form"));
    }

    #[tokio::test]
    async fn testimonials_keep_their_order() {
        let html = ServerRenderer::<TestimonialsSection>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(html.matches("testimonial-card").count(), TESTIMONIALS.len());
        let first = html.find(TESTIMONIALS[0].name).expect("first testimonial");
        let last = html.find(TESTIMONIALS[2].name).expect("last testimonial");
        assert!(first < last);
    }

    #[tokio::test]
    async fn cta_links_route_inside_the_app() {
        let html = ServerRenderer::<RoutedCta>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains(r#"href="/contact""#));
        assert!(html.contains("Talk to an auditor"));
        // The scan link keeps its query so the contact form can prefill the subject.
        assert!(html.contains(r#"href="/contact?subject=Free%20accessibility%20scan""#));
    }

    #[tokio::test]
    async fn client_logos_render_through_the_fallback_component() {
        let html = ServerRenderer::<RoutedLogos>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(html.matches("client-logo ").count(), CLIENT_LOGOS.len());
        for (name, src) in CLIENT_LOGOS {
            assert!(html.contains(&format!(r#"alt="{}""#, name)));
            assert!(html.contains(src));
        }
        assert!(html.contains(r#"href="/services""#));
    }

    #[test]
    fn stagger_steps_by_a_tenth_of_a_second() {
        assert_eq!(stagger(0), AttrValue::from("0ms"));
        assert_eq!(stagger(3), AttrValue::from("300ms"));
    }
}
