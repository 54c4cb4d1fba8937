use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::promo_modal::PromoModal;
use crate::components::video_hero::VideoHero;
use crate::pages::faq::FaqSection;
use crate::pages::sections::{
    ClientLogos, CtaSection, FeaturesSection, Hero, PremiumServices, TestimonialsSection,
};
use crate::Route;

#[function_component]
pub fn Home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <VideoHero
                title="Websites Everyone Can Use"
                subtitle="We audit, fix and future-proof digital products so people with disabilities can use them without barriers, and so you meet WCAG and the European Accessibility Act."
            />
            <FeaturesSection />
            <PremiumServices />
            <ClientLogos />
            <TestimonialsSection />
            <FaqSection />
            <CtaSection />
            <PromoModal />
        </div>
    }
}

#[function_component]
pub fn Services() -> Html {
    html! {
        <div class="services-page">
            <Hero
                title="Accessibility Services"
                subtitle="Audits, design reviews, remediation and training, delivered by practitioners who use assistive technology every day."
                image={AttrValue::from("/assets/services/hero.jpg")}
            />
            <PremiumServices />
            <TestimonialsSection />
            <CtaSection />
        </div>
    }
}

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <section class="not-found mx-auto max-w-2xl px-6 py-40 text-center" aria-labelledby="not-found-heading">
            <h1 id="not-found-heading" class="mb-4 text-5xl font-extrabold text-slate-900">{"Page not found"}</h1>
            <p class="mb-8 text-lg text-slate-700">{"The page you are looking for has moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="font-semibold text-indigo-700 underline">
                {"Back to the home page"}
            </Link<Route>>
        </section>
    }
}
