#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Site-wide settings. Every field has a fixed default, see [`site`].
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Shown in the nav logo, footer and page titles.
    pub site_name: &'static str,
    /// Public contact address, also used as the mailto fallback.
    pub contact_email: &'static str,
    /// Path appended to the backend URL for contact form submissions.
    pub contact_path: &'static str,
    /// Substituted once when a testimonial avatar fails to load.
    pub avatar_placeholder: &'static str,
    /// Background video of the home page hero.
    pub hero_video: &'static str,
    /// Poster frame shown before the hero video starts.
    pub hero_poster: &'static str,
    /// Milliseconds before the promotional modal opens.
    pub promo_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Inclusive Web Studio",
            contact_email: "hello@inclusiveweb.studio",
            contact_path: "/api/contact",
            avatar_placeholder: "/assets/avatar-placeholder.svg",
            hero_video: "/assets/hero-loop.mp4",
            hero_poster: "/assets/hero-poster.jpg",
            promo_delay_ms: 30_000,
        }
    }
}

impl SiteConfig {
    pub fn contact_endpoint(&self) -> String {
        format!("{}{}", get_backend_url(), self.contact_path)
    }
}

pub fn site() -> SiteConfig {
    SiteConfig::default()
}
