use log::info;
use web_sys::{HtmlMediaElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::decor::{Blob, Wave};
use crate::config;
use crate::Route;

/// The part of a media element the hero drives.
pub trait MediaPlayback {
    fn apply_muted(&self, muted: bool);
}

impl MediaPlayback for HtmlMediaElement {
    fn apply_muted(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    pub muted: bool,
}

impl Default for PlaybackState {
    /// Muted, so browsers allow autoplay.
    fn default() -> Self {
        Self { muted: true }
    }
}

impl PlaybackState {
    /// Flips `muted` and pushes the new value to `media` before returning it.
    pub fn toggled<M: MediaPlayback + ?Sized>(self, media: Option<&M>) -> Self {
        let next = Self { muted: !self.muted };
        if let Some(media) = media {
            media.apply_muted(next.muted);
        }
        next
    }

    pub fn button_label(self) -> &'static str {
        if self.muted {
            "Unmute background video"
        } else {
            "Mute background video"
        }
    }
}

/// Smooth-scrolls one viewport height down. Does nothing without a window.
pub fn scroll_to_content() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(height);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn muted_icon() -> Html {
    html! {
        <svg class="h-6 w-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true" focusable="false">
            <path d="M11 5 6 9H2v6h4l5 4V5z" />
            <path d="m23 9-6 6M17 9l6 6" />
        </svg>
    }
}

fn unmuted_icon() -> Html {
    html! {
        <svg class="h-6 w-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true" focusable="false">
            <path d="M11 5 6 9H2v6h4l5 4V5z" />
            <path d="M15.5 8.5a5 5 0 0 1 0 7M19 5a10 10 0 0 1 0 14" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or(AttrValue::from(config::site().hero_video))]
    pub video: AttrValue,
    #[prop_or(AttrValue::from(config::site().hero_poster))]
    pub poster: AttrValue,
    #[prop_or(AttrValue::from("Scan Your Website"))]
    pub cta_label: AttrValue,
    #[prop_or(AttrValue::from("/contact"))]
    pub cta_link: AttrValue,
}

#[function_component(VideoHero)]
pub fn video_hero(props: &VideoHeroProps) -> Html {
    let video_ref = use_node_ref();
    let playback = use_state(PlaybackState::default);

    // The `muted` attribute only seeds the element; keep the property in step on mount.
    {
        let video_ref = video_ref.clone();
        let muted = playback.muted;
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    video.apply_muted(muted);
                }
                || ()
            },
            (),
        );
    }

    let toggle_mute = {
        let video_ref = video_ref.clone();
        let playback = playback.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let video = video_ref.cast::<HtmlMediaElement>();
            let next = (*playback).toggled(video.as_ref());
            info!("Hero video {}", if next.muted { "muted" } else { "unmuted" });
            playback.set(next);
        })
    };

    let on_scroll = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_content();
    });

    html! {
        <section
            class="video-hero relative flex min-h-screen items-center overflow-hidden bg-slate-950 text-white"
            aria-labelledby="hero-heading"
        >
            <video
                ref={video_ref}
                class="absolute inset-0 h-full w-full object-cover opacity-40"
                src={props.video.clone()}
                poster={props.poster.clone()}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                aria-hidden="true"
            />
            <Blob color="bg-indigo-500/30" position="-top-32 -right-24" />
            <Blob color="bg-teal-400/20" position="bottom-0 -left-24" delay={AttrValue::from("4s")} />
            <div class="relative z-10 mx-auto max-w-5xl px-6 py-32">
                <h1 id="hero-heading" class="hero-title mb-6 text-5xl font-extrabold leading-tight md:text-7xl">
                    {&props.title}
                </h1>
                <p class="mb-10 max-w-2xl text-xl text-slate-200">{&props.subtitle}</p>
                <div class="flex flex-wrap gap-4">
                    <a
                        href={props.cta_link.clone()}
                        aria-label={props.cta_label.clone()}
                        class="rounded-full bg-indigo-500 px-8 py-4 font-semibold text-white shadow-lg hover:bg-indigo-400 focus:outline-none focus-visible:ring-4 focus-visible:ring-indigo-300"
                    >
                        {&props.cta_label}
                    </a>
                    <Link<Route>
                        to={Route::Services}
                        classes="rounded-full border border-white/40 px-8 py-4 font-semibold text-white hover:bg-white/10 focus:outline-none focus-visible:ring-4 focus-visible:ring-white/50"
                    >
                        {"Our services"}
                    </Link<Route>>
                </div>
            </div>
            <button
                type="button"
                class="mute-toggle absolute bottom-8 right-8 z-10 rounded-full bg-black/50 p-3 hover:bg-black/70 focus:outline-none focus-visible:ring-2 focus-visible:ring-white"
                aria-label={playback.button_label()}
                aria-pressed={if playback.muted { "false" } else { "true" }}
                onclick={toggle_mute}
            >
                { if playback.muted { muted_icon() } else { unmuted_icon() } }
            </button>
            <button
                type="button"
                class="absolute bottom-8 left-1/2 z-10 -translate-x-1/2 animate-bounce rounded-full p-2 focus:outline-none focus-visible:ring-2 focus-visible:ring-white"
                aria-label="Scroll to content"
                onclick={on_scroll}
            >
                <svg class="h-8 w-8" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true" focusable="false">
                    <path d="m6 9 6 6 6-6" />
                </svg>
            </button>
            <Wave color="text-slate-50" />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeMedia {
        muted: Cell<bool>,
        writes: Cell<u32>,
    }

    impl MediaPlayback for FakeMedia {
        fn apply_muted(&self, muted: bool) {
            self.muted.set(muted);
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn starts_muted() {
        assert!(PlaybackState::default().muted);
        assert_eq!(PlaybackState::default().button_label(), "Unmute background video");
    }

    #[test]
    fn media_follows_every_toggle() {
        let media = FakeMedia {
            muted: Cell::new(true),
            ..Default::default()
        };
        let start = PlaybackState::default();

        let once = start.toggled(Some(&media));
        assert!(!once.muted);
        assert_eq!(media.muted.get(), once.muted);

        let twice = once.toggled(Some(&media));
        assert_eq!(twice, start);
        assert_eq!(media.muted.get(), twice.muted);
        assert_eq!(media.writes.get(), 2);
    }

    #[test]
    fn toggle_without_media_still_flips() {
        let next = PlaybackState::default().toggled(None::<&FakeMedia>);
        assert!(!next.muted);
        assert_eq!(next.button_label(), "Mute background video");
    }
}
