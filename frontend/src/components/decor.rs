//! Decorative background elements. Everything here is `aria-hidden`, takes no
//! children and has no behaviour: geometry, colour and animation come from the
//! props alone, with a default for each one left out.

use yew::prelude::*;

/// Joins utility class tokens, skipping empty ones.
fn join_tokens(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline `animation-delay` declaration, shared by every decorated element.
pub(crate) fn delay_style(delay: &Option<AttrValue>) -> Option<AttrValue> {
    delay
        .as_ref()
        .map(|d| AttrValue::from(format!("animation-delay: {};", d)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// Unknown names fall back to the square rule.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => ShapeKind::Circle,
            "triangle" => ShapeKind::Triangle,
            _ => ShapeKind::Square,
        }
    }

    pub fn radius_class(self) -> &'static str {
        match self {
            ShapeKind::Circle => "rounded-full",
            ShapeKind::Square | ShapeKind::Triangle => "rounded-none",
        }
    }

    pub fn clip_path(self) -> Option<&'static str> {
        match self {
            ShapeKind::Triangle => Some("polygon(50% 0%, 0% 100%, 100% 100%)"),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BlobProps {
    #[prop_or(AttrValue::from("w-72 h-72"))]
    pub size: AttrValue,
    #[prop_or(AttrValue::from("-top-24 -left-24"))]
    pub position: AttrValue,
    #[prop_or(AttrValue::from("bg-indigo-400/30"))]
    pub color: AttrValue,
    #[prop_or(AttrValue::from("animate-blob"))]
    pub animation: AttrValue,
    /// CSS time, e.g. `"2s"`.
    #[prop_or_default]
    pub delay: Option<AttrValue>,
}

pub fn blob_classes(props: &BlobProps) -> String {
    join_tokens(&[
        "absolute pointer-events-none rounded-full blur-3xl mix-blend-multiply",
        &*props.size,
        &*props.position,
        &*props.color,
        &*props.animation,
    ])
}

#[function_component(Blob)]
pub fn blob(props: &BlobProps) -> Html {
    html! {
        <div
            class={blob_classes(props)}
            style={delay_style(&props.delay)}
            aria-hidden="true"
        ></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WaveProps {
    /// Text colour class; the path is filled with `currentColor`.
    #[prop_or(AttrValue::from("text-white"))]
    pub color: AttrValue,
    #[prop_or(AttrValue::from("bottom-0 left-0"))]
    pub position: AttrValue,
    #[prop_or(AttrValue::from("h-24"))]
    pub height: AttrValue,
    /// Turns the wave upside down, for use at the top of a section.
    #[prop_or(false)]
    pub flip: bool,
}

pub fn wave_classes(props: &WaveProps) -> String {
    join_tokens(&[
        "absolute w-full pointer-events-none",
        &*props.position,
        &*props.height,
        &*props.color,
        if props.flip { "rotate-180" } else { "" },
    ])
}

#[function_component(Wave)]
pub fn wave(props: &WaveProps) -> Html {
    html! {
        <svg
            class={wave_classes(props)}
            viewBox="0 0 1440 120"
            preserveAspectRatio="none"
            aria-hidden="true"
            focusable="false"
        >
            <path
                fill="currentColor"
                d="M0,64 C240,112 480,112 720,72 C960,32 1200,32 1440,72 L1440,120 L0,120 Z"
            />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingShapeProps {
    /// `circle`, `square` or `triangle`.
    #[prop_or(AttrValue::from("circle"))]
    pub shape: AttrValue,
    #[prop_or(AttrValue::from("w-16 h-16"))]
    pub size: AttrValue,
    #[prop_or(AttrValue::from("top-1/4 left-1/4"))]
    pub position: AttrValue,
    #[prop_or(AttrValue::from("bg-teal-300/40"))]
    pub color: AttrValue,
    /// Degrees.
    #[prop_or(0)]
    pub rotation: i32,
    #[prop_or(AttrValue::from("animate-float"))]
    pub animation: AttrValue,
    #[prop_or_default]
    pub delay: Option<AttrValue>,
}

pub fn floating_shape_classes(props: &FloatingShapeProps) -> String {
    let kind = ShapeKind::from_name(&props.shape);
    join_tokens(&[
        "absolute pointer-events-none",
        &*props.size,
        &*props.position,
        &*props.color,
        kind.radius_class(),
        &*props.animation,
    ])
}

pub fn floating_shape_style(props: &FloatingShapeProps) -> String {
    let mut style = format!("transform: rotate({}deg);", props.rotation);
    if let Some(clip) = ShapeKind::from_name(&props.shape).clip_path() {
        style.push_str(&format!(" clip-path: {};", clip));
    }
    if let Some(delay) = delay_style(&props.delay) {
        style.push(' ');
        style.push_str(&delay);
    }
    style
}

#[function_component(FloatingShape)]
pub fn floating_shape(props: &FloatingShapeProps) -> Html {
    html! {
        <div
            class={floating_shape_classes(props)}
            style={floating_shape_style(props)}
            aria-hidden="true"
        ></div>
    }
}

/// Keyframes for the `animate-*` classes used above. Mounted once by the app layout.
#[function_component(DecorKeyframes)]
pub fn decor_keyframes() -> Html {
    html! {
        <style>
            {r#"
            @keyframes blob {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(30px, -40px) scale(1.1); }
                66% { transform: translate(-20px, 20px) scale(0.9); }
            }
            @keyframes float {
                0%, 100% { translate: 0 0; }
                50% { translate: 0 -18px; }
            }
            .animate-blob { animation: blob 12s ease-in-out infinite; }
            .animate-float { animation: float 6s ease-in-out infinite; }
            @media (prefers-reduced-motion: reduce) {
                .animate-blob, .animate-float { animation: none; }
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn unknown_shapes_degrade_to_square() {
        assert_eq!(ShapeKind::from_name("hexagon"), ShapeKind::Square);
        assert_eq!(ShapeKind::from_name(""), ShapeKind::Square);
        assert_eq!(ShapeKind::from_name("Circle"), ShapeKind::Circle);
        assert_eq!(
            ShapeKind::from_name("hexagon").radius_class(),
            ShapeKind::Square.radius_class()
        );
        assert_eq!(ShapeKind::from_name("hexagon").clip_path(), None);
    }

    #[test]
    fn triangle_is_clipped() {
        assert!(ShapeKind::Triangle.clip_path().is_some());
        let props = yew::props!(FloatingShapeProps { shape: "triangle", rotation: 45 });
        let style = floating_shape_style(&props);
        assert!(style.starts_with("transform: rotate(45deg);"));
        assert!(style.contains("clip-path: polygon"));
    }

    #[test]
    fn delay_is_one_declaration() {
        assert_eq!(delay_style(&None), None);
        assert_eq!(
            delay_style(&Some(AttrValue::from("300ms"))),
            Some(AttrValue::from("animation-delay: 300ms;"))
        );

        let props = yew::props!(FloatingShapeProps { delay: Some(AttrValue::from("1s")) });
        assert_eq!(
            floating_shape_style(&props),
            "transform: rotate(0deg); animation-delay: 1s;"
        );
    }

    #[test]
    fn omitted_props_use_defaults() {
        let blob = yew::props!(BlobProps {});
        assert_eq!(
            blob_classes(&blob),
            "absolute pointer-events-none rounded-full blur-3xl mix-blend-multiply w-72 h-72 -top-24 -left-24 bg-indigo-400/30 animate-blob"
        );

        let wave = yew::props!(WaveProps {});
        assert_eq!(
            wave_classes(&wave),
            "absolute w-full pointer-events-none bottom-0 left-0 h-24 text-white"
        );

        let shape = yew::props!(FloatingShapeProps {});
        assert_eq!(
            floating_shape_classes(&shape),
            "absolute pointer-events-none w-16 h-16 top-1/4 left-1/4 bg-teal-300/40 rounded-full animate-float"
        );
        assert_eq!(floating_shape_style(&shape), "transform: rotate(0deg);");
    }

    #[test]
    fn overrides_replace_only_their_token() {
        let wave = yew::props!(WaveProps { color: "text-slate-900", flip: true });
        let classes = wave_classes(&wave);
        assert!(classes.contains("text-slate-900"));
        assert!(classes.contains("h-24"));
        assert!(classes.ends_with("rotate-180"));
        assert!(!classes.contains("text-white"));
    }

    #[tokio::test]
    async fn primitives_render_hidden_from_assistive_tech() {
        let blob = ServerRenderer::<Blob>::with_props(|| yew::props!(BlobProps {}))
            .hydratable(false)
            .render()
            .await;
        assert!(blob.contains(r#"aria-hidden="true""#));
        assert!(blob.contains("w-72 h-72"));
        assert!(!blob.contains("style="));

        let wave = ServerRenderer::<Wave>::with_props(|| yew::props!(WaveProps {}))
            .hydratable(false)
            .render()
            .await;
        assert!(wave.contains("<svg"));
        assert!(wave.contains(r#"aria-hidden="true""#));

        let shape = ServerRenderer::<FloatingShape>::with_props(|| {
            yew::props!(FloatingShapeProps { shape: "star", delay: Some(AttrValue::from("2s")) })
        })
        .hydratable(false)
        .render()
        .await;
        assert!(shape.contains("rounded-none"));
        assert!(shape.contains("animation-delay: 2s;"));
    }
}
