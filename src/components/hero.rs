use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SiteContent;
use crate::dom;
use crate::hooks::{use_scroll_progress, NavigatorHandle};
use crate::motion::{interpolate, Reveal as RevealMotion};
use crate::scroll_spy::SectionId;

const PARTICLE_COUNT: usize = 20;
const TRACKING_STUB_MESSAGE: &str = "Tracking functionality not implemented";

struct Particle {
    left: f64,
    top: f64,
    drift_x: f64,
    drift_y: f64,
    duration: f64,
    delay: f64,
}

impl Particle {
    fn scattered() -> Self {
        Self {
            left: dom::random() * 100.0,
            top: dom::random() * 100.0,
            drift_x: dom::random() * 100.0,
            drift_y: dom::random() * 100.0,
            duration: 3.0 + dom::random() * 2.0,
            delay: dom::random() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left, self.top, self.drift_x, self.drift_y, self.duration, self.delay
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let navigator = use_context::<NavigatorHandle>();
    let progress = use_scroll_progress();
    let particles = use_state(|| {
        (0..PARTICLE_COUNT)
            .map(|_| Particle::scattered())
            .collect::<Vec<_>>()
    });

    let go_to = |id: SectionId| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.navigate_to(id);
            }
        })
    };

    let track_shipment = Callback::from(|_: MouseEvent| dom::alert(TRACKING_STUB_MESSAGE));

    let overlay_style = format!(
        "transform: translateY({:.2}%); opacity: {:.3};",
        interpolate(progress, (0.0, 1.0), (0.0, 50.0)),
        interpolate(progress, (0.0, 0.3), (1.0, 0.0)),
    );

    let hero = &props.content.hero;
    let qualities = hero.qualities.iter().enumerate().map(|(i, quality)| {
        html! {
            <>
                { if i > 0 { html! { <span class="quality-dot">{"•"}</span> } } else { html! {} } }
                <span class="quality">{quality}</span>
            </>
        }
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-overlay" style={overlay_style}></div>

            <div class="particles">
                { for particles.iter().map(|p| html! { <div class="particle" style={p.style()}></div> }) }
            </div>

            <div class="hero-grid">
                <Reveal motion={RevealMotion::fade_from_left().with_duration(1000)} class="hero-copy">
                    <h1 class="hero-title">
                        <span class="gradient-text">{&props.content.brand}</span>
                    </h1>
                    <Reveal motion={RevealMotion::fade_in().with_delay(500)}>
                        <p class="hero-tagline">{&hero.tagline}</p>
                    </Reveal>
                    <Reveal motion={RevealMotion::fade_in().with_delay(700)}>
                        <p class="hero-subtitle">{&hero.subtitle}</p>
                    </Reveal>
                    <Reveal motion={RevealMotion::fade_up_short().with_delay(900)} class="hero-qualities">
                        { for qualities }
                    </Reveal>
                    <Reveal motion={RevealMotion::fade_up_short().with_delay(1100)} class="hero-actions">
                        <button class="cta cta-primary" onclick={go_to(SectionId::Services)}
                            aria-label="Book delivery service">
                            {"Book Now"}
                        </button>
                        <button class="cta cta-outline" onclick={go_to(SectionId::Contact)}
                            aria-label="Contact us">
                            {"Contact Us"}
                        </button>
                        <button class="cta cta-outline-purple" onclick={track_shipment}
                            aria-label="Track your shipment">
                            {"Track Your Shipment"}
                        </button>
                    </Reveal>
                </Reveal>

                <Reveal motion={RevealMotion::fade_from_right().with_duration(1000).with_delay(300)} class="hero-art">
                    <div class="floating-badge">
                        <div class="badge-circle">
                            <div class="badge-truck">{"🚚"}</div>
                            <div class="badge-box">{"📦"}</div>
                            <div class="badge-caption">{&hero.badge}</div>
                        </div>
                        <div class="orbit">
                            <span class="orbit-star top-right">{"⭐"}</span>
                            <span class="orbit-star bottom-left">{"💫"}</span>
                            <span class="orbit-star mid-left">{"🌟"}</span>
                            <span class="orbit-star mid-right">{"✨"}</span>
                        </div>
                    </div>
                </Reveal>
            </div>

            <div class="scroll-cue">{"⌄"}</div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    padding-top: 5rem;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(6, 1, 22, 0.8), rgba(150, 47, 207, 0.6));
                }

                .particles {
                    position: absolute;
                    inset: 0;
                }

                .particle {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #00B0E4;
                    opacity: 0;
                    animation-name: particle-drift;
                    animation-iteration-count: infinite;
                }

                @keyframes particle-drift {
                    0%, 100% { transform: translate(0, 0); opacity: 0; }
                    50% { transform: translate(var(--drift-x), var(--drift-y)); opacity: 1; }
                }

                .hero-grid {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    width: 100%;
                    padding: 0 1rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-title {
                    font-size: 4.5rem;
                    font-weight: bold;
                    margin-bottom: 1.5rem;
                    font-family: Arial, sans-serif;
                }

                .hero-tagline {
                    font-size: 1.5rem;
                    color: #00B0E4;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    font-size: 1.125rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 2rem;
                    max-width: 42rem;
                }

                .hero-qualities {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .quality {
                    color: #00B0E4;
                    font-weight: 600;
                }

                .quality-dot {
                    color: #FFFFFF;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .cta {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    background: transparent;
                }

                .cta:hover {
                    transform: scale(1.05);
                }

                .cta-primary {
                    border: none;
                    color: #FFFFFF;
                    background: linear-gradient(to right, #00B0E4, #3583DD);
                }

                .cta-primary:hover {
                    background: linear-gradient(to right, #3583DD, #7C46D3);
                }

                .cta-outline {
                    border: 1px solid #00B0E4;
                    color: #00B0E4;
                }

                .cta-outline:hover {
                    background: #00B0E4;
                    color: #FFFFFF;
                }

                .cta-outline-purple {
                    border: 1px solid #7C46D3;
                    color: #7C46D3;
                }

                .cta-outline-purple:hover {
                    background: #7C46D3;
                    color: #FFFFFF;
                }

                .hero-art {
                    display: flex;
                    justify-content: flex-end;
                }

                .floating-badge {
                    position: relative;
                    animation: badge-float 4s ease-in-out infinite;
                }

                @keyframes badge-float {
                    0%, 100% { transform: translateY(0) rotate(0deg); }
                    33% { transform: translateY(-20px) rotate(5deg); }
                    66% { transform: translateY(-10px) rotate(-5deg); }
                }

                .badge-circle {
                    width: 20rem;
                    height: 20rem;
                    border-radius: 50%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, rgba(0, 176, 228, 0.2), rgba(124, 70, 211, 0.2));
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .badge-truck {
                    font-size: 6rem;
                }

                .badge-box {
                    font-size: 3.75rem;
                }

                .badge-caption {
                    margin-top: 1rem;
                    font-weight: 600;
                    color: rgba(255, 255, 255, 0.8);
                }

                .orbit {
                    position: absolute;
                    inset: 0;
                    animation: orbit-spin 20s linear infinite;
                }

                @keyframes orbit-spin {
                    to { transform: rotate(360deg); }
                }

                .orbit-star {
                    position: absolute;
                    font-size: 1.5rem;
                }

                .orbit-star.top-right { top: 1rem; right: 1rem; }
                .orbit-star.bottom-left { bottom: 1rem; left: 1rem; }
                .orbit-star.mid-left { top: 50%; left: 0; }
                .orbit-star.mid-right { top: 50%; right: 0; }

                .scroll-cue {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    font-size: 2rem;
                    color: #00B0E4;
                    animation: cue-bounce 2s infinite;
                }

                @keyframes cue-bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }

                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }

                    .hero-qualities,
                    .hero-actions,
                    .hero-art {
                        justify-content: center;
                    }

                    .hero-title {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
