use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SiteContent;
use crate::motion::{Hover, Reveal as RevealMotion};

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub content: Rc<SiteContent>,
}

/// Company numbers band between the hero and the about section. It has no
/// section id so the scroll-spy keeps the previous section active over it.
#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    html! {
        <section class="stats">
            <div class="stats-grid">
                { for props.content.stats.iter().enumerate().map(|(index, stat)| html! {
                    <Reveal
                        motion={RevealMotion::fade_up().staggered(index, 100)}
                        hover={Hover::grow(1.05).tilted(5.0)}
                        class="stat-card"
                    >
                        <div class={classes!("stat-icon", format!("tone-{index}"))}>{stat.icon.glyph()}</div>
                        <div class="stat-number">{&stat.number}</div>
                        <div class="stat-label">{&stat.label}</div>
                    </Reveal>
                }) }
            </div>

            <style>
                {r#"
                .stats {
                    padding: 5rem 1rem;
                    background: linear-gradient(to right, #FFFFFF, rgba(0, 176, 228, 0.05));
                }

                .stats-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .stat-card {
                    background: #FFFFFF;
                    border-radius: 1rem;
                    padding: 2rem;
                    text-align: center;
                    border: 1px solid rgba(0, 176, 228, 0.2);
                    box-shadow: 0 20px 25px rgba(6, 1, 22, 0.1);
                }

                .stat-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    transition: transform 0.5s;
                }

                .stat-card:hover .stat-icon {
                    transform: rotate(360deg);
                }

                .tone-0 { background: linear-gradient(to right, #00B0E4, #3583DD); }
                .tone-1 { background: linear-gradient(to right, #3583DD, #7C46D3); }
                .tone-2 { background: linear-gradient(to right, #7C46D3, #962FCF); }
                .tone-3 { background: linear-gradient(to right, #962FCF, #060116); }

                .stat-number {
                    font-size: 3rem;
                    font-weight: bold;
                    margin-bottom: 0.5rem;
                    background: linear-gradient(to right, #060116, #962FCF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .stat-label {
                    color: #962FCF;
                    font-weight: 600;
                    font-size: 1.125rem;
                }

                @media (max-width: 1024px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
