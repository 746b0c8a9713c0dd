use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SiteContent;
use crate::motion::{Hover, Reveal as RevealMotion};
use crate::scroll_spy::SectionId;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: Rc<SiteContent>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.content.about;

    html! {
        <section id={SectionId::About.as_str()} class="about light-section">
            <div class="section-inner">
                <Reveal motion={RevealMotion::fade_up()} class="section-header">
                    <h2 class="section-title dark">{&about.heading}</h2>
                    <div class="about-copy">
                        <p class="about-lead">{&about.lead}</p>
                        { for about.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                    </div>
                </Reveal>

                <div class="pillars">
                    { for about.pillars.iter().enumerate().map(|(index, pillar)| html! {
                        <Reveal
                            motion={RevealMotion::fade_up().staggered(index, 200)}
                            hover={Hover::grow(1.05).tilted(5.0)}
                            class="pillar-card"
                        >
                            <div class="pillar-icon">{pillar.icon.glyph()}</div>
                            <h3>{&pillar.title}</h3>
                            <p>{&pillar.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .about-copy {
                    max-width: 56rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    color: #962FCF;
                }

                .about-copy p {
                    margin-bottom: 1.5rem;
                }

                .about-lead {
                    font-weight: 600;
                    font-size: 1.25rem;
                }

                .pillars {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .pillar-card {
                    background: #FFFFFF;
                    border-radius: 1rem;
                    padding: 2rem;
                    border: 1px solid rgba(0, 176, 228, 0.2);
                    box-shadow: 0 20px 25px rgba(6, 1, 22, 0.1);
                }

                .pillar-icon {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }

                .pillar-card h3 {
                    font-size: 1.25rem;
                    font-weight: bold;
                    color: #060116;
                    margin-bottom: 1rem;
                }

                .pillar-card p {
                    color: #962FCF;
                }

                @media (max-width: 1024px) {
                    .pillars {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
