use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SiteContent;
use crate::motion::{Hover, Reveal as RevealMotion};
use crate::scroll_spy::SectionId;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let services = &props.content.services;

    html! {
        <section id={SectionId::Services.as_str()} class="services">
            <div class="section-inner">
                <Reveal motion={RevealMotion::fade_up()} class="section-header">
                    <h2 class="section-title">{&services.heading}</h2>
                    <p class="services-intro">{&services.intro}</p>
                </Reveal>

                <div class="offerings">
                    { for services.offerings.iter().enumerate().map(|(index, offering)| html! {
                        <Reveal
                            motion={RevealMotion::fade_up().staggered(index, 100)}
                            hover={Hover::grow(1.05)}
                            class="offering-card"
                        >
                            <div class="offering-icon">{offering.icon.glyph()}</div>
                            <h3>{&offering.title}</h3>
                            <p>{&offering.description}</p>
                            <ul>
                                { for offering.features.iter().map(|feature| html! {
                                    <li><span class="check">{"✓"}</span>{feature}</li>
                                }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>

                <Reveal motion={RevealMotion::fade_up()} class="highlights">
                    <h3>{&services.highlights_heading}</h3>
                    <div class="highlights-grid">
                        { for services.highlights.iter().map(|item| html! {
                            <div class="highlight hoverable" style={Hover::grow(1.1).to_css_vars()}>
                                <div class="highlight-icon">{&item.icon}</div>
                                <h4>{&item.title}</h4>
                                <p>{&item.description}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .services {
                    padding: 5rem 1rem;
                    background: linear-gradient(135deg, #060116, #962FCF);
                }

                .services-intro {
                    font-size: 1.25rem;
                    color: #00B0E4;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .offerings {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .offering-card,
                .highlights {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #FFFFFF;
                }

                .offering-card {
                    border-radius: 1rem;
                    padding: 2rem;
                }

                .offering-card:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .offering-icon {
                    font-size: 4rem;
                    margin-bottom: 1.5rem;
                }

                .offering-card h3 {
                    font-size: 1.25rem;
                    font-weight: bold;
                    margin-bottom: 1rem;
                }

                .offering-card p {
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 1.5rem;
                }

                .offering-card ul {
                    list-style: none;
                    padding: 0;
                }

                .offering-card li {
                    color: #00B0E4;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }

                .check {
                    margin-right: 0.5rem;
                }

                .highlights {
                    border-radius: 1.5rem;
                    padding: 2rem;
                }

                .highlights h3 {
                    font-size: 1.875rem;
                    font-weight: bold;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .highlights-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .highlight {
                    text-align: center;
                }

                .highlight-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .highlight h4 {
                    font-size: 1.125rem;
                    font-weight: bold;
                    margin-bottom: 0.5rem;
                }

                .highlight p {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                }

                @media (max-width: 1024px) {
                    .offerings,
                    .highlights-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .offerings,
                    .highlights-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
