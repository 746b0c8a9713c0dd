use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Channel, SiteContent};
use crate::motion::{Hover, Reveal as RevealMotion};
use crate::scroll_spy::SectionId;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: Rc<SiteContent>,
}

fn channel_info(channel: &Channel) -> Html {
    match &channel.href {
        Some(href) => html! { <a href={href.clone()} class="channel-link">{&channel.info}</a> },
        None => html! { <>{&channel.info}</> },
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let contact = &props.content.contact;
    let faq = &props.content.faq;

    html! {
        <section id={SectionId::Contact.as_str()} class="contact light-section">
            <div class="section-inner">
                <Reveal motion={RevealMotion::fade_up()} class="section-header">
                    <h2 class="section-title dark">{&contact.heading}</h2>
                    <p class="contact-intro">{&contact.intro}</p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal motion={RevealMotion::fade_from_left()} class="channels">
                        { for contact.channels.iter().map(|channel| html! {
                            <div class="channel hoverable" style={Hover::grow(1.05).nudged(10.0).to_css_vars()}>
                                <div class="channel-icon">{channel.icon.glyph()}</div>
                                <div>
                                    <h4>{&channel.title}</h4>
                                    <div class="channel-info">{channel_info(channel)}</div>
                                </div>
                            </div>
                        }) }

                        <div class="socials">
                            <h4>{&contact.social_heading}</h4>
                            <div class="social-links">
                                { for contact.social_links().into_iter().map(|(network, url)| html! {
                                    <a
                                        href={url}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link hoverable"
                                        style={Hover::grow(1.1).tilted(5.0).to_css_vars()}
                                    >
                                        {network}
                                    </a>
                                }) }
                            </div>
                        </div>
                    </Reveal>

                    <Reveal motion={RevealMotion::fade_from_right()} class="faq-panel">
                        <h3>{&faq.heading}</h3>
                        { for faq.entries.iter().enumerate().map(|(index, entry)| html! {
                            <Reveal motion={RevealMotion::fade_up_short().staggered(index, 100)} class="faq-entry">
                                <h4>{&entry.question}</h4>
                                <p>{&entry.answer}</p>
                            </Reveal>
                        }) }
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                .contact-intro {
                    font-size: 1.25rem;
                    color: #962FCF;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .channel {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                    background: #FFFFFF;
                    border-radius: 1rem;
                    border: 1px solid rgba(0, 176, 228, 0.2);
                    box-shadow: 0 10px 15px rgba(6, 1, 22, 0.1);
                }

                .channel-icon {
                    font-size: 1.5rem;
                    color: #00B0E4;
                }

                .channel h4,
                .socials h4,
                .faq-entry h4 {
                    font-weight: bold;
                    color: #060116;
                    margin-bottom: 0.5rem;
                }

                .channel-info,
                .faq-entry p {
                    color: #962FCF;
                }

                .channel-link {
                    color: #962FCF;
                }

                .channel-link:hover {
                    color: #00B0E4;
                }

                .socials {
                    padding-top: 2rem;
                }

                .social-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .social-link {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    color: #FFFFFF;
                    text-decoration: none;
                    background: linear-gradient(to right, #00B0E4, #3583DD);
                }

                .social-link:hover {
                    background: linear-gradient(to right, #3583DD, #7C46D3);
                }

                .faq-panel {
                    background: #FFFFFF;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    border: 1px solid rgba(0, 176, 228, 0.2);
                    box-shadow: 0 20px 25px rgba(6, 1, 22, 0.1);
                }

                .faq-panel h3 {
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #060116;
                    margin-bottom: 1.5rem;
                }

                .faq-entry {
                    border-bottom: 1px solid rgba(0, 176, 228, 0.2);
                    padding-bottom: 1rem;
                    margin-bottom: 1.5rem;
                }

                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
