use std::rc::Rc;

use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::stats::Stats;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<SiteContent>,
}

/// The whole site: every section in page order.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="home-page">
            <Hero content={props.content.clone()} />
            <Stats content={props.content.clone()} />
            <About content={props.content.clone()} />
            <Services content={props.content.clone()} />
            <Contact content={props.content.clone()} />
            <Footer content={props.content.clone()} />

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: "Source Sans Pro", Arial, sans-serif;
                    color: #FFFFFF;
                }

                .home-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #060116, #962FCF, #7C46D3);
                }

                .hoverable:hover {
                    transform: translateX(var(--hover-x, 0px)) scale(var(--hover-scale, 1)) rotate(var(--hover-rotate, 0deg));
                }

                .hoverable {
                    transition: transform 0.3s ease;
                }

                .reveal > .hoverable {
                    height: 100%;
                    box-sizing: border-box;
                }

                .light-section {
                    padding: 5rem 1rem;
                    background: linear-gradient(to right, #FFFFFF, rgba(0, 176, 228, 0.1));
                }

                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-title {
                    font-size: 3rem;
                    font-weight: bold;
                    margin-bottom: 1.5rem;
                    font-family: Arial, sans-serif;
                    color: #FFFFFF;
                }

                .section-title.dark {
                    color: #060116;
                }

                .gradient-text {
                    background: linear-gradient(to right, #00B0E4, #3583DD, #7C46D3);
                    background-size: 200% 200%;
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    animation: gradient-shift 3s ease infinite;
                }

                @keyframes gradient-shift {
                    0%, 100% { background-position: left center; }
                    50% { background-position: right center; }
                }
                "#}
            </style>
        </div>
    }
}
