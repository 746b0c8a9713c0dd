use std::rc::Rc;

use yew::prelude::*;

use crate::content::SiteContent;
use crate::motion::Hover;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let footer = &props.content.footer;

    html! {
        <footer class="site-footer">
            <div class="footer-brand hoverable" style={Hover::grow(1.05).to_css_vars()}>
                <span class="logo-badge">{"🚚"}</span>
                <span class="footer-name gradient-text">{&props.content.brand}</span>
            </div>
            <p class="footer-statement">{&footer.statement}</p>
            <div class="footer-motto">{&footer.motto}</div>

            <style>
                {r#"
                .site-footer {
                    background: #060116;
                    color: #FFFFFF;
                    padding: 3rem 1rem;
                    text-align: center;
                }

                .footer-brand {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .footer-name {
                    font-size: 1.875rem;
                    font-weight: bold;
                }

                .footer-statement {
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 48rem;
                    margin: 0 auto 1.5rem;
                }

                .footer-motto {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                "#}
            </style>
        </footer>
    }
}
