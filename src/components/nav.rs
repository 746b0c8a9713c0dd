use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::NavigatorHandle;
use crate::motion::Hover;
use crate::scroll_spy::SectionId;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let navigator = use_context::<NavigatorHandle>();
    let Some(navigator) = navigator else {
        return html! {};
    };
    let state = navigator.state();

    let toggle_menu = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.toggle_menu();
        })
    };

    let go_to = |id: SectionId| {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.navigate_to(id);
        })
    };

    html! {
        <nav class="top-nav" aria-label="Main navigation">
            <div class="nav-content">
                <a class="nav-logo hoverable" href="#home" onclick={go_to(SectionId::Home)}
                    style={Hover::grow(1.05).to_css_vars()}>
                    <span class="logo-badge">{"🚚"}</span>
                    <span class="logo-text">{props.brand.clone()}</span>
                </a>

                <div class="nav-links">
                    { for SectionId::ALL.into_iter().map(|id| {
                        let active = state.active_section == id;
                        html! {
                            <button
                                key={id.as_str()}
                                class={classes!("nav-link", active.then_some("active"))}
                                onclick={go_to(id)}
                                aria-current={active.then_some("page")}
                            >
                                {id.label()}
                            </button>
                        }
                    }) }
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if state.menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={state.menu_open.to_string()}
                >
                    { if state.menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if state.menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for SectionId::ALL.into_iter().map(|id| html! {
                                <button key={id.as_str()} class="mobile-link" onclick={go_to(id)}>
                                    {id.label()}
                                </button>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(6, 1, 22, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(124, 70, 211, 0.3);
                    animation: nav-slide-in 0.6s ease-out;
                }

                @keyframes nav-slide-in {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-decoration: none;
                }

                .logo-badge {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to right, #00B0E4, #3583DD);
                }

                .logo-text {
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #FFFFFF;
                    font-family: Arial, sans-serif;
                }

                .nav-links {
                    display: flex;
                    gap: 0.5rem;
                }

                .nav-link {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #FFFFFF;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .nav-link:hover {
                    background: rgba(0, 176, 228, 0.2);
                    color: #00B0E4;
                    transform: scale(1.05);
                }

                .nav-link:active {
                    transform: scale(0.95);
                }

                .nav-link.active {
                    background: linear-gradient(to right, #00B0E4, #3583DD);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #FFFFFF;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .burger-menu:active {
                    transform: scale(0.95);
                }

                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem;
                    background: rgba(6, 1, 22, 0.95);
                    overflow: hidden;
                    animation: menu-expand 0.3s ease-out;
                }

                @keyframes menu-expand {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 400px; }
                }

                .mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    background: none;
                    border: none;
                    color: #FFFFFF;
                    font-weight: 600;
                    cursor: pointer;
                    transition: color 0.3s, transform 0.3s;
                }

                .mobile-link:hover {
                    color: #00B0E4;
                    transform: translateX(10px);
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
