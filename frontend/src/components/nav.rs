use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::components::book_button::BookButton;
use crate::components::icons::{Icon, IconView};
use crate::config::MENU_COLLAPSE_MS;
use crate::content::{section_anchor, NAV_ITEMS};
use crate::state::menu::{MenuVisibility, OverlayPhase};
use crate::state::scroll::{watch_scroll_mode, WindowScrollSource};

pub fn nav_class(is_scrolled: bool) -> &'static str {
    if is_scrolled {
        "top-nav scrolled"
    } else {
        "top-nav"
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuVisibility::default);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = WindowScrollSource::current().and_then(|source| {
                    watch_scroll_mode(&source, move |past| is_scrolled.set(past))
                });
                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        warn!("Scroll tracking disabled: {}", err);
                        None
                    }
                };

                // Unmounting drops the subscription, which removes the listener
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = (*menu).toggled();
            debug!("Mobile menu is now {:?}", next);
            menu.set(next);
        })
    };

    let (toggle_icon, toggle_label) = if menu.is_open() {
        (Icon::Close, "Close menu")
    } else {
        (Icon::Menu, "Open menu")
    };

    html! {
        <nav class={nav_class(*is_scrolled)}>
            <div class="nav-content">
                <div class="nav-brand">
                    <span class="brand-mark">
                        <IconView icon={Icon::Sparkles} />
                    </span>
                    <span class="brand-name">
                        {"LUMINA"}<span class="brand-accent">{"SPA"}</span>
                    </span>
                </div>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={section_anchor(item)} class="nav-link">{ *item }</a>
                    }) }
                    <BookButton label="Book Consultation" class="nav-cta" />
                </div>

                <button type="button" class="menu-toggle" aria-label={toggle_label} onclick={toggle_menu}>
                    <IconView icon={toggle_icon} />
                </button>
            </div>

            <MenuOverlay visibility={*menu} />

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }

                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .brand-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: #ffe4e6;
                        color: #f43f5e;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .brand-name {
                        font-family: Georgia, "Times New Roman", serif;
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        color: #ffffff;
                    }

                    .top-nav.scrolled .brand-name {
                        color: #0f172a;
                    }

                    .brand-accent {
                        color: #fb7185;
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        color: rgba(255, 255, 255, 0.9);
                        transition: color 0.2s ease;
                    }

                    .top-nav.scrolled .nav-link {
                        color: #475569;
                    }

                    .nav-link:hover {
                        color: #f43f5e;
                    }

                    .nav-cta {
                        padding: 0.625rem 1.5rem;
                        font-size: 0.875rem;
                        box-shadow: 0 10px 15px -3px #fecdd3;
                    }

                    .nav-cta:hover {
                        transform: scale(1.05);
                    }

                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #ffffff;
                    }

                    .top-nav.scrolled .menu-toggle {
                        color: #0f172a;
                    }

                    .mobile-menu {
                        background: #ffffff;
                        border-bottom: 1px solid #e2e8f0;
                        overflow: hidden;
                        animation: menu-expand 0.3s ease forwards;
                    }

                    .mobile-menu.collapsing {
                        animation: menu-collapse 0.3s ease forwards;
                    }

                    .mobile-menu-items {
                        padding: 1.5rem 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .mobile-menu-link {
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #0f172a;
                        text-decoration: none;
                    }

                    .mobile-menu .book-button {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                    }

                    @keyframes menu-expand {
                        from { opacity: 0; max-height: 0; }
                        to { opacity: 1; max-height: 24rem; }
                    }

                    @keyframes menu-collapse {
                        from { opacity: 1; max-height: 24rem; }
                        to { opacity: 0; max-height: 0; }
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .menu-toggle {
                            display: block;
                        }

                        .nav-content {
                            padding: 0 1rem;
                        }
                    }

                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuOverlayProps {
    pub visibility: MenuVisibility,
}

#[function_component(MenuOverlay)]
fn menu_overlay(props: &MenuOverlayProps) -> Html {
    let phase = use_state(OverlayPhase::default);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |visibility: &MenuVisibility| {
                let next = (*phase).after(*visibility);
                if next != *phase {
                    phase.set(next);
                }

                let collapse = (next == OverlayPhase::Collapsing).then(|| {
                    let phase = phase.clone();
                    Timeout::new(MENU_COLLAPSE_MS, move || phase.set(next.collapsed()))
                });

                // Dropping the timeout cancels a pending unmount
                move || drop(collapse)
            },
            props.visibility,
        );
    }

    let open = props.visibility.is_open();
    if !open && !phase.is_mounted() {
        return html! {};
    }

    html! {
        <div class={classes!("mobile-menu", (!open).then(|| "collapsing"))}>
            <div class="mobile-menu-items">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a href={section_anchor(item)} class="mobile-menu-link">{ *item }</a>
                }) }
                <BookButton label="Book Now" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_class_follows_scroll_mode() {
        assert_eq!(nav_class(false), "top-nav");
        assert_eq!(nav_class(true), "top-nav scrolled");
    }

    #[tokio::test]
    async fn initial_render_is_unscrolled_and_closed() {
        let html = yew::ServerRenderer::<Nav>::new().render().await;

        assert!(html.contains(r#"<nav class="top-nav">"#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(!html.contains(r#"class="mobile-menu"#));
    }

    #[tokio::test]
    async fn nav_links_target_sections() {
        let html = yew::ServerRenderer::<Nav>::new().render().await;

        for anchor in ["#services", "#about", "#results", "#reviews"] {
            assert!(html.contains(&format!(r#"href="{}""#, anchor)), "missing {}", anchor);
        }
        assert!(html.contains("Book Consultation"));
    }
}
