use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{ADDRESS_LINES, OPENING_HOURS, PHONE, QUICK_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="footer-mark">
                            <IconView icon={Icon::Sparkles} size={20} />
                        </span>
                        <span class="footer-name">
                            {"LUMINA"}<span class="brand-accent">{"SPA"}</span>
                        </span>
                    </div>
                    <p>{"Premium medical aesthetics and wellness treatments designed to enhance your natural beauty."}</p>
                    <div class="social-links">
                        <a href="#" class="social-link" aria-label="Instagram">
                            <IconView icon={Icon::Instagram} size={18} />
                        </a>
                        <a href="#" class="social-link" aria-label="Facebook">
                            <IconView icon={Icon::Facebook} size={18} />
                        </a>
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-list">
                        { for QUICK_LINKS.iter().map(|link| html! {
                            <li><a href={link.href}>{ link.label }</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Contact"}</h4>
                    <ul class="footer-list">
                        <li class="contact-line">
                            <IconView icon={Icon::MapPin} size={18} class="contact-icon" />
                            <span>{ ADDRESS_LINES[0] }<br />{ ADDRESS_LINES[1] }</span>
                        </li>
                        <li class="contact-line">
                            <IconView icon={Icon::Phone} size={18} class="contact-icon" />
                            <span>{ PHONE }</span>
                        </li>
                        <li class="contact-line">
                            <IconView icon={Icon::Clock} size={18} class="contact-icon" />
                            <span>{ OPENING_HOURS }</span>
                        </li>
                    </ul>
                </div>

                <div>
                    <h4>{"Newsletter"}</h4>
                    <p class="newsletter-copy">{"Join for exclusive offers and beauty tips."}</p>
                    // Sign-up is not connected to a mailing service
                    <div class="newsletter-form">
                        <input type="email" placeholder="Email address" class="newsletter-input" />
                        <button type="button" class="newsletter-button">{"Join"}</button>
                    </div>
                </div>
            </div>

            <div class="footer-legal">
                <p>{ format!("© {} Lumina Med Spa. All rights reserved. | Privacy Policy | Terms of Service", year) }</p>
            </div>
        </footer>
    }
}
