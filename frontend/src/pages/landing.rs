use yew::prelude::*;

use crate::components::book_button::BookButton;
use crate::components::card_list::CardList;
use crate::components::footer::Footer;
use crate::components::icons::{Icon, IconView};
use crate::config::image_url;
use crate::content::{
    Reason, Service, Stat, Testimonial, ABOUT_PHOTO, HERO_PHOTO, PHONE, REASONS, SERVICES,
    STATS, TESTIMONIALS, TRUST_BADGES,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <TrustBadges />
            <Services />
            <About />
            <Stats />
            <Testimonials />
            <CallToAction />
            <Footer />
            <style>{ LANDING_STYLE }</style>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-background">
                <img src={image_url(HERO_PHOTO)} alt="Med Spa Interior" />
                <div class="hero-shade"></div>
            </div>

            <div class="hero-content">
                <div class="hero-copy">
                    <span class="hero-badge">
                        <IconView icon={Icon::Sparkles} size={16} />
                        {"Voted #1 Med Spa in the City"}
                    </span>
                    <h1>
                        {"Reveal Your Most "}<br />
                        <span class="hero-highlight">{"Radiant Self"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Experience the perfect blend of medical expertise and luxury aesthetics. Advanced treatments tailored to your unique beauty."}
                    </p>
                    <div class="hero-cta-group">
                        <BookButton label="Book Your Visit" class="hero-cta">
                            <IconView icon={Icon::ArrowRight} size={20} class="cta-arrow" />
                        </BookButton>
                        <a href="#services" class="hero-secondary">{"View Treatments"}</a>
                    </div>
                </div>
            </div>

            <div class="scroll-hint">
                <div class="scroll-hint-dot"></div>
            </div>
        </header>
    }
}

#[function_component(TrustBadges)]
fn trust_badges() -> Html {
    html! {
        <div class="trust-strip">
            { for TRUST_BADGES.iter().map(|badge| html! {
                <div class="trust-badge">
                    <IconView icon={badge.icon} />
                    { badge.label }
                </div>
            }) }
        </div>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="section-inner">
                <div class="section-heading centered">
                    <h2 class="eyebrow">{"Our Expertise"}</h2>
                    <h3>{"Signature Treatments"}</h3>
                    <p>{"We combine science-backed technology with a holistic approach to help you achieve your aesthetic goals."}</p>
                </div>
                <CardList<Service>
                    items={SERVICES.as_slice()}
                    class="services-grid"
                    card_class="service-card"
                    action="Details"
                />
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="section-inner about-grid">
                <div class="about-media">
                    <div class="about-photo">
                        <img src={image_url(ABOUT_PHOTO)} alt="Doctor" loading="lazy" />
                    </div>
                    <div class="about-quote">
                        <p>{"\"Our mission is to provide medical-grade results in a serene, spa-like environment.\""}</p>
                        <div class="about-quote-name">{"— Dr. Julianne Moore"}</div>
                        <div class="about-quote-role">{"Medical Director"}</div>
                    </div>
                </div>
                <div>
                    <h2 class="eyebrow">{"Why Choose Us"}</h2>
                    <h3 class="about-title">{"Science Meets Serenity"}</h3>
                    <CardList<Reason>
                        items={REASONS.as_slice()}
                        class="reason-list"
                        card_class="reason-card"
                    />
                    <button type="button" class="about-more">{"Learn More About Us"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(Stats)]
fn stats() -> Html {
    html! {
        <section id="results" class="stats-section">
            <div class="section-inner">
                <CardList<Stat>
                    items={STATS.as_slice()}
                    class="stats-grid"
                    card_class="stat-card"
                />
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="reviews" class="reviews-section">
            <div class="section-inner">
                <div class="reviews-header">
                    <div class="section-heading">
                        <h2 class="eyebrow">{"Testimonials"}</h2>
                        <h3>{"What Our Clients Say"}</h3>
                    </div>
                    <div class="rating">
                        <div class="rating-stars">
                            { for (0..5).map(|_| html! {
                                <IconView icon={Icon::Star} size={20} filled={true} />
                            }) }
                        </div>
                        <span>{"4.9/5 Rating"}</span>
                    </div>
                </div>
                <CardList<Testimonial>
                    items={TESTIMONIALS.as_slice()}
                    class="reviews-grid"
                    card_class="testimonial-card"
                />
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-glow cta-glow-top"></div>
            <div class="cta-glow cta-glow-bottom"></div>
            <div class="cta-content">
                <h2>{"Ready to Start Your Transformation?"}</h2>
                <p>{"Book a complimentary consultation with our medical experts today and receive a personalized treatment plan."}</p>
                <div class="cta-actions">
                    <BookButton label="Book Appointment Now" class="cta-book" />
                    <div class="cta-phone">
                        <span class="cta-phone-icon">
                            <IconView icon={Icon::Phone} size={20} />
                        </span>
                        <div>
                            <p class="cta-phone-caption">{"Call Us Directly"}</p>
                            <p class="cta-phone-number">{ PHONE }</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const LANDING_STYLE: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #ffffff;
        color: #0f172a;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }

    .landing-page ::selection {
        background: #ffe4e6;
        color: #e11d48;
    }

    .landing-page h1,
    .landing-page h3,
    .card-label,
    .footer-name {
        font-family: Georgia, "Times New Roman", serif;
    }

    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }

    .eyebrow {
        color: #f43f5e;
        font-size: 0.875rem;
        font-weight: 600;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        margin: 0 0 0.75rem;
    }

    .section-heading h3 {
        font-size: 3rem;
        font-weight: 400;
        margin: 0 0 1.5rem;
    }

    .section-heading.centered {
        text-align: center;
        margin-bottom: 4rem;
    }

    .section-heading p {
        color: #475569;
        font-size: 1.125rem;
        max-width: 42rem;
        margin: 0 auto;
    }

    .book-button {
        background: #f43f5e;
        color: #ffffff;
        border: none;
        border-radius: 9999px;
        font-weight: 600;
        cursor: pointer;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        transition: all 0.2s ease;
    }

    .book-button:hover {
        background: #e11d48;
    }

    /* Hero */
    .hero {
        position: relative;
        height: 100vh;
        min-height: 700px;
        display: flex;
        align-items: center;
        overflow: hidden;
    }

    .hero-background {
        position: absolute;
        inset: 0;
        z-index: 0;
    }

    .hero-background img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .hero-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, rgba(15, 23, 42, 0.7), rgba(15, 23, 42, 0.4), transparent);
    }

    .hero-content {
        position: relative;
        z-index: 10;
        width: 100%;
        max-width: 80rem;
        margin: 0 auto;
        padding: 5rem 2rem 0;
    }

    .hero-copy {
        max-width: 42rem;
        animation: hero-rise 0.8s ease-out both;
    }

    @keyframes hero-rise {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.375rem 1rem;
        margin-bottom: 1.5rem;
        border-radius: 9999px;
        background: rgba(244, 63, 94, 0.2);
        border: 1px solid rgba(244, 63, 94, 0.3);
        color: #fecdd3;
        font-size: 0.875rem;
        font-weight: 500;
        backdrop-filter: blur(4px);
    }

    .hero h1 {
        font-size: 4.5rem;
        font-weight: 400;
        line-height: 1.15;
        color: #ffffff;
        margin: 0 0 1.5rem;
    }

    .hero-highlight {
        font-style: italic;
        color: #fda4af;
    }

    .hero-subtitle {
        font-size: 1.25rem;
        line-height: 1.6;
        color: #e2e8f0;
        max-width: 32rem;
        margin: 0 0 2.5rem;
    }

    .hero-cta-group {
        display: flex;
        gap: 1rem;
    }

    .hero-cta {
        padding: 1rem 2rem;
        font-size: 1.125rem;
    }

    .hero-cta:hover .cta-arrow {
        transform: translateX(4px);
    }

    .cta-arrow {
        transition: transform 0.2s ease;
    }

    .hero-secondary {
        padding: 1rem 2rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.3);
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
        color: #ffffff;
        font-size: 1.125rem;
        font-weight: 600;
        text-decoration: none;
        transition: background 0.2s ease;
    }

    .hero-secondary:hover {
        background: rgba(255, 255, 255, 0.2);
    }

    .scroll-hint {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        width: 1.5rem;
        height: 2.5rem;
        margin-left: -0.75rem;
        border: 2px solid rgba(255, 255, 255, 0.3);
        border-radius: 9999px;
        display: flex;
        justify-content: center;
        padding-top: 0.5rem;
        box-sizing: border-box;
        animation: hint-bounce 1s infinite;
    }

    .scroll-hint-dot {
        width: 0.25rem;
        height: 0.5rem;
        background: #ffffff;
        border-radius: 9999px;
    }

    @keyframes hint-bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }

    /* Trust badges */
    .trust-strip {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 4rem;
        padding: 3rem 1rem;
        border-bottom: 1px solid #f1f5f9;
        opacity: 0.5;
        filter: grayscale(1);
        transition: all 0.3s ease;
    }

    .trust-strip:hover {
        filter: grayscale(0);
    }

    .trust-badge {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.25rem;
        font-weight: 700;
    }

    /* Cards */
    .card-label {
        margin: 0;
    }

    .services-section {
        padding: 6rem 0;
        background: #f8fafc;
    }

    .services-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }

    .service-card {
        background: #ffffff;
        border: 1px solid #f1f5f9;
        border-radius: 1.5rem;
        overflow: hidden;
        box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }

    .service-card:hover {
        transform: translateY(-10px);
        box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
    }

    .service-card .card-media {
        height: 16rem;
        overflow: hidden;
    }

    .service-card .card-media img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }

    .service-card .card-media img:hover {
        transform: scale(1.1);
    }

    .service-card .card-body {
        padding: 1.5rem;
    }

    .service-card .card-label {
        font-size: 1.25rem;
        font-weight: 400;
        margin-bottom: 0.5rem;
    }

    .service-card .card-description {
        color: #475569;
        font-size: 0.875rem;
        line-height: 1.6;
        margin: 0 0 1rem;
    }

    .card-footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding-top: 1rem;
        border-top: 1px solid #f8fafc;
    }

    .service-card .card-detail {
        color: #f43f5e;
        font-weight: 600;
    }

    .card-action {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        background: none;
        border: none;
        color: #0f172a;
        font-weight: 500;
        cursor: pointer;
    }

    .card-action:hover {
        color: #f43f5e;
    }

    /* About */
    .about-section {
        padding: 6rem 0;
    }

    .about-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }

    .about-media {
        position: relative;
    }

    .about-photo {
        aspect-ratio: 4 / 5;
        border-radius: 1.5rem;
        overflow: hidden;
    }

    .about-photo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .about-quote {
        position: absolute;
        bottom: -1.5rem;
        right: -1.5rem;
        max-width: 20rem;
        padding: 2rem;
        background: #ffffff;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.25);
    }

    .about-quote p {
        color: #475569;
        font-style: italic;
        margin: 0 0 1rem;
    }

    .about-quote-name {
        font-weight: 700;
    }

    .about-quote-role {
        color: #f43f5e;
        font-size: 0.875rem;
    }

    .about-title {
        font-size: 3rem;
        font-weight: 400;
        margin: 0 0 2rem;
    }

    .reason-list {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }

    .reason-card {
        position: relative;
        padding-left: 4rem;
        min-height: 3rem;
    }

    .reason-card::before {
        content: "✓";
        position: absolute;
        left: 0;
        top: 0;
        width: 3rem;
        height: 3rem;
        border-radius: 1rem;
        background: #fff1f2;
        color: #f43f5e;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
    }

    .reason-card .card-label {
        font-family: inherit;
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.25rem;
    }

    .reason-card .card-description {
        color: #475569;
        line-height: 1.6;
        margin: 0;
    }

    .about-more {
        margin-top: 3rem;
        padding: 1rem 2rem;
        border: none;
        border-radius: 9999px;
        background: #0f172a;
        color: #ffffff;
        font-weight: 600;
        cursor: pointer;
    }

    .about-more:hover {
        background: #1e293b;
    }

    /* Stats */
    .stats-section {
        background: #0f172a;
        padding: 5rem 0;
    }

    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        text-align: center;
    }

    .stat-card .card-label {
        font-size: 3rem;
        font-weight: 400;
        color: #fb7185;
        margin-bottom: 0.5rem;
    }

    .stat-card .card-description {
        color: #94a3b8;
        font-size: 0.75rem;
        font-weight: 500;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        margin: 0;
    }

    /* Testimonials */
    .reviews-section {
        padding: 6rem 0;
        overflow: hidden;
    }

    .reviews-header {
        display: flex;
        align-items: flex-end;
        justify-content: space-between;
        gap: 1.5rem;
        margin-bottom: 4rem;
    }

    .reviews-header h3 {
        margin: 0;
    }

    .rating {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 600;
    }

    .rating-stars {
        display: flex;
        color: #facc15;
    }

    .reviews-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }

    .testimonial-card {
        display: grid;
        grid-template-columns: 3.5rem 1fr;
        column-gap: 1rem;
        padding: 2rem;
        border-radius: 1.5rem;
        background: #f8fafc;
        border: 1px solid #f1f5f9;
    }

    .testimonial-card .card-media img {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 9999px;
        object-fit: cover;
    }

    .testimonial-card .card-body {
        display: contents;
    }

    .testimonial-card .card-label {
        grid-column: 2;
        grid-row: 1;
        font-family: inherit;
        font-weight: 700;
        font-size: 1rem;
    }

    .testimonial-card .card-detail {
        grid-column: 2;
        grid-row: 1;
        align-self: end;
        color: #64748b;
        font-size: 0.875rem;
    }

    .testimonial-card .card-description {
        grid-column: 1 / -1;
        margin: 1.5rem 0 0;
        color: #475569;
        font-style: italic;
        line-height: 1.6;
    }

    .testimonial-card .card-description::before {
        content: "\201C";
    }

    .testimonial-card .card-description::after {
        content: "\201D";
    }

    /* Call to action */
    .cta-section {
        position: relative;
        padding: 6rem 0;
        overflow: hidden;
        background: #f43f5e;
    }

    .cta-glow {
        position: absolute;
        width: 24rem;
        height: 24rem;
        border-radius: 9999px;
        background: #ffffff;
        opacity: 0.1;
        filter: blur(64px);
    }

    .cta-glow-top {
        top: 0;
        left: 0;
        transform: translate(-50%, -50%);
    }

    .cta-glow-bottom {
        bottom: 0;
        right: 0;
        transform: translate(50%, 50%);
    }

    .cta-content {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        margin: 0 auto;
        padding: 0 1rem;
        text-align: center;
    }

    .cta-content h2 {
        font-family: Georgia, "Times New Roman", serif;
        font-size: 3.75rem;
        font-weight: 400;
        color: #ffffff;
        margin: 0 0 2rem;
    }

    .cta-content > p {
        color: #ffe4e6;
        font-size: 1.25rem;
        line-height: 1.6;
        margin: 0 0 3rem;
    }

    .cta-actions {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
    }

    .cta-book {
        padding: 1.25rem 2.5rem;
        background: #ffffff;
        color: #f43f5e;
        font-size: 1.125rem;
        font-weight: 700;
        box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
    }

    .cta-book:hover {
        background: #fff1f2;
    }

    .cta-phone {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #ffffff;
        text-align: left;
    }

    .cta-phone-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
        display: flex;
        align-items: center;
        justify-content: center;
    }

    .cta-phone-caption {
        margin: 0;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        opacity: 0.8;
    }

    .cta-phone-number {
        margin: 0;
        font-size: 1.125rem;
        font-weight: 700;
    }

    /* Footer */
    .site-footer {
        background: #f8fafc;
        padding: 5rem 2rem 2.5rem;
    }

    .footer-grid {
        max-width: 80rem;
        margin: 0 auto 4rem;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 3rem;
    }

    .footer-grid h4 {
        font-weight: 700;
        margin: 0 0 1.5rem;
    }

    .footer-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
    }

    .footer-mark {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        background: #f43f5e;
        color: #ffffff;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    .footer-name {
        font-size: 1.25rem;
        font-weight: 700;
    }

    .footer-name .brand-accent {
        color: #f43f5e;
    }

    .footer-brand p,
    .footer-list,
    .newsletter-copy {
        color: #64748b;
        line-height: 1.6;
    }

    .social-links {
        display: flex;
        gap: 1rem;
    }

    .social-link {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #ffffff;
        border: 1px solid #e2e8f0;
        color: #475569;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: all 0.2s ease;
    }

    .social-link:hover {
        background: #f43f5e;
        color: #ffffff;
    }

    .footer-list {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .footer-list a {
        color: inherit;
        text-decoration: none;
    }

    .footer-list a:hover {
        color: #f43f5e;
    }

    .contact-line {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }

    .contact-icon {
        color: #f43f5e;
        flex-shrink: 0;
        margin-top: 0.25rem;
    }

    .newsletter-copy {
        font-size: 0.875rem;
        margin: 0 0 1rem;
    }

    .newsletter-form {
        display: flex;
        gap: 0.5rem;
    }

    .newsletter-input {
        width: 100%;
        padding: 0.5rem 1rem;
        border: 1px solid #e2e8f0;
        border-radius: 0.5rem;
        background: #ffffff;
    }

    .newsletter-input:focus {
        outline: none;
        box-shadow: 0 0 0 2px rgba(244, 63, 94, 0.2);
    }

    .newsletter-button {
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.5rem;
        background: #0f172a;
        color: #ffffff;
        cursor: pointer;
    }

    .newsletter-button:hover {
        background: #1e293b;
    }

    .footer-legal {
        max-width: 80rem;
        margin: 0 auto;
        padding-top: 2rem;
        border-top: 1px solid #e2e8f0;
        text-align: center;
        color: #94a3b8;
        font-size: 0.875rem;
    }

    @media (max-width: 1024px) {
        .services-grid {
            grid-template-columns: repeat(2, 1fr);
        }

        .about-grid {
            grid-template-columns: 1fr;
        }
    }

    @media (max-width: 768px) {
        .hero h1 {
            font-size: 3rem;
        }

        .hero-cta-group,
        .cta-actions,
        .reviews-header {
            flex-direction: column;
            align-items: stretch;
        }

        .reviews-header {
            align-items: flex-start;
        }

        .scroll-hint,
        .about-quote {
            display: none;
        }

        .services-grid,
        .reviews-grid,
        .footer-grid {
            grid-template-columns: 1fr;
        }

        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
        }

        .trust-strip {
            gap: 2rem;
        }

        .section-heading h3,
        .about-title,
        .cta-content h2 {
            font-size: 2.25rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn count(html: &str, class: &str) -> usize {
        html.matches(&format!(r#"class="card {}""#, class)).count()
    }

    #[tokio::test]
    async fn renders_fixed_card_counts() {
        let html = yew::ServerRenderer::<Landing>::new().render().await;

        assert_eq!(count(&html, "service-card"), 4);
        assert_eq!(count(&html, "testimonial-card"), 3);
        assert_eq!(count(&html, "stat-card"), 4);
        assert_eq!(count(&html, "reason-card"), 3);
    }

    #[tokio::test]
    async fn every_nav_target_exists() {
        let html = yew::ServerRenderer::<Landing>::new().render().await;

        for id in ["services", "about", "results", "reviews"] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing section {}", id);
        }
    }

    #[tokio::test]
    async fn booking_controls_are_rendered() {
        let html = yew::ServerRenderer::<Landing>::new().render().await;

        assert!(html.contains("Book Your Visit"));
        assert!(html.contains("Book Appointment Now"));
        assert!(html.contains(r#"placeholder="Email address""#));
    }

    #[tokio::test]
    async fn footer_shows_current_year() {
        use chrono::Datelike;

        let html = yew::ServerRenderer::<Landing>::new().render().await;
        let year = chrono::Local::now().year();
        assert!(html.contains(&format!("© {} Lumina Med Spa", year)));
    }
}
