//! Hero banner: event title, date/location/time badges, and feature cards.

use leptos::prelude::*;

use crate::content::{EVENT, HERO_FEATURES};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__glow" aria-hidden="true"></div>
            <div class="hero__inner">
                <h1 class="hero__title">
                    <span class="hero__title-line">{EVENT.title}</span>
                    <span class="hero__title-line hero__title-line--accent">{EVENT.edition}</span>
                </h1>
                <h2 class="hero__tagline">"🚀 " {EVENT.tagline}</h2>

                <ul class="hero__badges">
                    <li class="hero__badge">"📅 " {EVENT.date}</li>
                    <li class="hero__badge">"📍 " {EVENT.city}</li>
                    <li class="hero__badge">"🕙 " {EVENT.time}</li>
                </ul>

                <p class="hero__description">
                    "Join us for an "
                    <strong>"unforgettable day"</strong>
                    " of cloud innovation, hands-on workshops, and networking with industry leaders. Discover the latest in "
                    <strong>"microservices"</strong>
                    ", "
                    <strong>"cloud-native development"</strong>
                    ", and "
                    <strong>"platform engineering"</strong>
                    "."
                </p>

                <div class="hero__features">
                    {HERO_FEATURES
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-card__icon">{card.icon}</div>
                                    <h3 class="feature-card__title">{card.title}</h3>
                                    <p class="feature-card__body">{card.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <a class="hero__cta" href="#register">"🎉 Limited Seats Available! →"</a>
            </div>
        </section>
    }
}
