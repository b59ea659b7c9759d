//! Talk tracks with their speakers and session topics.

use leptos::prelude::*;

use crate::content::{EVENT, TRACKS, Track, TrackSummary};

#[component]
pub fn TechTracks() -> impl IntoView {
    let summary = TrackSummary::of(TRACKS);

    view! {
        <section class="tracks">
            <header class="section-header">
                <h2 class="section-header__title">"🎯 Tech Tracks & Speakers"</h2>
                <p class="section-header__subtitle">
                    "Dive deep into cutting-edge technologies with industry experts and hands-on workshops"
                </p>
            </header>

            <div class="tracks__grid">
                {TRACKS.iter().enumerate().map(|(index, track)| view! { <TrackCard track=*track index/> }).collect_view()}
            </div>

            <div class="tracks__cta">
                <h3>"🎉 Ready to Learn & Network?"</h3>
                <p>
                    {format!(
                        "Join {} developers for an unforgettable day of learning, networking, and innovation",
                        EVENT.expected_attendees,
                    )}
                </p>
                <ul class="tracks__stats">
                    <li>"🎯 " {format!("{} Expert-Led Tracks", summary.tracks)}</li>
                    <li>"👥 " {format!("{} Industry Speakers", summary.speakers)}</li>
                    <li>"⚡ " {format!("{} Hands-on Sessions", summary.sessions)}</li>
                </ul>
            </div>
        </section>
    }
}

#[component]
fn TrackCard(track: Track, index: usize) -> impl IntoView {
    let header_class = format!("track-card__header track-card__header--{}", track.accent);
    let delay = format!("animation-delay: {}ms", index * 100);

    view! {
        <article class="track-card" style=delay>
            <div class=header_class>
                <span class="track-card__icon">{track.icon}</span>
                <h3 class="track-card__title">{track.title}</h3>
                <p class="track-card__blurb">"Expert-led sessions and hands-on workshops"</p>
            </div>

            <div class="track-card__body">
                <h4 class="track-card__heading">"👥 Featured Speakers"</h4>
                {track
                    .speakers
                    .iter()
                    .map(|speaker| {
                        view! {
                            <div class="speaker">
                                <span class="speaker__avatar">{speaker.avatar}</span>
                                <div class="speaker__details">
                                    <h5 class="speaker__name">{speaker.name}</h5>
                                    <p class="speaker__title">{speaker.title}</p>
                                    <p class="speaker__company">{speaker.company}</p>
                                    <p class="speaker__expertise">{speaker.expertise}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}

                <h4 class="track-card__heading">"📚 Session Topics"</h4>
                <ul class="track-card__sessions">
                    {track.sessions.iter().map(|session| view! { <li>{*session}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}
