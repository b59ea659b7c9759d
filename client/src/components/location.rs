//! Venue details, map links, and travel notes.

use leptos::prelude::*;

use crate::content::{EVENT, TRAVEL_OPTIONS, VENUE_NOTES};
use crate::util::maps;

#[component]
pub fn Location() -> impl IntoView {
    let search_url = maps::search_url(EVENT.venue_address);
    let directions_url = maps::directions_url(EVENT.venue_address);

    view! {
        <section class="location">
            <header class="section-header">
                <h2 class="section-header__title">"📍 Event Location"</h2>
                <p class="section-header__subtitle">
                    "Join us at our beautiful venue in the heart of Pune's tech district"
                </p>
            </header>

            <div class="location__grid">
                <div class="venue-card">
                    <h3 class="venue-card__title">"Venue Details"</h3>
                    <dl class="venue-card__facts">
                        <dt>"Address"</dt>
                        <dd>{EVENT.venue_address}</dd>
                        <dt>"Date & Time"</dt>
                        <dd>{EVENT.date} <br/> {EVENT.time}</dd>
                        {VENUE_NOTES
                            .iter()
                            .map(|note| view! { <dt>{note.title}</dt> <dd>{note.body}</dd> })
                            .collect_view()}
                    </dl>
                    <div class="venue-card__actions">
                        <a class="button button--primary" href=search_url.clone() target="_blank" rel="noopener noreferrer">
                            "Open in Maps"
                        </a>
                        <a class="button button--secondary" href=directions_url target="_blank" rel="noopener noreferrer">
                            "Get Directions"
                        </a>
                    </div>
                </div>

                <div class="map-card">
                    <h3 class="map-card__title">"Interactive Map"</h3>
                    <a class="map-card__canvas" href=search_url target="_blank" rel="noopener noreferrer">
                        <h4>"📍 " {EVENT.venue_area}</h4>
                        <p>{EVENT.venue_building}</p>
                        <span class="map-card__hint">"Click to Open in Maps →"</span>
                    </a>
                    <p class="map-card__footer">
                        "📍 " {EVENT.venue_area} " - A thriving tech hub in Maharashtra"
                    </p>
                </div>
            </div>

            <div class="travel">
                <h3 class="travel__title">"🚗 Getting There"</h3>
                <div class="travel__grid">
                    {TRAVEL_OPTIONS
                        .iter()
                        .map(|option| {
                            view! {
                                <div class="travel__option">
                                    <h4>{option.icon} " " {option.title}</h4>
                                    <p>{option.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
