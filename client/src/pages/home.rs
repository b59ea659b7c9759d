//! The meetup page: event sections plus registration, or the confirmation.

use leptos::prelude::*;
use registration::{RegistrationFlow, RegistrationResult};

use crate::components::{
    hero::Hero, location::Location, registration_form::RegistrationForm, success_message::SuccessMessage,
    tech_tracks::TechTracks,
};
use crate::state::page::PageView;

#[component]
pub fn HomePage() -> impl IntoView {
    let page = RwSignal::new(PageView::default());
    let flow = RwSignal::new(RegistrationFlow::new());

    let on_success = Callback::new(move |result: RegistrationResult| {
        page.update(|p| p.register(result));
    });
    let on_back_to_form = Callback::new(move |()| {
        flow.update(RegistrationFlow::reset);
        page.update(PageView::back_to_form);
    });

    view! {
        <main class="page">
            {move || match page.get() {
                PageView::Editing => {
                    view! {
                        <Hero/>
                        <TechTracks/>
                        <Location/>
                        <RegistrationForm flow=flow on_success=on_success/>
                    }
                        .into_any()
                }
                PageView::Registered(result) => {
                    view! { <SuccessMessage result=result on_back_to_form=on_back_to_form/> }.into_any()
                }
            }}
        </main>
    }
}
