//! Registration form bound to a `RegistrationFlow` signal.
//!
//! ARCHITECTURE
//! ============
//! The flow signal is owned by the page so a reset from the confirmation
//! view clears it. Submission runs in two steps around the network call:
//! `begin_submit` before `spawn_local`, `finish` when the reply (or timeout)
//! arrives. Success is reported to the page through `on_success`.

#[cfg(test)]
#[path = "registration_form_test.rs"]
mod registration_form_test;

use leptos::prelude::*;
use registration::{BackendConfig, Field, RegistrationFlow, RegistrationResult, Role};

const IDLE_SUBMIT_LABEL: &str = "🚀 Secure My Spot Now!";
const BUSY_SUBMIT_LABEL: &str = "Securing Your Spot...";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { BUSY_SUBMIT_LABEL } else { IDLE_SUBMIT_LABEL }
}

/// Label and placeholder text for a form field.
fn field_copy(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Name => ("👤 Full Name *", "Enter your full name"),
        Field::Email => ("📧 Email Address *", "Enter your email address"),
        Field::Company => ("🏢 Company *", "Enter your company name"),
        Field::Role => ("💼 Role/Position *", "Select your role"),
    }
}

#[component]
pub fn RegistrationForm(flow: RwSignal<RegistrationFlow>, on_success: Callback<RegistrationResult>) -> impl IntoView {
    let config = use_context::<BackendConfig>().unwrap_or_default();
    let submitting = move || flow.with(RegistrationFlow::is_submitting);
    let error = move || flow.with(|f| f.error_message().map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = flow.try_update(RegistrationFlow::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use registration::RegistrationApi as _;

            let api = crate::net::api::BrowserApi::new(config.clone());
            leptos::task::spawn_local(async move {
                let reply = api.post_registration(&input).await;
                if let Err(e) = &reply {
                    log::warn!("registration request failed: {e}");
                }
                if let Some(result) = flow.try_update(|f| f.finish(reply)).flatten() {
                    log::info!("registered attendee {}", result.id);
                    on_success.run(result);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, &config);
    };

    view! {
        <section id="register" class="register">
            <div class="register__card">
                <header class="section-header">
                    <h2 class="section-header__title">"🎫 Secure Your Spot"</h2>
                    <p class="section-header__subtitle">
                        "Join the most exciting tech meetup of 2025. Limited seats available!"
                    </p>
                </header>

                <Show when=move || error().is_some()>
                    <div class="register__error" role="alert">
                        <p>{move || error().unwrap_or_default()}</p>
                    </div>
                </Show>

                <form class="register__form" on:submit=on_submit>
                    <div class="register__row">
                        <TextField flow=flow field=Field::Name input_type="text"/>
                        <TextField flow=flow field=Field::Email input_type="email"/>
                    </div>
                    <div class="register__row">
                        <TextField flow=flow field=Field::Company input_type="text"/>
                        <RoleSelect flow=flow/>
                    </div>

                    <button
                        class="button button--primary register__submit"
                        class:register__submit--busy=submitting
                        type="submit"
                        disabled=submitting
                        aria-busy=move || submitting().to_string()
                    >
                        <Show when=submitting>
                            <span class="spinner" aria-hidden="true"></span>
                        </Show>
                        {move || submit_label(submitting())}
                    </button>
                </form>

                <p class="register__fineprint">
                    "By registering, you agree to receive event updates and communications from AppDirect."
                </p>
            </div>
        </section>
    }
}

#[component]
fn TextField(flow: RwSignal<RegistrationFlow>, field: Field, input_type: &'static str) -> impl IntoView {
    let (label, placeholder) = field_copy(field);
    let id = field.as_str();

    view! {
        <div class="register__field">
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                required
                placeholder=placeholder
                prop:value=move || flow.with(|f| f.fields().get(field).to_owned())
                on:input=move |ev| flow.update(|f| f.update_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn RoleSelect(flow: RwSignal<RegistrationFlow>) -> impl IntoView {
    let (label, placeholder) = field_copy(Field::Role);
    let id = Field::Role.as_str();

    view! {
        <div class="register__field">
            <label for=id>{label}</label>
            <select
                id=id
                name=id
                required
                prop:value=move || flow.with(|f| f.fields().role.clone())
                on:change=move |ev| flow.update(|f| f.update_field(Field::Role, event_target_value(&ev)))
            >
                <option value="">{placeholder}</option>
                {Role::ALL
                    .iter()
                    .map(|role| view! { <option value=role.label()>{role.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
