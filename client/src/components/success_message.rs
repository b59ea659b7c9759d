//! Confirmation view shown after a successful registration.

use leptos::prelude::*;
use registration::RegistrationResult;

use crate::content::EVENT;
use crate::util::print::print_page;

#[component]
pub fn SuccessMessage(result: RegistrationResult, on_back_to_form: Callback<()>) -> impl IntoView {
    let details = [
        ("Name:", result.input.name),
        ("Email:", result.input.email),
        ("Company:", result.input.company),
        ("Role:", result.input.role),
    ];
    let mailto = format!("mailto:{}", EVENT.support_email);

    view! {
        <section class="success">
            <div class="success__card">
                <div class="success__icon" aria-hidden="true">"✓"</div>
                <h1 class="success__title">"🎉 Registration Successful!"</h1>
                <p class="success__lead">
                    "Thank you for registering for the AppDirect India Meetup. We're excited to see you there!"
                </p>

                <div class="success__details">
                    <h2>"Registration Details"</h2>
                    <dl>
                        {details
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> })
                            .collect_view()}
                        <dt>"Registration ID:"</dt>
                        <dd class="success__id">{result.id}</dd>
                    </dl>
                </div>

                <div class="success__reminder">
                    <h3>"Event Reminder"</h3>
                    <p><strong>"Date: "</strong> {EVENT.date}</p>
                    <p><strong>"Time: "</strong> {EVENT.time}</p>
                    <p><strong>"Location: "</strong> {EVENT.venue_address}</p>
                    <p class="success__note">
                        "We'll send you a confirmation email with venue details and agenda shortly."
                    </p>
                </div>

                <div class="success__actions">
                    <button class="button button--secondary" on:click=move |_| on_back_to_form.run(())>
                        "Register Another Person"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            let _ = print_page();
                        }
                    >
                        "Print Confirmation"
                    </button>
                </div>

                <p class="success__help">
                    "Need help? Contact us at "
                    <a href=mailto>{EVENT.support_email}</a>
                </p>
            </div>
        </section>
    }
}
