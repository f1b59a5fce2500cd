//! Registration page: collects account details and posts them to the user
//! API with the session's CSRF token attached.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::submit::SubmitOutcome;
use crate::net::types::RegistrationPayload;
use crate::state::submission::SubmissionState;

/// Login page navigated to after a successful registration. Lives outside
/// the SPA, so the redirect is a full browser navigation.
const LOGIN_PAGE: &str = "/myapp/login/";

const SUCCESS_MESSAGE: &str = "User registered successfully!";

/// Shown on transport failures. The raw error detail goes to the console
/// log only, never into the notification.
const NETWORK_FAILURE_MESSAGE: &str = "Something went wrong! Please try again";

/// User-visible consequences of one settled submission attempt.
struct Settlement {
    /// Notification and status-line text. Always present: every attempt
    /// ends in exactly one message.
    message: String,
    /// Full-navigation target, on success only.
    redirect: Option<&'static str>,
    /// Diagnostic detail for the console, on transport failures only.
    diagnostic: Option<String>,
}

/// Map an outcome to its settlement.
///
/// Server rejections surface the error payload verbatim through its display
/// strategy; transport failures stay generic for the user.
fn settle(outcome: SubmitOutcome) -> Settlement {
    match outcome {
        SubmitOutcome::Accepted => Settlement {
            message: SUCCESS_MESSAGE.to_owned(),
            redirect: Some(LOGIN_PAGE),
            diagnostic: None,
        },
        SubmitOutcome::Rejected(errors) => Settlement {
            message: format!("Error: {errors}"),
            redirect: None,
            diagnostic: None,
        },
        SubmitOutcome::TransportFailed(detail) => Settlement {
            message: NETWORK_FAILURE_MESSAGE.to_owned(),
            redirect: None,
            diagnostic: Some(detail),
        },
    }
}

/// Registration form page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("farmer".to_owned());
    let location = RwSignal::new(String::new());

    let submission = RwSignal::new(SubmissionState::default());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // Must run before any async work so the native form submission can
        // never navigate the page.
        ev.prevent_default();

        let started = submission.try_update(SubmissionState::try_begin).unwrap_or(false);
        if !started {
            return;
        }
        let payload = RegistrationPayload {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            role: role.get(),
            location: location.get(),
        };
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Resolved per attempt: the server may rotate the cookie
            // between page load and submit.
            let token = crate::util::cookie::csrf_token();
            let outcome = crate::net::submit::run_submission(
                &payload,
                token,
                crate::net::api::send_create_user,
            )
            .await;
            let settlement = settle(outcome);
            if let Some(detail) = &settlement.diagnostic {
                log::error!("registration request failed: {detail}");
            }
            info.set(settlement.message.clone());
            crate::util::browser::alert(&settlement.message);
            submission.update(SubmissionState::finish);
            if let Some(target) = settlement.redirect {
                crate::util::browser::navigate(target);
            }
        });
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"AgriMart"</h1>
                <p class="register-card__subtitle">"Create your account"</p>
                <form id="registerForm" class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        name="username"
                        placeholder="Username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="register-input"
                        name="role"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="farmer">"Farmer"</option>
                        <option value="buyer">"Buyer"</option>
                        <option value="transporter">"Transporter"</option>
                    </select>
                    <input
                        class="register-input"
                        type="text"
                        name="location"
                        placeholder="Location (e.g. Nairobi)"
                        required=true
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <button
                        class="register-button"
                        type="submit"
                        disabled=move || submission.get().is_submitting()
                    >
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
                <p class="register-card__footer">
                    "Already have an account? " <a href=LOGIN_PAGE>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
