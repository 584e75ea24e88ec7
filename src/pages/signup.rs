//! Sign-up page chaining registration into an automatic login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

#[cfg(feature = "hydrate")]
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::{ApiError, surface_or};
use crate::session::store::Session;
use crate::state::form::{FieldErrors, FormField, SUBMIT_BLOCKED};
#[cfg(feature = "hydrate")]
use crate::util::redirect::REDIRECT_DELAY;
use crate::util::redirect::RedirectGuard;

#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_FALLBACK: &str = "Sign up failed";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_NETWORK_MESSAGE: &str = "An error occurred while signing up.";
#[cfg(any(test, feature = "hydrate"))]
const AUTO_LOGIN_FALLBACK: &str = "Login failed after successful sign-up. Please log in manually.";
#[cfg(any(test, feature = "hydrate"))]
const AUTO_LOGIN_NETWORK_MESSAGE: &str =
    "An error occurred during auto-login. Please log in manually.";

/// Pause between a successful registration and the follow-up login call.
#[cfg(feature = "hydrate")]
const AUTO_LOGIN_DELAY: Duration = Duration::from_secs(2);

/// Inline message for a failed registration attempt.
#[cfg(any(test, feature = "hydrate"))]
fn signup_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message } => surface_or(message.as_deref(), SIGNUP_FALLBACK),
        ApiError::SessionExpired | ApiError::Network(_) => SIGNUP_NETWORK_MESSAGE.to_owned(),
    }
}

/// Inline message when the chained login fails after registration succeeded.
#[cfg(any(test, feature = "hydrate"))]
fn auto_login_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message } => surface_or(message.as_deref(), AUTO_LOGIN_FALLBACK),
        ApiError::SessionExpired => AUTO_LOGIN_FALLBACK.to_owned(),
        ApiError::Network(_) => AUTO_LOGIN_NETWORK_MESSAGE.to_owned(),
    }
}

/// A rejected auto-login sends the user to the login screen; a transport
/// failure leaves them on the form to retry.
#[cfg(any(test, feature = "hydrate"))]
fn auto_login_redirects(err: &ApiError) -> bool {
    !matches!(err, ApiError::Network(_))
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let navigate_profile = navigate.clone();
    let navigate_login = navigate.clone();
    let redirect = RedirectGuard::for_current_view();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let edit_field = move |field: FormField, raw: String| {
        match field {
            FormField::Email => email.set(raw.clone()),
            FormField::Username => username.set(raw.clone()),
            FormField::Password => password.set(raw.clone()),
            FormField::FullName => full_name.set(raw.clone()),
        }
        errors.update(|current| *current = current.apply(field, &raw));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if errors.get().has_errors() {
            form_error.set(SUBMIT_BLOCKED.to_owned());
            return;
        }
        let email_value = email.get();
        let username_value = username.get();
        let password_value = password.get();
        let full_name_value = full_name.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            let redirect = redirect.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::register(
                    &email_value,
                    &username_value,
                    &password_value,
                    &full_name_value,
                )
                .await
                {
                    form_error.set(signup_error_text(&err));
                    busy.set(false);
                    return;
                }

                gloo_timers::future::sleep(AUTO_LOGIN_DELAY).await;
                if !redirect.is_alive() {
                    return;
                }

                match crate::net::api::login(&email_value, &username_value, &password_value).await
                {
                    Ok(data) => {
                        session.store_login(&data);
                        navigate("/profile", NavigateOptions::default());
                    }
                    Err(err) => {
                        form_error.set(auto_login_error_text(&err));
                        if auto_login_redirects(&err) {
                            redirect.redirect_after(navigate, "/login", REDIRECT_DELAY);
                        }
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (
                &session,
                &navigate,
                &redirect,
                email_value,
                username_value,
                password_value,
                full_name_value,
            );
        }
    };

    view! {
        <div class="container-signup">
            <button
                type="button"
                class="switch-option-profile"
                on:click=move |_| navigate_profile("/profile", NavigateOptions::default())
            >
                "Go To Profile"
            </button>
            <div class="signup-container">
                <h2 class="form-title">"Sign Up"</h2>
                <form on:submit=on_submit>
                    <FormInput
                        id="signup-email"
                        label="Email:"
                        input_type="email"
                        value=email
                        error=Signal::derive(move || errors.get().email)
                        on_input=Callback::new(move |raw| edit_field(FormField::Email, raw))
                    />
                    <FormInput
                        id="signup-username"
                        label="Username:"
                        value=username
                        error=Signal::derive(move || errors.get().username)
                        on_input=Callback::new(move |raw| edit_field(FormField::Username, raw))
                    />
                    <FormInput
                        id="signup-fullName"
                        label="Full Name:"
                        value=full_name
                        error=Signal::derive(move || errors.get().full_name)
                        on_input=Callback::new(move |raw| edit_field(FormField::FullName, raw))
                    />
                    <FormInput
                        id="signup-password"
                        label="Password:"
                        input_type="password"
                        value=password
                        error=Signal::derive(move || errors.get().password)
                        on_input=Callback::new(move |raw| edit_field(FormField::Password, raw))
                    />
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="error-message">{move || form_error.get()}</p>
                    </Show>
                    <button type="submit" class="submit-btn" disabled=move || busy.get()>
                        "Submit"
                    </button>
                    <div class="switch-option">
                        <div>"OR"</div>
                        <button
                            type="button"
                            class="switch-link"
                            on:click=move |_| navigate_login("/login", NavigateOptions::default())
                        >
                            "Login Instead"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
