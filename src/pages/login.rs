//! Login page with per-keystroke validation and token persistence.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::{ApiError, surface_or};
use crate::session::store::Session;
use crate::state::form::{FieldErrors, FormField, SUBMIT_BLOCKED};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Login failed";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_NETWORK_MESSAGE: &str = "An error occurred while logging in.";

/// Inline message for a failed login attempt.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message } => surface_or(message.as_deref(), LOGIN_FALLBACK),
        ApiError::SessionExpired | ApiError::Network(_) => LOGIN_NETWORK_MESSAGE.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let navigate_profile = navigate.clone();
    let navigate_register = navigate.clone();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let edit_field = move |field: FormField, raw: String| {
        match field {
            FormField::Email => email.set(raw.clone()),
            FormField::Username => username.set(raw.clone()),
            FormField::Password => password.set(raw.clone()),
            FormField::FullName => {}
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
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &username_value, &password_value).await
                {
                    Ok(data) => {
                        session.store_login(&data);
                        navigate("/profile", NavigateOptions::default());
                    }
                    Err(err) => {
                        form_error.set(login_error_text(&err));
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
                email_value,
                username_value,
                password_value,
            );
        }
    };

    view! {
        <div class="container-login-signUp">
            <button
                type="button"
                class="switch-option-profile"
                on:click=move |_| navigate_profile("/profile", NavigateOptions::default())
            >
                "Go To Profile"
            </button>
            <div class="login-container">
                <h2 class="form-title">"Login"</h2>
                <form on:submit=on_submit>
                    <FormInput
                        id="login-email"
                        label="Email:"
                        input_type="email"
                        value=email
                        error=Signal::derive(move || errors.get().email)
                        on_input=Callback::new(move |raw| edit_field(FormField::Email, raw))
                    />
                    <FormInput
                        id="login-username"
                        label="Username:"
                        value=username
                        error=Signal::derive(move || errors.get().username)
                        on_input=Callback::new(move |raw| edit_field(FormField::Username, raw))
                    />
                    <FormInput
                        id="login-password"
                        label="Password:"
                        input_type="password"
                        value=password
                        error=Signal::derive(move || errors.get().password)
                        on_input=Callback::new(move |raw| edit_field(FormField::Password, raw))
                    />
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="profile-error">{move || form_error.get()}</p>
                    </Show>
                    <button type="submit" class="submit-btn" disabled=move || busy.get()>
                        "Submit"
                    </button>
                    <div class="switch-option">
                        <div>"OR"</div>
                        <button
                            type="button"
                            class="switch-link"
                            on:click=move |_| navigate_register("/register", NavigateOptions::default())
                        >
                            "Sign Up Instead"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
