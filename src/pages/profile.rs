//! Profile page: token-guarded fetch with expiry-driven redirect.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::{ApiError, surface_or};
use crate::session::store::Session;
use crate::state::profile::ProfileState;
use crate::util::redirect::{REDIRECT_DELAY, RedirectGuard};

const NOT_LOGGED_IN_MESSAGE: &str = "You are not logged in.";
#[cfg(any(test, feature = "hydrate"))]
const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Redirecting to login.";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_FALLBACK: &str = "Failed to fetch profile. Refresh it to try again.";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_NETWORK_MESSAGE: &str =
    "An error occurred while fetching profile data. Refresh it to try again.";

/// Inline message for a failed profile fetch.
#[cfg(any(test, feature = "hydrate"))]
fn profile_error_text(err: &ApiError) -> String {
    match err {
        ApiError::SessionExpired => SESSION_EXPIRED_MESSAGE.to_owned(),
        ApiError::Rejected { message } => surface_or(message.as_deref(), PROFILE_FALLBACK),
        ApiError::Network(_) => PROFILE_NETWORK_MESSAGE.to_owned(),
    }
}

/// Only an expired session wipes the stored keys; other failures leave the
/// session intact so a refresh can retry with the same token.
#[cfg(any(test, feature = "hydrate"))]
fn wipes_session(err: &ApiError) -> bool {
    matches!(err, ApiError::SessionExpired)
}

/// Map a failed fetch onto screen state, wiping the session on expiry.
#[cfg(any(test, feature = "hydrate"))]
fn fetch_failure_state(session: &Session, err: &ApiError) -> ProfileState {
    if wipes_session(err) {
        session.clear_all();
    }
    ProfileState::failed(profile_error_text(err)).into_redirecting()
}

/// Record fields render as `N/A` when the server omits them.
fn display_value(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "N/A".to_owned())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let navigate_login = navigate.clone();
    let redirect = RedirectGuard::for_current_view();
    let state = RwSignal::new(ProfileState::default());

    Effect::new(move || {
        let Some(token) = session.access_token() else {
            state.set(ProfileState::failed(NOT_LOGGED_IN_MESSAGE).into_redirecting());
            session.clear_all();
            redirect.redirect_after(navigate.clone(), "/login", REDIRECT_DELAY);
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            let redirect = redirect.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile(&token).await {
                    Ok(record) => state.set(ProfileState::displaying(record)),
                    Err(err) => {
                        log::error!("profile fetch failed: {err}");
                        state.set(fetch_failure_state(&session, &err));
                        redirect.redirect_after(navigate, "/login", REDIRECT_DELAY);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let full_name_text = move || display_value(state.get().record.and_then(|r| r.full_name));
    let email_text = move || display_value(state.get().record.and_then(|r| r.email));
    let username_text = move || display_value(state.get().record.and_then(|r| r.user_name));

    view! {
        <Show
            when=move || !state.get().phase.shows_error()
            fallback=move || {
                view! { <div class="profile-error">{move || state.get().error}</div> }
            }
        >
            {
                // Show re-runs its children; each run needs its own handle.
                let navigate_login = navigate_login.clone();
                view! {
                    <Show
                        when=move || state.get().phase.shows_record()
                        fallback=|| {
                            view! { <div class="loading-message">"Loading profile..."</div> }
                        }
                    >
                        <div class="profile-container">
                            <h2>"Profile"</h2>
                            <p>
                                <strong>"Full Name:"</strong>
                                " "
                                {full_name_text}
                            </p>
                            <p>
                                <strong>"Email:"</strong>
                                " "
                                {email_text}
                            </p>
                            <p>
                                <strong>"Username:"</strong>
                                " "
                                {username_text}
                            </p>
                            <button
                                type="button"
                                class="btn"
                                on:click={
                                    let navigate_login = navigate_login.clone();
                                    move |_| navigate_login("/login", NavigateOptions::default())
                                }
                            >
                                "Go To Login"
                            </button>
                        </div>
                    </Show>
                }
            }
        </Show>
    }
}
