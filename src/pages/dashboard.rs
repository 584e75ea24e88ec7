//! Dashboard page rendered entirely from cached session fields.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::store::{Session, SessionUser};

/// A missing or empty token or username means no usable session.
fn missing_session(token: Option<&str>, user_name: Option<&str>) -> bool {
    token.is_none_or(str::is_empty) || user_name.is_none_or(str::is_empty)
}

/// The greeting prefers the full name and falls back to the username.
fn welcome_name(user: &SessionUser) -> String {
    let pick = |field: &Option<String>| field.clone().filter(|value| !value.is_empty());
    pick(&user.full_name)
        .or_else(|| pick(&user.user_name))
        .unwrap_or_default()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let logout_session = session.clone();
    let navigate = use_navigate();
    let navigate_profile = navigate.clone();
    let navigate_logout = navigate.clone();
    let state = RwSignal::new(None::<SessionUser>);

    // No network call: the cached login fields are the whole data source.
    Effect::new(move || {
        let token = session.access_token();
        let user = session.user();
        if missing_session(token.as_deref(), user.user_name.as_deref()) {
            navigate("/login", NavigateOptions::default());
            return;
        }
        state.set(Some(user));
    });

    let greeting = move || {
        let user = state.get().unwrap_or_default();
        format!("Welcome, {}!", welcome_name(&user))
    };
    let email_line = move || {
        let user = state.get().unwrap_or_default();
        format!("Email: {}", user.email.unwrap_or_default())
    };

    view! {
        <Show when=move || state.get().is_some() fallback=|| view! { <p>"Loading dashboard..."</p> }>
            <div class="dashboard-container">
                <h1>{greeting}</h1>
                <p>{email_line}</p>

                <div class="dashboard-actions">
                    <button
                        type="button"
                        class="action-btn"
                        on:click={
                            let navigate_profile = navigate_profile.clone();
                            move |_| navigate_profile("/profile", NavigateOptions::default())
                        }
                    >
                        "Go to Profile"
                    </button>
                    <button
                        type="button"
                        class="logout-btn"
                        on:click={
                            let session = logout_session.clone();
                            let navigate_logout = navigate_logout.clone();
                            move |_| {
                                session.clear();
                                navigate_logout("/login", NavigateOptions::default());
                            }
                        }
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </Show>
    }
}
