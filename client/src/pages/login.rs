//! Auth page: login and registration forms behind one toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state transitions go through `authflow::AuthForm`; this page only wires
//! inputs to it, awaits the browser transport, and schedules the navigation
//! the controller asks for.

use authflow::{AuthForm, FormMode, RegistrationField};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::register_field::RegisterField;
use crate::util::auth::install_redirect;
#[cfg(feature = "hydrate")]
use crate::util::auth::run_after;

/// Text of the mode toggle for the form currently shown.
#[must_use]
pub fn toggle_label(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Login => "Don't have an account? Create one",
        FormMode::Register => "Already have an account? Log in",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::new());
    let mode = move || form.with(|f| f.mode);
    let redirect = install_redirect(use_navigate());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(AuthForm::begin_login).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use authflow::AuthApi;

            leptos::task::spawn_local(async move {
                let result = crate::net::api::BrowserAuthApi::default().login(&request).await;
                let store = crate::util::storage::BrowserTokenStore;
                let next = form.try_update(|f| f.finish_login(result, &store)).flatten();
                if let Some(nav) = next {
                    run_after(nav.after, move || redirect.set(Some(nav.to)));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, redirect);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(AuthForm::begin_register).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use authflow::AuthApi;

            leptos::task::spawn_local(async move {
                let result = crate::net::api::BrowserAuthApi::default().register(&payload).await;
                let next = form.try_update(|f| f.finish_register(result)).flatten();
                if let Some(nav) = next {
                    run_after(nav.after, move || {
                        // Already on the login route: the router will not remount us.
                        form.update(AuthForm::show_login);
                        redirect.set(Some(nav.to));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, redirect);
        }
    };

    let messages = move || {
        view! {
            <Show when=move || form.with(|f| !f.error.is_empty())>
                <p class="auth-message auth-message--error">{move || form.with(|f| f.error.clone())}</p>
            </Show>
            <Show when=move || form.with(|f| !f.success.is_empty())>
                <p class="auth-message auth-message--success">{move || form.with(|f| f.success.clone())}</p>
            </Show>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__toggle">
                    <button class="auth-toggle" on:click=move |_| form.update(AuthForm::toggle_mode)>
                        {move || toggle_label(mode())}
                    </button>
                </div>

                {move || match mode() {
                    FormMode::Login => view! {
                        <h2 class="auth-card__title">"Log in"</h2>
                        {messages()}
                        <form class="auth-form" on:submit=on_login>
                            <div class="auth-field">
                                <label for="email" class="auth-label">"Email address"</label>
                                <input
                                    id="email"
                                    type="email"
                                    class="auth-input"
                                    placeholder="Enter your email"
                                    required
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.email = value);
                                    }
                                />
                            </div>
                            <div class="auth-field">
                                <label for="password" class="auth-label">"Password"</label>
                                <input
                                    id="password"
                                    type="password"
                                    class="auth-input"
                                    placeholder="Enter your password"
                                    required
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.password = value);
                                    }
                                />
                            </div>
                            <button type="submit" class="auth-submit" disabled=move || form.with(|f| f.busy)>
                                "Log in"
                            </button>
                        </form>
                    }
                    .into_any(),
                    FormMode::Register => view! {
                        <h2 class="auth-card__title">"Sign up"</h2>
                        {messages()}
                        <form class="auth-form" on:submit=on_register>
                            <RegisterField form=form field=RegistrationField::Username label="Username" placeholder="Enter your username" required=true/>
                            <RegisterField form=form field=RegistrationField::Age label="Age" kind="number" placeholder="Enter your age" required=true/>
                            <RegisterField form=form field=RegistrationField::Email label="Email address" kind="email" placeholder="Enter your email" required=true/>
                            <RegisterField form=form field=RegistrationField::Password label="Password" kind="password" placeholder="Enter your password" required=true/>
                            <RegisterField form=form field=RegistrationField::FirstName label="First name"/>
                            <RegisterField form=form field=RegistrationField::LastName label="Last name"/>
                            <RegisterField form=form field=RegistrationField::Gender label="Gender" kind="select"/>
                            <RegisterField form=form field=RegistrationField::DateOfBirth label="Date of birth" kind="date"/>
                            <RegisterField form=form field=RegistrationField::Avatar label="Avatar URL" kind="url"/>
                            <RegisterField form=form field=RegistrationField::Bio label="Bio" kind="textarea"/>
                            <RegisterField form=form field=RegistrationField::PhoneNumber label="Phone number" kind="tel"/>
                            <RegisterField form=form field=RegistrationField::Address label="Address"/>
                            <RegisterField form=form field=RegistrationField::IsPrivate label="Private profile" kind="checkbox"/>
                            <button type="submit" class="auth-submit" disabled=move || form.with(|f| f.busy)>
                                "Sign up"
                            </button>
                        </form>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
