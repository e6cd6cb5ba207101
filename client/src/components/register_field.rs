//! One labeled input of the registration form.

use authflow::{AuthForm, FieldInput, RegistrationField};
use leptos::prelude::*;

/// Input bound to `field` of the shared registration form.
///
/// `kind` is the HTML input type; `"checkbox"`, `"textarea"` and `"select"`
/// get their own markup.
#[component]
pub fn RegisterField(
    form: RwSignal<AuthForm>,
    field: RegistrationField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    let name = field.name();
    let value = move || form.with(|f| f.registration.get(field));
    let on_text = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        form.update(|f| f.set_registration_field(field, FieldInput::Text(raw)));
    };

    let input = match kind {
        "checkbox" => view! {
            <input
                id=name
                name=name
                type="checkbox"
                class="auth-check"
                prop:checked=move || form.with(|f| f.registration.is_private)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| f.set_registration_field(field, FieldInput::Checked(checked)));
                }
            />
        }
        .into_any(),
        "textarea" => view! {
            <textarea
                id=name
                name=name
                class="auth-input"
                placeholder=placeholder
                prop:value=value
                on:input=on_text
            ></textarea>
        }
        .into_any(),
        "select" => view! {
            <select id=name name=name class="auth-input" prop:value=value on:change=on_text>
                <option value="">"Select..."</option>
                <option value="Homme">"Male"</option>
                <option value="Femme">"Female"</option>
                <option value="autre">"Other"</option>
            </select>
        }
        .into_any(),
        _ => view! {
            <input
                id=name
                name=name
                type=kind
                class="auth-input"
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=on_text
            />
        }
        .into_any(),
    };

    view! {
        <div class="auth-field">
            <label for=name class="auth-label">{label}</label>
            {input}
        </div>
    }
}
