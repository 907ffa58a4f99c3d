//! Contact form. Submissions are validated, logged and cleared; nothing is
//! sent anywhere.

use folio_core::{ContactError, ContactField, ContactForm, Reveal};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::RevealBox;

fn input_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<ContactError>);
    let sent = use_state(|| false);

    let on_input = |field: ContactField| {
        let form = form.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            next.set(field, input_value(&event));
            form.set(next);
            if error.as_ref().is_some_and(|e| e.field() == field) {
                error.set(None);
            }
            sent.set(false);
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(_) => {
                    form.set(next);
                    error.set(None);
                    sent.set(true);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "contact form rejected");
                    error.set(Some(e));
                }
            }
        })
    };

    let field = |field: ContactField| {
        let invalid = error.as_ref().is_some_and(|e| e.field() == field);
        let class = classes!("form-input", invalid.then_some("invalid"));
        let id = format!("contact-{}", field.label().to_lowercase().replace(' ', "-"));
        let control = if field == ContactField::Message {
            html! {
                <textarea
                    id={id.clone()}
                    {class}
                    rows="4"
                    placeholder={field.placeholder()}
                    required={field.is_required()}
                    value={form.get(field).to_string()}
                    oninput={on_input(field)}
                />
            }
        } else {
            html! {
                <input
                    id={id.clone()}
                    {class}
                    type={field.input_type()}
                    placeholder={field.placeholder()}
                    required={field.is_required()}
                    value={form.get(field).to_string()}
                    oninput={on_input(field)}
                />
            }
        };
        html! {
            <div class="form-field">
                <label for={id}>{ field.label() }</label>
                { control }
            </div>
        }
    };

    html! {
        <section id="contact" class="section contact">
            <RevealBox reveal={Reveal::fade_in_up(0.0)}>
                <h2 class="section-title">{ "Get in " }<span class="gradient-text">{ "Touch" }</span></h2>
                <p class="section-lead">
                    { "Have an idea, collaboration, or just want to say hi?" }<br />
                    { "Drop me a message." }
                </p>
            </RevealBox>
            <RevealBox reveal={Reveal::fade_in_up(0.2)} class="contact-card">
                <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                    <div class="form-row">
                        { field(ContactField::Name) }
                        { field(ContactField::Phone) }
                    </div>
                    { field(ContactField::Email) }
                    { field(ContactField::Subject) }
                    { field(ContactField::Message) }
                    if let Some(e) = &*error {
                        <p class="form-error" role="alert">{ e.to_string() }</p>
                    }
                    if *sent {
                        <p class="form-success" role="status">{ "Thanks! Your message was received." }</p>
                    }
                    <div class="form-actions">
                        <button type="submit" class="btn-primary">{ "Send Message" }</button>
                    </div>
                </form>
            </RevealBox>
        </section>
    }
}
