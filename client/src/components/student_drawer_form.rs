//! Slide-in drawer with the new-student form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Open/closed is `UiState::drawer_open`. A successful create closes the
//! drawer, resets the form and runs `on_created` so the page can refresh
//! the collection. A failed create keeps the drawer open with the input
//! intact.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::notification_stack::notify;
use crate::net::types::Gender;
use crate::state::notifications::NotificationsState;
use crate::state::ui::UiState;
use crate::util::student_form::{DrawerForm, FormField, error_for};

/// Drawer form for creating a student.
#[component]
pub fn StudentDrawerForm(on_created: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let drawer = RwSignal::new(DrawerForm::default());

    let close = move || ui.update(|u| u.drawer_open = false);

    let submit = Callback::new(move |()| {
        let mut body = None;
        drawer.update(|d| body = d.begin_submit());
        let Some(body) = body else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::add_student(&body).await;
                match &result {
                    Ok(()) => log::debug!("student created: {}", body.email),
                    Err(err) => log::warn!("student create failed: {err}"),
                }
                let mut notice = None;
                drawer.update(|d| ui.update(|u| notice = Some(d.settle_submit(u, &body, &result))));
                if let Some(notice) = notice {
                    notify(notifications, notice);
                }
                if result.is_ok() {
                    on_created.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, notifications, on_created);
            drawer.update(|d| d.submitting = false);
        }
    });

    let field_error = move |field: FormField| error_for(&drawer.get().errors, field);

    view! {
        <div class="drawer" class:drawer--open=move || ui.get().drawer_open>
            <div class="drawer__backdrop" on:click=move |_| close()></div>
            <aside class="drawer__panel" aria-label="Create new student">
                <header class="drawer__header">
                    <h2>"Create new student"</h2>
                    <button class="drawer__close" title="Close" aria-label="Close" on:click=move |_| close()>
                        "×"
                    </button>
                </header>
                <form
                    class="drawer__body form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="form__item">
                        <span class="form__label">"Name"</span>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Please enter student name"
                            prop:value=move || drawer.get().form.name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                drawer.update(|d| d.form.name = value);
                            }
                        />
                        <FieldMessage message=Signal::derive(move || field_error(FormField::Name))/>
                    </label>
                    <label class="form__item">
                        <span class="form__label">"Email"</span>
                        <input
                            class="form__input"
                            type="email"
                            placeholder="Please enter student email"
                            prop:value=move || drawer.get().form.email
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                drawer.update(|d| d.form.email = value);
                            }
                        />
                        <FieldMessage message=Signal::derive(move || field_error(FormField::Email))/>
                    </label>
                    <label class="form__item">
                        <span class="form__label">"Gender"</span>
                        <select
                            class="form__input"
                            prop:value=move || drawer.get().form.gender.map_or("", Gender::as_wire)
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                drawer.update(|d| d.form.gender = Gender::from_wire(&value));
                            }
                        >
                            <option value="">"Please select a gender"</option>
                            {Gender::ALL
                                .into_iter()
                                .map(|g| view! { <option value={g.as_wire()}>{g.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <FieldMessage message=Signal::derive(move || field_error(FormField::Gender))/>
                    </label>
                    <footer class="drawer__footer">
                        <button type="button" class="btn" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || drawer.get().submitting>
                            {move || if drawer.get().submitting { "Submitting…" } else { "Submit" }}
                        </button>
                    </footer>
                </form>
            </aside>
        </div>
    }
}

#[component]
fn FieldMessage(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <span class="form__error" role="alert">{move || message.get().unwrap_or_default()}</span>
        </Show>
    }
}
