//! Row action button guarded by a yes/no popover.

use leptos::prelude::*;

use crate::state::ui::{RowAction, UiState};

/// Button that opens a confirmation popover; `on_confirm` runs on "Yes".
///
/// Only one popover is open at a time across the table (tracked in
/// `UiState::pending_confirm`).
#[component]
pub fn ConfirmPopover(
    student_id: i64,
    #[prop(into)] student_name: String,
    action: RowAction,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let prompt = action.prompt(&student_name);
    let is_danger = action == RowAction::Delete;
    let is_open = move || ui.get().is_confirming(student_id, action);

    let on_open = move |_| ui.update(|u| u.request_confirm(student_id, action));
    let on_yes = move |_| {
        let mut confirmed = None;
        ui.update(|u| confirmed = u.take_confirm(student_id, action));
        if confirmed.is_some() {
            on_confirm.run(());
        }
    };
    let on_no = move |_| {
        ui.update(|u| {
            u.take_confirm(student_id, action);
        });
    };

    view! {
        <span class="confirm">
            <button
                class="btn btn--segment"
                class:btn--danger=is_danger
                on:click=on_open
            >
                {action.label()}
            </button>
            <Show when=is_open>
                <div class="confirm__popover" role="dialog">
                    <p class="confirm__prompt">{prompt.clone()}</p>
                    <div class="confirm__actions">
                        <button class="btn btn--small" on:click=on_no>"No"</button>
                        <button class="btn btn--small btn--primary" on:click=on_yes>"Yes"</button>
                    </div>
                </div>
            </Show>
        </span>
    }
}
