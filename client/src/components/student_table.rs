//! Bordered student table with header controls, row actions and paging.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `StudentsPage` once the collection is loaded and non-empty.
//! Row actions only raise callbacks; the page owns the network calls.

use leptos::prelude::*;

use crate::components::avatar::StudentAvatar;
use crate::components::confirm_popover::ConfirmPopover;
use crate::net::types::Student;
use crate::state::students::StudentsState;
use crate::state::ui::{RowAction, UiState};
use crate::util::pagination::{PAGE_SIZE, page_count, page_range};

const COLUMNS: [&str; 6] = ["", "Id", "Name", "Email", "Gender", "Action"];

/// Student table. `on_delete`/`on_edit` receive the confirmed row's id.
#[component]
pub fn StudentTable(on_delete: Callback<i64>, on_edit: Callback<i64>) -> impl IntoView {
    let students = expect_context::<RwSignal<StudentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let count = move || students.get().count();
    let pages = move || page_count(count(), PAGE_SIZE);
    let visible_rows = move || {
        let state = students.get();
        let range = page_range(ui.get().page, state.items.len(), PAGE_SIZE);
        state.items[range].to_vec()
    };

    view! {
        <div class="student-table">
            <TableTitle count=Signal::derive(count)/>
            <div class="student-table__scroll">
                <table class="table table--bordered">
                    <thead>
                        <tr>
                            {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible_rows
                            key=|s: &Student| (s.id, s.name.clone(), s.email.clone(), s.gender)
                            children=move |student| view! { <StudentRow student=student on_delete=on_delete on_edit=on_edit/> }
                        />
                    </tbody>
                </table>
            </div>
            <Show when=move || { pages() > 1 }>
                <Pager pages=Signal::derive(pages)/>
            </Show>
        </div>
    }
}

/// "Add new Student" toggle plus the live record count badge.
#[component]
fn TableTitle(count: Signal<usize>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="student-table__title">
            <button
                class="btn btn--primary btn--round btn--small"
                on:click=move |_| ui.update(UiState::toggle_drawer)
            >
                "+ Add new Student"
            </button>
            <div class="student-table__count">
                <span class="tag">"Number of students"</span>
                <span class="badge">{move || count.get()}</span>
            </div>
        </div>
    }
}

#[component]
fn StudentRow(student: Student, on_delete: Callback<i64>, on_edit: Callback<i64>) -> impl IntoView {
    let Student { id, name, email, gender } = student;

    view! {
        <tr>
            <td class="table__avatar"><StudentAvatar name=name.clone()/></td>
            <td>{id}</td>
            <td>{name.clone()}</td>
            <td>{email}</td>
            <td>{gender.label()}</td>
            <td class="table__actions">
                <span class="segmented">
                    <ConfirmPopover
                        student_id=id
                        student_name=name.clone()
                        action=RowAction::Delete
                        on_confirm=Callback::new(move |()| on_delete.run(id))
                    />
                    <ConfirmPopover
                        student_id=id
                        student_name=name
                        action=RowAction::Edit
                        on_confirm=Callback::new(move |()| on_edit.run(id))
                    />
                </span>
            </td>
        </tr>
    }
}

#[component]
fn Pager(pages: Signal<usize>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let current = move || ui.get().page;

    view! {
        <nav class="pager" aria-label="Pagination">
            <button
                class="btn btn--small"
                disabled=move || current() == 0
                on:click=move |_| ui.update(|u| u.page = u.page.saturating_sub(1))
            >
                "‹"
            </button>
            <span class="pager__label">{move || format!("{} / {}", current() + 1, pages.get())}</span>
            <button
                class="btn btn--small"
                disabled=move || current() + 1 >= pages.get()
                on:click=move |_| {
                    let last = pages.get_untracked().saturating_sub(1);
                    ui.update(|u| u.page = (u.page + 1).min(last));
                }
            >
                "›"
            </button>
        </nav>
    }
}
