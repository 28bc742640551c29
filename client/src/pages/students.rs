//! Students page: the collection view with row mutations and the create drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the collection once on mount and
//! again after every successful mutation. Requests are fire-and-forget: overlapping
//! calls are not deduplicated and nothing is cancelled; a refresh only
//! follows a mutation because it is chained after the mutation resolves.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::student_drawer_form::StudentDrawerForm;
use crate::components::student_table::StudentTable;
use crate::net::api::ApiError;
use crate::net::types::Student;
use crate::state::notifications::{Notification, NotificationsState};
use crate::state::students::{CollectionView, StudentsState};
use crate::state::ui::{RowAction, UiState};

/// Students page: spinner, empty placeholder, or the table.
#[component]
pub fn StudentsPage() -> impl IntoView {
    let students = expect_context::<RwSignal<StudentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let refresh = Callback::new(move |()| fetch_students(students, ui, notifications));
    let on_delete = Callback::new(move |id: i64| remove_student(id, refresh, notifications));
    let on_edit = Callback::new(move |id: i64| {
        let Some(student) = students.get_untracked().find(id).cloned() else {
            return;
        };
        change_student(student, refresh, notifications);
    });

    // Effects only run in the browser, so SSR renders the loading state.
    Effect::new(move || refresh.run(()));

    view! {
        <StudentDrawerForm on_created=refresh/>
        {move || match students.get().view() {
            CollectionView::Loading => view! {
                <div class="spin" role="progressbar" aria-label="Loading students">
                    <span class="spin__dot"></span>
                </div>
            }
            .into_any(),
            CollectionView::Empty => view! {
                <div class="empty">
                    <div class="empty__image" aria-hidden="true">"🗂"</div>
                    <p class="empty__description">"No data"</p>
                    <button
                        class="btn btn--primary btn--round btn--small"
                        on:click=move |_| ui.update(UiState::toggle_drawer)
                    >
                        "+ Add new Student"
                    </button>
                </div>
            }
            .into_any(),
            CollectionView::Table { .. } => view! { <StudentTable on_delete=on_delete on_edit=on_edit/> }.into_any(),
        }}
    }
}

/// Settle a collection fetch into state, keeping the table page in range.
pub(crate) fn apply_refresh(
    students: &mut StudentsState,
    ui: &mut UiState,
    result: Result<Vec<Student>, ApiError>,
) -> Option<Notification> {
    let notice = students.apply_fetch(result);
    ui.clamp_page(students.count());
    notice
}

/// Notification for a settled row mutation.
pub(crate) fn mutation_notification(action: RowAction, id: i64, result: &Result<(), ApiError>) -> Notification {
    match (result, action) {
        (Ok(()), RowAction::Delete) => crate::state::notifications::student_deleted(id),
        (Ok(()), RowAction::Edit) => crate::state::notifications::student_changed(id),
        (Err(err), _) => Notification::api_failure(err),
    }
}

fn fetch_students(
    students: RwSignal<StudentsState>,
    ui: RwSignal<UiState>,
    notifications: RwSignal<NotificationsState>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_students().await;
            match &result {
                Ok(items) => log::debug!("fetched {} students", items.len()),
                Err(err) => log::warn!("student fetch failed: {err}"),
            }
            let mut notice = None;
            students.update(|s| ui.update(|u| notice = apply_refresh(s, u, result)));
            if let Some(notice) = notice {
                crate::components::notification_stack::notify(notifications, notice);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (students, ui, notifications);
    }
}

fn remove_student(id: i64, refresh: Callback<()>, notifications: RwSignal<NotificationsState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_student(id).await;
            if let Err(err) = &result {
                log::warn!("delete student {id} failed: {err}");
            }
            let ok = result.is_ok();
            crate::components::notification_stack::notify(
                notifications,
                mutation_notification(RowAction::Delete, id, &result),
            );
            if ok {
                refresh.run(());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, refresh, notifications);
    }
}

fn change_student(student: Student, refresh: Callback<()>, notifications: RwSignal<NotificationsState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::edit_student(&student).await;
            if let Err(err) = &result {
                log::warn!("edit student {} failed: {err}", student.id);
            }
            let ok = result.is_ok();
            crate::components::notification_stack::notify(
                notifications,
                mutation_notification(RowAction::Edit, student.id, &result),
            );
            if ok {
                refresh.run(());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (student, refresh, notifications);
    }
}
