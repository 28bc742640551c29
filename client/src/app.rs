//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification_stack::NotificationStack;
use crate::components::shell::Shell;
use crate::pages::students::StudentsPage;
use crate::state::{notifications::NotificationsState, students::StudentsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let students = RwSignal::new(StudentsState::default());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(students);
    provide_context(ui);
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/student-admin.css"/>
        <Title text="Student Admin"/>

        <Router>
            <Shell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=StudentsPage/>
                </Routes>
            </Shell>
            <NotificationStack/>
        </Router>
    }
}
