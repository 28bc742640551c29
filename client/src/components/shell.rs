//! Page chrome: collapsible sider menu, header, breadcrumb and footer.
//!
//! ARCHITECTURE
//! ============
//! The shell owns navigation presentation only. Page content is passed in as
//! children so the students page stays unaware of the layout.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::ui::UiState;
use crate::util::menu::{MenuItem, breadcrumb_for, nav_items};

/// Application layout wrapping the routed page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let collapsed = move || ui.get().sider_collapsed;
    let crumbs = move || breadcrumb_for(&nav_items(), &ui.get().selected_menu_key);

    view! {
        <div class="layout">
            <aside class="sider" class:sider--collapsed=collapsed>
                <div class="sider__logo" aria-hidden="true"></div>
                <nav class="menu" aria-label="Main">
                    {nav_items().into_iter().map(|item| view! { <MenuEntry item=item/> }).collect::<Vec<_>>()}
                </nav>
                <button
                    class="sider__trigger"
                    title="Toggle sidebar"
                    on:click=move |_| ui.update(|u| u.sider_collapsed = !u.sider_collapsed)
                >
                    {move || if collapsed() { "›" } else { "‹" }}
                </button>
            </aside>
            <div class="layout__main">
                <header class="layout__header"></header>
                <main class="layout__content">
                    <ol class="breadcrumb">
                        {move || {
                            crumbs()
                                .into_iter()
                                .map(|label| view! { <li class="breadcrumb__item">{label}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ol>
                    <div class="layout__panel">{children()}</div>
                </main>
                <footer class="layout__footer">"Student Admin"</footer>
            </div>
        </div>
    }
}

/// One sider entry: a selectable leaf, or a group that expands its children.
#[component]
fn MenuEntry(item: MenuItem) -> AnyView {
    let ui = expect_context::<RwSignal<UiState>>();
    let key = item.key;
    let glyph = item.icon.map(|icon| icon.glyph()).unwrap_or_default();

    if item.children.is_empty() {
        return view! {
            <button
                class="menu__item"
                class:menu__item--selected=move || ui.get().selected_menu_key == key
                on:click=move |_| ui.update(|u| u.selected_menu_key = key.to_owned())
            >
                <span class="menu__icon" aria-hidden="true">{glyph}</span>
                <span class="menu__label">{item.label}</span>
            </button>
        }
        .into_any();
    }

    let children = item.children;
    view! {
        <div class="menu__group" class:menu__group--open=move || ui.get().is_menu_group_open(key)>
            <button class="menu__item menu__item--group" on:click=move |_| ui.update(|u| u.toggle_menu_group(key))>
                <span class="menu__icon" aria-hidden="true">{glyph}</span>
                <span class="menu__label">{item.label}</span>
                <span class="menu__arrow" aria-hidden="true">"▾"</span>
            </button>
            <Show when=move || ui.get().is_menu_group_open(key)>
                <div class="menu__submenu">
                    {children
                        .clone()
                        .into_iter()
                        .map(|child| view! { <MenuEntry item=child/> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
