//! Round avatar showing a student's initials.

use leptos::prelude::*;

use crate::util::avatar::{AvatarContent, avatar_color, avatar_content};

/// Avatar for the first table column. Blank names get a generic user glyph.
#[component]
pub fn StudentAvatar(#[prop(into)] name: String) -> impl IntoView {
    let style = format!("background-color: {}", avatar_color(&name));
    let (text, is_icon) = match avatar_content(&name) {
        AvatarContent::Icon => ("👤".to_owned(), true),
        AvatarContent::Initials(initials) => (initials, false),
    };

    view! {
        <span class="avatar" class:avatar--icon=is_icon style=style title=name aria-hidden="true">
            {text}
        </span>
    }
}
