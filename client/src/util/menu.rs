//! Sider navigation model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell renders this tree; the breadcrumb is derived from the selected
//! key so the two never disagree.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

pub const DEFAULT_MENU_KEY: &str = "students";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Team,
    Chart,
    Desktop,
    User,
    File,
}

impl MenuIcon {
    /// Glyph rendered in the sider, also shown alone when collapsed.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Team => "👥",
            Self::Chart => "📊",
            Self::Desktop => "🖥",
            Self::User => "👤",
            Self::File => "📄",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: Option<MenuIcon>,
    pub children: Vec<MenuItem>,
}

fn leaf(key: &'static str, label: &'static str, icon: Option<MenuIcon>) -> MenuItem {
    MenuItem { key, label, icon, children: Vec::new() }
}

fn group(key: &'static str, label: &'static str, icon: MenuIcon, children: Vec<MenuItem>) -> MenuItem {
    MenuItem { key, label, icon: Some(icon), children }
}

/// Navigation tree shown in the sider.
pub fn nav_items() -> Vec<MenuItem> {
    vec![
        leaf(DEFAULT_MENU_KEY, "Students", Some(MenuIcon::Team)),
        leaf("overview", "Overview", Some(MenuIcon::Chart)),
        leaf("enrolment", "Enrolment", Some(MenuIcon::Desktop)),
        group(
            "classes",
            "Classes",
            MenuIcon::User,
            vec![leaf("class-a", "Class A", None), leaf("class-b", "Class B", None), leaf("class-c", "Class C", None)],
        ),
        group(
            "teams",
            "Teams",
            MenuIcon::Team,
            vec![leaf("team-1", "Team 1", None), leaf("team-2", "Team 2", None)],
        ),
        leaf("files", "Files", Some(MenuIcon::File)),
    ]
}

/// Labels from the root to `key`, or empty when the key is unknown.
pub fn breadcrumb_for(items: &[MenuItem], key: &str) -> Vec<&'static str> {
    for item in items {
        if item.key == key {
            return vec![item.label];
        }
        let nested = breadcrumb_for(&item.children, key);
        if !nested.is_empty() {
            let mut path = vec![item.label];
            path.extend(nested);
            return path;
        }
    }
    Vec::new()
}
