use log::warn;
use web_sys::Element;

use crate::error::BindError;
use crate::listener::Listener;
use crate::view::PageView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    pub const fn from_marker(present: bool) -> Self {
        if present {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub const fn next(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => self.toggled(),
            MenuEvent::LinkClick => Self::Closed,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClick,
}

/// Hamburger toggles the menu, any nav link closes it.
pub fn install(view: &PageView, open_class: &'static str) -> Result<Vec<Listener>, BindError> {
    let mut listeners = Vec::with_capacity(view.nav_links.len() + 1);

    let menu = view.nav_menu.clone();
    listeners.push(Listener::new(&view.hamburger, "click", move |_| {
        let next = read_state(&menu, open_class).next(MenuEvent::Toggle);
        write_state(&menu, open_class, next);
    })?);

    for link in &view.nav_links {
        let menu = view.nav_menu.clone();
        listeners.push(Listener::new(link, "click", move |_| {
            let next = read_state(&menu, open_class).next(MenuEvent::LinkClick);
            write_state(&menu, open_class, next);
        })?);
    }

    Ok(listeners)
}

fn read_state(menu: &Element, open_class: &str) -> MenuState {
    MenuState::from_marker(menu.class_list().contains(open_class))
}

fn write_state(menu: &Element, open_class: &str, state: MenuState) {
    let classes = menu.class_list();
    let result = if state.is_open() {
        classes.add_1(open_class)
    } else {
        classes.remove_1(open_class)
    };

    if result.is_err() {
        warn!("Failed to update menu class `{open_class}`");
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuEvent, MenuState};

    #[test]
    fn toggle_negates_state() {
        let mut state = MenuState::Closed;
        for _ in 0..5 {
            let before = state;
            state = state.toggled();
            assert_eq!(state.is_open(), !before.is_open());
        }
    }

    #[test]
    fn marker_maps_to_state() {
        assert_eq!(MenuState::from_marker(true), MenuState::Open);
        assert_eq!(MenuState::from_marker(false), MenuState::Closed);
    }

    #[test]
    fn link_click_after_any_sequence_closes() {
        for clicks in 0..4 {
            let mut state = MenuState::Closed;
            for _ in 0..clicks {
                state = state.next(MenuEvent::Toggle);
            }
            assert_eq!(state.next(MenuEvent::LinkClick), MenuState::Closed);
        }
    }

    #[test]
    fn link_click_on_closed_menu_is_noop() {
        assert_eq!(
            MenuState::Closed.next(MenuEvent::LinkClick),
            MenuState::Closed
        );
    }
}
