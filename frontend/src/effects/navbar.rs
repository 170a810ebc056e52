use log::warn;
use web_sys::HtmlElement;

use crate::error::BindError;
use crate::listener::Listener;
use crate::view::PageView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub const SCROLLED: NavbarStyle = NavbarStyle {
    background: "rgba(255, 255, 255, 0.98)",
    box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
};

pub const RESTING: NavbarStyle = NavbarStyle {
    background: "rgba(255, 255, 255, 0.95)",
    box_shadow: "none",
};

pub fn style_for_offset(offset: f64, threshold: f64) -> NavbarStyle {
    if offset > threshold {
        SCROLLED
    } else {
        RESTING
    }
}

pub fn install(view: &PageView, threshold: f64) -> Result<Listener, BindError> {
    let window = view.window.clone();
    let navbar = view.navbar.clone();

    Listener::new(&view.window, "scroll", move |_| {
        let offset = window.scroll_y().unwrap_or(0.0);
        apply(&navbar, style_for_offset(offset, threshold));
    })
}

fn apply(navbar: &HtmlElement, style: NavbarStyle) {
    let declaration = navbar.style();
    if declaration.set_property("background", style.background).is_err()
        || declaration.set_property("box-shadow", style.box_shadow).is_err()
    {
        warn!("Failed to update navbar style");
    }
}
