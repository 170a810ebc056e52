use log::debug;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::BindError;
use crate::listener::Listener;
use crate::view::PageView;

/// Something that can resolve an in-page fragment like `#features`.
pub trait FragmentLookup {
    type Target;

    fn lookup(&self, selector: &str) -> Option<Self::Target>;
}

impl FragmentLookup for Document {
    type Target = Element;

    fn lookup(&self, selector: &str) -> Option<Element> {
        match self.query_selector(selector) {
            Ok(found) => found,
            Err(_) => {
                debug!("Ignoring fragment `{selector}` that is not a valid selector");
                None
            }
        }
    }
}

/// Returns the element a fragment link points at, if the page has one.
pub fn resolve_fragment<L: FragmentLookup>(lookup: &L, href: Option<&str>) -> Option<L::Target> {
    let href = href?;
    if !href.starts_with('#') {
        return None;
    }
    lookup.lookup(href)
}

/// Something that can be brought to the top of the viewport.
pub trait ScrollTarget {
    fn scroll_to_start(&self);
}

impl ScrollTarget for Element {
    fn scroll_to_start(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Handles one fragment-link click: default navigation is always suppressed,
/// the target is scrolled to only when it exists. Returns whether it scrolled.
pub fn follow_fragment<L>(lookup: &L, href: Option<&str>, prevent_default: impl FnOnce()) -> bool
where
    L: FragmentLookup,
    L::Target: ScrollTarget,
{
    prevent_default();
    match resolve_fragment(lookup, href) {
        Some(target) => {
            target.scroll_to_start();
            true
        }
        None => false,
    }
}

pub fn install(view: &PageView) -> Result<Vec<Listener>, BindError> {
    view.fragment_anchors
        .iter()
        .map(|anchor| {
            let document = view.document.clone();
            let link = anchor.clone();
            Listener::new(anchor, "click", move |event: Event| {
                let href = link.get_attribute("href");
                follow_fragment(&document, href.as_deref(), || event.prevent_default());
            })
        })
        .collect()
}
