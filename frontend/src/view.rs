use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::PageConfig;
use crate::error::BindError;

/// Result containers the demo runners render into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultArea {
    Method,
    Performance,
    Security,
}

#[derive(Clone)]
pub struct ResultAreas {
    method: Element,
    performance: Element,
    security: Element,
}

impl ResultAreas {
    pub fn get(&self, area: ResultArea) -> &Element {
        match area {
            ResultArea::Method => &self.method,
            ResultArea::Performance => &self.performance,
            ResultArea::Security => &self.security,
        }
    }
}

/// Every element the interactions touch, resolved once at startup.
pub struct PageView {
    pub window: Window,
    pub document: Document,
    pub hamburger: Element,
    pub nav_menu: Element,
    pub nav_links: Vec<Element>,
    pub fragment_anchors: Vec<Element>,
    pub navbar: HtmlElement,
    pub cards: Vec<HtmlElement>,
    pub results: ResultAreas,
}

impl PageView {
    pub fn bind(window: Window, config: &PageConfig) -> Result<Self, BindError> {
        let document = window.document().ok_or(BindError::NoDocument)?;
        let selectors = &config.selectors;
        let ids = &config.result_ids;

        let navbar = require(&document, selectors.navbar)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BindError::NotHtmlElement(selectors.navbar))?;

        let cards = query_all(&document, selectors.cards)?
            .into_iter()
            .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
            .collect();

        let results = ResultAreas {
            method: require_id(&document, ids.method)?,
            performance: require_id(&document, ids.performance)?,
            security: require_id(&document, ids.security)?,
        };

        Ok(Self {
            hamburger: require(&document, selectors.hamburger)?,
            nav_menu: require(&document, selectors.nav_menu)?,
            nav_links: query_all(&document, selectors.nav_link)?,
            fragment_anchors: query_all(&document, selectors.fragment_anchor)?,
            navbar,
            cards,
            results,
            document,
            window,
        })
    }
}

fn require(document: &Document, selector: &'static str) -> Result<Element, BindError> {
    document
        .query_selector(selector)
        .map_err(|_| BindError::BadSelector(selector))?
        .ok_or(BindError::MissingElement(selector))
}

fn require_id(document: &Document, id: &'static str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or(BindError::MissingElement(id))
}

fn query_all(document: &Document, selector: &'static str) -> Result<Vec<Element>, BindError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| BindError::BadSelector(selector))?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
