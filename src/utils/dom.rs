use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, NodeList, Window};

use crate::error::LandingError;

pub fn window() -> Result<Window, LandingError> {
    web_sys::window().ok_or_else(|| LandingError::MissingElement("window".to_string()))
}

pub fn document(window: &Window) -> Result<Document, LandingError> {
    window
        .document()
        .ok_or_else(|| LandingError::MissingElement("document".to_string()))
}

/// Element with `id`, cast to the expected type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, LandingError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| LandingError::MissingElement(format!("#{}", id)))
}

/// Like `by_id` but for elements the page may leave out.
pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First match of `selector` under `root`, cast to the expected type.
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, LandingError> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, LandingError> {
    Ok(elements(root.query_selector_all(selector)?))
}

/// Node an event was dispatched to, if it is one.
pub fn event_node(event: &web_sys::Event) -> Option<Node> {
    event.target().and_then(|target| target.dyn_into::<Node>().ok())
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, present) {
        log::warn!("Failed to toggle class {}: {:?}", class, e);
    }
}
