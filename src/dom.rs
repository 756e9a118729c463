//! Small DOM helpers shared by the hero canvas and the page behaviours.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, NodeList, Window};

/// The global window and its document, if both exist.
#[inline]
pub fn window_document() -> Option<(Window, Document)> {
	let window = web_sys::window()?;
	let document = window.document()?;
	Some((window, document))
}

/// Current `innerWidth` x `innerHeight` of the window.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// The element nodes of `list`, in document order.
pub fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Every element in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
	Ok(elements(&document.query_selector_all(selector)?))
}

fn passive() -> AddEventListenerOptions {
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	options
}

/// Register `closure` as a passive listener that lives as long as the page.
pub fn add_passive_listener<T: ?Sized + WasmClosure>(
	target: &EventTarget,
	event: &str,
	closure: Closure<T>,
) -> Result<(), JsValue> {
	target.add_event_listener_with_callback_and_add_event_listener_options(
		event,
		closure.as_ref().unchecked_ref(),
		&passive(),
	)?;
	closure.forget();
	Ok(())
}

/// A passive event listener that is removed again when dropped.
pub struct EventListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	/// Attach `handler` to `event` on `target`.
	pub fn new(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, JsValue> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback_and_add_event_listener_options(
			event,
			callback.as_ref().unchecked_ref(),
			&passive(),
		)?;
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use web_sys::HtmlElement;
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn attached_div(document: &Document) -> HtmlElement {
		let div: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
		document.body().unwrap().append_child(&div).unwrap();
		div
	}

	#[wasm_bindgen_test]
	fn dropped_listener_stops_firing() {
		let (_, document) = window_document().unwrap();
		let div = attached_div(&document);
		let clicks = Rc::new(Cell::new(0));

		let counter = clicks.clone();
		let listener = EventListener::new(&div, "click", move |_| counter.set(counter.get() + 1)).unwrap();
		div.click();
		assert_eq!(clicks.get(), 1);

		drop(listener);
		div.click();
		assert_eq!(clicks.get(), 1);
		div.remove();
	}

	#[wasm_bindgen_test]
	fn query_all_returns_document_order() {
		let (_, document) = window_document().unwrap();
		let (a, b) = (attached_div(&document), attached_div(&document));
		a.set_class_name("dom-order");
		b.set_class_name("dom-order");

		let found = query_all(&document, ".dom-order").unwrap();
		assert_eq!(found.len(), 2);
		assert!(found[0].is_same_node(Some(a.as_ref())));
		a.remove();
		b.remove();
	}
}
