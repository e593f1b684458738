use crate::behavior::a11y::MarkerChange;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Typed lookup over the page markup. Absent elements come back as `None`
/// or an empty list; lookups never fail loudly.
#[derive(Clone)]
pub struct ElementRegistry {
    document: web::Document,
}

impl ElementRegistry {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    #[inline]
    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn element_by_id(&self, id: &str) -> Option<web::Element> {
        self.document.get_element_by_id(id)
    }

    pub fn by_id(&self, id: &str) -> Option<web::HtmlElement> {
        self.element_by_id(id)?.dyn_into().ok()
    }

    pub fn first(&self, selector: &str) -> Option<web::HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into()
            .ok()
    }

    pub fn all(&self, selector: &str) -> Vec<web::HtmlElement> {
        self.all_elements(selector)
            .into_iter()
            .filter_map(|el| el.dyn_into().ok())
            .collect()
    }

    pub fn all_elements(&self, selector: &str) -> Vec<web::Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.get(i))
                .filter_map(|node| node.dyn_into().ok())
                .collect(),
            Err(e) => {
                log::warn!("[dom] bad selector {}: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    #[inline]
    pub fn body(&self) -> Option<web::HtmlElement> {
        self.document.body()
    }

    #[inline]
    pub fn head(&self) -> Option<web::HtmlHeadElement> {
        self.document.head()
    }

    pub fn create(&self, tag: &str) -> anyhow::Result<web::HtmlElement> {
        self.document
            .create_element(tag)
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("<{}> is not an HTML element", tag))
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_styles(el: &web::HtmlElement, properties: &[(&str, String)]) {
    for (property, value) in properties {
        set_style(el, property, value);
    }
}

#[inline]
pub fn apply_marker(el: &web::Element, class: &str, change: MarkerChange) {
    let cl = el.class_list();
    _ = match change {
        MarkerChange::Add => cl.add_1(class),
        MarkerChange::Remove => cl.remove_1(class),
    };
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// An event listener that stays attached for as long as the guard lives.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// An `IntersectionObserver` together with the Rust callback it invokes.
/// Dropping it disconnects the observer.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: Closure<ObserverCallback>,
}

impl Observer {
    pub fn new(
        threshold: f64,
        root_margin: &str,
        callback: impl FnMut(js_sys::Array, web::IntersectionObserver) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<ObserverCallback>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &web::Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
