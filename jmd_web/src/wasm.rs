//! Page bootstrap: builds the services and registers exactly one listener
//! per DOM event.

use std::rc::Rc;

use jmd_core_page_contracts::PageFeatureService;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Element, Event, EventTarget};

use crate::{
    dom::{
        self, DomDelayService, DomFormView, DomHeaderView, DomNavigatorService,
        DomNotificationService, DomThemeView,
    },
    environment::{Environment, Hosts},
    field_for_input_id, handlers, FORM_ID, LOCATION_LINK_SELECTOR, THEME_TOGGLE_ID,
};

#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = run() {
        dom::log_error(&err.context("Failed to initialize the page"));
    }
}

fn run() -> anyhow::Result<()> {
    let config = jmd_config::load_default()?;

    let Environment { inquiry, page } = Environment::new(
        &config,
        Hosts {
            form: DomFormView::default(),
            notification: DomNotificationService::new(*config.notification.ttl),
            navigator: DomNavigatorService,
            delay: DomDelayService,
            theme: DomThemeView,
            header: DomHeaderView,
            map_navigator: DomNavigatorService,
        },
    )?;
    let inquiry = Rc::new(inquiry);
    let page = Rc::new(page);

    page.init_theme();

    for element in jmd_models::inquiry::InquiryField::ALL
        .into_iter()
        .filter_map(|field| dom::element_by_id(field.input_id()))
    {
        listen(&element, "input", {
            let inquiry = Rc::clone(&inquiry);
            move |event| {
                let Some((field, input)) = field_target(&event) else {
                    return;
                };
                if let Some(normalized) = handlers::input(&*inquiry, field, &dom::read_value(&input)) {
                    dom::write_value(&input, &normalized);
                }
            }
        })?;

        listen(&element, "blur", {
            let inquiry = Rc::clone(&inquiry);
            move |event| {
                if let Some((field, input)) = field_target(&event) {
                    handlers::blur(&*inquiry, field, &dom::read_value(&input));
                }
            }
        })?;
    }

    if let Some(form) = dom::element_by_id(FORM_ID) {
        listen(&form, "submit", {
            let inquiry = Rc::clone(&inquiry);
            move |event| {
                event.prevent_default();
                let inquiry = Rc::clone(&inquiry);
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(line) = handlers::submit(&*inquiry, dom::read_form()).await {
                        console::log_1(&line.into());
                    }
                });
            }
        })?;
    }

    if let Some(toggle) = dom::element_by_id(THEME_TOGGLE_ID) {
        listen(&toggle, "click", {
            let page = Rc::clone(&page);
            move |event| {
                event.prevent_default();
                handlers::toggle_theme(&*page);
            }
        })?;
    }

    let window = dom::window()?;
    listen(&window, "scroll", {
        let page = Rc::clone(&page);
        move |_| {
            if let Ok(offset) = dom::window().and_then(|w| w.scroll_y().map_err(dom::js_error)) {
                handlers::scroll(&*page, offset);
            }
        }
    })?;

    let links = dom::document()?
        .query_selector_all(LOCATION_LINK_SELECTOR)
        .map_err(dom::js_error)?;
    for link in (0..links.length()).filter_map(|i| links.item(i)) {
        listen(&link, "click", {
            let page = Rc::clone(&page);
            move |event| {
                event.prevent_default();
                event.stop_propagation();
                if let Err(err) = page.open_map() {
                    dom::log_error(&err);
                }
            }
        })?;
    }

    console::log_1(&"JMD Associates website initialized".into());

    Ok(())
}

/// The form field an event was dispatched to.
fn field_target(event: &Event) -> Option<(jmd_models::inquiry::InquiryField, Element)> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let field = field_for_input_id(&element.id())?;
    Some((field, element))
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom::js_error)?;
    closure.forget();
    Ok(())
}
