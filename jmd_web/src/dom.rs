//! Host capabilities backed by the DOM.
//!
//! Elements are looked up by id on every call, so none of these types hold
//! on to a JS object.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::anyhow;
use jmd_host_contracts::{
    delay::DelayService,
    form::FormView,
    navigator::{NavigatorService, OpenOutcome},
    notification::NotificationService,
    page::{HeaderView, ThemeView},
};
use jmd_models::{
    inquiry::{InquiryField, InquiryForm},
    notification::Notification,
    page::{HeaderVisibility, Theme},
};
use jmd_utils::MutexExt;
use url::Url;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Document, Element, HtmlElement, HtmlFormElement, Window};

use crate::{BUSY_LABEL_HTML, FORM_ID, THEME_TOGGLE_ID};

pub fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("No window"))
}

pub fn document() -> anyhow::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("No document"))
}

pub fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}

pub fn log_error(err: &anyhow::Error) {
    console::error_1(&format!("{err:#}").into());
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Read the `value` property of an input or textarea.
pub fn read_value(element: &Element) -> String {
    js_sys::Reflect::get(element, &"value".into())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

pub fn write_value(element: &Element, value: &str) {
    let _ = js_sys::Reflect::set(element, &"value".into(), &value.into());
}

/// Collect the current values of the contact form.
pub fn read_form() -> InquiryForm {
    let value = |field: InquiryField| {
        element_by_id(field.input_id())
            .map(|element| read_value(&element))
            .unwrap_or_default()
    };

    InquiryForm {
        name: value(InquiryField::Name),
        email: value(InquiryField::Email),
        contact: value(InquiryField::Contact),
        query: value(InquiryField::Query),
    }
}

fn millis(duration: Duration) -> i32 {
    duration.as_millis().try_into().unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, Default)]
pub struct DomFormView {
    submit_label: Arc<Mutex<Option<String>>>,
}

impl DomFormView {
    fn submit_button() -> Option<Element> {
        document()
            .ok()?
            .query_selector(&format!("#{FORM_ID} button[type=\"submit\"]"))
            .ok()?
    }
}

impl FormView for DomFormView {
    fn show_field_error(&self, field: InquiryField, message: &str) {
        if let Some(slot) = element_by_id(field.error_slot_id()) {
            slot.set_text_content(Some(message));
            if let Some(parent) = slot.parent_element() {
                let _ = parent.class_list().add_1("has-error");
            }
        }
        if let Some(input) = element_by_id(field.input_id()) {
            let _ = input.class_list().add_1("error");
        }
    }

    fn clear_field_error(&self, field: InquiryField) {
        if let Some(slot) = element_by_id(field.error_slot_id()) {
            slot.set_text_content(Some(""));
            if let Some(parent) = slot.parent_element() {
                let _ = parent.class_list().remove_1("has-error");
            }
        }
        if let Some(input) = element_by_id(field.input_id()) {
            let _ = input.class_list().remove_1("error");
        }
    }

    fn focus_field(&self, field: InquiryField) {
        if let Some(input) = element_by_id(field.input_id())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            let _ = input.focus();
        }
    }

    fn set_submit_busy(&self, busy: bool) {
        let Some(button) = Self::submit_button() else {
            return;
        };

        let mut label = self.submit_label.lock_unpoisoned();
        if busy {
            label.get_or_insert_with(|| button.inner_html());
            button.set_inner_html(BUSY_LABEL_HTML);
            let _ = button.set_attribute("disabled", "");
            let _ = button.class_list().add_1("loading");
        } else {
            if let Some(original) = label.take() {
                button.set_inner_html(&original);
            }
            let _ = button.remove_attribute("disabled");
            let _ = button.class_list().remove_1("loading");
        }
    }

    fn reset(&self) {
        if let Some(form) =
            element_by_id(FORM_ID).and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DomNotificationService {
    ttl: Duration,
}

impl DomNotificationService {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    fn try_show(&self, notification: &Notification) -> anyhow::Result<()> {
        let document = document()?;
        if let Some(existing) = document.query_selector(".notification").map_err(js_error)? {
            existing.remove();
        }

        let element = document.create_element("div").map_err(js_error)?;
        element.set_class_name(&format!("notification {}", notification.kind.as_str()));
        element.set_text_content(Some(&notification.text));
        document
            .body()
            .ok_or_else(|| anyhow!("No body"))?
            .append_child(&element)
            .map_err(js_error)?;

        let remove = Closure::once_into_js(move || element.remove());
        window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                millis(self.ttl),
            )
            .map_err(js_error)?;

        Ok(())
    }
}

impl NotificationService for DomNotificationService {
    fn show(&self, notification: Notification) {
        if let Err(err) = self.try_show(&notification) {
            log_error(&err.context("Failed to show notification"));
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomNavigatorService;

impl NavigatorService for DomNavigatorService {
    fn open(&self, url: &Url) -> anyhow::Result<OpenOutcome> {
        // `noopener` in the features makes `open` return null even on success,
        // so the opener is detached afterwards instead.
        match window()?
            .open_with_url_and_target(url.as_str(), "_blank")
            .map_err(js_error)?
        {
            Some(opened) => {
                let _ = js_sys::Reflect::set(&opened, &"opener".into(), &JsValue::NULL);
                Ok(OpenOutcome::Opened)
            }
            None => Ok(OpenOutcome::Blocked),
        }
    }

    fn navigate(&self, url: &Url) -> anyhow::Result<()> {
        window()?
            .location()
            .set_href(url.as_str())
            .map_err(js_error)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomDelayService;

impl DelayService for DomDelayService {
    async fn delay(&self, duration: Duration) {
        let timeout = millis(duration);
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let scheduled = web_sys::window().is_some_and(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
                    .is_ok()
            });
            if !scheduled {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomThemeView;

impl ThemeView for DomThemeView {
    fn prefers_dark(&self) -> bool {
        window()
            .ok()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .is_some_and(|query| query.matches())
    }

    fn apply(&self, theme: Theme) {
        let Ok(document) = document() else {
            return;
        };
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-color-scheme", theme.as_str());
        }
        if let Some(icon) = document
            .query_selector(&format!("#{THEME_TOGGLE_ID} i"))
            .ok()
            .flatten()
        {
            icon.set_class_name(theme.toggle_icon_class());
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomHeaderView;

impl HeaderView for DomHeaderView {
    fn set_visibility(&self, visibility: HeaderVisibility) {
        if let Some(header) = document()
            .ok()
            .and_then(|document| document.query_selector(".header").ok().flatten())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            let _ = header
                .style()
                .set_property("transform", visibility.transform());
        }
    }
}
