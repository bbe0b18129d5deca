use crate::constants::*;
use crate::core::{NewsletterMode, PageInfo, Subscription};
use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Intercept every newsletter form and submit it in the background.
pub fn wire_newsletter_forms(document: &web::Document) {
    let forms = dom::query_all(document, NEWSLETTER_FORM_SELECTOR);
    if forms.is_empty() {
        return;
    }
    log::info!("[newsletter] wiring {} form(s)", forms.len());
    for el in forms {
        let Ok(form) = el.dyn_into::<web::HtmlFormElement>() else {
            continue;
        };
        let target: web::EventTarget = form.clone().into();
        dom::add_listener(&target, "submit", move |ev: web::Event| {
            ev.prevent_default();
            on_submit(&form);
        });
    }
}

fn page_info() -> PageInfo {
    let Some(location) = web::window().map(|w| w.location()) else {
        return PageInfo::default();
    };
    PageInfo {
        path: location.pathname().unwrap_or_default(),
        href: location.href().unwrap_or_default(),
    }
}

fn on_submit(form: &web::HtmlFormElement) {
    let input = form
        .query_selector(NEWSLETTER_EMAIL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
    let button = form
        .query_selector(NEWSLETTER_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let (Some(input), Some(button)) = (input, button) else {
        return;
    };

    let mode = NewsletterMode::from_attr(form.get_attribute(NEWSLETTER_TAGGED_ATTR).as_deref());
    let Some(sub) = Subscription::from_input(&input.value(), mode, &page_info()) else {
        return;
    };

    let original_label = button.text_content().unwrap_or_default();
    button.set_text_content(Some(SUBSCRIBING_LABEL));
    button.set_disabled(true);

    let form = form.clone();
    spawn_local(async move {
        match post_subscription(&form.action(), &sub).await {
            Ok(()) => {
                log::info!("[newsletter] subscribed tag={:?}", sub.tag);
                input.set_value("");
                show_confirmation(&button, original_label);
            }
            Err(e) => {
                log::warn!("[newsletter] background submit failed, falling back: {:?}", e);
                if let Err(e) = form.submit() {
                    log::error!("[newsletter] native submit error: {:?}", e);
                }
            }
        }
    });
}

async fn post_subscription(action: &str, sub: &Subscription) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let params = web::UrlSearchParams::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for (key, value) in sub.fields() {
        params.append(key, value);
    }
    let body: js_sys::JsString = params.to_string();

    let headers = web::Headers::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    headers
        .set("Content-Type", FORM_CONTENT_TYPE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&body);

    let resp = JsFuture::from(window.fetch_with_str_and_init(action, &init))
        .await
        .map_err(|e| anyhow::anyhow!("fetch rejected: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("subscribe failed with status {}", resp.status());
    }
    Ok(())
}

fn show_confirmation(button: &web::HtmlButtonElement, original_label: String) {
    button.set_text_content(Some(SUBSCRIBED_LABEL));
    let style = button.style();
    _ = style.set_property("background", SUBSCRIBED_BACKGROUND);
    _ = style.set_property("color", SUBSCRIBED_COLOR);

    let btn = button.clone();
    let revert: Closure<dyn FnMut()> = Closure::once(move || {
        btn.set_text_content(Some(&original_label));
        let style = btn.style();
        _ = style.remove_property("background");
        _ = style.remove_property("color");
        btn.set_disabled(false);
    });
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            revert.as_ref().unchecked_ref(),
            CONFIRMATION_REVERT_MS,
        );
    }
    revert.forget();
}
