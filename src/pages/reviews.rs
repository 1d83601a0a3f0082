use std::rc::Rc;

use gloo::console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::forms::{self, ReviewForm};

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let form = use_state(ReviewForm::default);
    let sent = use_state(|| false);
    let err = use_state(|| None::<String>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.name = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(next);
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.service = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let sent = sent.clone();
        let err = err.clone();
        let form_name = props.config.review_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let f = (*form).clone();
            if let Err(bad) = f.validate() {
                err.set(Some(bad.to_string()));
                return;
            }
            err.set(None);
            sent.set(true);

            let form_name = form_name.clone();
            spawn_local(async move {
                if let Err(e) = forms::submit(&form_name, &f).await {
                    error!(format!("Review submission failed: {e}"));
                }
            });
        })
    };

    if *sent {
        return html! {
          <div class="bo-card">
            <h3 class="gold">{ "Thanks!" }</h3>
            <p>{ "Your review has been submitted." }</p>
          </div>
        };
    }

    let form_name = props.config.review_form.clone();

    html! {
      <div class="bo-card">
        <h3 class="gold">{ "Reviews" }</h3>
        <p>{ "Leave a review — it goes straight to our dashboard." }</p>
        <form name={form_name.clone()} method="POST" data-netlify="true" onsubmit={on_submit}>
          <input type="hidden" name="form-name" value={form_name} />
          <input class="input" name="name" placeholder="Your name" required={true}
            value={form.name.clone()} oninput={on_name} />
          <input class="input" name="service" placeholder="Service (Tow, Jump, etc.)"
            value={form.service.clone()} oninput={on_service} />
          <textarea class="input textarea" name="message" placeholder="Your review" required={true}
            value={form.message.clone()} oninput={on_message} />
          if let Some(msg) = (*err).clone() {
            <div class="bo-notice">{ msg }</div>
          }
          <button class="bo-btn" type="submit">{ "Submit Review" }</button>
        </form>
      </div>
    }
}
