use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::shell::Page;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
    pub on_navigate: Callback<Page>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let p = &props.config.pricing;

    let to = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    html! {
      <div>
        <section class="bo-card hero">
          <h2 class="gold">{ "Roadside help, done right." }</h2>
          <p class="muted">{ "Fast ETAs • Live link • Upfront pricing." }</p>
          <div class="row">
            <button class="bo-btn" onclick={to(Page::Schedule)}>{ "Request Service" }</button>
            <button class="bo-btn outline" onclick={to(Page::Reviews)}>{ "See Reviews" }</button>
          </div>
        </section>

        <div class="bo-hr" />

        <div class="bo-grid">
          <div class="bo-card">
            <b class="gold">{ "Services" }</b>
            <ul class="list">
              <li>{ "Towing (light & medium)" }</li>
              <li>{ "Jump start • Lockout • Tire change • Fuel delivery" }</li>
              <li>{ "Winch-outs • Private impound" }</li>
            </ul>
          </div>
          <div class="bo-card">
            <b class="gold">{ "Pricing (sample)" }</b>
            <ul class="list">
              <li>{ format!("Base fee: {} (includes {} miles)", p.base_fee.dollars_short(), p.included_miles) }</li>
              <li>{ format!("After {} miles: {} per mile", p.included_miles, p.per_mile.dollars_short()) }</li>
              <li>{ format!("After-hours: +{}", p.after_hours_fee.dollars_short()) }</li>
            </ul>
            <p class="muted">{ "Final price depends on distance and service type." }</p>
          </div>
          <div class="bo-card">
            <b class="gold">{ "Service Area" }</b>
            <p>{ "Local & regional coverage. Call for long-distance tows." }</p>
            <p class="muted">{ "24/7 availability." }</p>
          </div>
        </div>
      </div>
    }
}
