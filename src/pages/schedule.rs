// Schedule — six-step service request with live map and cascading vehicle dropdowns

use std::rc::Rc;

use gloo::console::{error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::{ServiceType, TimingMode, VehicleType};
use crate::catalog::VpicCatalog;
use crate::config::SiteConfig;
use crate::estimate::Estimate;
use crate::locate::{self, MANUAL_ENTRY_HINT};
use crate::map::{LeafletMap, MapSync};
use crate::wizard::{Step, Wizard, WizardAction};

#[derive(Properties, PartialEq)]
pub struct ScheduleProps {
    pub config: Rc<SiteConfig>,
}

fn today_ymd() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .map(|s| s.chars().take(10).collect())
        .unwrap_or_default()
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(Schedule)]
pub fn schedule(props: &ScheduleProps) -> Html {
    let cfg = props.config.clone();
    let wizard = use_reducer(Wizard::new);
    let map = use_mut_ref(|| MapSync::new(LeafletMap, cfg.map.located_zoom));

    // ---------- effects ----------

    // Leaflet map, once per mount
    {
        let map = map.clone();
        let defaults = cfg.map.clone();
        use_effect_with((), move |_| {
            map.borrow_mut()
                .mount(defaults.container_id, defaults.center, defaults.zoom);
            || ()
        });
    }

    // Move map + pin when coordinates change
    {
        let map = map.clone();
        use_effect_with(wizard.request.location.coordinates, move |coords| {
            map.borrow_mut().sync(*coords);
            || ()
        });
    }

    // Makes for the current vehicle type
    {
        let pending = wizard.makes.pending();
        let wizard = wizard.clone();
        let catalog = VpicCatalog::new(cfg.catalog_base.clone());
        use_effect_with(pending, move |pending| {
            if let Some(ticket) = pending.clone() {
                if let Some(kind) = VehicleType::from_key(&ticket.key) {
                    spawn_local(async move {
                        let makes = catalog.makes_for(kind).await.unwrap_or_else(|e| {
                            error!(format!("Failed to load makes: {e}"));
                            Vec::new()
                        });
                        wizard.dispatch(WizardAction::MakesLoaded(ticket, makes));
                    });
                }
            }
            || ()
        });
    }

    // Models for the current make
    {
        let pending = wizard.models.pending();
        let wizard = wizard.clone();
        let catalog = VpicCatalog::new(cfg.catalog_base.clone());
        use_effect_with(pending, move |pending| {
            if let Some(ticket) = pending.clone() {
                spawn_local(async move {
                    let models = catalog.models_for(&ticket.key).await.unwrap_or_else(|e| {
                        error!(format!("Failed to load models: {e}"));
                        Vec::new()
                    });
                    wizard.dispatch(WizardAction::ModelsLoaded(ticket, models));
                });
            }
            || ()
        });
    }

    // Device location
    {
        let pending = wizard.pending_locate();
        let wizard = wizard.clone();
        let timeout_ms = cfg.geolocation_timeout_ms;
        use_effect_with(pending, move |pending| {
            if let Some(ticket) = *pending {
                spawn_local(async move {
                    let outcome = locate::current_position(timeout_ms).await;
                    if let Err(e) = &outcome {
                        warn!(format!("Geolocation failed: {e}"));
                    }
                    wizard.dispatch(WizardAction::Located(ticket, outcome));
                });
            }
            || ()
        });
    }

    // ---------- handlers ----------

    let send = |action: fn() -> WizardAction| {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(action()))
    };

    let go_to = |step: Step| {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::GoTo(step)))
    };

    let on_service = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            if let Some(s) = ServiceType::from_label(&select_value(&e)) {
                wizard.dispatch(WizardAction::SelectService(s));
            }
        })
    };

    let on_vehicle_type = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            if let Some(t) = VehicleType::from_key(&select_value(&e)) {
                wizard.dispatch(WizardAction::SelectVehicleType(t));
            }
        })
    };

    let on_make = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| wizard.dispatch(WizardAction::SelectMake(select_value(&e))))
    };

    let on_model = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| wizard.dispatch(WizardAction::SelectModel(select_value(&e))))
    };

    let on_year = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| wizard.dispatch(WizardAction::SelectYear(select_value(&e))))
    };

    let on_address = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| wizard.dispatch(WizardAction::SetAddress(input_value(&e))))
    };

    let on_when = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            if let Some(m) = TimingMode::from_key(&select_value(&e)) {
                wizard.dispatch(WizardAction::SetTimingMode(m));
            }
        })
    };

    let on_date = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| wizard.dispatch(WizardAction::SetDate(input_value(&e))))
    };

    let on_time = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| wizard.dispatch(WizardAction::SetTime(input_value(&e))))
    };

    // ---------- render ----------

    let req = &wizard.request;
    let step = wizard.step();
    let can_advance = wizard.can_advance();

    let continue_btn = html! {
      <button class="bo-btn" onclick={send(|| WizardAction::Advance)} disabled={!can_advance}>
        { "Continue" }
      </button>
    };
    let back_btn = html! {
      <button class="bo-btn outline" onclick={send(|| WizardAction::Back)}>{ "Back" }</button>
    };

    let body = match step {
        Step::Service => html! {
          <>
            <div class="field">
              <label class="label">{ "Service type" }</label>
              <select class="input" onchange={on_service}>
                { for cfg.services.iter().map(|s| html! {
                    <option value={s.label()} selected={*s == req.service}>{ s.label() }</option>
                }) }
              </select>
            </div>
            <div class="row">{ continue_btn }</div>
          </>
        },

        Step::Vehicle => {
            let v = &req.vehicle;
            let make_placeholder = if wizard.makes.is_loading() {
                "Loading makes…"
            } else if wizard.makes.items().is_empty() {
                "No makes found"
            } else {
                "Select make"
            };
            let model_placeholder = if v.make.is_empty() {
                "Choose make first"
            } else if wizard.models.is_loading() {
                "Loading models…"
            } else if wizard.models.items().is_empty() {
                "No models found"
            } else {
                "Select model"
            };
            html! {
              <>
                <div class="field">
                  <label class="label">{ "Vehicle type" }</label>
                  <select class="input" onchange={on_vehicle_type}>
                    { for cfg.vehicle_types.iter().map(|t| html! {
                        <option value={t.key()} selected={*t == v.kind}>{ t.label() }</option>
                    }) }
                  </select>
                </div>

                <div class="field">
                  <label class="label">{ "Make" }</label>
                  <select class="input" onchange={on_make}>
                    <option value="" selected={v.make.is_empty()}>{ make_placeholder }</option>
                    { for wizard.makes.items().iter().map(|m| html! {
                        <option value={m.clone()} selected={*m == v.make}>{ m.clone() }</option>
                    }) }
                  </select>
                </div>

                <div class="field">
                  <label class="label">{ "Model" }</label>
                  <select class="input" onchange={on_model} disabled={v.make.is_empty()}>
                    <option value="" selected={v.model.is_empty()}>{ model_placeholder }</option>
                    { for wizard.models.items().iter().map(|m| html! {
                        <option value={m.clone()} selected={*m == v.model}>{ m.clone() }</option>
                    }) }
                  </select>
                </div>

                <div class="field">
                  <label class="label">{ "Year" }</label>
                  <select class="input" onchange={on_year}>
                    <option value="" selected={v.year.is_empty()}>{ "Select year" }</option>
                    { for cfg.years.iter().map(|y| html! {
                        <option value={y.clone()} selected={*y == v.year}>{ y.clone() }</option>
                    }) }
                  </select>
                </div>

                <div class="row">{ back_btn }{ continue_btn }</div>
              </>
            }
        }

        Step::Location => {
            let locating = wizard.is_locating();
            html! {
              <>
                <div class="field">
                  <label class="label">{ "Address / intersection" }</label>
                  <input class="input" value={req.location.address.clone()} oninput={on_address}
                    placeholder="123 Main St, City" />
                </div>

                <div class="row">
                  <button class="bo-btn outline" onclick={send(|| WizardAction::BeginLocate)}>
                    { if locating { "Getting GPS…" } else { "Use my location" } }
                  </button>
                  if let Some(link) = req.location.maps_link() {
                    <a class="bo-btn outline" href={link} target="_blank" rel="noreferrer">{ "Open in Maps" }</a>
                  }
                </div>

                if let Some(e) = wizard.locate_error.clone() {
                  <div class="bo-notice" role="alert">
                    <div>{ MANUAL_ENTRY_HINT }</div>
                    <div class="muted small">{ e.to_string() }</div>
                    <button class="bo-btn outline small" onclick={send(|| WizardAction::DismissLocateError)}>{ "OK" }</button>
                  </div>
                }

                <div class="row">{ back_btn }{ continue_btn }</div>
              </>
            }
        }

        Step::Timing => {
            let t = &req.timing;
            html! {
              <>
                <div class="field">
                  <label class="label">{ "Time of service" }</label>
                  <select class="input" onchange={on_when}>
                    { for [TimingMode::Asap, TimingMode::Scheduled].iter().map(|m| html! {
                        <option value={m.key()} selected={*m == t.mode}>{ m.label() }</option>
                    }) }
                  </select>
                </div>

                if t.mode == TimingMode::Scheduled {
                  <div class="bo-grid two">
                    <div class="field">
                      <label class="label">{ "Date" }</label>
                      <input class="input" type="date" value={t.date.clone()} min={today_ymd()} oninput={on_date} />
                    </div>
                    <div class="field">
                      <label class="label">{ "Time" }</label>
                      <input class="input" type="time" value={t.time.clone()} oninput={on_time} />
                    </div>
                  </div>
                }

                <div class="row">{ back_btn }{ continue_btn }</div>
              </>
            }
        }

        Step::Estimate => {
            let est = Estimate::for_request(req, &cfg.pricing);
            html! {
              <>
                <div class="bo-grid">
                  <div class="bo-card"><b>{ "Service: " }</b>{ est.service }</div>
                  <div class="bo-card"><b>{ "Vehicle: " }</b>{ est.vehicle.clone() }</div>
                  <div class="bo-card"><b>{ "When: " }</b>{ est.when.clone() }</div>
                  <div class="bo-card"><b>{ "Base fee: " }</b>{ est.base_fee.dollars() }</div>
                  <div class="bo-card"><b>{ "Miles included: " }</b>{ est.included_miles.to_string() }</div>
                  <div class="bo-card"><b>{ "Per-mile after: " }</b>{ est.per_mile.dollars() }</div>
                  <div class="bo-card"><b>{ "GPS: " }</b>{ est.gps.clone() }</div>
                  <div class="bo-card total"><b>{ "Estimated total: " }</b>{ est.total.dollars() }</div>
                </div>
                <div class="row">{ back_btn }{ continue_btn }</div>
              </>
            }
        }

        Step::Confirm => match wizard.confirmation.clone() {
            Some(done) => html! {
              <div class="bo-card confirmed" role="status">
                <b class="gold">{ "Confirmed!" }</b>
                <p>{ done.headline() }</p>
                <p class="muted">{ "A driver will reach out shortly to confirm the pickup." }</p>
              </div>
            },
            None => html! {
              <>
                <p class="muted">{ "Collect contact + payment next. For now this confirms the request." }</p>
                if let Some(e) = wizard.confirm_error.clone() {
                  <div class="bo-notice" role="alert">{ e.to_string() }</div>
                }
                <div class="row">
                  <button class="bo-btn" onclick={send(|| WizardAction::Confirm)}>{ "Confirm" }</button>
                  <button class="bo-btn outline" onclick={go_to(Step::Estimate)}>{ "Back" }</button>
                </div>
              </>
            },
        },
    };

    html! {
      <div class="bo-card flush">
        <div id={cfg.map.container_id} class="map-wrap"></div>

        <div class="wizard">
          <div class="muted">{ format!("Step {} of {}", step.number(), Step::COUNT) }</div>
          <section class="step">
            <h3 class="gold">{ step.title() }</h3>
            { body }
          </section>
        </div>
      </div>
    }
}
