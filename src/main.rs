// src/main.rs — Blackout Roadside (Rust + Yew + WASM)
//
// Home, the Schedule wizard and a few content pages behind a bottom tab bar.
// No backend: vPIC for vehicle data, Netlify forms for reviews, Leaflet for the map.

use std::rc::Rc;

use yew::prelude::*;

mod booking;
mod catalog;
mod config;
mod estimate;
mod forms;
mod locate;
mod map;
mod pages;
mod shell;
mod wizard;

use config::SiteConfig;
use pages::{About, Account, Gallery, Home, Reviews, Schedule};
use shell::{Layout, Page};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let page = use_state(Page::default);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |p: Page| page.set(p))
    };

    let config = props.config.clone();
    let content = match *page {
        Page::Home => html! { <Home config={config} on_navigate={on_navigate.clone()} /> },
        Page::Schedule => html! { <Schedule config={config} /> },
        Page::Gallery => html! { <Gallery config={config} /> },
        Page::Reviews => html! { <Reviews config={config} /> },
        Page::About => html! { <About /> },
        Page::Account => html! { <Account /> },
    };

    html! {
      <Layout page={*page} on_navigate={on_navigate}>
        { content }
      </Layout>
    }
}

fn main() {
    let config = Rc::new(SiteConfig::from_browser());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
