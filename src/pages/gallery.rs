use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub config: Rc<SiteConfig>,
}

/// Images that failed to load. Several can fail in the same frame, hence a reducer.
#[derive(Default, PartialEq)]
struct Broken(HashSet<String>);

impl Reducible for Broken {
    type Action = String;

    fn reduce(self: Rc<Self>, src: String) -> Rc<Self> {
        if self.0.contains(&src) {
            return self;
        }
        let mut next = self.0.clone();
        next.insert(src);
        Rc::new(Broken(next))
    }
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let broken = use_reducer(Broken::default);

    let tiles = props
        .config
        .gallery_images()
        .into_iter()
        .filter(|src| !broken.0.contains(src))
        .map(|src| {
            let on_error = {
                let broken = broken.dispatcher();
                let src = src.clone();
                Callback::from(move |_: Event| broken.dispatch(src.clone()))
            };
            html! {
              <div key={src.clone()} class="bo-card tile">
                <img src={src} alt="" onerror={on_error} />
              </div>
            }
        })
        .collect::<Html>();

    html! {
      <div>
        <h3 class="gold">{ "Gallery" }</h3>
        <div class="bo-grid">{ tiles }</div>
        if broken.0.len() == props.config.gallery_size {
          <p class="muted">{ "Photos coming soon." }</p>
        }
      </div>
    }
}
