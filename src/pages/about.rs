use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
      <div class="bo-card">
        <h3 class="gold">{ "About" }</h3>
        <p>{ "Blackout Roadside is a local, owner-operated towing and roadside crew. \
              We run light and medium duty trucks around the clock." }</p>
        <p class="muted">{ "Licensed & insured • Flatbed and wheel-lift • Cash, card and app payments on scene." }</p>
      </div>
    }
}
