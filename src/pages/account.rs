use yew::prelude::*;

#[function_component(Account)]
pub fn account() -> Html {
    html! {
      <div class="bo-card">
        <h3 class="gold">{ "Account" }</h3>
        <p>{ "Online accounts aren't open yet." }</p>
        <p class="muted">{ "Need an update on a job in progress? Call dispatch and give the name on the request." }</p>
      </div>
    }
}
