// src/shell.rs — page switcher + bottom tab bar with the "More" sheet

use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Schedule,
    Gallery,
    Reviews,
    About,
    Account,
}

impl Page {
    /// Pages reachable from the More sheet, in display order.
    pub const MORE: [Page; 4] = [Page::Gallery, Page::Reviews, Page::About, Page::Account];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Schedule => "Schedule",
            Page::Gallery => "Gallery",
            Page::Reviews => "Reviews",
            Page::About => "About",
            Page::Account => "Account",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
    #[prop_or_default]
    pub children: Html,
}

fn icon_home(active: bool) -> Html {
    let stroke = if active { "#D4AF37" } else { "#b5b7bd" };
    html! {
      <svg width="22" height="22" viewBox="0 0 24 24" fill="none" aria-hidden="true">
        <path d="M4 10.5L12 4l8 6.5V20a1 1 0 0 1-1 1h-4v-6H9v6H5a1 1 0 0 1-1-1v-9.5z"
          stroke={stroke} stroke-width="1.5" fill="none" />
      </svg>
    }
}

fn icon_truck() -> Html {
    html! {
      <svg width="26" height="26" viewBox="0 0 24 24" fill="none" aria-hidden="true">
        <path d="M2 13h10V9H9l-2 2H2v2zM14 9h3l3 3v5h-2a2 2 0 1 1-4 0h-2a2 2 0 1 1-4 0H6"
          stroke="#000" stroke-width="1.6" />
        <circle cx="9" cy="17" r="1.8" fill="#000" />
        <circle cx="18" cy="17" r="1.8" fill="#000" />
      </svg>
    }
}

fn icon_more(active: bool) -> Html {
    let c = if active { "#D4AF37" } else { "#b5b7bd" };
    html! {
      <svg width="22" height="22" viewBox="0 0 24 24" fill="none" aria-hidden="true">
        <circle cx="5" cy="12" r="2" fill={c} />
        <circle cx="12" cy="12" r="2" fill={c} />
        <circle cx="19" cy="12" r="2" fill={c} />
      </svg>
    }
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sheet_open = use_state(|| false);

    let go = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let sheet_open = sheet_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            sheet_open.set(false);
            on_navigate.emit(page);
        })
    };

    let open_sheet = {
        let sheet_open = sheet_open.clone();
        Callback::from(move |_: MouseEvent| sheet_open.set(true))
    };

    let close_sheet = {
        let sheet_open = sheet_open.clone();
        Callback::from(move |_: MouseEvent| sheet_open.set(false))
    };

    // taps inside the sheet must not reach the overlay
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_home = props.page == Page::Home;

    html! {
      <div class="bo-root">
        <main class="bo-main">
          { props.children.clone() }
        </main>

        <div class="bo-tabbar" role="navigation" aria-label="Primary">
          <button class={classes!("tab-btn", on_home.then_some("active"))} onclick={go(Page::Home)}>
            { icon_home(on_home) }
            <span>{ "Home" }</span>
          </button>

          <button class="tab-center" onclick={go(Page::Schedule)} aria-label="Schedule">
            { icon_truck() }
          </button>

          <button class={classes!("tab-btn", (*sheet_open).then_some("active"))} onclick={open_sheet}>
            { icon_more(*sheet_open) }
            <span>{ "More" }</span>
          </button>
        </div>

        if *sheet_open {
          <div class="sheet-overlay" onclick={close_sheet}>
            <div class="sheet" onclick={keep_open}>
              <div class="sheet-title">{ "More" }</div>
              <div class="sheet-links">
                { for Page::MORE.iter().map(|p| html! {
                    <a class={classes!("sheet-link", (props.page == *p).then_some("active"))}
                       href="#" onclick={go(*p)}>
                      { p.label() }
                    </a>
                }) }
              </div>
            </div>
          </div>
        }
      </div>
    }
}
