use yew::prelude::*;

use crate::components::{invest::InvestScreen, pay::PayScreen};
use crate::utils::format_wallet_address;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Cards,
    Analytics,
}

impl Tab {
    const ALL: [Tab; 2] = [Tab::Cards, Tab::Analytics];

    fn label(self) -> &'static str {
        match self {
            Tab::Cards => "Pay",
            Tab::Analytics => "Invest",
        }
    }
}

/// Greeting for the local hour of day (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub struct MainLayout {
    active_tab: Tab,
}

pub enum Msg {
    SelectTab(Tab),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub display_name: String,
    #[prop_or_default]
    pub wallet_address: Option<String>,
    pub on_sign_out: Callback<()>,
}

impl MainLayout {
    fn header(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let hour = js_sys::Date::new_0().get_hours();
        let on_sign_out = props.on_sign_out.reform(|_: MouseEvent| ());

        html! {
            <header class="header">
                <div class="greeting">
                    {format!("{}, {}", greeting_for_hour(hour), props.display_name)}
                </div>
                if let Some(address) = &props.wallet_address {
                    <div class="wallet-address">{format_wallet_address(address)}</div>
                }
                <button class="sign-out" onclick={on_sign_out}>{"Sign out"}</button>
            </header>
        }
    }

    fn bottom_bar(&self, ctx: &Context<Self>) -> Html {
        html! {
            <nav class="bottom-bar">
                { for Tab::ALL.iter().map(|&tab| {
                    let class = if tab == self.active_tab { "tab active" } else { "tab" };
                    html! {
                        <button {class} onclick={ctx.link().callback(move |_| Msg::SelectTab(tab))}>
                            {tab.label()}
                        </button>
                    }
                }) }
            </nav>
        }
    }
}

impl Component for MainLayout {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: Tab::Cards,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTab(tab) => {
                if tab == self.active_tab {
                    return false;
                }
                log::debug!("Switching to {:?} tab", tab);
                self.active_tab = tab;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="main-layout">
                { self.header(ctx) }
                <main class="content">
                    {
                        match self.active_tab {
                            Tab::Cards => html! { <PayScreen /> },
                            Tab::Analytics => html! { <InvestScreen /> },
                        }
                    }
                </main>
                { self.bottom_bar(ctx) }
            </div>
        }
    }
}
