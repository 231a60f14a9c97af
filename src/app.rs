use yew::prelude::*;
use crate::components::{
    create_account::CreateAccount, layout::MainLayout, sign_in::SignIn,
};
use crate::state::AccountData;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    SignIn,
    CreateAccount,
    Main,
}

pub struct App {
    screen: Screen,
    display_name: String,
    account: Option<AccountData>,
}

pub enum Msg {
    Navigate(Screen),
    SignedIn(String),
    AccountCreated(AccountData),
    SignOut,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::SignIn,
            display_name: String::new(),
            account: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(screen) => {
                log::debug!("Navigating to {:?}", screen);
                self.screen = screen;
                true
            }
            Msg::SignedIn(username) => {
                self.display_name = username;
                self.account = None;
                self.screen = Screen::Main;
                true
            }
            Msg::AccountCreated(account) => {
                self.display_name = account.display_name.clone();
                self.account = Some(account);
                self.screen = Screen::Main;
                true
            }
            Msg::SignOut => {
                self.display_name.clear();
                self.account = None;
                self.screen = Screen::SignIn;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container">
                {
                    match self.screen {
                        Screen::SignIn => html! {
                            <SignIn
                                on_sign_in={link.callback(Msg::SignedIn)}
                                on_sign_up={link.callback(|_| Msg::Navigate(Screen::CreateAccount))}
                            />
                        },
                        Screen::CreateAccount => html! {
                            <CreateAccount
                                on_created={link.callback(Msg::AccountCreated)}
                                on_back={link.callback(|_| Msg::Navigate(Screen::SignIn))}
                            />
                        },
                        Screen::Main => html! {
                            <MainLayout
                                display_name={self.display_name.clone()}
                                wallet_address={self.account.as_ref().map(|a| a.wallet_address.clone())}
                                on_sign_out={link.callback(|_| Msg::SignOut)}
                            />
                        },
                    }
                }
            </div>
        }
    }
}
