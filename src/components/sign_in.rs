use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::SignInForm;

pub struct SignIn {
    form: SignInForm,
}

pub enum Msg {
    UpdateUsername(String),
    UpdatePassword(String),
    ToggleSecureText,
    Submit,
    ConnectWallet,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_sign_in: Callback<String>,
    pub on_sign_up: Callback<()>,
}

impl Component for SignIn {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: SignInForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateUsername(username) => {
                self.form.set_username(&username);
                true
            }
            Msg::UpdatePassword(password) => {
                self.form.set_password(&password);
                true
            }
            Msg::ToggleSecureText => {
                self.form.toggle_secure_text();
                true
            }
            Msg::Submit => {
                if self.form.sign_in() {
                    ctx.props().on_sign_in.emit(self.form.username().trim().to_string());
                }
                false
            }
            Msg::ConnectWallet => {
                log::info!("Wallet connection is not available yet");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_username = link.batch_callback(|e: InputEvent| {
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| Msg::UpdateUsername(input.value()))
        });
        let on_password = link.batch_callback(|e: InputEvent| {
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| Msg::UpdatePassword(input.value()))
        });
        let on_toggle = link.callback(|_| Msg::ToggleSecureText);
        let on_connect = link.callback(|_| Msg::ConnectWallet);
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_sign_up = ctx.props().on_sign_up.reform(|_: MouseEvent| ());

        let password_type = if self.form.secure_text() { "password" } else { "text" };

        html! {
            <div class="sign-in">
                <h1 class="title">{"Trust Up"}</h1>
                <p class="tagline">{"Build your reputation, unlock your credit"}</p>
                <form class="sign-in-form" {onsubmit}>
                    <div class="input-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            value={self.form.username().to_string()}
                            oninput={on_username}
                        />
                    </div>
                    <div class="input-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type={password_type}
                            id="password"
                            autocomplete="current-password"
                            value={self.form.password().to_string()}
                            oninput={on_password}
                        />
                        <button type="button" class="toggle-secure" onclick={on_toggle}>
                            if self.form.secure_text() {
                                {"Show"}
                            } else {
                                {"Hide"}
                            }
                        </button>
                    </div>
                    <a class="forgot-password">{"Forgot password?"}</a>
                    <button type="submit" class="primary" disabled={!self.form.is_valid()}>
                        {"Sign In"}
                    </button>
                </form>
                <div class="divider">{"OR"}</div>
                <button class="wallet-button" onclick={on_connect}>{"Connect Wallet"}</button>
                <p class="footer">
                    {"Don't have an account? "}
                    <a class="sign-up" onclick={on_sign_up}>{"Sign Up"}</a>
                </p>
            </div>
        }
    }
}
