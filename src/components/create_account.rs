use gloo_timers::future::TimeoutFuture;
use web_sys::{File, HtmlInputElement, Url};
use yew::prelude::*;

use crate::constants::SUBMIT_DELAY_MS;
use crate::state::{AccountData, CreateAccountForm, Field};
use crate::utils::show_alert;
use crate::validation::{validate_profile_image, FieldError};

pub struct CreateAccount {
    form: CreateAccountForm,
    created: Option<AccountData>,
    username_ref: NodeRef,
}

pub enum Msg {
    UpdateWalletAddress(String),
    UpdateUsername(String),
    UpdateDisplayName(String),
    UpdateTermsAccepted(bool),
    ImagePicked(File),
    Submit,
    SubmitDelayElapsed,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_created: Callback<AccountData>,
    pub on_back: Callback<()>,
}

impl CreateAccount {
    fn pick_image(&mut self, file: File) {
        let size = file.size() as u64;
        if let Err(error) = validate_profile_image(size, &file.type_()) {
            self.form.reject_profile_image(error);
            return;
        }

        match Url::create_object_url_with_blob(&file) {
            Ok(uri) => self.form.accept_profile_image(uri),
            Err(e) => {
                log::error!("Error processing image: {:?}", e);
                self.form.reject_profile_image(FieldError::ImageProcessing);
            }
        }
    }

    fn error_text(&self, field: Field) -> Html {
        let message = self.form.errors().message(field);
        if message.is_empty() {
            html! {}
        } else {
            html! { <div class="field-error">{message}</div> }
        }
    }
}

impl Component for CreateAccount {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: CreateAccountForm::new(),
            created: None,
            username_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateWalletAddress(text) => {
                self.form.handle_wallet_address_change(&text);
                true
            }
            Msg::UpdateUsername(text) => {
                self.form.handle_username_change(&text);
                true
            }
            Msg::UpdateDisplayName(text) => {
                self.form.handle_display_name_change(&text);
                true
            }
            Msg::UpdateTermsAccepted(accepted) => {
                self.form.handle_terms_accepted_change(accepted);
                true
            }
            Msg::ImagePicked(file) => {
                self.pick_image(file);
                true
            }
            Msg::Submit => {
                if self.form.is_submitting() {
                    return false;
                }
                if let Some(account) = self.form.create_account() {
                    self.created = Some(account);
                    let link = ctx.link().clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        // Stand-in for the account service round trip
                        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                        link.send_message(Msg::SubmitDelayElapsed);
                    });
                }
                true
            }
            Msg::SubmitDelayElapsed => {
                self.form.finish_submission();
                let (title, body) = self.form.success_alert();
                show_alert(&title, &body);
                self.form.reset_success();
                log::debug!("Account creation confirmed");

                if let Some(account) = self.created.take() {
                    ctx.props().on_created.emit(account);
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Rejected characters never reach the state, so the vdom may not
        // see a change; resync the element directly.
        if let Some(input) = self.username_ref.cast::<HtmlInputElement>() {
            if input.value() != self.form.state().username {
                input.set_value(&self.form.state().username);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = self.form.state();
        let submitting = self.form.is_submitting();

        let on_wallet = link.batch_callback(|e: InputEvent| {
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| Msg::UpdateWalletAddress(input.value()))
        });
        let on_username = link.batch_callback(|e: InputEvent| {
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| Msg::UpdateUsername(input.value()))
        });
        let on_display_name = link.batch_callback(|e: InputEvent| {
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| Msg::UpdateDisplayName(input.value()))
        });
        let on_terms = link.batch_callback(|e: Event| {
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| Msg::UpdateTermsAccepted(input.checked()))
        });
        let on_image = link.batch_callback(|e: Event| {
            e.target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(Msg::ImagePicked)
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_back = ctx.props().on_back.reform(|_: MouseEvent| ());

        html! {
            <div class="create-account">
                <button type="button" class="back-button" onclick={on_back}>{"Back"}</button>
                <h1>{"Create Account"}</h1>
                if self.form.show_success() {
                    <div class="success-banner">{"Account created successfully"}</div>
                }
                <form class="create-account-form" {onsubmit}>
                    <div class="input-group avatar-picker">
                        if let Some(uri) = &state.profile_image {
                            <img class="avatar" src={uri.clone()} alt="Profile" />
                        } else {
                            <div class="avatar placeholder">{"+"}</div>
                        }
                        <label for="profile-image">{"Profile photo (optional)"}</label>
                        <input
                            type="file"
                            id="profile-image"
                            accept="image/jpeg,image/png,image/webp"
                            onchange={on_image}
                            disabled={submitting}
                        />
                        { self.error_text(Field::ProfileImage) }
                    </div>
                    <div class="input-group">
                        <label for="wallet-address">{"Stellar Wallet Address"}</label>
                        <input
                            type="text"
                            id="wallet-address"
                            placeholder="G..."
                            value={state.wallet_address.clone()}
                            oninput={on_wallet}
                            disabled={submitting}
                        />
                        { self.error_text(Field::WalletAddress) }
                    </div>
                    <div class="input-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            ref={self.username_ref.clone()}
                            value={state.username.clone()}
                            oninput={on_username}
                            disabled={submitting}
                        />
                        { self.error_text(Field::Username) }
                    </div>
                    <div class="input-group">
                        <label for="display-name">{"Display Name"}</label>
                        <input
                            type="text"
                            id="display-name"
                            value={state.display_name.clone()}
                            oninput={on_display_name}
                            disabled={submitting}
                        />
                        { self.error_text(Field::DisplayName) }
                    </div>
                    <div class="input-group terms">
                        <input
                            type="checkbox"
                            id="terms"
                            checked={state.terms_accepted}
                            onchange={on_terms}
                            disabled={submitting}
                        />
                        <label for="terms">{"I accept the Terms and Conditions"}</label>
                    </div>
                    <button type="submit" class="primary" disabled={submitting || !self.form.is_form_valid()}>
                        if submitting {
                            {"Creating Account..."}
                        } else {
                            {"Create Account"}
                        }
                    </button>
                </form>
            </div>
        }
    }
}
