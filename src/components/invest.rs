use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::constants::MIN_DEPOSIT;
use crate::currency::format_usd;
use crate::state::{DepositForm, InvestOverview};

pub struct InvestScreen {
    form: DepositForm,
    overview: InvestOverview,
    status: Option<String>,
    amount_ref: NodeRef,
}

pub enum Msg {
    UpdateAmount(String),
    Deposit,
}

impl Component for InvestScreen {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: DepositForm::new(),
            overview: InvestOverview::default(),
            status: None,
            amount_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateAmount(amount) => {
                self.form.handle_amount_change(&amount);
                self.status = None;
                true
            }
            Msg::Deposit => {
                self.status = match self.form.handle_deposit() {
                    Some(amount) => Some(format!("Deposit of ${} initiated", amount)),
                    None => Some(format!("Minimum {} required", format_usd(MIN_DEPOSIT))),
                };
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(input) = self.amount_ref.cast::<HtmlInputElement>() {
            let shown = self.form.display_value();
            if input.value() != shown {
                input.set_value(&shown);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| Msg::UpdateAmount(input.value()))
        });

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Deposit
        });

        let overview = &self.overview;
        let valid = self.form.is_deposit_valid();

        html! {
            <div class="invest-screen">
                <h2>{"Invest in TrustUp"}</h2>
                <div class="card investment">
                    <div class="label">{"Total Invested"}</div>
                    <div class="amount">{format_usd(overview.total_invested)}</div>
                    <div class="row">
                        <span class="label">{"Earnings"}</span>
                        <span class="positive">{overview.earnings_label()}</span>
                    </div>
                    <div class="row">
                        <span class="label">{"Estimated APY"}</span>
                        <span>{format!("{:.1}%", overview.estimated_apy)}</span>
                        <span class="label">{"Return Rate"}</span>
                        <span class="positive">{overview.return_rate_label()}</span>
                    </div>
                </div>
                <div class="card fund-overview">
                    <div class="row">
                        <span class="label">{"Pool Size"}</span>
                        <span>{overview.pool_size_label()}</span>
                    </div>
                    <div class="row">
                        <span class="label">{"Active Loans"}</span>
                        <span>{overview.active_loans}</span>
                    </div>
                    <div class="row">
                        <span class="label">{"Risk Level"}</span>
                        <span class="badge">{overview.risk_level}</span>
                    </div>
                </div>
                <form class="deposit-form" {onsubmit}>
                    <h3>{"Deposit Funds"}</h3>
                    <div class="input-group">
                        <label for="amount">{"Amount to invest"}</label>
                        <input
                            type="text"
                            id="amount"
                            inputmode="decimal"
                            placeholder="$0.00"
                            ref={self.amount_ref.clone()}
                            value={self.form.display_value()}
                            {oninput}
                        />
                        <div class="hint">{format!("Minimum deposit {}", format_usd(MIN_DEPOSIT))}</div>
                    </div>
                    <button type="submit" class="primary" disabled={!valid}>
                        {"Deposit funds"}
                    </button>
                    if let Some(status) = &self.status {
                        <div class="status-message">
                            {status}
                        </div>
                    }
                </form>
                <div class="info-box">
                    {"Funds are used to finance BNPL purchases. Returns are not guaranteed."}
                </div>
            </div>
        }
    }
}
