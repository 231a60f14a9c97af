use yew::prelude::*;

use crate::currency::format_usd;
use crate::state::PayDashboard;

pub struct PayScreen {
    dashboard: PayDashboard,
}

pub enum Msg {
    PayNow,
    ViewReputation,
    ExploreMerchants,
    LoanHistory,
}

impl Component for PayScreen {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            dashboard: PayDashboard::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PayNow => match &self.dashboard.active_loan {
                Some(loan) => log::info!("Pay now requested for {}", format_usd(loan.amount_due)),
                None => log::debug!("Pay now requested without an active loan"),
            },
            Msg::ViewReputation => log::debug!("View reputation selected"),
            Msg::ExploreMerchants => log::debug!("Explore merchants selected"),
            Msg::LoanHistory => log::debug!("Loan history selected"),
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let pay = &self.dashboard;

        html! {
            <div class="pay-screen">
                <div class="card reputation">
                    <div class="row">
                        <span class="label">{"Reputation Score"}</span>
                        if pay.verified {
                            <span class="badge">{"Verified"}</span>
                        }
                    </div>
                    <div class="score">
                        <span class="value">{pay.reputation_score}</span>
                        <span class="max">{format!("/{}", pay.max_score)}</span>
                    </div>
                    <div class="progress">
                        <div class="progress-fill" style={format!("width: {}%", pay.score_percent())} />
                    </div>
                    <div class="hint">{"Excellent reputation • Higher score = more credit"}</div>
                </div>
                <div class="card credit">
                    <div class="label">{"Available Credit"}</div>
                    <div class="amount">{pay.available_credit_label()}</div>
                    <div class="hint">{"Based on your reputation"}</div>
                </div>
                if let Some(loan) = &pay.active_loan {
                    <div class="card loan">
                        <div class="row">
                            <span class="badge">{"ACTIVE"}</span>
                            <span class="hint">{loan.days_left_label()}</span>
                        </div>
                        <div class="label">{"Amount Due"}</div>
                        <div class="amount">{format_usd(loan.amount_due)}</div>
                        <div class="hint">{format!("of {}", format_usd(loan.total))}</div>
                        <div class="progress">
                            <div class="progress-fill" style={format!("width: {}%", loan.remaining_percent())} />
                        </div>
                        <button class="pay-now" onclick={link.callback(|_| Msg::PayNow)}>
                            {"Pay now"}
                        </button>
                    </div>
                }
                <div class="actions">
                    <button onclick={link.callback(|_| Msg::ViewReputation)}>{"View Reputation"}</button>
                    <button onclick={link.callback(|_| Msg::ExploreMerchants)}>{"Explore Merchants"}</button>
                    <button onclick={link.callback(|_| Msg::LoanHistory)}>{"Loan History"}</button>
                </div>
                if pay.bnpl_eligible {
                    <div class="card bnpl">
                        <div class="title">{"You are eligible for BNPL"}</div>
                        <div class="hint">
                            {"Start shopping with Buy Now, Pay Later at hundreds of merchants"}
                        </div>
                    </div>
                }
            </div>
        }
    }
}
