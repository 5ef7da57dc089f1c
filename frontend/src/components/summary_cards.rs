use shared::Totals;
use yew::prelude::*;

use crate::services::format;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub totals: Totals,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <section class="summary-cards">
            <div class="summary-card income">
                <span class="summary-label">{"Total Income"}</span>
                <span id="totalIncome" class="summary-value">
                    {format::currency(props.totals.income)}
                </span>
            </div>
            <div class="summary-card expense">
                <span class="summary-label">{"Total Expense"}</span>
                <span id="totalExpense" class="summary-value">
                    {format::currency(props.totals.expense)}
                </span>
            </div>
            <div class="summary-card balance">
                <span class="summary-label">{"Balance"}</span>
                <span id="balance" class="summary-value">
                    {format::currency(props.totals.balance())}
                </span>
            </div>
        </section>
    }
}
