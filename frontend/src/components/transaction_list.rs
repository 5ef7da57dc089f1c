use shared::{filter_by_month, Transaction, TransactionType};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::format;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
    pub month: String,
    pub loading: bool,
    pub on_delete: Callback<i64>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let filtered = filter_by_month(&props.transactions, &props.month);

    html! {
        <section class="transactions-section">
            <h2>{"Transactions"}</h2>

            {if props.loading {
                html! { <div class="loading">{"Loading transactions..."}</div> }
            } else if filtered.is_empty() {
                html! { <p class="empty-list">{"No transactions for this month"}</p> }
            } else {
                html! {
                    <div id="transactionsList" class="transactions-list">
                        {for filtered.iter().map(|transaction| {
                            let amount_class = match transaction.kind {
                                TransactionType::Income => "transaction-amount income",
                                TransactionType::Expense => "transaction-amount expense",
                            };

                            let onclick = {
                                let on_delete = props.on_delete.clone();
                                let id = transaction.id;
                                Callback::from(move |_: MouseEvent| on_delete.emit(id))
                            };

                            html! {
                                <div class="transaction-item" key={transaction.id}>
                                    <div class="transaction-info">
                                        <h4>{&transaction.description}</h4>
                                        <p>{format!("{} • {}", transaction.category, transaction.date)}</p>
                                    </div>
                                    <div class="transaction-actions">
                                        <span class={amount_class}>
                                            {format::signed_amount(transaction)}
                                        </span>
                                        <button class="delete-btn" {onclick}>{"Delete"}</button>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </section>
    }
}
