use shared::{NewTransaction, TransactionType};
use thiserror::Error;
use yew::prelude::*;

use crate::services::date_utils;

/// Raw state of the create form. The `amount` stays a string until
/// submit so partial input never gets mangled.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFormState {
    pub description: String,
    pub amount: String,
    pub kind: TransactionType,
    pub category: String,
    pub date: String,
    pub submitting: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("amount must be a number")]
    InvalidAmount,
    #[error("amount cannot be negative")]
    NegativeAmount,
    #[error("date must be a valid date in YYYY-MM-DD form")]
    InvalidDate,
    #[error("category is required for expenses")]
    MissingCategory,
}

/// Builds the creation payload from raw form input. Income transactions
/// always carry the literal "Income" category, whatever the field holds.
pub fn build_new_transaction(
    description: &str,
    amount: &str,
    kind: TransactionType,
    category: &str,
    date: &str,
) -> Result<NewTransaction, FormError> {
    let amount: f64 = amount.trim().parse().map_err(|_| FormError::InvalidAmount)?;
    if !amount.is_finite() {
        return Err(FormError::InvalidAmount);
    }
    if amount < 0.0 {
        return Err(FormError::NegativeAmount);
    }
    if !date_utils::is_valid_date(date) {
        return Err(FormError::InvalidDate);
    }

    let category = match kind {
        TransactionType::Income => "Income".to_string(),
        TransactionType::Expense => {
            let category = category.trim();
            if category.is_empty() {
                return Err(FormError::MissingCategory);
            }
            category.to_string()
        }
    };

    Ok(NewTransaction {
        description: description.trim().to_string(),
        amount,
        kind,
        category,
        date: date.to_string(),
    })
}

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub form: TransactionFormState,
    pub on_description_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_type_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let is_expense = props.form.kind == TransactionType::Expense;

    html! {
        <section class="form-section">
            <h2>{"Add Transaction"}</h2>

            <form id="transactionForm" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <input
                        type="text"
                        id="description"
                        placeholder="Coffee, groceries, salary..."
                        value={props.form.description.clone()}
                        onchange={props.on_description_change.clone()}
                        disabled={props.form.submitting}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0"
                        value={props.form.amount.clone()}
                        onchange={props.on_amount_change.clone()}
                        disabled={props.form.submitting}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="type">{"Type"}</label>
                    <select
                        id="type"
                        onchange={props.on_type_change.clone()}
                        disabled={props.form.submitting}
                    >
                        <option value="expense" selected={is_expense}>{"Expense"}</option>
                        <option value="income" selected={!is_expense}>{"Income"}</option>
                    </select>
                </div>

                {if is_expense {
                    html! {
                        <div id="categoryGroup" class="form-group">
                            <label for="category">{"Category"}</label>
                            <input
                                type="text"
                                id="category"
                                placeholder="Food, Rent, Travel..."
                                value={props.form.category.clone()}
                                onchange={props.on_category_change.clone()}
                                disabled={props.form.submitting}
                                required=true
                            />
                        </div>
                    }
                } else { html! {} }}

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        value={props.form.date.clone()}
                        onchange={props.on_date_change.clone()}
                        disabled={props.form.submitting}
                        required=true
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={props.form.submitting}
                >
                    {if props.form.submitting { "Adding..." } else { "Add Transaction" }}
                </button>
            </form>
        </section>
    }
}
