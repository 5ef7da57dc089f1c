use shared::{Transaction, TransactionType};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::transaction_form::{build_new_transaction, TransactionFormState};
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::dialog;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub form: TransactionFormState,
}

#[derive(Clone)]
pub struct TransactionsActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub remove: Callback<i64>,
    pub on_description_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_type_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
}

pub struct UseTransactionsResult {
    pub state: TransactionsState,
    pub actions: TransactionsActions,
}

/// Owns the transaction cache and the create-form state. After every
/// successful mutation the cache is refetched wholesale and `on_mutated`
/// fires so the statistics refetch too.
#[hook]
pub fn use_transactions(api_client: &ApiClient, on_mutated: Callback<()>) -> UseTransactionsResult {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);

    let description = use_state(String::new);
    let amount = use_state(String::new);
    let kind = use_state(|| TransactionType::Expense);
    let category = use_state(String::new);
    let date = use_state(date_utils::today);
    let submitting = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let transactions = transactions.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_transactions().await {
                    Ok(data) => transactions.set(data),
                    Err(e) => {
                        // Prior cache stays untouched on a failed read.
                        Logger::error(
                            "transactions",
                            &format!("Failed to load transactions: {}", e),
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let description = description.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let category = category.clone();
        let date = date.clone();
        let submitting = submitting.clone();
        let refresh = refresh.clone();
        let on_mutated = on_mutated.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let description = description.clone();
            let amount = amount.clone();
            let kind = kind.clone();
            let category = category.clone();
            let date = date.clone();
            let submitting = submitting.clone();
            let refresh = refresh.clone();
            let on_mutated = on_mutated.clone();

            spawn_local(async move {
                submitting.set(true);

                let payload = build_new_transaction(
                    &description,
                    &amount,
                    *kind,
                    &category,
                    &date,
                );

                match payload {
                    Ok(payload) => match api_client.create_transaction(payload).await {
                        Ok(()) => {
                            description.set(String::new());
                            amount.set(String::new());
                            category.set(String::new());
                            kind.set(TransactionType::Expense);
                            date.set(date_utils::today());
                            refresh.emit(());
                            on_mutated.emit(());
                        }
                        Err(message) => {
                            Logger::error(
                                "transactions",
                                &format!("Failed to add transaction: {}", message),
                            );
                            dialog::alert(&format!("Failed to add transaction: {}", message));
                        }
                    },
                    Err(e) => {
                        Logger::warn("transactions", &format!("Rejected form input: {}", e));
                        dialog::alert(&format!("Failed to add transaction: {}", e));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let remove = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();
        let on_mutated = on_mutated.clone();

        Callback::from(move |id: i64| {
            if !dialog::confirm("Are you sure you want to delete this transaction?") {
                return;
            }
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_mutated = on_mutated.clone();

            spawn_local(async move {
                Logger::debug("transactions", &format!("Deleting transaction {}", id));
                match api_client.delete_transaction(id).await {
                    Ok(()) => {
                        // Outcome unverified; the re-fetch settles what is shown.
                        refresh.emit(());
                        on_mutated.emit(());
                    }
                    Err(e) => {
                        Logger::error(
                            "transactions",
                            &format!("Failed to delete transaction {}: {}", id, e),
                        );
                        dialog::alert("Failed to delete transaction");
                    }
                }
            });
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_type_change = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(match select.value().as_str() {
                "income" => TransactionType::Income,
                _ => TransactionType::Expense,
            });
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            category.set(input.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let state = TransactionsState {
        transactions: (*transactions).clone(),
        loading: *loading,
        form: TransactionFormState {
            description: (*description).clone(),
            amount: (*amount).clone(),
            kind: *kind,
            category: (*category).clone(),
            date: (*date).clone(),
            submitting: *submitting,
        },
    };

    let actions = TransactionsActions {
        refresh,
        submit,
        remove,
        on_description_change,
        on_amount_change,
        on_type_change,
        on_category_change,
        on_date_change,
    };

    UseTransactionsResult { state, actions }
}
