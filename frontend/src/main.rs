mod components;
mod hooks;
mod services;

use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use components::charts::statistics_panel::StatisticsPanel;
use components::{MonthControls, SummaryCards, TransactionForm, TransactionList};
use hooks::{use_statistics, use_transactions};
use services::api::ApiClient;
use services::date_utils;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let selected_month = use_state(date_utils::current_month);

    let statistics = use_statistics(&api_client, selected_month.as_str());
    let tx = use_transactions(&api_client, statistics.refresh.clone());

    // Initial load; the statistics hook fetches on its own.
    use_effect_with((), {
        let refresh = tx.actions.refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let on_month_change = {
        let selected_month = selected_month.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selected_month.set(input.value());
        })
    };

    let on_download = {
        let api_client = api_client.clone();
        let selected_month = selected_month.clone();
        Callback::from(move |_: MouseEvent| {
            let month = (*selected_month).clone();
            let month = (!month.is_empty()).then_some(month.as_str());
            let url = api_client.csv_export_url(month);

            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&url) {
                    Logger::error("download", &format!("Failed to start CSV download: {:?}", e));
                }
            }
        })
    };

    let totals = statistics
        .stats
        .as_ref()
        .map(|s| s.totals)
        .unwrap_or_default();

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Personal Finance Tracker"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <MonthControls
                        month={(*selected_month).clone()}
                        on_month_change={on_month_change}
                        on_download={on_download}
                    />

                    <SummaryCards totals={totals} />

                    <StatisticsPanel stats={statistics.stats.clone()} />

                    <TransactionForm
                        form={tx.state.form.clone()}
                        on_description_change={tx.actions.on_description_change.clone()}
                        on_amount_change={tx.actions.on_amount_change.clone()}
                        on_type_change={tx.actions.on_type_change.clone()}
                        on_category_change={tx.actions.on_category_change.clone()}
                        on_date_change={tx.actions.on_date_change.clone()}
                        on_submit={tx.actions.submit.clone()}
                    />

                    <TransactionList
                        transactions={tx.state.transactions.clone()}
                        month={(*selected_month).clone()}
                        loading={tx.state.loading}
                        on_delete={tx.actions.remove.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
