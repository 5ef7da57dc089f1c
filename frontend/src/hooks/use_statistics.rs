use shared::StatisticsPayload;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub struct UseStatisticsResult {
    pub stats: Option<StatisticsPayload>,
    pub refresh: Callback<()>,
}

/// Statistics payload for the selected month. Refetches whenever the
/// month changes; `refresh` refetches on demand (after mutations). A
/// failed fetch only logs, so whatever was displayed stays displayed.
#[hook]
pub fn use_statistics(api_client: &ApiClient, month: &str) -> UseStatisticsResult {
    let stats = use_state(|| Option::<StatisticsPayload>::None);

    let refresh = {
        let api_client = api_client.clone();
        let stats = stats.clone();
        let month = month.to_string();

        Callback::from(move |_: ()| {
            if month.is_empty() {
                return;
            }
            let api_client = api_client.clone();
            let stats = stats.clone();
            let month = month.clone();

            spawn_local(async move {
                match api_client.get_statistics(&month).await {
                    Ok(payload) => stats.set(Some(payload)),
                    Err(e) => {
                        Logger::error("statistics", &format!("Failed to fetch statistics: {}", e));
                    }
                }
            });
        })
    };

    use_effect_with(month.to_string(), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseStatisticsResult {
        stats: (*stats).clone(),
        refresh,
    }
}
