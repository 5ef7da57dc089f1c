use std::collections::HashMap;

use shared::StatisticsPayload;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::canvas_surface::{CanvasSurface, ChartRegistry};
use super::{render_statistics, ChartKey};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct StatisticsPanelProps {
    pub stats: Option<StatisticsPayload>,
}

/// The chart area of the page. Owns the canvas refs and the registry of
/// live chart handles; drawing happens after render, once the canvases
/// are in the document.
pub struct StatisticsPanel {
    category_ref: NodeRef,
    daily_ref: NodeRef,
    income_ref: NodeRef,
    expense_ref: NodeRef,
    registry: ChartRegistry,
}

impl Component for StatisticsPanel {
    type Message = ();
    type Properties = StatisticsPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            category_ref: NodeRef::default(),
            daily_ref: NodeRef::default(),
            income_ref: NodeRef::default(),
            expense_ref: NodeRef::default(),
            registry: ChartRegistry::new(),
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let Some(stats) = ctx.props().stats.as_ref() else {
            return;
        };

        let mut canvases = HashMap::new();
        let slots = [
            (ChartKey::Category, &self.category_ref),
            (ChartKey::Daily, &self.daily_ref),
            (ChartKey::Income, &self.income_ref),
            (ChartKey::Expense, &self.expense_ref),
        ];
        for (key, node) in slots {
            if let Some(canvas) = node.cast::<HtmlCanvasElement>() {
                canvases.insert(key, canvas);
            }
        }

        let mut surface = CanvasSurface::new(&mut self.registry, canvases);
        if let Err(e) = render_statistics(&mut surface, stats) {
            Logger::error("charts", &format!("Failed to render charts: {}", e));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let stats = ctx.props().stats.as_ref();
        let has_categories = stats.map(|s| !s.categories.is_empty()).unwrap_or(false);
        let has_daily = stats.map(|s| !s.daily.is_empty()).unwrap_or(false);
        let has_monthly = stats.map(|s| !s.monthly.is_empty()).unwrap_or(false);

        html! {
            <section class="charts-section">
                {if has_categories {
                    html! {
                        <div class="chart-card">
                            <h3>{"Expenses by Category"}</h3>
                            <canvas
                                id="categoryChart"
                                ref={self.category_ref.clone()}
                                width="800"
                                height="350"
                            ></canvas>
                        </div>
                    }
                } else { html! {} }}

                {if has_daily {
                    html! {
                        <div class="chart-card">
                            <h3>{"Daily Expenses"}</h3>
                            <canvas
                                id="dailyChart"
                                ref={self.daily_ref.clone()}
                                width="800"
                                height="350"
                            ></canvas>
                        </div>
                    }
                } else { html! {} }}

                {if has_monthly {
                    html! {
                        <>
                            <div class="chart-card">
                                <h3>{"Monthly Income"}</h3>
                                <canvas
                                    id="incomeChart"
                                    ref={self.income_ref.clone()}
                                    width="800"
                                    height="350"
                                ></canvas>
                            </div>
                            <div class="chart-card">
                                <h3>{"Monthly Expenses"}</h3>
                                <canvas
                                    id="expenseChart"
                                    ref={self.expense_ref.clone()}
                                    width="800"
                                    height="350"
                                ></canvas>
                            </div>
                        </>
                    }
                } else { html! {} }}
            </section>
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use shared::Totals;
    use std::collections::HashMap;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn rendering_an_empty_payload_with_no_canvases_is_a_no_op() {
        let mut registry = ChartRegistry::new();
        let mut surface = CanvasSurface::new(&mut registry, HashMap::new());

        let stats = StatisticsPayload {
            totals: Totals::default(),
            categories: Vec::new(),
            daily: Vec::new(),
            monthly: Vec::new(),
        };

        render_statistics(&mut surface, &stats).unwrap();
    }
}
