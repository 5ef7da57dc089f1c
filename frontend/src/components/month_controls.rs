use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthControlsProps {
    pub month: String,
    pub on_month_change: Callback<Event>,
    pub on_download: Callback<MouseEvent>,
}

#[function_component(MonthControls)]
pub fn month_controls(props: &MonthControlsProps) -> Html {
    html! {
        <section class="month-controls">
            <div class="form-group">
                <label for="monthSelector">{"Month"}</label>
                <input
                    type="month"
                    id="monthSelector"
                    value={props.month.clone()}
                    onchange={props.on_month_change.clone()}
                />
            </div>
            <button
                type="button"
                id="downloadCsvBtn"
                class="btn btn-secondary"
                onclick={props.on_download.clone()}
            >
                {"Download CSV"}
            </button>
        </section>
    }
}
