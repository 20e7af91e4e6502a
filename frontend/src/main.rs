use shared::DetailsType;
use yew::prelude::*;

mod components;
mod services;

use components::finance::FinanceVisualization;
use services::{config, logging};

const SELECTIONS: [Option<DetailsType>; 3] =
    [None, Some(DetailsType::MoneyIn), Some(DetailsType::MoneyOut)];

fn selection_label(selection: Option<DetailsType>) -> &'static str {
    selection.map(|details| details.label()).unwrap_or("All")
}

#[function_component(App)]
fn app() -> Html {
    let details_type = use_state(|| Option::<DetailsType>::None);
    let chart_config = use_memo((), |_| config::load_chart_config_or_default());

    let buttons = SELECTIONS.iter().map(|&selection| {
        let is_active = *details_type == selection;
        let onclick = {
            let details_type = details_type.clone();
            Callback::from(move |_: MouseEvent| details_type.set(selection))
        };

        html! {
            <button
                class={classes!("details-button", is_active.then_some("active"))}
                onclick={onclick}
                style={format!(
                    "background: {}; color: white; border: 1px solid rgba(68, 255, 136, 0.4); padding: 6px 12px; border-radius: 6px; font-size: 0.8rem; cursor: pointer;",
                    if is_active { "rgba(68, 255, 136, 0.25)" } else { "transparent" }
                )}
            >
                {selection_label(selection)}
            </button>
        }
    });

    html! {
        <div class="finance-panel" style="max-width: 480px; margin: 2rem auto; padding: 1rem; background: #0b0f14; border-radius: 10px;">
            <div class="details-selector" style="display: flex; gap: 8px; margin-bottom: 1rem;">
                {for buttons}
            </div>
            <div class="finance-chart" style="width: 100%; height: 320px;">
                <FinanceVisualization details_type={*details_type} config={chart_config} />
            </div>
        </div>
    }
}

fn main() {
    if let Err(e) = logging::init(logging::default_level()) {
        gloo::console::warn!("Console logger already installed:", e.to_string());
    }
    log::info!("starting finance visualization");
    yew::Renderer::<App>::new().render();
}
