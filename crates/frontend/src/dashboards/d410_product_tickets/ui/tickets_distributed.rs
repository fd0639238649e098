use crate::dashboards::d410_product_tickets::browser;
use crate::dashboards::d410_product_tickets::chart_options::CHART_HEIGHT;
use crate::dashboards::d410_product_tickets::config::WidgetConfig;
use crate::dashboards::d410_product_tickets::selectors::ProductSelectors;
use crate::dashboards::d410_product_tickets::state::{RenderState, TicketToggle};
use crate::dashboards::d410_product_tickets::store::use_ticket_store;
use crate::dashboards::d410_product_tickets::ui::empty_state::EmptyState;
use crate::dashboards::d410_product_tickets::ui::labels;
use leptos::prelude::*;
use thaw::*;

const CONFIG: WidgetConfig = WidgetConfig::TICKETS_DISTRIBUTED;

/// Treemap: доля веса каждого товара для выбранного типа тикетов
#[component]
pub fn TicketsDistributed(
    /// DOM id контейнера графика, передаётся в `renderTreemap`
    #[prop(into)]
    chart_id: String,
) -> impl IntoView {
    let store = use_ticket_store();
    let toggle = TicketToggle::new();
    let selectors = StoredValue::new(ProductSelectors::new());
    let chart_id = StoredValue::new(chart_id);

    let view_state = Memo::new(move |_| {
        let snapshot = store.snapshot();
        let ticket_type = toggle.get();
        selectors
            .try_update_value(|selectors| selectors.chart_view(&snapshot, ticket_type))
            .unwrap_or(RenderState::Empty)
    });

    // Перерисовка графика при смене данных или типа
    Effect::new(move |_| {
        let RenderState::Populated(chart) = view_state.get() else {
            return;
        };
        let element_id = chart_id.get_value();
        if let Err(err) = browser::render_treemap(&element_id, &chart) {
            log::warn!("d410 chart: treemap not rendered: {}", err);
        }
    });

    let on_reload = Callback::new(move |_| {
        if let Err(err) = browser::reload() {
            log::error!("d410 chart: reload failed: {}", err);
        }
    });
    let on_contact = Callback::new(move |_| {
        if let Err(err) = browser::contact_support(&CONFIG) {
            log::error!("d410 chart: contact support failed: {}", err);
        }
    });

    let toggle_button = move || {
        view! {
            <div class="d410-card__header">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| toggle.toggle()
                >
                    {move || labels::toggle_label(toggle.get())}
                </Button>
            </div>
        }
    };

    view! {
        <div class="d410-card d410-tickets-distributed">
            {move || match view_state.get() {
                RenderState::Loading => view! { <></> }.into_any(),
                RenderState::Populated(_) => view! {
                    <div class="d410-card__content">
                        {toggle_button()}
                        <div
                            id=chart_id.get_value()
                            class="apex-charts"
                            dir="ltr"
                            style=format!("height: {}px;", CHART_HEIGHT)
                        ></div>
                    </div>
                }
                .into_any(),
                // Переключатель остаётся и в пустом состоянии: иначе при пустой
                // «venta» до «compra» не добраться
                RenderState::Empty => view! {
                    <div class="d410-card__content">
                        {toggle_button()}
                        <EmptyState
                            icon_name="book-dashed"
                            title=labels::CHART_EMPTY_TITLE.to_string()
                            description=labels::CHART_EMPTY_DESCRIPTION.to_string()
                            on_reload=on_reload
                            on_contact=on_contact
                        />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
