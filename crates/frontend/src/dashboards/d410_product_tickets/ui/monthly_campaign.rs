use crate::dashboards::d410_product_tickets::browser;
use crate::dashboards::d410_product_tickets::config::WidgetConfig;
use crate::dashboards::d410_product_tickets::projection::ProductRow;
use crate::dashboards::d410_product_tickets::selectors::ProductSelectors;
use crate::dashboards::d410_product_tickets::state::{RenderState, TicketToggle};
use crate::dashboards::d410_product_tickets::store::use_ticket_store;
use crate::dashboards::d410_product_tickets::ui::empty_state::EmptyState;
use crate::dashboards::d410_product_tickets::ui::labels;
use crate::shared::icons::icon;
use crate::shared::month_names::current_month_name_es;
use leptos::prelude::*;
use thaw::*;

const CONFIG: WidgetConfig = WidgetConfig::MONTHLY_CAMPAIGN;

/// Помесячная история по товарам: суммы и вес для выбранного типа тикетов
#[component]
pub fn MonthlyCampaign() -> impl IntoView {
    let store = use_ticket_store();
    let toggle = TicketToggle::new();
    let selectors = StoredValue::new(ProductSelectors::new());
    let month = current_month_name_es();

    // Без гейта загрузки: список строится из того снимка, что есть
    let view_state = Memo::new(move |_| {
        let snapshot = store.snapshot();
        let ticket_type = toggle.get();
        selectors
            .try_update_value(|selectors| selectors.list_view(&snapshot, ticket_type))
            .unwrap_or(RenderState::Empty)
    });

    let on_reload = Callback::new(move |_| {
        if let Err(err) = browser::reload() {
            log::error!("d410 list: reload failed: {}", err);
        }
    });
    let on_contact = Callback::new(move |_| {
        if let Err(err) = browser::contact_support(&CONFIG) {
            log::error!("d410 list: contact support failed: {}", err);
        }
    });

    view! {
        <div class="d410-card d410-monthly-campaign">
            <div class="d410-card__header">
                <h6 class="d410-card__title">
                    {move || labels::list_title(toggle.get(), month)}
                </h6>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| toggle.toggle()
                >
                    {move || labels::toggle_label(toggle.get())}
                </Button>
            </div>

            <div class="d410-card__body d410-card__body--scroll">
                {move || match view_state.get() {
                    RenderState::Populated(rows) => view! {
                        <ul class="d410-product-list">
                            {rows
                                .iter()
                                .map(|row| view! { <ProductListItem row=row.clone() /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    RenderState::Empty | RenderState::Loading => view! {
                        <EmptyState
                            icon_name="package-search"
                            title=Signal::derive(move || labels::list_empty_title(toggle.get()))
                            description=labels::list_empty_description(month)
                            on_reload=on_reload
                            on_contact=on_contact
                        />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductListItem(row: ProductRow) -> impl IntoView {
    let image = match row.image_ref.clone() {
        Some(src) => {
            let alt = if row.product_name.is_empty() {
                labels::PRODUCT_ALT_FALLBACK.to_string()
            } else {
                row.product_name.clone()
            };
            view! { <img class="d410-product-row__img" src=src alt=alt /> }.into_any()
        }
        None => icon("wifi-off"),
    };

    view! {
        <li class="d410-product-row" data-product-id=row.product_id.clone()>
            <div class="d410-product-row__image">{image}</div>
            <h6 class="d410-product-row__name">{row.product_name.clone()}</h6>
            <div class="d410-product-row__totals">
                <p class="d410-product-row__amount">{format!("$ {}", row.amount_display)}</p>
                <p class="d410-product-row__weight">{format!("{} KG", row.weight_display)}</p>
            </div>
        </li>
        <hr class="d410-product-row__divider" />
    }
}
