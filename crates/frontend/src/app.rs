use crate::dashboards::d410_product_tickets::store::{app_ticket_store, provide_ticket_store};
use crate::dashboards::{MonthlyCampaign, TicketsDistributed};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Хранилище общее с экспортами set_ticket_state / set_ticket_loading
    provide_ticket_store(app_ticket_store());

    view! {
        <ConfigProvider>
            <div class="d410-dashboard">
                <MonthlyCampaign />
                <TicketsDistributed chart_id="d410-tickets-distributed" />
            </div>
        </ConfigProvider>
    }
}
