use crate::dashboards::d410_product_tickets::ui::labels;
use crate::shared::icons::icon_sized;
use leptos::prelude::*;
use thaw::*;

/// Панель «нет данных» с кнопками перезагрузки и связи с поддержкой
#[component]
pub fn EmptyState(
    /// Имя иконки для icon()
    icon_name: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    on_reload: Callback<()>,
    on_contact: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="d410-empty">
            <div class="d410-empty__icon">{icon_sized(icon_name, 52)}</div>
            <h3 class="d410-empty__title">{move || title.get()}</h3>
            <p class="d410-empty__description">{move || description.get()}</p>
            <Flex gap=FlexGap::Small style="justify-content: center;">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_reload.run(())
                >
                    {icon_sized("refresh", 14)}
                    {labels::RELOAD}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_contact.run(())
                >
                    {icon_sized("mail", 14)}
                    {labels::CONTACT_SUPPORT}
                </Button>
            </Flex>
        </div>
    }
}
