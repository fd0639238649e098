use contracts::dashboards::d410_product_tickets::TicketType;
use leptos::prelude::*;

/// Что виджет рисует на этом проходе
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T> {
    Loading,
    Empty,
    Populated(T),
}

impl<T> RenderState<T> {
    /// Решается раз за рендер: сначала загрузка, потом наличие данных
    pub fn classify(loading: bool, has_data: bool, populate: impl FnOnce() -> T) -> Self {
        match (loading, has_data) {
            (true, _) => Self::Loading,
            (false, false) => Self::Empty,
            (false, true) => Self::Populated(populate()),
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated(_))
    }
}

/// Переключатель venta/compra одного экземпляра виджета. Начинает с `Sale`.
#[derive(Clone, Copy)]
pub struct TicketToggle {
    ticket_type: RwSignal<TicketType>,
}

impl TicketToggle {
    pub fn new() -> Self {
        Self {
            ticket_type: RwSignal::new(TicketType::default()),
        }
    }

    pub fn get(&self) -> TicketType {
        self.ticket_type.get()
    }

    pub fn toggle(&self) {
        self.ticket_type.update(|ticket_type| *ticket_type = ticket_type.toggled());
        log::debug!("ticket type switched to {}", self.ticket_type.get_untracked());
    }
}

impl Default for TicketToggle {
    fn default() -> Self {
        Self::new()
    }
}
