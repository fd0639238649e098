use contracts::dashboards::d410_product_tickets::TicketType;

pub fn toggle_label(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::Sale => "Venta",
        TicketType::Shop => "Compra",
    }
}

fn activity(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::Sale => "venta",
        TicketType::Shop => "compra",
    }
}

pub fn list_title(ticket_type: TicketType, month: &str) -> String {
    format!("Histórico de {} en {}", activity(ticket_type), month)
}

pub fn list_empty_title(ticket_type: TicketType) -> String {
    format!("Historial mensual — {}", activity(ticket_type))
}

pub fn list_empty_description(month: &str) -> String {
    format!(
        "Este apartado muestra el histórico por producto para {}. Actualmente no se ha registrado información para este periodo.",
        month
    )
}

pub const CHART_EMPTY_TITLE: &str = "No hay datos disponibles";
pub const CHART_EMPTY_DESCRIPTION: &str = "Este apartado muestra el total en kilogramos por producto (venta o compra) para el tipo seleccionado. Actualmente no se ha registrado información para mostrar en este gráfico.";
pub const RELOAD: &str = "Recargar";
pub const CONTACT_SUPPORT: &str = "Contactar Soporte";
pub const PRODUCT_ALT_FALLBACK: &str = "Producto";
