/// Константы виджетов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    pub support_email: &'static str,
    pub support_subject: &'static str,
}

impl WidgetConfig {
    /// Помесячный список товаров
    pub const MONTHLY_CAMPAIGN: Self = Self {
        support_email: "soporte@nimbuscloud.mx",
        support_subject: "Soporte - Historial mensual",
    };

    /// Treemap по весу
    pub const TICKETS_DISTRIBUTED: Self = Self {
        support_email: "soporte@tuempresa.com",
        support_subject: "Soporte - Tickets",
    };

    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            self.support_email,
            urlencoding::encode(self.support_subject)
        )
    }
}
