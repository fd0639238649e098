pub mod d410_product_tickets;

pub use d410_product_tickets::ui::{MonthlyCampaign, TicketsDistributed};
