pub mod empty_state;
pub mod labels;
pub mod monthly_campaign;
pub mod tickets_distributed;

pub use monthly_campaign::MonthlyCampaign;
pub use tickets_distributed::TicketsDistributed;
