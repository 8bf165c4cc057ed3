mod get_portfolio_service;
mod manage_entry_service;
mod manage_tags_service;
mod update_profile_service;

pub use get_portfolio_service::GetPortfolioService;
pub use manage_entry_service::ManageEntryService;
pub use manage_tags_service::ManageTagsService;
pub use update_profile_service::UpdateProfileService;
