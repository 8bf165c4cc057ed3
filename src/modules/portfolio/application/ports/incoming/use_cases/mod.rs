mod get_portfolio;
mod manage_entry;
mod manage_tags;
mod update_profile;

pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use manage_entry::{ManageEntryError, ManageEntryUseCase};
pub use manage_tags::{ManageTagsError, ManageTagsUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
