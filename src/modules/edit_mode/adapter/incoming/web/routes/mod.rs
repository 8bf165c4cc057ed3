mod get_edit_mode;
mod set_edit_mode;
mod toggle_edit_mode;

pub use get_edit_mode::*;
pub use set_edit_mode::*;
pub use toggle_edit_mode::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EditModeBody {
    #[schema(example = true)]
    pub enabled: bool,
}
