use crate::modules::portfolio::domain::EntityId;

/// Outcome of a successful form submission. The route picks the variant:
/// a collection POST creates, a PUT on an entry path updates that entry.
#[derive(Debug, Clone)]
pub enum FormSubmission<D> {
    Create(D),
    Update(EntityId, D),
}

