use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::modules::layout::application::ports::outgoing::{
    SectionOrderRepository, SectionOrderRepositoryError,
};
use crate::modules::layout::domain::{SectionDescriptor, SectionOrder};

#[derive(Clone, Default)]
pub struct InMemorySectionOrderRepository {
    order: Arc<RwLock<SectionOrder>>,
}

#[async_trait]
impl SectionOrderRepository for InMemorySectionOrderRepository {
    async fn sections(&self) -> Result<Vec<SectionDescriptor>, SectionOrderRepositoryError> {
        Ok(self.order.read().sections().to_vec())
    }

    async fn reorder(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<SectionDescriptor>, SectionOrderRepositoryError> {
        let mut order = self.order.write();
        order.reorder(from_index, to_index)?;
        Ok(order.sections().to_vec())
    }

    async fn replace(
        &self,
        sections: Vec<SectionDescriptor>,
    ) -> Result<Vec<SectionDescriptor>, SectionOrderRepositoryError> {
        let mut order = self.order.write();
        order.replace(sections)?;
        Ok(order.sections().to_vec())
    }
}
