use std::sync::Arc;

use crate::modules::layout::application::ports::incoming::use_cases::{
    GetSectionsUseCase, ReorderSectionsUseCase, ReplaceSectionsUseCase,
};
use crate::modules::layout::application::ports::outgoing::SectionOrderRepository;
use crate::modules::layout::application::service::{
    GetSectionsService, ReorderSectionsService, ReplaceSectionsService,
};

#[derive(Clone)]
pub struct LayoutUseCases {
    pub get_sections: Arc<dyn GetSectionsUseCase + Send + Sync>,
    pub reorder: Arc<dyn ReorderSectionsUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplaceSectionsUseCase + Send + Sync>,
}

impl LayoutUseCases {
    /// Wires every layout use case to the same repository.
    pub fn new<R>(repository: R) -> Self
    where
        R: SectionOrderRepository + Clone + 'static,
    {
        Self {
            get_sections: Arc::new(GetSectionsService::new(repository.clone())),
            reorder: Arc::new(ReorderSectionsService::new(repository.clone())),
            replace: Arc::new(ReplaceSectionsService::new(repository)),
        }
    }
}
