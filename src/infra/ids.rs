use ulid::Generator;

use crate::domain::EntityId;
use crate::infra::store::StoreError;

/// Source of fresh record ids.
pub trait IdSource {
    fn next_id(&mut self) -> Result<EntityId, StoreError>;
}

/// Time-based ids, strictly increasing within one process even when two
/// ids are minted in the same millisecond.
pub struct UlidIds {
    generator: Generator,
}

impl UlidIds {
    pub fn new() -> Self {
        Self {
            generator: Generator::new(),
        }
    }
}

impl Default for UlidIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for UlidIds {
    fn next_id(&mut self) -> Result<EntityId, StoreError> {
        self.generator
            .generate()
            .map(|ulid| EntityId::new(ulid.to_string()))
            .map_err(|err| StoreError::IdGeneration(err.to_string()))
    }
}
