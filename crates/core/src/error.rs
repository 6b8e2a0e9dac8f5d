use crate::component::Category;

/// Contract violations: input the engine refuses to evaluate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Slot '{slot}' holds a component of type '{found}'")]
    SlotMismatch { slot: Category, found: Category },
}
