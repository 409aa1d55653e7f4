use thiserror::Error;

use crate::views::CardSlot;

/// A component or container was wired up in a way it can't render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("the producer for the mandatory `{0}` slot returned nothing.")]
    AbsentSlot(CardSlot),
    #[error("\"{0}\" is not a button role, expected one of primary, secondary or tertiary.")]
    UnknownButtonRole(String),
}
