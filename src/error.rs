use thiserror::Error;

/// The allocator's single failure mode.
///
/// Every public entry point (`Arena::allocate`, `Arena::reallocate`) flattens
/// this back into a null pointer to keep the C-allocator-shaped contract;
/// internal helpers propagate it with `?` so the failure path is never
/// silently swallowed before it reaches a log line.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("out of memory")]
pub struct OomError;
