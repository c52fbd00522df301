//! Wire types shared between the LogService backend and the query console.

pub mod shared;
pub mod usecases;
