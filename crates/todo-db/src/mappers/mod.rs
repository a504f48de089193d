//! Entity <-> model mappers

mod task;
mod user;
