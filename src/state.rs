pub mod registry;
mod search;
