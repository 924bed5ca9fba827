pub mod arena;
pub mod collision;
pub mod config;
pub mod constants;
pub mod simulation;
pub mod world_data;
