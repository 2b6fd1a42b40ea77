//! Game server API: wire DTOs and the HTTP client.

pub mod client;
pub mod dto;

pub use client::GameClient;
pub use dto::{ActionRequest, ActionResponse, GameCreated, PlayerDto, StatusDto};
