//! Infrastructure layer: store accessors, the push gateway and wire DTOs.

pub mod dto;
pub mod gateway;
pub mod repository;
