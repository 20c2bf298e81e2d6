pub mod endpoints;
pub mod mappers;
pub mod responses;
pub mod security;
