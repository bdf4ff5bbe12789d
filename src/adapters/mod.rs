// Adapters layer: concrete implementations for the quote source and Discord.

pub mod discord;
pub mod http;
