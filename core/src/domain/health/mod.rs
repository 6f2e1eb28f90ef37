pub mod entities;
pub mod port;
pub mod services;
