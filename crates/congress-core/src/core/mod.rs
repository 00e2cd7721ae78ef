pub mod reference;
pub mod services;
