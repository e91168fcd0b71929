//! Services module
//! 
//! Lógica de negocio que combina datos del ledger sin mutarlo.

pub mod notification_service;

pub use notification_service::NotificationService;
