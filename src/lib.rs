//! Backend del conductor de moto-taxi
//! 
//! Ledger en memoria con el conductor, las carreras y los clientes, expuesto
//! como API async en proceso y como API HTTP/JSON para las apps móviles.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
