//! Gestor de registros de seguimiento de envíos
//!
//! API REST sobre PostgreSQL para registrar números de seguimiento,
//! asociarlos a transportistas y forwarders, seguir el estado de entrega
//! y archivar envíos completados, más la capa de cliente tipada que
//! sincroniza la vista de lista con los filtros.

pub mod client;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
