//! Repositorios de acceso a datos

pub mod forwarder_repository;
pub mod logistics_company_repository;
pub mod tracking_repository;
