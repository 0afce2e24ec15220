//! In-memory bank-account management: four account tiers, deposits,
//! withdrawals against a tier-dependent floor, and bonus points.

pub mod domain;
pub mod factory;
pub mod generator;
pub mod ingestion;
pub mod repository;
pub mod service;
