//! Catalog core for the Namamy storefront.
//!
//! This crate exposes the product/category domain model, an in-memory
//! catalog repository and the search/filter/sort engine that drives
//! storefront listings. HTTP routing, rendering and persistence live
//! elsewhere; everything here is synchronous and side-effect free.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod repository;
pub mod services;
