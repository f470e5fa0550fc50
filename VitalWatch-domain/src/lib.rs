// VitalWatch Domain
// This crate contains the business logic for the VitalWatch service

// Services that implement business logic
pub mod services;

// Alert payloads and delivery
pub mod alerts;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
