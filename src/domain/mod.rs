// Domain layer - Pure air-quality types and rules
pub mod air_quality;
pub mod aqi;
pub mod city;
pub mod dashboard;
pub mod error;
pub mod risk;
