#![no_std]

pub mod proxy_controller;
pub mod proxy_interest_rate_model;
pub mod proxy_market;
pub mod proxy_price_oracle;
