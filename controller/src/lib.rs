#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod liquidity;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

use common_constants::{
    DEFAULT_CLOSE_FACTOR, DEFAULT_LIQUIDATION_INCENTIVE, DEFAULT_MAX_ENTERED_MARKETS,
};

#[multiversx_sc::contract]
pub trait Controller:
    positions::account::PositionAccountModule
    + positions::liquidation::PositionLiquidationModule
    + config::ConfigModule
    + common_access::AccessModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + validation::ValidationModule
    + utils::UtilsModule
    + views::ViewsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Initializes the controller with the default liquidation parameters.
    ///
    /// The deployer becomes the admin. Markets are listed and the price
    /// oracle is set afterwards through the config endpoints.
    #[init]
    fn init(&self) {
        self.admin().set(self.blockchain().get_caller());

        self.close_factor()
            .set(self.to_decimal_wad(BigUint::from(DEFAULT_CLOSE_FACTOR)));
        self.liquidation_incentive()
            .set(self.to_decimal_wad(BigUint::from(DEFAULT_LIQUIDATION_INCENTIVE)));
        self.max_entered_markets().set(DEFAULT_MAX_ENTERED_MARKETS);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
