multiversx_sc::imports!();

use common_constants::WAD;
use common_errors::{ERROR_INSUFFICIENT_CASH, ERROR_INSUFFICIENT_RESERVES, ERROR_INVALID_RESERVE_FACTOR};

use super::{cache::Cache, storage, utils};

/// Admin-only market settings.
///
/// Each endpoint accrues first, so the old parameters apply to the time
/// that passed under them.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + utils::UtilsModule
    + common_access::AccessModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Sets the share of interest kept as reserves (WAD, at most one).
    #[endpoint(setReserveFactor)]
    fn set_reserve_factor(&self, reserve_factor: BigUint) {
        self.caller_as_admin();
        require!(reserve_factor <= BigUint::from(WAD), ERROR_INVALID_RESERVE_FACTOR);

        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let new_factor = self.to_decimal_wad(reserve_factor);
        let old_factor = core::mem::replace(&mut cache.params.reserve_factor, new_factor);

        self.new_reserve_factor_event(&old_factor, &cache.params.reserve_factor);
    }

    /// Points the market to another interest rate model.
    #[endpoint(setInterestRateModel)]
    fn set_interest_rate_model(&self, interest_rate_model: ManagedAddress) {
        self.caller_as_admin();

        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let old_model =
            core::mem::replace(&mut cache.params.interest_rate_model, interest_rate_model);

        self.new_interest_rate_model_event(&old_model, &cache.params.interest_rate_model);
    }

    /// Sends `amount` of accumulated reserves to the admin.
    #[endpoint(reduceReserves)]
    fn reduce_reserves(&self, amount: BigUint) {
        let admin = self.caller_as_admin();
        self.require_positive(&amount);

        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let amount = cache.get_decimal_value(&amount);
        require!(cache.reserves >= amount, ERROR_INSUFFICIENT_RESERVES);
        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        cache.reserves -= &amount;
        cache.cash -= &amount;

        self.send_asset(&cache, &amount, &admin);
        self.reserves_reduced_event(&admin, &amount, &cache.reserves);
    }
}
