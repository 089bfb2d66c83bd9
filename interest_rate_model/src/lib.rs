#![no_std]

multiversx_sc::imports!();

use common_constants::WAD;
use common_errors::ERROR_INVALID_KINK;
use common_structs::RateModelParams;

/// Jump-rate interest rate model.
///
/// Quotes the per-second borrow and supply rates of a market from its cash,
/// borrows and reserves. Markets call `getBorrowRate` on every accrual; the
/// controller reads `rate_params` straight from storage to simulate accrual.
#[multiversx_sc::contract]
pub trait InterestRateModel:
    common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
    + common_access::AccessModule
{
    /// All arguments are annual WAD values. They are stored as per-second
    /// RAY rates and a RAY kink.
    #[init]
    fn init(
        &self,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) {
        self.admin().set(self.blockchain().get_caller());
        self.store_rate_model(
            base_rate_per_year,
            multiplier_per_year,
            jump_multiplier_per_year,
            kink,
        );
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Replaces the rate curve. Markets pick it up on their next accrual.
    #[endpoint(updateRateModel)]
    fn update_rate_model(
        &self,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) {
        self.caller_as_admin();
        self.store_rate_model(
            base_rate_per_year,
            multiplier_per_year,
            jump_multiplier_per_year,
            kink,
        );
    }

    /// Utilization (RAY) of a market holding `cash`, owing `borrows` and
    /// keeping `reserves`, all in raw units of the same asset.
    #[view(getUtilizationRate)]
    fn get_utilization_rate(
        &self,
        cash: BigUint,
        borrows: BigUint,
        reserves: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_utilization(&cash, &borrows, &reserves)
    }

    /// Per-second borrow rate (RAY).
    #[view(getBorrowRate)]
    fn get_borrow_rate(
        &self,
        cash: BigUint,
        borrows: BigUint,
        reserves: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = self.calc_utilization(&cash, &borrows, &reserves);
        self.calc_borrow_rate(&utilization, &self.rate_params().get())
    }

    /// Per-second supply rate (RAY) for a market keeping `reserve_factor`
    /// (WAD) of the interest.
    #[view(getSupplyRate)]
    fn get_supply_rate(
        &self,
        cash: BigUint,
        borrows: BigUint,
        reserves: BigUint,
        reserve_factor: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = self.calc_utilization(&cash, &borrows, &reserves);
        let borrow_rate = self.calc_borrow_rate(&utilization, &self.rate_params().get());

        self.calc_supply_rate(
            &utilization,
            &borrow_rate,
            &self.to_decimal_wad(reserve_factor),
        )
    }

    fn store_rate_model(
        &self,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) {
        require!(kink <= BigUint::from(WAD), ERROR_INVALID_KINK);

        self.rate_params().set(self.to_rate_model_params(
            base_rate_per_year,
            multiplier_per_year,
            jump_multiplier_per_year,
            kink,
        ));
    }

    /// The rate curve: per-second rates and the kink, all RAY.
    #[view(getRateParams)]
    #[storage_mapper("rate_params")]
    fn rate_params(&self) -> SingleValueMapper<RateModelParams<Self::Api>>;
}
