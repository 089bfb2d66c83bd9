multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_structs::{AccountPosition, AccountSnapshot, RateModelParams};

use crate::storage;

/// Read-only endpoints over the stored market state.
///
/// Values are not accrued to the current block; call `accrueInterest` first
/// for up-to-date balances.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Supply tokens held by `account`.
    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.load_position(account).supply_tokens
    }

    /// Underlying value of the supply tokens held by `account`.
    #[view(balanceOfUnderlying)]
    fn balance_of_underlying(
        &self,
        account: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.load_position(account);
        self.scaled_to_original(
            &position.supply_tokens,
            &self.supply_index().get(),
            self.params().get().asset_decimals,
        )
    }

    /// Outstanding debt of `account` at the last accrual.
    #[view(borrowBalanceStored)]
    fn borrow_balance_stored(
        &self,
        account: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.load_position(account);
        self.scaled_to_original(
            &position.borrow_scaled,
            &self.borrow_index().get(),
            self.params().get().asset_decimals,
        )
    }

    #[view(getAccountSnapshot)]
    fn get_account_snapshot(&self, account: &ManagedAddress) -> AccountSnapshot<Self::Api> {
        let asset_decimals = self.params().get().asset_decimals;
        let position = self.load_position(account);
        let supply_index = self.supply_index().get();
        let borrow_index = self.borrow_index().get();

        AccountSnapshot {
            supply_underlying: self.scaled_to_original(
                &position.supply_tokens,
                &supply_index,
                asset_decimals,
            ),
            borrow_balance: self.scaled_to_original(
                &position.borrow_scaled,
                &borrow_index,
                asset_decimals,
            ),
            supply_tokens: position.supply_tokens,
            supply_index,
            borrow_index,
        }
    }

    /// Outstanding debt of the whole market at the last accrual.
    #[view(getTotalBorrows)]
    fn get_total_borrows(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.scaled_to_original(
            &self.borrowed().get(),
            &self.borrow_index().get(),
            self.params().get().asset_decimals,
        )
    }

    #[view(getUtilizationRate)]
    fn get_utilization_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_utilization(
            self.cash().get().into_raw_units(),
            self.get_total_borrows().into_raw_units(),
            self.reserves().get().into_raw_units(),
        )
    }

    /// Per-second borrow rate (RAY) the model quotes for the stored state.
    #[view(getBorrowRate)]
    fn get_borrow_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let rate_params = self.current_rate_params();
        self.calc_borrow_rate(&self.get_utilization_rate(), &rate_params)
    }

    /// Per-second supply rate (RAY) the model quotes for the stored state.
    #[view(getSupplyRate)]
    fn get_supply_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = self.get_utilization_rate();
        let borrow_rate = self.calc_borrow_rate(&utilization, &self.current_rate_params());

        self.calc_supply_rate(&utilization, &borrow_rate, &self.params().get().reserve_factor)
    }

    /// Underlying value of one supply token (WAD).
    #[view(getExchangeRate)]
    fn get_exchange_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.rescale_half_up(&self.supply_index().get(), WAD_PRECISION)
    }

    fn load_position(&self, account: &ManagedAddress) -> AccountPosition<Self::Api> {
        let mapper = self.positions(account);
        if mapper.is_empty() {
            AccountPosition::new(self.params().get().asset_decimals)
        } else {
            mapper.get()
        }
    }

    /// Rate curve stored by the current interest rate model.
    fn current_rate_params(&self) -> RateModelParams<Self::Api> {
        self.model_rate_params(self.params().get().interest_rate_model).get()
    }

    #[storage_mapper_from_address("rate_params")]
    fn model_rate_params(
        &self,
        address: ManagedAddress,
    ) -> SingleValueMapper<RateModelParams<Self::Api>, ManagedAddress>;
}
