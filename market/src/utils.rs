multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::Cache, storage};

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_SEIZE_TOO_MUCH, ERROR_TRANSFER_FAILED,
};
use common_proxies::{proxy_controller, proxy_interest_rate_model};
use common_structs::AccountPosition;

#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues interest from the last accrual up to the current block.
    ///
    /// **Process**:
    /// 1. Returns early when no time has passed, so calling it twice in the
    ///    same block is a no-op.
    /// 2. Quotes the per-second borrow rate from the interest rate model.
    /// 3. Grows both indexes and moves the protocol share into reserves.
    ///
    /// # Arguments
    /// - `cache`: Mutable market state, committed when dropped.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        let delta = cache.timestamp - cache.last_timestamp;
        if delta == 0 {
            return;
        }

        let borrow_rate = self.fetch_borrow_rate(cache);
        let (index, reserves_added) = self.accrue_indexes(
            &cache.get_index(),
            &cache.supplied,
            &cache.borrowed,
            &borrow_rate,
            &cache.params.reserve_factor,
            cache.params.asset_decimals,
            delta,
        );

        cache.supply_index = index.supply_index;
        cache.borrow_index = index.borrow_index;
        cache.reserves += &reserves_added;
        cache.last_timestamp = cache.timestamp;

        self.accrue_interest_event(
            cache.timestamp,
            &cache.supply_index,
            &cache.borrow_index,
            &cache.reserves,
            &borrow_rate,
        );
    }

    fn fetch_borrow_rate(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.tx()
            .to(&cache.params.interest_rate_model)
            .typed(proxy_interest_rate_model::InterestRateModelProxy)
            .get_borrow_rate(
                cache.cash.into_raw_units(),
                cache.get_total_borrows().into_raw_units(),
                cache.reserves.into_raw_units(),
            )
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.params.asset_id.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Reads the single payment of the call, which must be a positive
    /// amount of the market asset.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_TRANSFER_FAILED);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        cache.get_decimal_value(&amount)
    }

    fn require_positive(&self, amount: &BigUint) {
        require!(*amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
    }

    fn get_position(&self, cache: &Cache<Self>, account: &ManagedAddress) -> AccountPosition<Self::Api> {
        let mapper = self.positions(account);
        if mapper.is_empty() {
            AccountPosition::new(cache.params.asset_decimals)
        } else {
            mapper.get()
        }
    }

    /// Stores the position, or clears it once both balances are zero.
    fn store_position(&self, account: &ManagedAddress, position: &AccountPosition<Self::Api>) {
        if position.is_empty() {
            self.positions(account).clear();
        } else {
            self.positions(account).set(position);
        }
    }

    /// Splits a repayment into the scaled debt it clears and the part paid
    /// above the outstanding debt, which is refunded.
    ///
    /// # Returns
    /// - `(scaled_amount_to_repay, over_paid_amount)`
    #[inline(always)]
    fn determine_repayment_details(
        &self,
        cache: &Cache<Self>,
        position_scaled_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        payment_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let current_debt = cache.get_original_borrow_amount(position_scaled_amount);

        if *payment_amount >= current_debt {
            let over_paid = payment_amount.clone() - current_debt;
            (position_scaled_amount.clone(), over_paid)
        } else {
            let payment_scaled = cache.get_scaled_borrow_amount(payment_amount);
            let capped = self.get_min(payment_scaled, position_scaled_amount.clone());
            (capped, cache.zero.clone())
        }
    }

    /// Reduces the borrower's debt by `amount` and books the payment as cash.
    ///
    /// # Returns
    /// - The part of `amount` above the outstanding debt.
    fn apply_repayment(
        &self,
        cache: &mut Cache<Self>,
        position: &mut AccountPosition<Self::Api>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (scaled_repaid, over_paid) =
            self.determine_repayment_details(cache, &position.borrow_scaled, amount);

        position.borrow_scaled -= &scaled_repaid;
        cache.borrowed = self.saturating_sub(&cache.borrowed, &scaled_repaid);
        cache.cash += &(amount.clone() - over_paid.clone());

        over_paid
    }

    /// Moves supply tokens from the borrower to the liquidator.
    fn transfer_seized_tokens(
        &self,
        borrower_position: &mut AccountPosition<Self::Api>,
        liquidator: &ManagedAddress,
        seize_tokens: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: usize,
    ) {
        require!(
            borrower_position.supply_tokens >= *seize_tokens,
            ERROR_SEIZE_TOO_MUCH
        );
        borrower_position.supply_tokens -= seize_tokens;

        let mut liquidator_position = if self.positions(liquidator).is_empty() {
            AccountPosition::new(asset_decimals)
        } else {
            self.positions(liquidator).get()
        };
        liquidator_position.supply_tokens += seize_tokens;
        self.store_position(liquidator, &liquidator_position);
    }

    fn require_redeem_allowed(
        &self,
        redeemer: &ManagedAddress,
        tokens: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.tx()
            .to(self.controller().get())
            .typed(proxy_controller::ControllerProxy)
            .redeem_allowed(redeemer, tokens.clone())
            .sync_call();
    }

    fn require_borrow_allowed(
        &self,
        borrower: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.tx()
            .to(self.controller().get())
            .typed(proxy_controller::ControllerProxy)
            .borrow_allowed(borrower, amount.clone())
            .sync_call();
    }
}
