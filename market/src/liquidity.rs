multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{ERROR_INSUFFICIENT_CASH, ERROR_NO_BORROW_TO_REPAY, ERROR_REDEEM_EXCEEDS_BALANCE};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues interest up to the current block.
    ///
    /// Every other endpoint does the same implicitly before touching balances.
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self) {
        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);
    }

    /// Supplies the transferred underlying and credits the caller with supply
    /// tokens worth `amount / supply_index`.
    ///
    /// No controller approval is needed, supplying never increases risk.
    ///
    /// # Returns
    /// - The supply tokens minted.
    #[payable]
    #[endpoint(mint)]
    fn mint(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);
        let minter = self.blockchain().get_caller();

        self.global_sync(&mut cache);

        let tokens = cache.get_scaled_supply_amount(&amount);
        let mut position = self.get_position(&cache, &minter);

        position.supply_tokens += &tokens;
        cache.supplied += &tokens;
        cache.cash += &amount;

        self.store_position(&minter, &position);
        self.mint_event(&minter, &amount, &tokens);

        tokens
    }

    /// Burns `tokens` supply tokens of the caller and sends back the
    /// underlying they are worth.
    ///
    /// # Returns
    /// - The underlying amount sent.
    #[endpoint(redeem)]
    fn redeem(&self, tokens: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_positive(&tokens);
        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let tokens = cache.get_decimal_value(&tokens);
        let amount = cache.get_original_supply_amount(&tokens);

        self.redeem_fresh(&mut cache, tokens, amount)
    }

    /// Redeems enough supply tokens to receive `amount` of underlying.
    ///
    /// The token amount is rounded up so the account never receives more
    /// than its tokens are worth.
    #[endpoint(redeemUnderlying)]
    fn redeem_underlying(&self, amount: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_positive(&amount);
        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let amount = cache.get_decimal_value(&amount);
        let tokens = self.rescale_ceil(
            &self.div_ceil(&amount, &cache.supply_index, common_constants::RAY_PRECISION),
            cache.params.asset_decimals,
        );

        self.redeem_fresh(&mut cache, tokens, amount)
    }

    fn redeem_fresh(
        &self,
        cache: &mut Cache<Self>,
        tokens: ManagedDecimal<Self::Api, NumDecimals>,
        amount: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let redeemer = self.blockchain().get_caller();
        let mut position = self.get_position(cache, &redeemer);
        require!(position.supply_tokens >= tokens, ERROR_REDEEM_EXCEEDS_BALANCE);

        self.require_redeem_allowed(&redeemer, &tokens);
        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        position.supply_tokens -= &tokens;
        cache.supplied = self.saturating_sub(&cache.supplied, &tokens);
        cache.cash -= &amount;

        self.store_position(&redeemer, &position);
        self.send_asset(cache, &amount, &redeemer);
        self.redeem_event(&redeemer, &amount, &tokens);

        amount
    }

    /// Lends `amount` of underlying to the caller.
    ///
    /// The controller must approve the borrow first; it enters the market on
    /// the borrower's behalf when needed.
    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) {
        self.require_positive(&amount);
        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let borrower = self.blockchain().get_caller();
        let amount = cache.get_decimal_value(&amount);

        self.require_borrow_allowed(&borrower, &amount);
        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        let scaled = cache.get_scaled_borrow_amount(&amount);
        let mut position = self.get_position(&cache, &borrower);

        position.borrow_scaled += &scaled;
        cache.borrowed += &scaled;
        cache.cash -= &amount;

        self.store_position(&borrower, &position);
        self.send_asset(&cache, &amount, &borrower);
        self.borrow_event(&borrower, &amount, &position);
    }

    /// Repays the caller's own borrow with the transferred underlying.
    ///
    /// Any amount above the outstanding debt is refunded in the same call.
    #[payable]
    #[endpoint(repayBorrow)]
    fn repay_borrow(&self) {
        let caller = self.blockchain().get_caller();
        self.repay_borrow_fresh(&caller, &caller);
    }

    /// Repays the borrow of `borrower`, paid by the caller.
    #[payable]
    #[endpoint(repayBorrowBehalf)]
    fn repay_borrow_behalf(&self, borrower: ManagedAddress) {
        let payer = self.blockchain().get_caller();
        self.repay_borrow_fresh(&payer, &borrower);
    }

    fn repay_borrow_fresh(&self, payer: &ManagedAddress, borrower: &ManagedAddress) {
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);
        self.global_sync(&mut cache);

        let mut position = self.get_position(&cache, borrower);
        require!(position.has_borrow(), ERROR_NO_BORROW_TO_REPAY);

        let over_paid = self.apply_repayment(&mut cache, &mut position, &amount);
        let repaid = amount - over_paid.clone();

        self.store_position(borrower, &position);
        self.send_asset(&cache, &over_paid, payer);
        self.repay_borrow_event(payer, borrower, &repaid, &position);
    }
}
