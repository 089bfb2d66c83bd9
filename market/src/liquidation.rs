multiversx_sc::imports!();

use common_errors::{ERROR_LIQUIDATOR_IS_BORROWER, ERROR_NO_BORROW_TO_REPAY};
use common_proxies::{proxy_controller, proxy_market};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Repays part of an underwater borrow in this market and seizes
    /// collateral supply tokens of the borrower in `collateral_market`.
    ///
    /// **Process**:
    /// 1. Accrues interest and asks the controller whether the repayment is
    ///    allowed (shortfall and close factor).
    /// 2. Applies the repayment; anything above the outstanding debt is refunded.
    /// 3. Asks the controller how many collateral tokens the actual repayment
    ///    is worth, incentive included.
    /// 4. Moves those tokens from the borrower to the liquidator, in place when
    ///    the collateral is this market, through `seize` otherwise.
    ///
    /// # Arguments
    /// - `borrower`: The account being liquidated.
    /// - `collateral_market`: The market whose supply tokens are seized.
    ///
    /// # Returns
    /// - The supply tokens seized.
    #[payable]
    #[endpoint(liquidateBorrow)]
    fn liquidate_borrow(
        &self,
        borrower: ManagedAddress,
        collateral_market: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let liquidator = self.blockchain().get_caller();
        require!(liquidator != borrower, ERROR_LIQUIDATOR_IS_BORROWER);

        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);
        self.global_sync(&mut cache);

        let mut position = self.get_position(&cache, &borrower);
        require!(position.has_borrow(), ERROR_NO_BORROW_TO_REPAY);

        let controller = self.controller().get();
        self.tx()
            .to(&controller)
            .typed(proxy_controller::ControllerProxy)
            .liquidate_borrow_allowed(&collateral_market, &borrower, amount.clone())
            .sync_call();

        let over_paid = self.apply_repayment(&mut cache, &mut position, &amount);
        let repaid = amount - over_paid.clone();

        let own_address = self.blockchain().get_sc_address();
        let seize_tokens = self
            .tx()
            .to(&controller)
            .typed(proxy_controller::ControllerProxy)
            .liquidate_calculate_seize_tokens(&own_address, &collateral_market, repaid.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();

        if collateral_market == own_address {
            self.transfer_seized_tokens(
                &mut position,
                &liquidator,
                &seize_tokens,
                cache.params.asset_decimals,
            );
        } else {
            self.tx()
                .to(&collateral_market)
                .typed(proxy_market::MarketProxy)
                .seize(&liquidator, &borrower, seize_tokens.clone())
                .sync_call();
        }

        self.store_position(&borrower, &position);
        self.send_asset(&cache, &over_paid, &liquidator);

        self.repay_borrow_event(&liquidator, &borrower, &repaid, &position);
        self.liquidate_borrow_event(
            &liquidator,
            &borrower,
            &repaid,
            &collateral_market,
            &seize_tokens,
        );

        seize_tokens
    }

    /// Transfers `seize_tokens` supply tokens from `borrower` to `liquidator`.
    ///
    /// Only callable by another listed market of the same controller, in the
    /// middle of its `liquidateBorrow`.
    #[endpoint(seize)]
    fn seize(
        &self,
        liquidator: ManagedAddress,
        borrower: ManagedAddress,
        seize_tokens: ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(liquidator != borrower, ERROR_LIQUIDATOR_IS_BORROWER);

        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let borrowed_market = self.blockchain().get_caller();
        self.tx()
            .to(self.controller().get())
            .typed(proxy_controller::ControllerProxy)
            .seize_allowed(&borrowed_market, &liquidator, &borrower)
            .sync_call();

        let seize_tokens = self.rescale_half_up(&seize_tokens, cache.params.asset_decimals);
        let mut position = self.get_position(&cache, &borrower);
        self.transfer_seized_tokens(
            &mut position,
            &liquidator,
            &seize_tokens,
            cache.params.asset_decimals,
        );
        self.store_position(&borrower, &position);
    }
}
