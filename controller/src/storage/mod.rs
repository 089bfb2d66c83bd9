use common_structs::{AccountPosition, MarketConfig, MarketParams, RateModelParams, TimestampedPrice};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the set of listed markets
    /// Only listed markets may call the hooks and count towards account liquidity.
    #[view(getAllMarkets)]
    #[storage_mapper("markets")]
    fn markets(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the risk configuration of a listed market
    #[view(getMarketConfig)]
    #[storage_mapper("market_config")]
    fn market_config(&self, market: &ManagedAddress) -> SingleValueMapper<MarketConfig<Self::Api>>;

    /// Get the markets an account entered
    /// Supply in these markets counts as collateral.
    #[view(getAssetsIn)]
    #[storage_mapper("account_markets")]
    fn account_markets(&self, account: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the price oracle address
    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the close factor (WAD)
    /// The maximum share of a borrow one liquidation may repay.
    #[view(getCloseFactor)]
    #[storage_mapper("close_factor")]
    fn close_factor(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Get the liquidation incentive (WAD)
    /// Multiplier applied to the repaid value when computing the collateral seized.
    #[view(getLiquidationIncentive)]
    #[storage_mapper("liquidation_incentive")]
    fn liquidation_incentive(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getMaxEnteredMarkets)]
    #[storage_mapper("max_entered_markets")]
    fn max_entered_markets(&self) -> SingleValueMapper<usize>;

    /// PROXY STORAGE ///
    ///
    /// Retrieves the parameters of a market: asset, decimals, reserve factor
    /// and interest rate model.
    #[storage_mapper_from_address("params")]
    fn market_params(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<MarketParams<Self::Api>, ManagedAddress>;

    /// Retrieves the controller a market is bound to.
    #[storage_mapper_from_address("controller")]
    fn market_controller(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    /// Retrieves the total scaled supply of a market, in asset decimals.
    #[storage_mapper_from_address("supplied")]
    fn market_supplied(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    /// Retrieves the total scaled borrows of a market, in asset decimals.
    #[storage_mapper_from_address("borrowed")]
    fn market_borrowed(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("cash")]
    fn market_cash(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("reserves")]
    fn market_reserves(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    /// Retrieves the borrow index of a market at its last accrual.
    #[storage_mapper_from_address("borrow_index")]
    fn market_borrow_index(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    /// Retrieves the supply index of a market at its last accrual.
    #[storage_mapper_from_address("supply_index")]
    fn market_supply_index(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("last_timestamp")]
    fn market_last_timestamp(
        &self,
        market_address: ManagedAddress,
    ) -> SingleValueMapper<u64, ManagedAddress>;

    /// Retrieves the scaled balances of an account in a market.
    #[storage_mapper_from_address("positions")]
    fn market_positions(
        &self,
        market_address: ManagedAddress,
        account: ManagedAddress,
    ) -> SingleValueMapper<AccountPosition<Self::Api>, ManagedAddress>;

    /// Retrieves the rate curve of an interest rate model.
    #[storage_mapper_from_address("rate_params")]
    fn model_rate_params(
        &self,
        model_address: ManagedAddress,
    ) -> SingleValueMapper<RateModelParams<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("prices")]
    fn oracle_prices(
        &self,
        oracle_address: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("pause_module:paused")]
    fn oracle_paused_state(
        &self,
        oracle_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}
