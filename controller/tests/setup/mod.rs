use crate::constants::*;

use common_proxies::{
    proxy_controller, proxy_interest_rate_model, proxy_market, proxy_price_oracle,
};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedDecimal,
    MultiValueEncoded, NumDecimals, ReturnsNewManagedAddress, ReturnsResult, TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CONTROLLER_PATH, controller::ContractBuilder);
    blockchain.register_contract(MARKET_PATH, market::ContractBuilder);
    blockchain.register_contract(PRICE_ORACLE_PATH, price_oracle::ContractBuilder);
    blockchain.register_contract(
        INTEREST_RATE_MODEL_PATH,
        interest_rate_model::ContractBuilder,
    );

    blockchain
}

/// Raw units of `amount` whole tokens.
pub fn units(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

/// WAD value of `amount` whole dollars.
pub fn dollars(amount: u64) -> BigUint<StaticApi> {
    units(amount, 18)
}

pub fn assert_close(actual: &BigUint<StaticApi>, expected: &BigUint<StaticApi>, tolerance: u64, message: &str) {
    let diff = if actual > expected {
        actual - expected
    } else {
        expected - actual
    };
    assert!(
        diff <= BigUint::from(tolerance),
        "{}: actual {:?}, expected {:?}",
        message,
        actual.to_u64(),
        expected.to_u64()
    );
}

pub struct ProtocolTestState {
    pub world: ScenarioWorld,
    pub controller_sc: ManagedAddress<StaticApi>,
    pub price_oracle_sc: ManagedAddress<StaticApi>,
    pub interest_rate_model_sc: ManagedAddress<StaticApi>,
    pub usdc_market: ManagedAddress<StaticApi>,
    pub wegld_market: ManagedAddress<StaticApi>,
}

impl ProtocolTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_owner(&mut world);
        world.current_block().block_timestamp(0);

        let price_oracle_sc = setup_price_oracle(&mut world);
        let interest_rate_model_sc = setup_interest_rate_model(&mut world);
        let controller_sc = setup_controller(&mut world, &price_oracle_sc);

        let usdc_market = setup_market(
            &mut world,
            USDC_TOKEN,
            USDC_DECIMALS,
            &controller_sc,
            &interest_rate_model_sc,
        );
        let wegld_market = setup_market(
            &mut world,
            WEGLD_TOKEN,
            WEGLD_DECIMALS,
            &controller_sc,
            &interest_rate_model_sc,
        );

        let mut state = Self {
            world,
            controller_sc,
            price_oracle_sc,
            interest_rate_model_sc,
            usdc_market,
            wegld_market,
        };

        let usdc_market = state.usdc_market.clone();
        let wegld_market = state.wegld_market.clone();
        state.support_market(&usdc_market);
        state.support_market(&wegld_market);
        state.set_collateral_factor(&usdc_market, BigUint::from(USDC_COLLATERAL_FACTOR));
        state.set_collateral_factor(&wegld_market, BigUint::from(WEGLD_COLLATERAL_FACTOR));

        state.set_price(USDC_TOKEN, dollars(USDC_PRICE_IN_DOLLARS));
        state.set_price(WEGLD_TOKEN, dollars(WEGLD_PRICE_IN_DOLLARS));

        state
    }

    pub fn market_of(&self, token_id: TestTokenIdentifier) -> ManagedAddress<StaticApi> {
        if token_id.as_bytes() == USDC_TOKEN.as_bytes() {
            self.usdc_market.clone()
        } else {
            self.wegld_market.clone()
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Controller administration
    pub fn support_market(&mut self, market: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .support_market(market)
            .run();
    }

    pub fn support_market_error(
        &mut self,
        from: &TestAddress,
        market: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .support_market(market)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_collateral_factor(
        &mut self,
        market: &ManagedAddress<StaticApi>,
        collateral_factor: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_collateral_factor(market, collateral_factor)
            .run();
    }

    pub fn set_collateral_factor_error(
        &mut self,
        market: &ManagedAddress<StaticApi>,
        collateral_factor: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_collateral_factor(market, collateral_factor)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_close_factor_error(&mut self, close_factor: BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_close_factor(close_factor)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_close_factor(&mut self, close_factor: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_close_factor(close_factor)
            .run();
    }

    pub fn set_liquidation_incentive(&mut self, liquidation_incentive: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_liquidation_incentive(liquidation_incentive)
            .run();
    }

    pub fn set_liquidation_incentive_error(
        &mut self,
        liquidation_incentive: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_liquidation_incentive(liquidation_incentive)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_max_entered_markets(&mut self, max_entered_markets: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_max_entered_markets(max_entered_markets)
            .run();
    }

    pub fn set_controller_price_oracle(&mut self, price_oracle: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .set_price_oracle(price_oracle)
            .run();
    }

    // Price oracle
    pub fn set_price(&mut self, token_id: TestTokenIdentifier, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier()), price)
            .run();
    }

    pub fn set_price_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        price: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier()), price)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_egld_price(&mut self, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(EgldOrEsdtTokenIdentifier::egld(), price)
            .run();
    }

    /// Pauses through the admin endpoint rather than the owner one.
    pub fn pause_price_oracle_as(&mut self, from: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .pause_oracle()
            .run();
    }

    pub fn pause_price_oracle_as_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .pause_oracle()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn unpause_price_oracle_as(&mut self, from: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .unpause_oracle()
            .run();
    }

    pub fn pause_price_oracle(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause_price_oracle(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .unpause_endpoint()
            .run();
    }

    pub fn get_price(&mut self, token_id: TestTokenIdentifier) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price(EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier()))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_price_error(&mut self, token_id: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .query()
            .to(self.price_oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price(EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier()))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Native EGLD market
    /// Deploys and lists a market for native EGLD, priced at $40 with a
    /// 50% collateral factor.
    pub fn add_egld_market(&mut self) -> ManagedAddress<StaticApi> {
        let controller_sc = self.controller_sc.clone();
        let interest_rate_model_sc = self.interest_rate_model_sc.clone();
        let egld_market = setup_egld_market(&mut self.world, &controller_sc, &interest_rate_model_sc);

        self.support_market(&egld_market);
        self.set_collateral_factor(&egld_market, BigUint::from(EGLD_COLLATERAL_FACTOR));
        self.set_egld_price(dollars(EGLD_PRICE_IN_DOLLARS));

        egld_market
    }

    pub fn supply_egld(
        &mut self,
        from: &TestAddress,
        egld_market: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(egld_market)
            .typed(proxy_market::MarketProxy)
            .mint()
            .egld(amount * BigUint::from(10u64).pow(EGLD_DECIMALS as u32))
            .returns(ReturnsResult)
            .run()
    }

    /// Repays `amount` of `debt_token` for `borrower` and seizes collateral
    /// in `collateral_market`.
    pub fn liquidate_account_in(
        &mut self,
        liquidator: &TestAddress,
        borrower: &TestAddress,
        debt_token: TestTokenIdentifier,
        collateral_market: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        let payment = EsdtTokenPayment::new(
            debt_token.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );
        let debt_market = self.market_of(debt_token);

        self.world
            .tx()
            .from(liquidator.to_managed_address())
            .to(debt_market)
            .typed(proxy_market::MarketProxy)
            .liquidate_borrow(borrower.to_managed_address(), collateral_market)
            .esdt(payment)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_account_in_error(
        &mut self,
        liquidator: &TestAddress,
        borrower: &TestAddress,
        debt_token: TestTokenIdentifier,
        collateral_market: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        let payment = EsdtTokenPayment::new(
            debt_token.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );
        let debt_market = self.market_of(debt_token);

        self.world
            .tx()
            .from(liquidator.to_managed_address())
            .to(debt_market)
            .typed(proxy_market::MarketProxy)
            .liquidate_borrow(borrower.to_managed_address(), collateral_market)
            .esdt(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn redeem_tokens_in(
        &mut self,
        from: &TestAddress,
        market: &ManagedAddress<StaticApi>,
        tokens: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .redeem(tokens)
            .run();
    }

    pub fn balance_of_in(
        &mut self,
        account: &TestAddress,
        market: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        let balance = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .balance_of(account.to_managed_address())
            .returns(ReturnsResult)
            .run();

        balance.into_raw_units().clone()
    }

    // Accounts
    pub fn enter_markets(&mut self, from: &TestAddress, markets: &[&ManagedAddress<StaticApi>]) {
        let mut args = MultiValueEncoded::new();
        for market in markets {
            args.push((*market).clone());
        }

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .enter_markets(args)
            .run();
    }

    pub fn enter_markets_error(
        &mut self,
        from: &TestAddress,
        markets: &[&ManagedAddress<StaticApi>],
        error_message: &[u8],
    ) {
        let mut args = MultiValueEncoded::new();
        for market in markets {
            args.push((*market).clone());
        }

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .enter_markets(args)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn exit_market(&mut self, from: &TestAddress, market: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .exit_market(market)
            .run();
    }

    pub fn exit_market_error(
        &mut self,
        from: &TestAddress,
        market: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .exit_market(market)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Core lending operations
    pub fn supply_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        let market = self.market_of(token_id);
        let payment = EsdtTokenPayment::new(
            token_id.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .mint()
            .esdt(payment)
            .run();
    }

    /// Sends `token_id` to the market of `market_token`.
    pub fn supply_asset_error(
        &mut self,
        from: &TestAddress,
        market_token: TestTokenIdentifier,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        let payment = EsdtTokenPayment::new(
            token_id.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );

        let market = self.market_of(market_token);

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .mint()
            .esdt(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Redeems raw supply tokens.
    pub fn redeem_tokens(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        tokens: BigUint<StaticApi>,
    ) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .redeem(tokens)
            .run();
    }

    pub fn redeem_tokens_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        tokens: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .redeem(tokens)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn redeem_underlying(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .redeem_underlying(amount * BigUint::from(10u64).pow(asset_decimals as u32))
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .borrow(amount * BigUint::from(10u64).pow(asset_decimals as u32))
            .run();
    }

    pub fn borrow_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .borrow(amount * BigUint::from(10u64).pow(asset_decimals as u32))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay_asset(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        let market = self.market_of(token_id);
        let payment = EsdtTokenPayment::new(
            token_id.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .repay_borrow()
            .esdt(payment)
            .run();
    }

    pub fn repay_asset_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        let market = self.market_of(token_id);
        let payment = EsdtTokenPayment::new(
            token_id.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .repay_borrow()
            .esdt(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay_asset_behalf(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) {
        let market = self.market_of(token_id);
        let payment = EsdtTokenPayment::new(
            token_id.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .repay_borrow_behalf(borrower.to_managed_address())
            .esdt(payment)
            .run();
    }

    /// Repays `amount` of `debt_token` for `borrower` and seizes collateral
    /// in the market of `collateral_token`.
    pub fn liquidate_account(
        &mut self,
        liquidator: &TestAddress,
        borrower: &TestAddress,
        debt_token: TestTokenIdentifier,
        collateral_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        let payment = EsdtTokenPayment::new(
            debt_token.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );
        let debt_market = self.market_of(debt_token);
        let collateral_market = self.market_of(collateral_token);

        self.world
            .tx()
            .from(liquidator.to_managed_address())
            .to(debt_market)
            .typed(proxy_market::MarketProxy)
            .liquidate_borrow(borrower.to_managed_address(), collateral_market)
            .esdt(payment)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_account_error(
        &mut self,
        liquidator: &TestAddress,
        borrower: &TestAddress,
        debt_token: TestTokenIdentifier,
        collateral_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
        error_message: &[u8],
    ) {
        let payment = EsdtTokenPayment::new(
            debt_token.to_token_identifier(),
            0,
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
        );
        let debt_market = self.market_of(debt_token);
        let collateral_market = self.market_of(collateral_token);

        self.world
            .tx()
            .from(liquidator.to_managed_address())
            .to(debt_market)
            .typed(proxy_market::MarketProxy)
            .liquidate_borrow(borrower.to_managed_address(), collateral_market)
            .esdt(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn accrue_interest(&mut self, token_id: TestTokenIdentifier) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(market)
            .typed(proxy_market::MarketProxy)
            .accrue_interest()
            .run();
    }

    // Market administration
    pub fn reduce_reserves(&mut self, token_id: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(market)
            .typed(proxy_market::MarketProxy)
            .reduce_reserves(amount)
            .run();
    }

    pub fn reduce_reserves_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .reduce_reserves(amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_reserve_factor(&mut self, token_id: TestTokenIdentifier, reserve_factor: BigUint<StaticApi>) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(market)
            .typed(proxy_market::MarketProxy)
            .set_reserve_factor(reserve_factor)
            .run();
    }

    pub fn set_reserve_factor_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        reserve_factor: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(market)
            .typed(proxy_market::MarketProxy)
            .set_reserve_factor(reserve_factor)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_interest_rate_model(
        &mut self,
        token_id: TestTokenIdentifier,
        interest_rate_model: &ManagedAddress<StaticApi>,
    ) {
        let market = self.market_of(token_id);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(market)
            .typed(proxy_market::MarketProxy)
            .set_interest_rate_model(interest_rate_model)
            .run();
    }

    // Views
    pub fn balance_of(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let balance = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .balance_of(account.to_managed_address())
            .returns(ReturnsResult)
            .run();

        balance.into_raw_units().clone()
    }

    pub fn balance_of_underlying(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let balance = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .balance_of_underlying(account.to_managed_address())
            .returns(ReturnsResult)
            .run();

        balance.into_raw_units().clone()
    }

    pub fn borrow_balance(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let balance = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .borrow_balance_stored(account.to_managed_address())
            .returns(ReturnsResult)
            .run();

        balance.into_raw_units().clone()
    }

    pub fn total_borrows(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let total = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .get_total_borrows()
            .returns(ReturnsResult)
            .run();

        total.into_raw_units().clone()
    }

    pub fn total_reserves(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let reserves = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .reserves()
            .returns(ReturnsResult)
            .run();

        reserves.into_raw_units().clone()
    }

    pub fn cash(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let cash = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .cash()
            .returns(ReturnsResult)
            .run();

        cash.into_raw_units().clone()
    }

    pub fn borrow_index(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let index = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .borrow_index()
            .returns(ReturnsResult)
            .run();

        index.into_raw_units().clone()
    }

    pub fn supply_index(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let index = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .supply_index()
            .returns(ReturnsResult)
            .run();

        index.into_raw_units().clone()
    }

    pub fn exchange_rate(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let rate = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .get_exchange_rate()
            .returns(ReturnsResult)
            .run();

        rate.into_raw_units().clone()
    }

    pub fn utilization_rate(&mut self, token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let market = self.market_of(token_id);
        let utilization = self
            .world
            .query()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .get_utilization_rate()
            .returns(ReturnsResult)
            .run();

        utilization.into_raw_units().clone()
    }

    /// Returns `(liquidity, shortfall)`, both raw WAD.
    pub fn account_liquidity(&mut self, account: &TestAddress) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let (liquidity, shortfall) = self
            .world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_account_liquidity(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_tuple();

        (
            liquidity.into_raw_units().clone(),
            shortfall.into_raw_units().clone(),
        )
    }

    pub fn hypothetical_account_liquidity(
        &mut self,
        account: &TestAddress,
        token_id: TestTokenIdentifier,
        redeem_tokens: BigUint<StaticApi>,
        borrow_amount: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let market = self.market_of(token_id);
        let (liquidity, shortfall) = self
            .world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_hypothetical_account_liquidity(
                account.to_managed_address(),
                market,
                redeem_tokens,
                borrow_amount,
            )
            .returns(ReturnsResult)
            .run()
            .into_tuple();

        (
            liquidity.into_raw_units().clone(),
            shortfall.into_raw_units().clone(),
        )
    }

    pub fn check_membership(&mut self, account: &TestAddress, token_id: TestTokenIdentifier) -> bool {
        let market = self.market_of(token_id);
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .check_membership(account.to_managed_address(), market)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_listed(&mut self, market: &ManagedAddress<StaticApi>) -> bool {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .is_listed(market)
            .returns(ReturnsResult)
            .run()
    }

    pub fn all_markets(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_all_markets()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn liquidate_calculate_seize_tokens(
        &mut self,
        debt_token: TestTokenIdentifier,
        collateral_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        asset_decimals: usize,
    ) -> BigUint<StaticApi> {
        let repay_amount = ManagedDecimal::from_raw_units(
            amount * BigUint::from(10u64).pow(asset_decimals as u32),
            asset_decimals,
        );
        let debt_market = self.market_of(debt_token);
        let collateral_market = self.market_of(collateral_token);

        let tokens = self
            .world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .liquidate_calculate_seize_tokens(debt_market, collateral_market,
                repay_amount,
            )
            .returns(ReturnsResult)
            .run();

        tokens.into_raw_units().clone()
    }
}

pub fn setup_owner(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
        .esdt_balance(WEGLD_TOKEN, units(1_000_000, WEGLD_DECIMALS));
}

pub fn setup_accounts(state: &mut ProtocolTestState, supplier: TestAddress, borrower: TestAddress) {
    state
        .world
        .account(supplier)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, units(100_000, USDC_DECIMALS))
        .esdt_balance(WEGLD_TOKEN, units(1_000, WEGLD_DECIMALS))
        .esdt_balance(XOXNO_TOKEN, units(1_000, XOXNO_DECIMALS));

    state
        .world
        .account(borrower)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, units(10_000, USDC_DECIMALS))
        .esdt_balance(WEGLD_TOKEN, units(1_000, WEGLD_DECIMALS));
}

pub fn setup_egld_market(
    world: &mut ScenarioWorld,
    controller: &ManagedAddress<StaticApi>,
    interest_rate_model: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_market::MarketProxy)
        .init(
            EgldOrEsdtTokenIdentifier::egld(),
            EGLD_DECIMALS,
            controller,
            interest_rate_model,
            BigUint::from(RESERVE_FACTOR),
        )
        .code(MARKET_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_price_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_oracle::PriceOracleProxy)
        .init()
        .code(PRICE_ORACLE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_interest_rate_model(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_interest_rate_model::InterestRateModelProxy)
        .init(
            BigUint::from(BASE_RATE_PER_YEAR),
            BigUint::from(MULTIPLIER_PER_YEAR),
            BigUint::from(JUMP_MULTIPLIER_PER_YEAR),
            BigUint::from(KINK),
        )
        .code(INTEREST_RATE_MODEL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_controller(
    world: &mut ScenarioWorld,
    price_oracle: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let controller_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_controller::ControllerProxy)
        .init()
        .code(CONTROLLER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(controller_sc.clone())
        .typed(proxy_controller::ControllerProxy)
        .set_price_oracle(price_oracle)
        .run();

    controller_sc
}

pub fn setup_market(
    world: &mut ScenarioWorld,
    token_id: TestTokenIdentifier,
    asset_decimals: usize,
    controller: &ManagedAddress<StaticApi>,
    interest_rate_model: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_market::MarketProxy)
        .init(
            EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier()),
            asset_decimals,
            controller,
            interest_rate_model,
            BigUint::from(RESERVE_FACTOR),
        )
        .code(MARKET_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
