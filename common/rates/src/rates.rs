#![no_std]
use common_constants::{RAY_PRECISION, SECONDS_PER_YEAR};
use common_structs::{MarketIndex, RateModelParams};

multiversx_sc::imports!();

/// The InterestRates module provides the rate curve, the capital utilization
/// and the index accrual used by every market.
///
/// **Scope**: Shared by the interest rate model (which quotes rates), the
/// markets (which commit accrued indexes) and the controller (which only
/// simulates accrual to price positions at the current timestamp).
///
/// **Goal**: A single implementation of the accrual math, so that a market and
/// the controller always agree on the value of a scaled balance.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Converts an annual WAD rate into a per-second RAY rate.
    fn annual_to_per_second(&self, annual_rate: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        let annual = self.to_decimal_wad(annual_rate);
        let seconds = self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0);
        self.div_half_up(&annual, &seconds, RAY_PRECISION)
    }

    /// Builds the stored rate curve out of annual WAD arguments.
    ///
    /// # Arguments
    /// - `base_rate_per_year`: Rate charged at zero utilization (WAD).
    /// - `multiplier_per_year`: Slope of the curve up to the kink (WAD).
    /// - `jump_multiplier_per_year`: Slope of the curve after the kink (WAD).
    /// - `kink`: Utilization at which the jump slope applies (WAD).
    ///
    /// # Returns
    /// - `RateModelParams`: Per-second rates and the kink, all RAY.
    fn to_rate_model_params(
        &self,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) -> RateModelParams<Self::Api> {
        RateModelParams {
            base_rate: self.annual_to_per_second(base_rate_per_year),
            multiplier: self.annual_to_per_second(multiplier_per_year),
            jump_multiplier: self.annual_to_per_second(jump_multiplier_per_year),
            kink: self.to_decimal_wad(kink).rescale(RAY_PRECISION),
        }
    }

    /// Computes the share of available capital currently lent out.
    ///
    /// **Formula**: `borrows / (cash + borrows - reserves)`
    ///
    /// Raw units of one asset are used on both sides, so the ratio does not
    /// depend on the asset decimals.
    ///
    /// # Returns
    /// - Utilization in RAY. Zero without borrows, one RAY when the reserves
    ///   cover all the capital.
    fn calc_utilization(
        &self,
        cash: &BigUint,
        borrows: &BigUint,
        reserves: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if borrows == &BigUint::zero() {
            return self.ray_zero();
        }

        let total = cash + borrows;
        if reserves >= &total {
            return self.ray();
        }

        let available = total - reserves;
        self.div_half_up(
            &self.to_decimal(borrows.clone(), 0),
            &self.to_decimal(available, 0),
            RAY_PRECISION,
        )
    }

    /// Calculates the per-second borrow rate for a given utilization.
    ///
    /// **Formula**:
    /// - If `utilization <= kink`: `base + utilization * multiplier`.
    /// - Otherwise: `base + kink * multiplier + (utilization - kink) * jump_multiplier`.
    ///
    /// # Arguments
    /// - `utilization`: Current utilization (RAY).
    /// - `params`: Rate curve of the model.
    ///
    /// # Returns
    /// - Per-second borrow rate (RAY).
    fn calc_borrow_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &RateModelParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if utilization <= &params.kink {
            return params.base_rate.clone()
                + self.mul_half_up(utilization, &params.multiplier, RAY_PRECISION);
        }

        let normal_rate = params.base_rate.clone()
            + self.mul_half_up(&params.kink, &params.multiplier, RAY_PRECISION);
        let excess_utilization = utilization.clone() - params.kink.clone();

        normal_rate + self.mul_half_up(&excess_utilization, &params.jump_multiplier, RAY_PRECISION)
    }

    /// Calculates the per-second rate earned by suppliers.
    ///
    /// **Formula**: `borrow_rate * utilization * (1 - reserve_factor)`
    ///
    /// # Arguments
    /// - `utilization`: Current utilization (RAY).
    /// - `borrow_rate`: Per-second borrow rate (RAY).
    /// - `reserve_factor`: Share of interest kept by the protocol (WAD).
    fn calc_supply_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        reserve_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let retained = self.saturating_sub(&self.wad(), reserve_factor);
        let gross_rate = self.mul_half_up(borrow_rate, utilization, RAY_PRECISION);

        self.mul_half_up(&gross_rate, &retained, RAY_PRECISION)
    }

    /// Linear growth factor over `elapsed` seconds: `1 + rate * elapsed` (RAY).
    fn calc_interest_factor(
        &self,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let elapsed_decimal = self.to_decimal(BigUint::from(elapsed), 0);
        self.ray() + self.mul_half_up(borrow_rate, &elapsed_decimal, RAY_PRECISION)
    }

    /// Converts a scaled balance into underlying units of the asset.
    fn scaled_to_original(
        &self,
        scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let original = self.mul_half_up(scaled, index, RAY_PRECISION);
        self.rescale_half_up(&original, asset_decimals)
    }

    /// Converts an underlying amount into a scaled balance.
    fn original_to_scaled(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled = self.div_half_up(amount, index, RAY_PRECISION);
        self.rescale_half_up(&scaled, asset_decimals)
    }

    /// Raises the supply index so that current suppliers share `interest`
    /// pro rata.
    ///
    /// **Formula**: `supply_index * (1 + interest / (supplied * supply_index))`
    ///
    /// The index is left untouched when nothing is supplied or nothing is
    /// distributed.
    fn grow_supply_index(
        &self,
        supplied: &ManagedDecimal<Self::Api, NumDecimals>,
        supply_index: &ManagedDecimal<Self::Api, NumDecimals>,
        interest: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(supplied) || self.is_zero(interest) {
            return supply_index.clone();
        }

        let supplied_value = self.mul_half_up(supplied, supply_index, RAY_PRECISION);
        let growth = self.div_half_up(interest, &supplied_value, RAY_PRECISION);

        self.mul_half_up(supply_index, &(self.ray() + growth), RAY_PRECISION)
    }

    /// Brings the indexes of a market forward by `elapsed` seconds.
    ///
    /// **Process**:
    /// 1. Grows the borrow index by the linear interest factor.
    /// 2. Values the accrued interest on the total scaled borrows.
    /// 3. Keeps `reserve_factor` of it as reserves.
    /// 4. Distributes the rest to suppliers through the supply index, or adds
    ///    it to reserves when nothing is supplied.
    ///
    /// # Arguments
    /// - `current`: Indexes at the last accrual.
    /// - `supplied`: Total scaled supply of the market.
    /// - `borrowed`: Total scaled borrows of the market.
    /// - `borrow_rate`: Per-second borrow rate for the elapsed period (RAY).
    /// - `reserve_factor`: Protocol share of interest (WAD).
    /// - `asset_decimals`: Decimals of the market asset.
    /// - `elapsed`: Seconds since the last accrual.
    ///
    /// # Returns
    /// - `(MarketIndex, ManagedDecimal)`: The new indexes and the amount of
    ///   interest added to reserves, in asset decimals.
    fn accrue_indexes(
        &self,
        current: &MarketIndex<Self::Api>,
        supplied: &ManagedDecimal<Self::Api, NumDecimals>,
        borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        reserve_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: usize,
        elapsed: u64,
    ) -> (MarketIndex<Self::Api>, ManagedDecimal<Self::Api, NumDecimals>) {
        if elapsed == 0 {
            return (current.clone(), self.zero_with(asset_decimals));
        }

        let factor = self.calc_interest_factor(borrow_rate, elapsed);
        let borrow_index = self.mul_half_up(&current.borrow_index, &factor, RAY_PRECISION);

        let old_debt = self.scaled_to_original(borrowed, &current.borrow_index, asset_decimals);
        let new_debt = self.scaled_to_original(borrowed, &borrow_index, asset_decimals);
        let interest = self.saturating_sub(&new_debt, &old_debt);

        let protocol_share = self.mul_half_up(&interest, reserve_factor, RAY_PRECISION);
        let mut reserves_added = self.rescale_half_up(&protocol_share, asset_decimals);
        let supplier_interest = self.saturating_sub(&interest, &reserves_added);

        // Without suppliers the whole interest stays with the protocol
        if self.is_zero(supplied) {
            reserves_added += &supplier_interest;
        }

        let supply_index =
            self.grow_supply_index(supplied, &current.supply_index, &supplier_interest);

        (
            MarketIndex {
                supply_index,
                borrow_index,
            },
            reserves_added,
        )
    }
}
