multiversx_sc::imports!();

use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Latest price posted for an asset.
    ///
    /// The key is read directly by the controller.
    #[storage_mapper("prices")]
    fn prices(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
