multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + common_events::EventsModule
    + common_access::AccessModule
{
    /// The deployer becomes the admin posting prices. The oracle starts
    /// unpaused.
    #[init]
    fn init(&self) {
        self.admin().set(self.blockchain().get_caller());
        self.set_paused(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Pauses the oracle on behalf of the admin. The owner keeps the
    /// `pause` endpoint of the pause module as well.
    #[endpoint(pauseOracle)]
    fn pause_oracle(&self) {
        self.caller_as_admin();
        self.set_paused(true);
    }

    #[endpoint(unpauseOracle)]
    fn unpause_oracle(&self) {
        self.caller_as_admin();
        self.set_paused(false);
    }
}
