multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("price_update")]
    fn price_update_event(
        &self,
        #[indexed] from: &ManagedBuffer,
        #[indexed] to: &ManagedBuffer,
        #[indexed] round: u32,
        #[indexed] price: &BigUint,
        timestamp: u64,
    );

    #[event("feeder")]
    fn feeder_event(&self, #[indexed] feeder: &ManagedAddress, active: bool);
}
