use crate::structs::TimestampedPrice;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getFeeders)]
    #[storage_mapper("feeders")]
    fn feeders(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Latest price per pair. The key is read cross-contract by the ledger, keep it stable.
    #[storage_mapper("rounds")]
    fn rounds(
        &self,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
