use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

/// Stored value of the `rounds` mapper.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub decimals: u8,
    pub round: u32,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub from: ManagedBuffer<M>,
    pub to: ManagedBuffer<M>,
    pub price: BigUint<M>,
    pub decimals: u8,
    pub timestamp: u64,
    pub round: u32,
}
