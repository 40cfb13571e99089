#![no_std]

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_ASSET_ALREADY_SUPPORTED: &[u8] = b"Asset already supported.";

pub static ERROR_INVALID_PAYMENT: &[u8] =
    b"Invalid payment, expected a single fungible token transfer.";

pub static ERROR_NOT_SUPPLIED: &[u8] = b"Nothing supplied for this asset.";

pub static ERROR_INSUFFICIENT_SUPPLY_BALANCE: &[u8] =
    b"Cannot withdraw more than supplied.";

pub static ERROR_OUTSTANDING_LOAN_BLOCKS_WITHDRAWAL: &[u8] =
    b"Not allowed before repaying existing loan.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] =
    b"Not enough collateral available for this loan.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity in the pool.";

pub static ERROR_NO_OUTSTANDING_LOAN: &[u8] = b"No outstanding loan for this asset.";

pub static ERROR_REPAY_EXCEEDS_DEBT: &[u8] = b"Cannot repay more than the outstanding debt.";

pub static ERROR_UPKEEP_NOT_DUE: &[u8] = b"Upkeep not needed.";

pub static ERROR_UNAUTHORIZED: &[u8] = b"Caller is not allowed to liquidate.";

pub static ERROR_HEALTH_FACTOR_NOT_LOW: &[u8] = b"Health not low enough for liquidation.";

pub static ERROR_ORACLE_UNAVAILABLE: &[u8] = b"Price feed unavailable for this asset.";

pub static ERROR_INVALID_UPKEEP_INTERVAL: &[u8] = b"Upkeep interval must be greater than zero.";

pub static ERROR_NO_MARKETS: &[u8] = b"At least one market must be listed.";

pub static ERROR_INVALID_AGGREGATOR: &[u8] = b"Invalid price aggregator address.";

pub static ERROR_INVALID_TICKER: &[u8] = b"Invalid ticker provided.";

pub static ERROR_INVALID_UTILIZATION_RANGE: &[u8] =
    b"Utilization points must satisfy 0 < mid < optimal < 100%.";

pub static ERROR_INVALID_BORROW_RATE_PARAMS: &[u8] =
    b"Max borrow rate must not be lower than the base borrow rate.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] = b"Reserve factor must be lower than 100%.";

pub static ERROR_INVALID_RISK_PARAMS: &[u8] =
    b"Invalid liquidation threshold has to be higher than the borrow limit.";

pub static ERROR_KEEPER_ALREADY_REGISTERED: &[u8] = b"Keeper already registered.";

pub static ERROR_KEEPER_NOT_REGISTERED: &[u8] = b"Keeper not registered.";
