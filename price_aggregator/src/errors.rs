pub static PAUSED_ERROR: &[u8] = b"Contract is paused";

pub static ONLY_FEEDERS_ALLOWED_ERROR: &[u8] = b"Only feeders allowed";

pub static TOKEN_PAIR_NOT_FOUND_ERROR: &[u8] = b"Token pair not found";

pub static INVALID_PRICE_ERROR: &[u8] = b"Price must be greater than zero";

pub static INVALID_DECIMALS_ERROR: &[u8] = b"Invalid price decimals";
