/// Access token lifetime in seconds.
pub const JWT_EXP: u64 = 60 * 15;
