pub const CAPACITY: usize = 10;
pub const PRELOAD_COUNT: usize = 3;
pub const FIRST_PIECE_ID: u32 = 1;
pub const SEED_ENV_VAR: &str = "TETRIS_STACK_SEED";
