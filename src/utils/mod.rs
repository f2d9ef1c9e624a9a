pub mod time;

use nanoid::nanoid;

const ID_LEN: usize = 12;

/// Generate a short random identifier for log entries.
pub fn shortid() -> String {
    nanoid!(ID_LEN)
}
