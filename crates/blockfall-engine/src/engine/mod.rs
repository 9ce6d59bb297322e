pub use self::piece_bag::*;

pub(crate) mod piece_bag;
