//! Win and draw evaluation over a board snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::has_won;
