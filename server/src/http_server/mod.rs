mod warp;
pub use self::warp::{route, run};
