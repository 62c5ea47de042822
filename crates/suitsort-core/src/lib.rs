pub mod deal;
pub mod error;
pub mod model;
pub mod order;
pub mod probability;
pub mod simulate;
pub mod verify;

pub use deal::{DealBuilder, DealDistribution, DistributionMode};
pub use error::{ParseSuitError, ProbabilityError};
pub use model::collapsed::{Collapsed, collapse};
pub use model::hand::{Hand, MAX_HAND_SIZE};
pub use model::suit::{Color, Suit};
pub use order::{OrderableCache, is_ordered, moves, orderable, ordered};
pub use probability::{Orderability, ProbabilityRow, orderable_probability};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "suitsort"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
