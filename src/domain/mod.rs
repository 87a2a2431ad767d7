pub mod campaign;
pub mod classifier;
pub mod pricing;

pub use campaign::{Bucket, Campaign, CampaignRecord};
pub use classifier::{classify, BoardError, CampaignBoard};
pub use pricing::{to_rows, PriceValue};
