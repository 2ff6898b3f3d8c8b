pub mod book;
pub mod category;
pub mod common;
pub mod rate;
pub mod subscription;

pub use book::SubscriptionBook;
pub use category::{Category, DEFAULT_CHART_COLOR, WELL_KNOWN_CATEGORIES};
pub use common::{CanonicalCost, Displayable, Identifiable, NamedEntity};
pub use rate::RateSetting;
pub use subscription::{BillingCycle, NewSubscription, Subscription, SubscriptionPatch};
