use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Exposes the cached canonical JPY pair of a costed record.
///
/// Implementors guarantee the pair was derived together from the same
/// original amount, currency, cycle, and rate; aggregation reads these
/// and never re-derives conversion.
pub trait CanonicalCost {
    fn monthly_jpy(&self) -> i64;
    fn yearly_jpy(&self) -> i64;
}
