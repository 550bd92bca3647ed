//! Partial updates
//!
//! A patch carries only the fields a caller explicitly sent. Required
//! fields are `Option<T>` (absent = unchanged); nullable fields are
//! `Option<Option<T>>` so that "absent" and "cleared" stay distinct.

/// A partial update for entity `E`.
pub trait Patch<E> {
    /// Write every present field into `entity`.
    fn apply(self, entity: &mut E);

    /// True when no field is present.
    fn is_empty(&self) -> bool;

    /// Merge into an owned entity and return the result.
    fn merge(self, mut entity: E) -> E
    where
        Self: Sized,
    {
        self.apply(&mut entity);
        entity
    }
}

/// Overwrite `target` when `value` is present.
///
/// Works for both shapes: with `T = Option<U>` a `Some(None)` clears the
/// target while `None` leaves it alone.
pub fn assign<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_absent_keeps_value() {
        let mut name = Some("A".to_string());
        assign(&mut name, None);
        assert_eq!(name.as_deref(), Some("A"));
    }

    #[test]
    fn assign_cleared_sets_none() {
        let mut name = Some("A".to_string());
        assign(&mut name, Some(None));
        assert_eq!(name, None);
    }

    #[test]
    fn assign_present_overwrites() {
        let mut week = 3;
        assign(&mut week, Some(7));
        assert_eq!(week, 7);
    }
}
