//! Shape predicates for snapshot field recovery.
//!
//! The persisted snapshot is untrusted input: the store falls back to its
//! defaults for any field that fails these checks instead of surfacing an
//! error. Kept as pure predicates so the persistence layer and the headless
//! harness share one definition of "well-formed".

/// A usable stable identity key: non-empty after trimming.
pub fn valid_user_id(id: &str) -> bool {
    !id.trim().is_empty()
}

/// A displayable name: non-empty after trimming.
pub fn valid_display_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// A vault balance the store will accept: finite and non-negative.
pub fn valid_balance(balance: f64) -> bool {
    balance.is_finite() && balance >= 0.0
}

/// A map-progress value already inside the unit interval.
pub fn valid_unit_interval(p: f32) -> bool {
    p.is_finite() && (0.0..=1.0).contains(&p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id() {
        assert!(valid_user_id("u1"));
        assert!(!valid_user_id(""));
        assert!(!valid_user_id("   "));
    }

    #[test]
    fn test_display_name() {
        assert!(valid_display_name("Demo Adventurer"));
        assert!(!valid_display_name("\t"));
    }

    #[test]
    fn test_balance() {
        assert!(valid_balance(0.0));
        assert!(valid_balance(2_450.0));
        assert!(!valid_balance(-1.0));
        assert!(!valid_balance(f64::NAN));
        assert!(!valid_balance(f64::INFINITY));
    }

    #[test]
    fn test_unit_interval() {
        assert!(valid_unit_interval(0.0));
        assert!(valid_unit_interval(0.35));
        assert!(valid_unit_interval(1.0));
        assert!(!valid_unit_interval(1.01));
        assert!(!valid_unit_interval(-0.01));
        assert!(!valid_unit_interval(f32::NAN));
    }
}
