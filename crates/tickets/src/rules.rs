//! Pricing and purchase-limit configuration.

use thiserror::Error;

use crate::ticket_type::TicketType;

/// Price of an adult ticket, in whole currency units.
pub const DEFAULT_ADULT_PRICE: u64 = 25;
/// Price of a child ticket, in whole currency units.
pub const DEFAULT_CHILD_PRICE: u64 = 15;
/// Infants are always free.
pub const INFANT_PRICE: u64 = 0;
/// Maximum number of tickets (of any type) in one purchase.
pub const DEFAULT_MAX_TICKETS: u64 = 25;

pub const MAX_TICKETS_ENV: &str = "CINEMA_MAX_TICKETS";
pub const ADULT_PRICE_ENV: &str = "CINEMA_ADULT_PRICE";
pub const CHILD_PRICE_ENV: &str = "CINEMA_CHILD_PRICE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    NotANumber { key: &'static str, value: String },

    #[error("{0} must be at least 1")]
    Zero(&'static str),

    #[error("prices must satisfy adult > child > 0 (adult: {adult}, child: {child})")]
    PriceOrdering { adult: u64, child: u64 },

    #[error("largest charge overflows: {max_tickets} tickets at {adult_price} each")]
    ChargeOverflow { max_tickets: u64, adult_price: u64 },
}

/// Rule set applied to every purchase.
///
/// Immutable once built; the service holds one by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRules {
    adult_price: u64,
    child_price: u64,
    max_tickets: u64,
}

impl Default for TicketRules {
    fn default() -> Self {
        Self {
            adult_price: DEFAULT_ADULT_PRICE,
            child_price: DEFAULT_CHILD_PRICE,
            max_tickets: DEFAULT_MAX_TICKETS,
        }
    }
}

impl TicketRules {
    pub fn new(adult_price: u64, child_price: u64, max_tickets: u64) -> Result<Self, ConfigError> {
        if max_tickets == 0 {
            return Err(ConfigError::Zero(MAX_TICKETS_ENV));
        }
        if child_price <= INFANT_PRICE || adult_price <= child_price {
            return Err(ConfigError::PriceOrdering {
                adult: adult_price,
                child: child_price,
            });
        }
        // Every valid purchase must be chargeable without saturating.
        if max_tickets.checked_mul(adult_price).is_none() {
            return Err(ConfigError::ChargeOverflow {
                max_tickets,
                adult_price,
            });
        }
        Ok(Self {
            adult_price,
            child_price,
            max_tickets,
        })
    }

    /// Load rules from `CINEMA_*` environment variables, falling back to the
    /// defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TicketRules::from_env`] with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(value) => value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::NotANumber { key, value }),
            }
        };

        Self::new(
            read(ADULT_PRICE_ENV, DEFAULT_ADULT_PRICE)?,
            read(CHILD_PRICE_ENV, DEFAULT_CHILD_PRICE)?,
            read(MAX_TICKETS_ENV, DEFAULT_MAX_TICKETS)?,
        )
    }

    pub fn price_of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => INFANT_PRICE,
        }
    }

    pub fn max_tickets(&self) -> u64 {
        self.max_tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_the_canonical_rule_set() {
        let rules = TicketRules::default();
        assert_eq!(rules.price_of(TicketType::Adult), 25);
        assert_eq!(rules.price_of(TicketType::Child), 15);
        assert_eq!(rules.price_of(TicketType::Infant), 0);
        assert_eq!(rules.max_tickets(), 25);
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let rules = TicketRules::from_lookup(lookup(&[])).unwrap();
        assert_eq!(rules, TicketRules::default());
    }

    #[test]
    fn variables_override_defaults() {
        let rules = TicketRules::from_lookup(lookup(&[
            (MAX_TICKETS_ENV, "20"),
            (ADULT_PRICE_ENV, "20"),
            (CHILD_PRICE_ENV, " 10 "),
        ]))
        .unwrap();
        assert_eq!(rules.max_tickets(), 20);
        assert_eq!(rules.price_of(TicketType::Adult), 20);
        assert_eq!(rules.price_of(TicketType::Child), 10);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = TicketRules::from_lookup(lookup(&[(MAX_TICKETS_ENV, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                key: MAX_TICKETS_ENV,
                value: "lots".to_string()
            }
        );

        let err = TicketRules::from_lookup(lookup(&[(MAX_TICKETS_ENV, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero(MAX_TICKETS_ENV));
    }

    #[test]
    fn price_ordering_is_enforced() {
        assert!(matches!(
            TicketRules::new(10, 15, 25),
            Err(ConfigError::PriceOrdering { adult: 10, child: 15 })
        ));
        assert!(matches!(
            TicketRules::new(10, 0, 25),
            Err(ConfigError::PriceOrdering { .. })
        ));
    }

    #[test]
    fn limit_times_adult_price_must_fit() {
        assert_eq!(
            TicketRules::new(u64::MAX, 15, 2),
            Err(ConfigError::ChargeOverflow {
                max_tickets: 2,
                adult_price: u64::MAX
            })
        );
        assert!(TicketRules::new(u64::MAX, 15, 1).is_ok());

        let err = TicketRules::from_lookup(lookup(&[
            (MAX_TICKETS_ENV, "1000000000000"),
            (ADULT_PRICE_ENV, "100000000000"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::ChargeOverflow { .. }));
    }
}
