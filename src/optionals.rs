// Copyright 2025 Cowboy AI, LLC.

//! `Option` handling: creation, inspection, extraction, chained projection.
//!
//! The centerpiece is [`country_of_user_with_job`], the flat projection that
//! replaces a nested null-check ladder; the tests hold the two forms side by
//! side over the same fixture.

use crate::domain::User;
use crate::errors::{PrimerError, PrimerResult};

/// Run `consume` only when a value is present. An absent value does nothing.
pub fn when_present<T>(value: Option<T>, consume: impl FnOnce(T)) {
    if let Some(v) = value {
        consume(v);
    }
}

/// Extract a value, computing the default lazily when it is absent.
pub fn value_or_lazy_default<T>(value: Option<T>, default: impl FnOnce() -> T) -> T {
    value.unwrap_or_else(default)
}

/// Extract a value or fail with a caller-described error.
pub fn require<T>(value: Option<T>, what: &str) -> PrimerResult<T> {
    value.ok_or_else(|| PrimerError::missing(what.to_string()))
}

/// The flat projection: when the user's job matches, follow the optional
/// address to its optional country.
pub fn country_of_user_with_job(user: Option<User>, job: &str) -> Option<String> {
    user.filter(|u| u.job.as_deref() == Some(job))
        .and_then(|u| u.address)
        .and_then(|a| a.country)
}

/// The nested-conditional ladder the projection replaces. Kept for the
/// side-by-side comparison in the tests.
pub fn country_of_user_with_job_nested(user: Option<User>, job: &str) -> Option<String> {
    if let Some(user) = user {
        if user.job.as_deref() == Some(job) {
            if let Some(address) = user.address {
                if let Some(country) = address.country {
                    return Some(country);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Address;

    fn fixture() -> User {
        User::new(1)
            .name("Clark")
            .job("DEV")
            .address(Address::new().country("China"))
    }

    #[test]
    fn creation_and_inspection() {
        let present = Some(123);
        let absent: Option<i32> = None;

        assert!(present.is_some());
        assert!(absent.is_none());

        let mut seen = None;
        when_present(present, |v| seen = Some(v));
        assert_eq!(seen, Some(123));

        when_present(absent, |_| panic!("must not run for an absent value"));
    }

    #[test]
    fn extraction_with_defaults() {
        let absent: Option<i32> = None;

        assert_eq!(absent.unwrap_or(123), 123);
        assert_eq!(value_or_lazy_default(absent, || 123), 123);
        assert_eq!(value_or_lazy_default(Some(7), || panic!("not evaluated")), 7);
    }

    #[test]
    fn extraction_failure_carries_the_message() {
        let absent: Option<i32> = None;
        let err = require(absent, "value").unwrap_err();
        assert_eq!(err.to_string(), "missing value: value");

        assert_eq!(require(Some(123), "value").unwrap(), 123);
    }

    #[test]
    fn flat_projection_matches_the_nested_ladder() {
        let country = country_of_user_with_job(Some(fixture()), "DEV");
        assert_eq!(country.as_deref(), Some("China"));

        let nested = country_of_user_with_job_nested(Some(fixture()), "DEV");
        assert_eq!(nested, country);

        // wrong job short-circuits the whole chain
        assert_eq!(country_of_user_with_job(Some(fixture()), "QA"), None);
        // so does a missing user
        assert_eq!(country_of_user_with_job(None, "DEV"), None);
        // and a user with no address
        let homeless = User::new(2).job("DEV");
        assert_eq!(country_of_user_with_job(Some(homeless), "DEV"), None);
    }
}
