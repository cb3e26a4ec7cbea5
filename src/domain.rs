// Copyright 2025 Cowboy AI, LLC.

//! Fixture value objects shared by the demonstration modules.
//!
//! `User` and `Address` carry no behavior beyond chained construction; they
//! exist so the Option, pipeline, and collector demonstrations have something
//! realistic to project over. Fields that the demonstrations treat as
//! possibly absent are `Option`s.

use serde::{Deserialize, Serialize};

/// A postal address owned by a [`User`]. No validation, compared by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Country name
    pub country: Option<String>,
    /// Province or state
    pub province: Option<String>,
    /// City name
    pub city: Option<String>,
    /// Street line
    pub street: Option<String>,
}

impl Address {
    /// Create an empty address
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the province
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    /// Set the city
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the street
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }
}

/// A user fixture: identifier plus optional profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier
    pub id: u32,
    /// Display name
    pub name: Option<String>,
    /// Job title
    pub job: Option<String>,
    /// Accumulated score
    pub score: Option<i64>,
    /// Hobbies, order-preserving
    pub hobbies: Vec<String>,
    /// Home address
    pub address: Option<Address>,
}

impl User {
    /// Create a user with the given id and nothing else set
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the job title
    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Set the score
    pub fn score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the hobby list
    pub fn hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = hobbies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the address
    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_construction() {
        let user = User::new(1)
            .name("Clark")
            .job("DEV")
            .score(100)
            .hobbies(["reading", "music"])
            .address(Address::new().country("China").city("Shanghai"));

        assert_eq!(user.id, 1);
        assert_eq!(user.name.as_deref(), Some("Clark"));
        assert_eq!(user.hobbies, vec!["reading", "music"]);
        assert_eq!(
            user.address.and_then(|a| a.country).as_deref(),
            Some("China")
        );
    }

    #[test]
    fn fixtures_round_trip_through_json() {
        let user = User::new(2).name("Jeff").job("QA");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
