//! Shared fixtures for unit tests.

use crate::domain::{Email, MinorUnits, NewProperty, NewUser, Property, PropertyId, User, UserId};

/// A persisted user as the store would return it.
pub(crate) fn sample_user() -> User {
    User {
        id: UserId::new(1),
        name: "Eva Stanley".to_owned(),
        email: email("sebastianguerra@ymail.com"),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_owned(),
    }
}

/// Attributes for a user that has not been persisted yet.
pub(crate) fn sample_new_user() -> NewUser {
    NewUser {
        name: "Louisa Meyer".to_owned(),
        email: email("jacksonrose@hotmail.com"),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_owned(),
    }
}

/// A persisted property as the store would return it.
pub(crate) fn sample_property() -> Property {
    Property {
        id: PropertyId::new(1),
        owner_id: UserId::new(2),
        title: "Speed lamp".to_owned(),
        description: "description".to_owned(),
        thumbnail_photo_url: "https://images.example.com/photos/2086676/small.jpg".to_owned(),
        cover_photo_url: "https://images.example.com/photos/2086676/large.jpg".to_owned(),
        cost_per_night: MinorUnits::new(93_061),
        street: "536 Namsub Highway".to_owned(),
        city: "Sotboske".to_owned(),
        province: "Quebec".to_owned(),
        post_code: "28142".to_owned(),
        country: "Canada".to_owned(),
        parking_spaces: 4,
        number_of_bathrooms: 2,
        number_of_bedrooms: 3,
    }
}

/// Attributes for a property that has not been persisted yet.
pub(crate) fn sample_new_property() -> NewProperty {
    NewProperty {
        owner_id: UserId::new(2),
        title: "Blank corner".to_owned(),
        description: "description".to_owned(),
        thumbnail_photo_url: "https://images.example.com/photos/2080018/small.jpg".to_owned(),
        cover_photo_url: "https://images.example.com/photos/2080018/large.jpg".to_owned(),
        cost_per_night: MinorUnits::new(85_234),
        street: "651 Nami Road".to_owned(),
        city: "Bohbatev".to_owned(),
        province: "Alberta".to_owned(),
        post_code: "83680".to_owned(),
        country: "Canada".to_owned(),
        parking_spaces: 6,
        number_of_bathrooms: 4,
        number_of_bedrooms: 8,
    }
}

fn email(address: &str) -> Email {
    Email::new(address).unwrap_or_else(|err| panic!("fixture email must validate: {err}"))
}
