use async_graphql::{Object, ID};
use once_cell::sync::Lazy;

use super::types::{Launch, Mission, Rocket, TripUpdateResponse, User};

// There is no data layer behind this server; the fixture table is the whole
// universe of launches.
static LAUNCHES: Lazy<Vec<Launch>> = Lazy::new(|| {
    vec![
        Launch {
            id: ID::from("108"),
            site: Some("VAFB SLC 4E".to_owned()),
            mission: Some(Mission {
                name: Some("Sentinel-6 Michael Freilich".to_owned()),
                patch_small: Some("https://images2.imgbox.com/9a/96/nLppz9HW_o.png".to_owned()),
                patch_large: Some("https://images2.imgbox.com/ab/79/Wyc9K7fv_o.png".to_owned()),
            }),
            rocket: Some(falcon9()),
            is_booked: false,
        },
        Launch {
            id: ID::from("109"),
            site: Some("CCAFS SLC 40".to_owned()),
            mission: Some(Mission {
                name: Some("Starlink-15 (v1.0)".to_owned()),
                patch_small: Some("https://images2.imgbox.com/9a/96/nLppz9HW_o.png".to_owned()),
                patch_large: Some("https://images2.imgbox.com/d2/3b/bQaWiil0_o.png".to_owned()),
            }),
            rocket: Some(falcon9()),
            is_booked: false,
        },
        Launch {
            id: ID::from("110"),
            site: Some("KSC LC 39A".to_owned()),
            mission: Some(Mission {
                name: Some("Crew-1".to_owned()),
                patch_small: Some("https://images2.imgbox.com/f7/1e/hffUSjVe_o.png".to_owned()),
                patch_large: Some("https://images2.imgbox.com/0a/d9/cOCRWhyt_o.png".to_owned()),
            }),
            rocket: Some(falcon9()),
            is_booked: true,
        },
    ]
});

fn falcon9() -> Rocket {
    Rocket {
        id: ID::from("falcon9"),
        name: Some("Falcon 9".to_owned()),
        kind: Some("FT".to_owned()),
    }
}

fn find_launch(id: &ID) -> Option<Launch> {
    LAUNCHES.iter().find(|launch| &launch.id == id).cloned()
}

fn fixture_user() -> User {
    User {
        id: ID::from("1"),
        email: "astronaut@example.com".to_owned(),
        trips: find_launch(&ID::from("110")).into_iter().collect(),
        token: None,
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every launch the server knows about.
    async fn launches(&self) -> Vec<Launch> {
        LAUNCHES.clone()
    }

    /// Looks up a single launch by its identifier.
    async fn launch(&self, id: ID) -> Option<Launch> {
        find_launch(&id)
    }

    /// The currently logged-in user.
    async fn me(&self) -> Option<User> {
        Some(fixture_user())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Books the given launches for the current user. All-or-nothing: if any
    /// launch is unknown, nothing is booked.
    async fn book_trips(&self, launch_ids: Vec<ID>) -> TripUpdateResponse {
        let mut booked = Vec::new();
        let mut missing = Vec::new();
        for id in &launch_ids {
            match find_launch(id) {
                Some(launch) => booked.push(launch),
                None => missing.push(id.as_str()),
            }
        }

        if missing.is_empty() {
            TripUpdateResponse {
                success: true,
                message: Some("trips booked successfully".to_owned()),
                launches: Some(booked),
            }
        } else {
            TripUpdateResponse {
                success: false,
                message: Some(format!(
                    "the following launches couldn't be booked: {}",
                    missing.join(", ")
                )),
                launches: None,
            }
        }
    }

    async fn cancel_trip(&self, launch_id: ID) -> TripUpdateResponse {
        match find_launch(&launch_id) {
            Some(launch) => TripUpdateResponse {
                success: true,
                message: Some("trip cancelled".to_owned()),
                launches: Some(vec![launch]),
            },
            None => TripUpdateResponse {
                success: false,
                message: Some(format!("failed to cancel trip for launch {}", *launch_id)),
                launches: None,
            },
        }
    }

    /// Issues a login token for the given email address.
    async fn login(&self, email: Option<String>) -> Option<User> {
        let email = email?;
        let token = hex::encode(email.as_bytes());

        Some(User {
            id: ID::from("1"),
            email,
            trips: vec![],
            token: Some(token),
        })
    }
}
