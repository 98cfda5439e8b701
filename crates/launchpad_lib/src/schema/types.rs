use async_graphql::{Enum, Object, SimpleObject, ID};

/// A scheduled rocket launch.
#[derive(Debug, Clone, SimpleObject)]
pub struct Launch {
    pub id: ID,
    pub site: Option<String>,
    pub mission: Option<Mission>,
    pub rocket: Option<Rocket>,
    pub is_booked: bool,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Rocket {
    pub id: ID,
    pub name: Option<String>,
    #[graphql(name = "type")]
    pub kind: Option<String>,
}

/// A registered user and the trips they have booked.
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub trips: Vec<Launch>,
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Mission {
    pub name: Option<String>,
    pub patch_small: Option<String>,
    pub patch_large: Option<String>,
}

#[Object]
impl Mission {
    async fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// URL of the mission patch artwork, in the requested size. Defaults to
    /// the large variant.
    async fn mission_patch(&self, size: Option<PatchSize>) -> Option<&str> {
        match size.unwrap_or(PatchSize::Large) {
            PatchSize::Small => self.patch_small.as_deref(),
            PatchSize::Large => self.patch_large.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum PatchSize {
    Small,
    Large,
}

/// Outcome of a booking or cancellation attempt.
#[derive(Debug, SimpleObject)]
pub struct TripUpdateResponse {
    pub success: bool,
    pub message: Option<String>,
    pub launches: Option<Vec<Launch>>,
}
