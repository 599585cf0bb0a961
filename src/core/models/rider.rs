use super::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
}

/// Body of `POST /api/riders`. Any `id` sent by the client is ignored.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRider {
    pub name: String,
    pub phone_number: String,
}

impl Resource for Rider {
    type Draft = NewRider;

    const KIND: ResourceKind = ResourceKind::Rider;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(draft: NewRider) -> Self {
        Rider {
            id: Uuid::new_v4(),
            name: draft.name,
            phone_number: draft.phone_number,
        }
    }
}
