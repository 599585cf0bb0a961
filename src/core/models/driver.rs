use super::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub moto_plate_number: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDriver {
    pub name: String,
    pub phone_number: String,
    pub moto_plate_number: String,
}

impl Resource for Driver {
    type Draft = NewDriver;

    const KIND: ResourceKind = ResourceKind::Driver;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(draft: NewDriver) -> Self {
        Driver {
            id: Uuid::new_v4(),
            name: draft.name,
            phone_number: draft.phone_number,
            moto_plate_number: draft.moto_plate_number,
        }
    }
}
