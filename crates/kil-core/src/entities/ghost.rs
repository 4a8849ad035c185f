use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::member::{Member, SchoolMember};
use crate::enums::House;

/// A school ghost.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Ghost {
    #[serde(flatten)]
    pub member: Member,
    pub year_of_death: i32,
    pub house: Option<House>,
}

impl SchoolMember for Ghost {
    fn member(&self) -> &Member {
        &self.member
    }

    fn house(&self) -> Option<House> {
        self.house
    }
}
