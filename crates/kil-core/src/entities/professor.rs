use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::member::{Member, SchoolMember};
use crate::enums::House;

/// A professor teaching one subject.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Professor {
    #[serde(flatten)]
    pub member: Member,
    pub subject: String,
    pub department: Option<String>,
    pub house: Option<House>,
}

impl SchoolMember for Professor {
    fn member(&self) -> &Member {
        &self.member
    }

    fn house(&self) -> Option<House> {
        self.house
    }
}
