use async_graphql::SimpleObject;

use crate::entities::members::Model;

/// A person performing in one or more artists.
#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
pub struct Member {
    pub id: String,
    /// First name in native script.
    pub first_name_nat: String,
    /// Last name in native script.
    pub last_name_nat: String,
    /// Romanized first name.
    pub first_name_rom: Option<String>,
    /// Romanized last name.
    pub last_name_rom: Option<String>,
    /// When true the romanized name is written in foreign (given, family)
    /// order rather than the native convention.
    pub foreign_name_order: bool,
}

impl From<Model> for Member {
    fn from(
        Model {
            id,
            first_name_nat,
            last_name_nat,
            first_name_rom,
            last_name_rom,
            foreign_name_order,
        }: Model,
    ) -> Self {
        Self {
            id,
            first_name_nat,
            last_name_nat,
            first_name_rom,
            last_name_rom,
            foreign_name_order,
        }
    }
}
