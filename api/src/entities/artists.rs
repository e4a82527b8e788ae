use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::{Columns, Document, Field, FieldValue};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(alias = "_id")]
    pub id: String,
    pub name_nat: Option<String>,
    pub name_rom: Option<String>,
    /// Member ids in display order.
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Document for Model {
    const COLLECTION: &'static str = "artists";

    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => self.id.as_str().into(),
            Field::NameNat => self.name_nat.as_deref().into(),
            Field::NameRom => self.name_rom.as_deref().into(),
            Field::Members => self.members.as_slice().into(),
            _ => FieldValue::Null,
        }
    }
}

impl Columns for Entity {
    const COLLECTION: &'static str = "artists";

    fn column(field: Field) -> Option<Column> {
        match field {
            Field::Id => Some(Column::Id),
            Field::NameNat => Some(Column::NameNat),
            Field::NameRom => Some(Column::NameRom),
            Field::Members => Some(Column::Members),
            _ => None,
        }
    }
}
