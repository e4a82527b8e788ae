use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::{Columns, Document, Field, FieldValue};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name_nat: String,
    pub last_name_nat: String,
    pub first_name_rom: Option<String>,
    pub last_name_rom: Option<String>,
    #[serde(default)]
    pub foreign_name_order: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Document for Model {
    const COLLECTION: &'static str = "members";

    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => self.id.as_str().into(),
            Field::FirstNameNat => self.first_name_nat.as_str().into(),
            Field::LastNameNat => self.last_name_nat.as_str().into(),
            Field::FirstNameRom => self.first_name_rom.as_deref().into(),
            Field::LastNameRom => self.last_name_rom.as_deref().into(),
            Field::ForeignNameOrder => self.foreign_name_order.into(),
            _ => FieldValue::Null,
        }
    }
}

impl Columns for Entity {
    const COLLECTION: &'static str = "members";

    fn column(field: Field) -> Option<Column> {
        match field {
            Field::Id => Some(Column::Id),
            Field::FirstNameNat => Some(Column::FirstNameNat),
            Field::LastNameNat => Some(Column::LastNameNat),
            Field::FirstNameRom => Some(Column::FirstNameRom),
            Field::LastNameRom => Some(Column::LastNameRom),
            Field::ForeignNameOrder => Some(Column::ForeignNameOrder),
            _ => None,
        }
    }
}
