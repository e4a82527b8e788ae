use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::{Columns, Document, Field, FieldValue};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "albums")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(alias = "_id")]
    pub id: String,
    pub title_nat: String,
    pub title_rom: Option<String>,
    pub release_date: DateTimeWithTimeZone,
    pub catalog: Option<String>,
    pub subtitle: Option<String>,
    /// Free-form grouping, e.g. the franchise an album belongs to.
    pub parent: String,
    #[serde(default)]
    pub artists: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Document for Model {
    const COLLECTION: &'static str = "albums";

    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => self.id.as_str().into(),
            Field::TitleNat => self.title_nat.as_str().into(),
            Field::TitleRom => self.title_rom.as_deref().into(),
            Field::ReleaseDate => self.release_date.into(),
            Field::Catalog => self.catalog.as_deref().into(),
            Field::Subtitle => self.subtitle.as_deref().into(),
            Field::Parent => self.parent.as_str().into(),
            Field::Artists => self.artists.as_slice().into(),
            _ => FieldValue::Null,
        }
    }
}

impl Columns for Entity {
    const COLLECTION: &'static str = "albums";

    fn column(field: Field) -> Option<Column> {
        match field {
            Field::Id => Some(Column::Id),
            Field::TitleNat => Some(Column::TitleNat),
            Field::TitleRom => Some(Column::TitleRom),
            Field::ReleaseDate => Some(Column::ReleaseDate),
            Field::Catalog => Some(Column::Catalog),
            Field::Subtitle => Some(Column::Subtitle),
            Field::Parent => Some(Column::Parent),
            Field::Artists => Some(Column::Artists),
            _ => None,
        }
    }
}
