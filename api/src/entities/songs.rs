use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::{Columns, Document, Field, FieldValue};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "songs")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(alias = "_id")]
    pub id: String,
    pub album_id: String,
    /// Track position within the album.
    pub album_order: i32,
    pub title_nat: Option<String>,
    pub title_rom: Option<String>,
    /// Song-level credits. `None` or empty means the album's artists apply.
    pub artists: Option<Vec<String>>,
    /// Duration in seconds.
    pub length: i32,
    #[serde(default)]
    pub is_instrumental: bool,
    #[serde(default)]
    pub is_radio_drama: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Document for Model {
    const COLLECTION: &'static str = "songs";

    fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => self.id.as_str().into(),
            Field::AlbumId => self.album_id.as_str().into(),
            Field::AlbumOrder => self.album_order.into(),
            Field::TitleNat => self.title_nat.as_deref().into(),
            Field::TitleRom => self.title_rom.as_deref().into(),
            Field::Artists => self.artists.as_deref().into(),
            Field::Length => self.length.into(),
            Field::IsInstrumental => self.is_instrumental.into(),
            Field::IsRadioDrama => self.is_radio_drama.into(),
            _ => FieldValue::Null,
        }
    }
}

impl Columns for Entity {
    const COLLECTION: &'static str = "songs";

    fn column(field: Field) -> Option<Column> {
        match field {
            Field::Id => Some(Column::Id),
            Field::AlbumId => Some(Column::AlbumId),
            Field::AlbumOrder => Some(Column::AlbumOrder),
            Field::TitleNat => Some(Column::TitleNat),
            Field::TitleRom => Some(Column::TitleRom),
            Field::Artists => Some(Column::Artists),
            Field::Length => Some(Column::Length),
            Field::IsInstrumental => Some(Column::IsInstrumental),
            Field::IsRadioDrama => Some(Column::IsRadioDrama),
            _ => None,
        }
    }
}
