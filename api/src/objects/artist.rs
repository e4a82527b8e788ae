use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use super::Member;
use crate::{dataloaders::load_in_order, entities::artists::Model, AppContext};

/// A performing act: a group or a solo artist.
#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Artist {
    pub id: String,
    pub name_nat: Option<String>,
    pub name_rom: Option<String>,
    #[graphql(skip)]
    pub member_ids: Vec<String>,
}

#[ComplexObject]
impl Artist {
    /// The members of the artist in listed order. A member id that matches no
    /// record resolves to `null`.
    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<Option<Member>>> {
        let AppContext { member_loader, .. } = ctx.data::<AppContext>()?;

        load_in_order(member_loader, &self.member_ids).await
    }
}

impl From<Model> for Artist {
    fn from(
        Model {
            id,
            name_nat,
            name_rom,
            members,
        }: Model,
    ) -> Self {
        Self {
            id,
            name_nat,
            name_rom,
            member_ids: members,
        }
    }
}
