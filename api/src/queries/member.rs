use async_graphql::{Context, Object, Result};

use crate::{objects::Member, store::Find, AppContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "MemberQuery")]
impl Query {
    /// Every member in the catalog.
    async fn get_all_members(&self, ctx: &Context<'_>) -> Result<Vec<Member>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let members = store.members(Find::all()).await?;

        Ok(members.into_iter().map(Into::into).collect())
    }

    /// Look up a `member` by its ID.
    async fn get_member_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Option<Member>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let member = store.members(Find::by_id(id)).await?;

        Ok(member.into_iter().next().map(Into::into))
    }
}
