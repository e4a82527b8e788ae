use std::collections::HashMap;

use async_graphql::{dataloader::Loader, FieldError, Result};
use poem::async_trait;

use crate::{objects::Member, store::Find, store::SharedStore};

#[derive(Clone)]
pub struct MemberLoader {
    pub store: SharedStore,
}

impl MemberLoader {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Loader<String> for MemberLoader {
    type Error = FieldError;
    type Value = Member;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        let members = self.store.members(Find::by_ids(keys.to_vec())).await?;

        Ok(members
            .into_iter()
            .map(|member| (member.id.clone(), member.into()))
            .collect())
    }
}
