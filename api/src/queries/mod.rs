mod album;
mod artist;
mod member;
mod song;

// // Add your other ones here to create a unified Query object
#[derive(async_graphql::MergedObject, Default)]
pub struct Query(member::Query, artist::Query, album::Query, song::Query);
