mod album;
mod artist;
mod date;
mod member;
mod song;

pub use album::Album;
pub use artist::Artist;
pub use date::Date;
pub use member::Member;
pub use song::Song;
