use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};
use sea_orm::prelude::DateTimeWithTimeZone;

use catalog_core::tracing::warn;

/// A named field of a catalog document. Not every collection carries every
/// field; a field a collection lacks reads as null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    FirstNameNat,
    LastNameNat,
    FirstNameRom,
    LastNameRom,
    ForeignNameOrder,
    NameNat,
    NameRom,
    Members,
    TitleNat,
    TitleRom,
    ReleaseDate,
    Catalog,
    Subtitle,
    Parent,
    Artists,
    AlbumId,
    AlbumOrder,
    Length,
    IsInstrumental,
    IsRadioDrama,
}

impl Field {
    /// Whether the field holds an identifier array rather than a scalar.
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(self, Self::Members | Self::Artists)
    }
}

/// A literal operand of a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Date(DateTimeWithTimeZone),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<DateTimeWithTimeZone> for Value {
    fn from(value: DateTimeWithTimeZone) -> Self {
        Self::Date(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Equality. Against an identifier array this tests membership, the same
    /// as [`Predicate::Contains`].
    Eq(Value),
    /// The field equals one of the given identifiers.
    In(Vec<String>),
    /// Case-insensitive regular expression search anywhere in the field.
    /// The pattern is used as given, without escaping.
    Matches(String),
    /// The identifier array contains the given identifier.
    Contains(String),
    /// The identifier array is absent or empty.
    Empty,
    Gte(Value),
    Lte(Value),
}

/// Store-agnostic filter expression built by the query layer and handed to
/// a [`Store`](super::Store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All(Vec<Filter>),
    Any(Vec<Filter>),
    Field(Field, Predicate),
}

impl Filter {
    pub fn all(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::All(filters.into_iter().collect())
    }

    pub fn any(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::Any(filters.into_iter().collect())
    }

    pub fn eq(field: Field, value: impl Into<Value>) -> Self {
        Self::Field(field, Predicate::Eq(value.into()))
    }

    pub fn is_in(field: Field, ids: impl IntoIterator<Item = String>) -> Self {
        Self::Field(field, Predicate::In(ids.into_iter().collect()))
    }

    pub fn matches(field: Field, pattern: impl Into<String>) -> Self {
        Self::Field(field, Predicate::Matches(pattern.into()))
    }

    pub fn contains(field: Field, id: impl Into<String>) -> Self {
        Self::Field(field, Predicate::Contains(id.into()))
    }

    pub fn empty(field: Field) -> Self {
        Self::Field(field, Predicate::Empty)
    }

    pub fn gte(field: Field, value: impl Into<Value>) -> Self {
        Self::Field(field, Predicate::Gte(value.into()))
    }

    pub fn lte(field: Field, value: impl Into<Value>) -> Self {
        Self::Field(field, Predicate::Lte(value.into()))
    }

    /// Prepare the filter for repeated evaluation against in-memory documents.
    #[must_use]
    pub fn compile(&self) -> Matcher {
        Matcher(Node::compile(self))
    }
}

/// The value of a [`Field`] as read from a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Str(&'a str),
    Bool(bool),
    Int(i64),
    Date(DateTimeWithTimeZone),
    List(&'a [String]),
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Null, Self::Str)
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(value: &'a [String]) -> Self {
        Self::List(value)
    }
}

impl<'a> From<Option<&'a [String]>> for FieldValue<'a> {
    fn from(value: Option<&'a [String]>) -> Self {
        value.map_or(Self::Null, Self::List)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<DateTimeWithTimeZone> for FieldValue<'_> {
    fn from(value: DateTimeWithTimeZone) -> Self {
        Self::Date(value)
    }
}

impl FieldValue<'_> {
    fn equals(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Str(a), Value::String(b)) => *a == b.as_str(),
            (Self::Bool(a), Value::Bool(b)) => a == b,
            (Self::Int(a), Value::Int(b)) => a == b,
            (Self::Date(a), Value::Date(b)) => a == b,
            (Self::List(items), Value::String(b)) => items.contains(b),
            _ => false,
        }
    }

    fn compare_to(&self, value: &Value) -> Option<Ordering> {
        match (self, value) {
            (Self::Str(a), Value::String(b)) => Some((*a).cmp(b.as_str())),
            (Self::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Self::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Sort order between two values of the same field. Null sorts first.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Null, _) => Ordering::Less,
            (_, Self::Null) => Ordering::Greater,
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// A record that can be filtered and sorted by [`Field`].
pub trait Document {
    const COLLECTION: &'static str;

    fn field(&self, field: Field) -> FieldValue<'_>;
}

fn pattern_regex(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| warn!(pattern, "invalid search pattern: {e}"))
        .ok()
}

/// A [`Predicate`] ready to run against field values.
#[derive(Debug)]
enum Check {
    Eq(Value),
    In(Vec<String>),
    // an invalid pattern matches nothing
    Pattern(Option<Regex>),
    Contains(String),
    Empty,
    Gte(Value),
    Lte(Value),
}

impl Check {
    fn compile(predicate: &Predicate) -> Self {
        match predicate {
            Predicate::Eq(value) => Self::Eq(value.clone()),
            Predicate::In(ids) => Self::In(ids.clone()),
            Predicate::Matches(pattern) => Self::Pattern(pattern_regex(pattern)),
            Predicate::Contains(id) => Self::Contains(id.clone()),
            Predicate::Empty => Self::Empty,
            Predicate::Gte(value) => Self::Gte(value.clone()),
            Predicate::Lte(value) => Self::Lte(value.clone()),
        }
    }

    fn test(&self, value: FieldValue<'_>) -> bool {
        match self {
            Self::Eq(expected) => value.equals(expected),
            Self::In(ids) => matches!(value, FieldValue::Str(s) if ids.iter().any(|id| id == s)),
            Self::Pattern(re) => re
                .as_ref()
                .is_some_and(|re| matches!(value, FieldValue::Str(s) if re.is_match(s))),
            Self::Contains(id) => matches!(value, FieldValue::List(items) if items.contains(id)),
            Self::Empty => match value {
                FieldValue::Null => true,
                FieldValue::List(items) => items.is_empty(),
                _ => false,
            },
            Self::Gte(bound) => value.compare_to(bound).is_some_and(Ordering::is_ge),
            Self::Lte(bound) => value.compare_to(bound).is_some_and(Ordering::is_le),
        }
    }
}

#[derive(Debug)]
enum Node {
    All(Vec<Node>),
    Any(Vec<Node>),
    Leaf(Field, Check),
}

impl Node {
    fn compile(filter: &Filter) -> Self {
        match filter {
            Filter::All(filters) => Self::All(filters.iter().map(Self::compile).collect()),
            Filter::Any(filters) => Self::Any(filters.iter().map(Self::compile).collect()),
            Filter::Field(field, predicate) => Self::Leaf(*field, Check::compile(predicate)),
        }
    }

    fn matches<D: Document>(&self, doc: &D) -> bool {
        match self {
            Self::All(nodes) => nodes.iter().all(|n| n.matches(doc)),
            Self::Any(nodes) => nodes.iter().any(|n| n.matches(doc)),
            Self::Leaf(field, check) => check.test(doc.field(*field)),
        }
    }
}

/// A [`Filter`] with its search patterns compiled. Holds no borrow of the
/// filter it came from.
#[derive(Debug)]
pub struct Matcher(Node);

impl Matcher {
    #[must_use]
    pub fn matches<D: Document>(&self, doc: &D) -> bool {
        self.0.matches(doc)
    }
}
