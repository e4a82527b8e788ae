use async_trait::async_trait;
use sea_orm::{
    prelude::*,
    sea_query::{Expr, SimpleExpr},
    Condition, DatabaseConnection, IdenStatic, QueryOrder, QuerySelect, Value as DbValue,
};

use super::{Direction, Field, Filter, Find, Predicate, Store, StoreError, Value};
use crate::{
    db::Connection,
    entities::{albums, artists, members, songs},
};

/// Maps catalog [`Field`]s onto the columns of a table.
pub trait Columns: EntityTrait {
    const COLLECTION: &'static str;

    fn column(field: Field) -> Option<Self::Column>;
}

impl From<Value> for DbValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => s.into(),
            Value::Bool(b) => b.into(),
            Value::Int(i) => i.into(),
            Value::Date(d) => d.into(),
        }
    }
}

fn column<E: Columns>(field: Field) -> Result<E::Column, StoreError> {
    E::column(field).ok_or(StoreError::UnknownField {
        collection: E::COLLECTION,
        field,
    })
}

fn condition<E: Columns>(filter: &Filter) -> Result<Condition, StoreError> {
    match filter {
        Filter::All(filters) => filters.iter().try_fold(Condition::all(), |acc, f| {
            Ok(acc.add(condition::<E>(f)?))
        }),
        Filter::Any(filters) => filters.iter().try_fold(Condition::any(), |acc, f| {
            Ok(acc.add(condition::<E>(f)?))
        }),
        Filter::Field(field, predicate) => {
            Ok(Condition::all().add(expression::<E>(*field, predicate)?))
        },
    }
}

/// `$1` is numbered per expression; the query builder renumbers it.
fn any_of(name: &str, id: &str) -> SimpleExpr {
    Expr::cust_with_values(format!(r#"$1 = ANY("{name}")"#), [id.to_owned()])
}

fn expression<E: Columns>(field: Field, predicate: &Predicate) -> Result<SimpleExpr, StoreError> {
    let col = column::<E>(field)?;
    let name = col.as_str();

    Ok(match predicate {
        Predicate::Eq(Value::String(id)) if field.is_list() => any_of(name, id),
        Predicate::Eq(value) => col.eq(DbValue::from(value.clone())),
        Predicate::In(ids) => col.is_in(ids.iter().cloned()),
        Predicate::Matches(pattern) => {
            Expr::cust_with_values(format!(r#""{name}" ~* $1"#), [pattern.clone()])
        },
        Predicate::Contains(id) => any_of(name, id),
        Predicate::Empty => Expr::cust(format!(r#"coalesce(cardinality("{name}"), 0) = 0"#)),
        Predicate::Gte(value) => col.gte(DbValue::from(value.clone())),
        Predicate::Lte(value) => col.lte(DbValue::from(value.clone())),
    })
}

async fn select<E: Columns>(db: &DatabaseConnection, find: Find) -> Result<Vec<E::Model>, StoreError> {
    let Find {
        filter,
        sort,
        limit,
    } = find;

    let mut select = E::find();

    if let Some(filter) = filter {
        select = select.filter(condition::<E>(&filter)?);
    }

    if let Some(sort) = sort {
        let col = column::<E>(sort.field)?;

        select = match sort.direction {
            Direction::Asc => select.order_by_asc(col),
            Direction::Desc => select.order_by_desc(col),
        };
    }

    if let Some(limit) = limit {
        select = select.limit(limit);
    }

    Ok(select.all(db).await?)
}

#[async_trait]
impl Store for Connection {
    async fn members(&self, find: Find) -> Result<Vec<members::Model>, StoreError> {
        select::<members::Entity>(self.get(), find).await
    }

    async fn artists(&self, find: Find) -> Result<Vec<artists::Model>, StoreError> {
        select::<artists::Entity>(self.get(), find).await
    }

    async fn albums(&self, find: Find) -> Result<Vec<albums::Model>, StoreError> {
        select::<albums::Entity>(self.get(), find).await
    }

    async fn songs(&self, find: Find) -> Result<Vec<songs::Model>, StoreError> {
        select::<songs::Entity>(self.get(), find).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{sea_query::Values, DbBackend, QueryTrait, Statement};

    use super::*;

    fn build(filter: &Filter) -> Statement {
        songs::Entity::find()
            .filter(condition::<songs::Entity>(filter).unwrap())
            .build(DbBackend::Postgres)
    }

    fn where_clause(stmt: &Statement) -> &str {
        stmt.sql.split_once(" WHERE ").unwrap().1
    }

    #[test]
    fn pattern_binds_each_value() {
        let stmt = build(&Filter::all([
            Filter::any([
                Filter::matches(Field::TitleRom, "abc"),
                Filter::matches(Field::TitleNat, "abc"),
            ]),
            Filter::eq(Field::IsInstrumental, false),
        ]));

        let clause = where_clause(&stmt);
        assert!(clause.contains(r#""title_rom" ~* $1"#), "{clause}");
        assert!(clause.contains(r#""title_nat" ~* $2"#), "{clause}");
        assert!(clause.contains(r#""songs"."is_instrumental" = $3"#), "{clause}");
        assert!(!clause.contains('?'), "{clause}");
        assert_eq!(
            stmt.values,
            Some(Values(vec!["abc".into(), "abc".into(), false.into()]))
        );
    }

    #[test]
    fn contains_binds_the_id() {
        let stmt = build(&Filter::contains(Field::Artists, "art1"));

        assert!(where_clause(&stmt).contains(r#"$1 = ANY("artists")"#));
        assert_eq!(stmt.values, Some(Values(vec!["art1".into()])));
    }

    #[test]
    fn eq_on_a_list_tests_membership() {
        let stmt = build(&Filter::eq(Field::Artists, "art1"));

        assert!(where_clause(&stmt).contains(r#"$1 = ANY("artists")"#));
        assert_eq!(stmt.values, Some(Values(vec!["art1".into()])));
    }

    #[test]
    fn empty_binds_nothing() {
        let stmt = build(&Filter::empty(Field::Artists));

        assert!(where_clause(&stmt).contains(r#"coalesce(cardinality("artists"), 0) = 0"#));
        assert_eq!(stmt.values, Some(Values(vec![])));
    }

    #[test]
    fn unknown_field_is_an_error() {
        let err = condition::<songs::Entity>(&Filter::eq(Field::Catalog, "x")).unwrap_err();

        assert!(matches!(
            err,
            StoreError::UnknownField {
                collection: "songs",
                field: Field::Catalog,
            }
        ));
    }
}
