use diesel::{pg::Pg, prelude::*};

use crate::{db::schema, model};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::group)]
#[diesel(check_for_backend(Pg))]
pub struct Group {
    pub id: uuid::Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::membership)]
#[diesel(check_for_backend(Pg))]
#[diesel(primary_key(user_id, group_id))]
#[diesel(belongs_to(model::user::User, foreign_key = user_id))]
#[diesel(belongs_to(Group, foreign_key = group_id))]
pub struct Membership {
    pub user_id: uuid::Uuid,
    pub group_id: uuid::Uuid,
}
