use std::collections::HashMap;

use rusqlite::Connection;

use crate::model::repository;

/// creates a new user-owned tag in the database. This does not check if the
/// tag already exists in the caller's scope, so the caller must check that
/// themselves
pub fn create_tag(
    title: &String,
    user_id: u32,
    con: &Connection,
) -> Result<repository::Tag, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/create_tag.sql"))?;
    let id = pst.insert(rusqlite::params![title, user_id])? as u32;
    Ok(repository::Tag {
        id,
        title: title.clone(),
        user_id: Some(user_id),
        is_global: false,
    })
}

/// searches for a tag that case-insensitively matches the passed title within
/// the passed user's scope (their own tags plus all global tags).
///
/// if `None` is returned, that means the title is free to use
pub fn find_in_scope(
    title: &String,
    user_id: u32,
    con: &Connection,
) -> Result<Option<repository::Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/find_in_scope.sql"))?;
    match pst.query_row(rusqlite::params![title, user_id], tag_mapper) {
        Ok(tag) => Ok(Some(tag)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// returns the union of the passed user's own tags and all global tags
pub fn get_for_user(
    user_id: u32,
    con: &Connection,
) -> Result<Vec<repository::Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/get_for_user.sql"))?;
    let rows = pst.query_map(rusqlite::params![user_id], tag_mapper)?;
    let mut tags: Vec<repository::Tag> = Vec::new();
    for tag_res in rows {
        tags.push(tag_res?);
    }
    Ok(tags)
}

/// looks up a tag by id, but only if the passed user may reference it (it's
/// theirs or it's global). Used to validate tag references before persistence
pub fn get_visible_by_id(
    id: u32,
    user_id: u32,
    con: &Connection,
) -> Result<Option<repository::Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/tags/get_visible_by_id.sql"))?;
    match pst.query_row(rusqlite::params![id, user_id], tag_mapper) {
        Ok(tag) => Ok(Some(tag)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// the caller of this function will need to make sure the tag exists and isn't already on the content
pub fn add_tag_to_content(
    content_id: u32,
    tag_id: u32,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/add_tag_to_content.sql"
    ))?;
    pst.execute(rusqlite::params![content_id, tag_id])?;
    Ok(())
}

/// removes every tag link from the passed content item; used when replacing a tag set
pub fn remove_tags_from_content(content_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/remove_tags_from_content.sql"
    ))?;
    pst.execute(rusqlite::params![content_id])?;
    Ok(())
}

pub fn get_tags_for_content(
    content_id: u32,
    con: &Connection,
) -> Result<Vec<repository::Tag>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/tags/get_tags_for_content.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![content_id], tag_mapper)?;
    let mut tags: Vec<repository::Tag> = Vec::new();
    for tag_res in rows {
        tags.push(tag_res?);
    }
    Ok(tags)
}

/// batched tag lookup for a whole content list, keyed by content id. Items
/// without tags simply have no entry in the map
pub fn get_tags_for_contents(
    content_ids: Vec<u32>,
    con: &Connection,
) -> Result<HashMap<u32, Vec<repository::Tag>>, rusqlite::Error> {
    struct TagContent {
        content_id: u32,
        tag: repository::Tag,
    }
    // an empty in clause is a syntax error in sqlite
    if content_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let in_clause: Vec<String> = content_ids.iter().map(|it| format!("'{it}'")).collect();
    let in_clause = in_clause.join(",");
    let formatted_query = format!(
        include_str!("../assets/queries/tags/get_tags_for_contents.sql"),
        in_clause
    );
    let mut pst = con.prepare(formatted_query.as_str())?;
    let rows = pst.query_map([], |row| {
        let content_id: u32 = row.get(0)?;
        let id: u32 = row.get(1)?;
        let title: String = row.get(2)?;
        let user_id: Option<u32> = row.get(3)?;
        let is_global: bool = row.get(4)?;
        Ok(TagContent {
            content_id,
            tag: repository::Tag {
                id,
                title,
                user_id,
                is_global,
            },
        })
    })?;
    let mut mapped: HashMap<u32, Vec<repository::Tag>> = HashMap::new();
    for res in rows {
        let res = res?;
        mapped.entry(res.content_id).or_default().push(res.tag);
    }
    Ok(mapped)
}

fn tag_mapper(row: &rusqlite::Row) -> Result<repository::Tag, rusqlite::Error> {
    let id: u32 = row.get(0)?;
    let title: String = row.get(1)?;
    let user_id: Option<u32> = row.get(2)?;
    let is_global: bool = row.get(3)?;
    Ok(repository::Tag {
        id,
        title,
        user_id,
        is_global,
    })
}

#[cfg(test)]
mod create_tag_tests {
    use crate::repository::{open_connection, tag_repository};
    use crate::test::{cleanup, create_user_db, refresh_db};

    #[test]
    fn create_tag() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let con = open_connection();
        let tag = tag_repository::create_tag(&"test".to_string(), user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!("test", tag.title);
        assert_eq!(Some(user_id), tag.user_id);
        assert!(!tag.is_global);
        cleanup();
    }
}

#[cfg(test)]
mod find_in_scope_tests {
    use crate::repository::open_connection;
    use crate::repository::tag_repository::{create_tag, find_in_scope};
    use crate::test::*;

    #[test]
    fn find_in_scope_matches_own_tag_case_insensitively() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let con = open_connection();
        create_tag(&"rust".to_string(), user_id, &con).unwrap();
        let found = find_in_scope(&"RuSt".to_string(), user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!("rust", found.unwrap().title);
        cleanup();
    }

    #[test]
    fn find_in_scope_matches_global_tags() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let con = open_connection();
        // "tech" is seeded as a global tag by the v3 migration
        let found = find_in_scope(&"tech".to_string(), user_id, &con).unwrap();
        con.close().unwrap();
        let found = found.unwrap();
        assert!(found.is_global);
        assert_eq!(None, found.user_id);
        cleanup();
    }

    #[test]
    fn find_in_scope_ignores_other_users_tags() {
        refresh_db();
        let first = create_user_db("a@b.com");
        let second = create_user_db("c@d.com");
        let con = open_connection();
        create_tag(&"rust".to_string(), first, &con).unwrap();
        let found = find_in_scope(&"rust".to_string(), second, &con).unwrap();
        con.close().unwrap();
        assert_eq!(None, found);
        cleanup();
    }
}

#[cfg(test)]
mod get_for_user_tests {
    use crate::repository::open_connection;
    use crate::repository::tag_repository::{create_tag, get_for_user};
    use crate::test::*;

    #[test]
    fn get_for_user_unions_own_and_global_tags() {
        refresh_db();
        let first = create_user_db("a@b.com");
        let second = create_user_db("c@d.com");
        let con = open_connection();
        create_tag(&"mine".to_string(), first, &con).unwrap();
        create_tag(&"theirs".to_string(), second, &con).unwrap();
        let tags = get_for_user(first, &con).unwrap();
        con.close().unwrap();
        // the 4 seeded global tags plus the user's own
        assert_eq!(5, tags.len());
        assert!(tags.iter().any(|t| t.title == "mine"));
        assert!(tags.iter().all(|t| t.title != "theirs"));
        assert!(tags.iter().filter(|t| t.is_global).count() == 4);
        cleanup();
    }
}

#[cfg(test)]
mod get_visible_by_id_tests {
    use crate::repository::open_connection;
    use crate::repository::tag_repository::{create_tag, get_visible_by_id};
    use crate::test::*;

    #[test]
    fn other_users_tags_are_not_visible() {
        refresh_db();
        let first = create_user_db("a@b.com");
        let second = create_user_db("c@d.com");
        let con = open_connection();
        let tag = create_tag(&"rust".to_string(), first, &con).unwrap();
        let for_owner = get_visible_by_id(tag.id, first, &con).unwrap();
        let for_other = get_visible_by_id(tag.id, second, &con).unwrap();
        con.close().unwrap();
        assert!(for_owner.is_some());
        assert_eq!(None, for_other);
        cleanup();
    }

    #[test]
    fn global_tags_are_visible_to_everyone() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let global_id = create_global_tag_db("shared");
        let con = open_connection();
        let found = get_visible_by_id(global_id, user_id, &con).unwrap();
        con.close().unwrap();
        assert!(found.unwrap().is_global);
        cleanup();
    }
}
