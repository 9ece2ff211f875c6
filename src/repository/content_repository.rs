use rusqlite::Connection;

use crate::model::content_types::ContentTypes;
use crate::model::repository;

/// inserts the passed record and returns the generated id
pub fn create_content(
    record: &repository::ContentRecord,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/content/create_content.sql"
    ))?;
    let id = pst.insert(rusqlite::params![
        record.user_id,
        record.title,
        record.link,
        record.content_type.to_string(),
        record.notes,
        record.is_shared
    ])? as u32;
    Ok(id)
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<repository::ContentRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/content/get_by_id.sql"))?;
    pst.query_row(rusqlite::params![id], content_mapper)
}

/// returns every content item the passed user owns, ordered by id
pub fn get_for_user(
    user_id: u32,
    con: &Connection,
) -> Result<Vec<repository::ContentRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/content/get_for_user.sql"))?;
    let rows = pst.query_map(rusqlite::params![user_id], content_mapper)?;
    let mut records: Vec<repository::ContentRecord> = Vec::new();
    for res in rows {
        records.push(res?);
    }
    Ok(records)
}

/// returns only the items the passed user has individually flagged shared,
/// ordered by id. This is the anonymous brain view
pub fn get_shared_for_user(
    user_id: u32,
    con: &Connection,
) -> Result<Vec<repository::ContentRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/content/get_shared_for_user.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![user_id], content_mapper)?;
    let mut records: Vec<repository::ContentRecord> = Vec::new();
    for res in rows {
        records.push(res?);
    }
    Ok(records)
}

/// updates the scalar fields of the passed record. Ownership checking needs to
/// be done on the caller's end
pub fn update_content(
    record: &repository::ContentRecord,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/content/update_content.sql"
    ))?;
    pst.execute(rusqlite::params![
        record.title,
        record.link,
        record.content_type.to_string(),
        record.notes,
        record.id
    ])?;
    Ok(())
}

pub fn delete_content(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/content/delete_content.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// flips the item-level shared flag. Ownership checking needs to be done on
/// the caller's end
pub fn set_shared(id: u32, shared: bool, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/content/set_shared.sql"))?;
    pst.execute(rusqlite::params![shared, id])?;
    Ok(())
}

/// marks every item the passed user owns as shared; returns the number of rows touched
pub fn share_all(user_id: u32, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/content/share_all.sql"))?;
    let changed = pst.execute(rusqlite::params![user_id])?;
    Ok(changed)
}

fn content_mapper(row: &rusqlite::Row) -> Result<repository::ContentRecord, rusqlite::Error> {
    let id: u32 = row.get(0)?;
    let user_id: u32 = row.get(1)?;
    let title: String = row.get(2)?;
    let link: String = row.get(3)?;
    let content_type: String = row.get(4)?;
    let notes: Option<String> = row.get(5)?;
    let is_shared: bool = row.get(6)?;
    Ok(repository::ContentRecord {
        id: Some(id),
        user_id,
        title,
        link,
        content_type: ContentTypes::from(content_type.as_str()),
        notes,
        is_shared,
    })
}


#[cfg(test)]
mod get_shared_for_user_tests {
    use crate::repository::{content_repository, open_connection};
    use crate::test::*;

    #[test]
    fn only_returns_items_flagged_shared() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let shared = create_content_db(user_id, "shared", true);
        create_content_db(user_id, "hidden", false);
        let con = open_connection();
        let records = content_repository::get_shared_for_user(user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(1, records.len());
        assert_eq!(Some(shared), records[0].id);
        cleanup();
    }

    #[test]
    fn does_not_leak_other_users_items() {
        refresh_db();
        let first = create_user_db("a@b.com");
        let second = create_user_db("c@d.com");
        create_content_db(second, "other", true);
        let con = open_connection();
        let records = content_repository::get_shared_for_user(first, &con).unwrap();
        con.close().unwrap();
        assert!(records.is_empty());
        cleanup();
    }
}


#[cfg(test)]
mod share_all_tests {
    use crate::repository::{content_repository, open_connection};
    use crate::test::*;

    #[test]
    fn share_all_only_touches_own_items() {
        refresh_db();
        let first = create_user_db("a@b.com");
        let second = create_user_db("c@d.com");
        create_content_db(first, "one", false);
        create_content_db(first, "two", true);
        let other = create_content_db(second, "other", false);
        let con = open_connection();
        let changed = content_repository::share_all(first, &con).unwrap();
        let untouched = content_repository::get_by_id(other, &con).unwrap();
        let mine = content_repository::get_for_user(first, &con).unwrap();
        con.close().unwrap();
        assert_eq!(2, changed);
        assert!(mine.iter().all(|c| c.is_shared));
        assert!(!untouched.is_shared);
        cleanup();
    }
}
