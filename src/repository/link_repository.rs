use rusqlite::Connection;

use crate::model::repository;

/// creates the share link row for the passed user with the passed token,
/// public from the start. The unique constraint on userId guarantees at most
/// one row per user; the caller must check one doesn't exist yet
pub fn create_link(
    user_id: u32,
    token: &String,
    con: &Connection,
) -> Result<repository::ShareLink, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/links/create_link.sql"))?;
    let id = pst.insert(rusqlite::params![user_id, token])? as u32;
    Ok(repository::ShareLink {
        id,
        user_id,
        token: token.clone(),
        is_public: true,
    })
}

/// looks up a user's share link, or `None` if they never enabled sharing
pub fn get_by_user(
    user_id: u32,
    con: &Connection,
) -> Result<Option<repository::ShareLink>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/links/get_by_user.sql"))?;
    match pst.query_row(rusqlite::params![user_id], link_mapper) {
        Ok(link) => Ok(Some(link)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn get_by_token(
    token: &String,
    con: &Connection,
) -> Result<Option<repository::ShareLink>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/links/get_by_token.sql"))?;
    match pst.query_row(rusqlite::params![token], link_mapper) {
        Ok(link) => Ok(Some(link)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// flips the public flag in a single statement so concurrent owner toggles
/// serialize inside sqlite instead of racing a read-modify-write. The token
/// column is never touched
pub fn toggle_link(user_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/links/toggle_link.sql"))?;
    pst.execute(rusqlite::params![user_id])?;
    Ok(())
}

fn link_mapper(row: &rusqlite::Row) -> Result<repository::ShareLink, rusqlite::Error> {
    let id: u32 = row.get(0)?;
    let user_id: u32 = row.get(1)?;
    let token: String = row.get(2)?;
    let is_public: bool = row.get(3)?;
    Ok(repository::ShareLink {
        id,
        user_id,
        token,
        is_public,
    })
}

#[cfg(test)]
mod create_link_tests {
    use crate::repository::link_repository::{create_link, get_by_token, get_by_user};
    use crate::repository::open_connection;
    use crate::test::{cleanup, create_user_db, refresh_db};

    #[test]
    fn create_link_starts_public() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let con = open_connection();
        let link = create_link(user_id, &"token123".to_string(), &con).unwrap();
        let by_user = get_by_user(user_id, &con).unwrap();
        let by_token = get_by_token(&"token123".to_string(), &con).unwrap();
        con.close().unwrap();
        assert!(link.is_public);
        assert_eq!(Some(link.clone()), by_user);
        assert_eq!(Some(link), by_token);
        cleanup();
    }

    #[test]
    fn get_by_user_returns_none_without_a_link() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let con = open_connection();
        let found = get_by_user(user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(None, found);
        cleanup();
    }
}
