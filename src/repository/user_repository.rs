use rusqlite::Connection;

use crate::model::repository;

/// creates a new user row and returns its id. This does not check if the email
/// is taken, so the caller must check that themselves
pub fn create_user(
    email: &String,
    password_hash: &String,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/create_user.sql"))?;
    let id = pst.insert(rusqlite::params![email, password_hash])? as u32;
    Ok(id)
}

/// searches for a user by exact email.
///
/// if `None` is returned, that means there was no match
pub fn get_by_email(
    email: &String,
    con: &Connection,
) -> Result<Option<repository::User>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/get_by_email.sql"))?;
    match pst.query_row(rusqlite::params![email], user_mapper) {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<repository::User, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/get_by_id.sql"))?;
    pst.query_row(rusqlite::params![id], user_mapper)
}

/// stores a freshly issued bearer token for the passed user
pub fn save_token(token: &String, user_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/save_token.sql"))?;
    pst.execute(rusqlite::params![token, user_id])?;
    Ok(())
}

/// resolves a bearer token back to the user it was issued to, or `None` if the
/// token was never issued
pub fn get_user_id_by_token(
    token: &String,
    con: &Connection,
) -> Result<Option<u32>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/users/get_user_id_by_token.sql"
    ))?;
    match pst.query_row(rusqlite::params![token], |row| row.get(0)) {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

fn user_mapper(row: &rusqlite::Row) -> Result<repository::User, rusqlite::Error> {
    let id: u32 = row.get(0)?;
    let email: String = row.get(1)?;
    let password_hash: String = row.get(2)?;
    Ok(repository::User {
        id,
        email,
        password_hash,
    })
}



#[cfg(test)]
mod token_tests {
    use crate::repository::open_connection;
    use crate::repository::user_repository::{create_user, get_user_id_by_token, save_token};
    use crate::test::{cleanup, refresh_db};

    #[test]
    fn round_trips_issued_tokens() {
        refresh_db();
        let con = open_connection();
        let id = create_user(&"a@b.com".to_string(), &"hash".to_string(), &con).unwrap();
        save_token(&"abc123".to_string(), id, &con).unwrap();
        let resolved = get_user_id_by_token(&"abc123".to_string(), &con).unwrap();
        con.close().unwrap();
        assert_eq!(Some(id), resolved);
        cleanup();
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        refresh_db();
        let con = open_connection();
        let resolved = get_user_id_by_token(&"nope".to_string(), &con).unwrap();
        con.close().unwrap();
        assert_eq!(None, resolved);
        cleanup();
    }
}
