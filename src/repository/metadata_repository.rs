use rusqlite::Connection;

/// reads the schema version row out of the metadata table. Errors if the
/// table doesn't exist yet, which is how a fresh database is detected
pub fn get_version(con: &Connection) -> Result<String, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/metadata/get_version.sql"))?;
    pst.query_row([], |row| row.get(0))
}
