#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

use handler::{
    api_handler::{api_version, signin, signup},
    brain_handler::{brain_status, get_brain, share_brain},
    content_handler::{
        create_content, delete_content, get_content, set_shared, share_all, update_content,
    },
    tag_handler::{create_tag, get_tags},
};

use crate::repository::initialize_db;

mod config;
mod db_migrations;
mod guard;
mod handler;
mod model;
mod repository;
mod service;
#[cfg(test)]
mod test;

#[cfg(not(test))]
fn configure_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file("second_brain.log").unwrap())
        .apply()
        .unwrap();
}

#[launch]
fn rocket() -> Rocket<Build> {
    #[cfg(not(test))]
    configure_logger();
    initialize_db().unwrap();
    rocket::build()
        .mount("/api", routes![api_version, signup, signin])
        .mount(
            "/content",
            routes![
                create_content,
                get_content,
                update_content,
                delete_content,
                set_shared,
                share_all
            ],
        )
        .mount("/tag", routes![create_tag, get_tags])
        .mount("/brain", routes![share_brain, brain_status, get_brain])
}

/// signs the passed email up (ignoring "already exists") and signs them in,
/// returning a ready-to-use Authorization header
#[cfg(test)]
fn signin_header(
    client: &rocket::local::blocking::Client,
    email: &str,
) -> rocket::http::Header<'static> {
    use crate::model::response::api_responses::SessionToken;
    use rocket::serde::json::serde_json as serde;

    let body = format!(r#"{{"email":"{email}","password":"password123"}}"#);
    client
        .post(uri!("/api/signup"))
        .body(body.clone())
        .dispatch();
    let res = client.post(uri!("/api/signin")).body(body).dispatch();
    let token: SessionToken = serde::from_str(res.into_string().unwrap().as_str()).unwrap();
    rocket::http::Header::new("Authorization", format!("Bearer {}", token.token))
}



#[cfg(test)]
mod content_tests {
    use rocket::http::Status;
    use rocket::local::blocking::Client;
    use rocket::serde::json::serde_json as serde;

    use crate::model::api::ContentApi;
    use crate::test::{cleanup, refresh_db};

    use super::{rocket, signin_header};

    fn create(client: &Client, auth: &rocket::http::Header<'static>, title: &str) -> ContentApi {
        let res = client
            .post(uri!("/content"))
            .header(auth.clone())
            .body(format!(
                r#"{{"title":"{title}","link":"https://example.com/post","type":"article"}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        serde::from_str(res.into_string().unwrap().as_str()).unwrap()
    }

    #[test]
    fn create_content() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let auth = signin_header(&client, "a@b.com");
        let content = create(&client, &auth, "First Post");
        assert_eq!("First Post", content.title);
        assert!(!content.is_shared);
        assert!(content.tags.is_empty());
        cleanup();
    }

    #[test]
    fn create_content_bad_type() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let auth = signin_header(&client, "a@b.com");
        let res = client
            .post(uri!("/content"))
            .header(auth)
            .body(r#"{"title":"Post","link":"https://example.com","type":"podcast"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        cleanup();
    }

    #[test]
    fn get_content_only_returns_own_items() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let first = signin_header(&client, "a@b.com");
        let second = signin_header(&client, "c@d.com");
        create(&client, &first, "mine");
        create(&client, &second, "theirs");
        let res = client.get(uri!("/content")).header(first).dispatch();
        let content: Vec<ContentApi> =
            serde::from_str(res.into_string().unwrap().as_str()).unwrap();
        assert_eq!(1, content.len());
        assert_eq!("mine", content[0].title);
        cleanup();
    }

    #[test]
    fn update_content_requires_ownership() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let owner = signin_header(&client, "a@b.com");
        let other = signin_header(&client, "c@d.com");
        let content = create(&client, &owner, "mine");
        let res = client
            .put(uri!("/content"))
            .header(other)
            .body(format!(
                r#"{{"id":{},"title":"stolen","link":"https://example.com","type":"article","tags":[]}}"#,
                content.id
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
        cleanup();
    }

    #[test]
    fn delete_content() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let auth = signin_header(&client, "a@b.com");
        let content = create(&client, &auth, "doomed");
        let res = client
            .delete(format!("/content/{}", content.id))
            .header(auth.clone())
            .dispatch();
        assert_eq!(res.status(), Status::NoContent);
        let res = client.get(uri!("/content")).header(auth).dispatch();
        let content: Vec<ContentApi> =
            serde::from_str(res.into_string().unwrap().as_str()).unwrap();
        assert!(content.is_empty());
        cleanup();
    }

    #[test]
    fn delete_content_keeps_user() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let auth = signin_header(&client, "a@b.com");
        let content = create(&client, &auth, "doomed");
        client
            .delete(format!("/content/{}", content.id))
            .header(auth)
            .dispatch();
        // the account survives its content
        let res = client
            .post(uri!("/api/signin"))
            .body(r#"{"email":"a@b.com","password":"password123"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        cleanup();
    }

    #[test]
    fn set_shared_and_share_all() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let auth = signin_header(&client, "a@b.com");
        let first = create(&client, &auth, "first");
        create(&client, &auth, "second");
        let res = client
            .patch(format!("/content/{}/share", first.id))
            .header(auth.clone())
            .body(r#"{"isShared":true}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let updated: ContentApi = serde::from_str(res.into_string().unwrap().as_str()).unwrap();
        assert!(updated.is_shared);
        let res = client
            .post(uri!("/content/share-all"))
            .header(auth)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(res.into_string().unwrap(), r#"{"shared":2}"#);
        cleanup();
    }
}
