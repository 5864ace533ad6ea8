//! Wire representation of the listing endpoint payload.
//!
//! The payload is decoded entry by entry: entries which are not objects, miss
//! any of the `id`, `name` or `email` fields, or have an invalid [`Name`] or
//! [`Email`] are skipped. Absent nested objects and optional text fields
//! decode as empty text.

use serde::Deserialize;
use serde_json::Value;
use tracing as log;

use crate::domain::{
    user::{self, Address, Company, Email, Geo, Name, Origin, Phone},
    User,
};

/// Decodes the provided response `body` into [`User`]s, skipping the
/// malformed entries.
///
/// # Errors
///
/// If the `body` is not a JSON array.
pub fn decode(body: &[u8]) -> Result<Vec<User>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_slice(body)?;
    let total = entries.len();

    let users = entries
        .into_iter()
        .enumerate()
        .filter_map(|(n, entry)| {
            let user = serde_json::from_value::<UserDto>(entry)
                .ok()
                .and_then(UserDto::into_domain);
            if user.is_none() {
                log::warn!("skipping malformed `User` entry #{n}");
            }
            user
        })
        .collect::<Vec<_>>();

    if users.len() < total {
        log::warn!("decoded {} of {total} `User` entries", users.len());
    }
    Ok(users)
}

/// [`User`] as received from the listing endpoint.
#[derive(Debug, Deserialize)]
struct UserDto {
    id: Option<u64>,
    name: Option<String>,
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    address: Option<AddressDto>,
    #[serde(default)]
    company: Option<CompanyDto>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressDto {
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    suite: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    zipcode: Option<String>,
    #[serde(default)]
    geo: Option<GeoDto>,
}

#[derive(Debug, Deserialize)]
struct GeoDto {
    lat: String,
    lng: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompanyDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    catch_phrase: Option<String>,
    #[serde(default)]
    bs: Option<String>,
}

impl UserDto {
    /// Converts this [`UserDto`] into a [`User`], if it has all the required
    /// fields and its [`Name`] and [`Email`] are valid.
    fn into_domain(self) -> Option<User> {
        let Self {
            id,
            name,
            email,
            phone,
            address,
            company,
        } = self;

        let name = Name::new(name?.trim())?;
        let email = Email::new(email?.trim())?;

        let AddressDto {
            street,
            suite,
            city,
            zipcode,
            geo,
        } = address.unwrap_or_default();
        let CompanyDto {
            name: company_name,
            catch_phrase,
            bs,
        } = company.unwrap_or_default();

        Some(User {
            id: user::Id::from(id?),
            name,
            email,
            phone: Phone::from(phone.unwrap_or_default()),
            address: Address {
                street: street.unwrap_or_default(),
                suite: suite.unwrap_or_default(),
                city: city.unwrap_or_default(),
                zipcode: zipcode.unwrap_or_default(),
                geo: geo.map(|GeoDto { lat, lng }| Geo { lat, lng }),
            },
            company: Company {
                name: company_name.unwrap_or_default(),
                catch_phrase: catch_phrase.unwrap_or_default(),
                bs: bs.unwrap_or_default(),
            },
            origin: Origin::Remote,
        })
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::user::{Geo, Origin};

    use super::decode;

    #[test]
    fn decodes_full_record() {
        let body = br#"[{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": {"lat": "-37.3159", "lng": "81.1496"}
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }]"#;

        let users = decode(body).unwrap();
        assert_eq!(users.len(), 1);

        let user = &users[0];
        assert_eq!(u64::from(user.id), 1);
        assert_eq!(AsRef::<str>::as_ref(&user.name), "Leanne Graham");
        assert_eq!(AsRef::<str>::as_ref(&user.email), "Sincere@april.biz");
        assert_eq!(AsRef::<str>::as_ref(&user.phone), "1-770-736-8031 x56442");
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(
            user.address.geo,
            Some(Geo {
                lat: "-37.3159".into(),
                lng: "81.1496".into(),
            }),
        );
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net",
        );
        assert_eq!(user.company.bs, "harness real-time e-markets");
        assert_eq!(user.origin, Origin::Remote);
    }

    #[test]
    fn defaults_optional_parts() {
        let body = br#"[{"id": 2, "name": "Bob", "email": "b@x.com"}]"#;

        let users = decode(body).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(AsRef::<str>::as_ref(&users[0].phone), "");
        assert_eq!(users[0].address.street, "");
        assert_eq!(users[0].address.geo, None);
        assert_eq!(users[0].company.name, "");
    }

    #[test]
    fn skips_malformed_entries() {
        let body = br#"[
            {"id": 1, "name": "Alice", "email": "a@x.com"},
            {"id": 2, "email": "b@x.com"},
            {"name": "Carol", "email": "c@x.com"},
            {"id": "4", "name": "Dan", "email": "d@x.com"},
            42,
            {"id": 5, "name": "Eve", "email": "e@x.com"}
        ]"#;

        let ids = decode(body)
            .unwrap()
            .into_iter()
            .map(|u| u.id.into())
            .collect::<Vec<u64>>();
        assert_eq!(ids, [1, 5]);
    }

    #[test]
    fn rejects_non_array_body() {
        assert!(decode(br#"{"id": 1}"#).is_err());
        assert!(decode(b"<html></html>").is_err());
        assert!(decode(b"").is_err());
    }

    #[test]
    fn skips_entries_with_invalid_name_or_email() {
        let body = br#"[
            {"id": 1, "name": " ", "email": "a@x.com"},
            {"id": 2, "name": "Bob", "email": "not-an-email"},
            {"id": 3, "name": " Carol ", "email": " c@x.com "}
        ]"#;

        let users = decode(body).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(u64::from(users[0].id), 3);
        assert_eq!(AsRef::<str>::as_ref(&users[0].name), "Carol");
        assert_eq!(AsRef::<str>::as_ref(&users[0].email), "c@x.com");
    }
}
