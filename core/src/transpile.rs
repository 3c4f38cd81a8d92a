// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Field mapping between Cozy contacts and Google people.
//!
//! Sync metadata is not mapped here; strategies record it once the remote identifier
//! is known.

use contactsync_google::{
    Address as GoogleAddress, Biography, Birthday, Date, EmailAddress, FieldMetadata,
    Organization, Person, PersonName, PhoneNumber,
};

use crate::contact::{Address, Contact, CozyMetadata, Email, Name, Phone};

/// Maps a Google person onto a new, unsaved Cozy contact.
#[must_use]
pub fn to_cozy(person: &Person) -> Contact {
    let name = pick(&person.names, |a| a.metadata.as_ref());

    let email_primary = primary_index(&person.email_addresses, |a| a.metadata.as_ref());
    let email = person
        .email_addresses
        .iter()
        .enumerate()
        .filter_map(|(i, a)| {
            a.value.as_ref().map(|address| Email {
                address: address.clone(),
                kind: a.kind.clone(),
                primary: i == email_primary,
            })
        })
        .collect();

    let phone_primary = primary_index(&person.phone_numbers, |a| a.metadata.as_ref());
    let phone = person
        .phone_numbers
        .iter()
        .enumerate()
        .filter_map(|(i, a)| {
            a.value.as_ref().map(|number| Phone {
                number: number.clone(),
                kind: a.kind.clone(),
                primary: i == phone_primary,
            })
        })
        .collect();

    let address_primary = primary_index(&person.addresses, |a| a.metadata.as_ref());
    let address = person
        .addresses
        .iter()
        .enumerate()
        .map(|(i, a)| Address {
            formatted_address: a.formatted_value.clone(),
            street: a.street_address.clone(),
            city: a.city.clone(),
            region: a.region.clone(),
            post_code: a.postal_code.clone(),
            country: a.country.clone(),
            kind: a.kind.clone(),
            primary: i == address_primary,
        })
        .collect();

    let organization = pick(&person.organizations, |a| a.metadata.as_ref());

    Contact {
        id: None,
        fullname: name.and_then(|a| {
            a.display_name
                .clone()
                .or_else(|| a.unstructured_name.clone())
        }),
        name: name.map(|a| Name {
            given_name: a.given_name.clone(),
            family_name: a.family_name.clone(),
            additional_name: a.middle_name.clone(),
            name_prefix: a.honorific_prefix.clone(),
            name_suffix: a.honorific_suffix.clone(),
        }),
        email,
        phone,
        address,
        birthday: pick(&person.birthdays, |a| a.metadata.as_ref()).and_then(format_birthday),
        note: pick(&person.biographies, |a| a.metadata.as_ref()).and_then(|a| a.value.clone()),
        company: organization.and_then(|a| a.name.clone()),
        job_title: organization.and_then(|a| a.title.clone()),
        cozy_metadata: CozyMetadata::default(),
    }
}

/// Maps a Cozy contact onto a Google person ready to be created.
///
/// The result has no resource name or etag.
#[must_use]
pub fn to_google(contact: &Contact) -> Person {
    let names = match (&contact.name, &contact.fullname) {
        (Some(name), _) => vec![PersonName {
            given_name: name.given_name.clone(),
            family_name: name.family_name.clone(),
            middle_name: name.additional_name.clone(),
            honorific_prefix: name.name_prefix.clone(),
            honorific_suffix: name.name_suffix.clone(),
            ..Default::default()
        }],
        (None, Some(fullname)) => vec![PersonName {
            unstructured_name: Some(fullname.clone()),
            ..Default::default()
        }],
        (None, None) => Vec::new(),
    };

    let organizations = if contact.company.is_some() || contact.job_title.is_some() {
        vec![Organization {
            metadata: None,
            name: contact.company.clone(),
            title: contact.job_title.clone(),
        }]
    } else {
        Vec::new()
    };

    Person {
        resource_name: None,
        etag: None,
        names,
        email_addresses: contact
            .email
            .iter()
            .map(|a| EmailAddress {
                metadata: primary_metadata(a.primary),
                value: Some(a.address.clone()),
                kind: a.kind.clone(),
            })
            .collect(),
        phone_numbers: contact
            .phone
            .iter()
            .map(|a| PhoneNumber {
                metadata: primary_metadata(a.primary),
                value: Some(a.number.clone()),
                kind: a.kind.clone(),
            })
            .collect(),
        addresses: contact
            .address
            .iter()
            .map(|a| GoogleAddress {
                metadata: primary_metadata(a.primary),
                formatted_value: a.formatted_address.clone(),
                street_address: a.street.clone(),
                city: a.city.clone(),
                region: a.region.clone(),
                postal_code: a.post_code.clone(),
                country: a.country.clone(),
                kind: a.kind.clone(),
            })
            .collect(),
        birthdays: contact
            .birthday
            .as_deref()
            .map(parse_birthday)
            .into_iter()
            .collect(),
        biographies: contact
            .note
            .iter()
            .map(|note| Biography {
                metadata: None,
                value: Some(note.clone()),
                content_type: Some("TEXT_PLAIN".to_string()),
            })
            .collect(),
        organizations,
    }
}

/// Index of the entry flagged primary, or of the first entry when none is.
fn primary_index<T>(items: &[T], metadata: impl Fn(&T) -> Option<&FieldMetadata>) -> usize {
    items
        .iter()
        .position(|a| metadata(a).and_then(|m| m.primary).unwrap_or(false))
        .unwrap_or(0)
}

fn pick<T>(items: &[T], metadata: impl Fn(&T) -> Option<&FieldMetadata>) -> Option<&T> {
    items.get(primary_index(items, metadata))
}

fn primary_metadata(primary: bool) -> Option<FieldMetadata> {
    primary.then(FieldMetadata::primary)
}

fn format_birthday(birthday: &Birthday) -> Option<String> {
    match birthday.date {
        Some(Date {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }) if year > 0 => Some(format!("{year:04}-{month:02}-{day:02}")),
        _ => birthday.text.clone(),
    }
}

fn parse_birthday(s: &str) -> Birthday {
    let Ok(date) = s.parse::<jiff::civil::Date>() else {
        tracing::debug!(birthday = s, "birthday is not a date, sent as text");
        return Birthday {
            metadata: None,
            date: None,
            text: Some(s.to_string()),
        };
    };

    Birthday {
        metadata: None,
        date: Some(Date {
            year: Some(i32::from(date.year())),
            month: u32::try_from(date.month()).ok(),
            day: u32::try_from(date.day()).ok(),
        }),
        text: None,
    }
}

#[cfg(test)]
mod tests {
    use contactsync_google::{ETag, ResourceName};

    use super::*;
    use crate::contact::SyncEntry;

    fn kayleigh() -> Person {
        Person {
            resource_name: Some(ResourceName::from("people/111")),
            etag: Some(ETag::from("etag-958e26de")),
            names: vec![PersonName {
                display_name: Some("Kayleigh Yundt".to_string()),
                given_name: Some("Kayleigh".to_string()),
                family_name: Some("Yundt".to_string()),
                ..Default::default()
            }],
            email_addresses: vec![
                EmailAddress {
                    metadata: None,
                    value: Some("k@home.example".to_string()),
                    kind: Some("home".to_string()),
                },
                EmailAddress {
                    metadata: Some(FieldMetadata::primary()),
                    value: Some("k@work.example".to_string()),
                    kind: Some("work".to_string()),
                },
            ],
            birthdays: vec![Birthday {
                metadata: None,
                date: Some(Date {
                    year: Some(1990),
                    month: Some(3),
                    day: Some(7),
                }),
                text: None,
            }],
            organizations: vec![Organization {
                metadata: None,
                name: Some("Cozy Cloud".to_string()),
                title: Some("Engineer".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn to_cozy_maps_names_and_fields() {
        let contact = to_cozy(&kayleigh());

        assert_eq!(contact.id, None);
        assert_eq!(contact.fullname.as_deref(), Some("Kayleigh Yundt"));
        let name = contact.name.as_ref().unwrap();
        assert_eq!(name.given_name.as_deref(), Some("Kayleigh"));
        assert_eq!(name.family_name.as_deref(), Some("Yundt"));
        assert_eq!(contact.birthday.as_deref(), Some("1990-03-07"));
        assert_eq!(contact.company.as_deref(), Some("Cozy Cloud"));
        assert_eq!(contact.job_title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn to_cozy_keeps_the_flagged_primary_email() {
        let contact = to_cozy(&kayleigh());

        let primary: Vec<_> = contact.email.iter().filter(|a| a.primary).collect();
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].address, "k@work.example");
    }

    #[test]
    fn to_cozy_does_not_link_the_contact() {
        let contact = to_cozy(&kayleigh());
        assert!(contact.cozy_metadata.sync.is_empty());
    }

    #[test]
    fn to_cozy_uses_birthday_text_without_year() {
        let person = Person {
            birthdays: vec![Birthday {
                metadata: None,
                date: Some(Date {
                    year: None,
                    month: Some(3),
                    day: Some(7),
                }),
                text: Some("March 7".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(to_cozy(&person).birthday.as_deref(), Some("March 7"));
    }

    #[test]
    fn to_google_maps_contact_without_server_fields() {
        let mut contact = Contact {
            id: Some("reinhold-jenkins-no-source".to_string()),
            name: Some(Name {
                given_name: Some("Reinhold".to_string()),
                family_name: Some("Jenkins".to_string()),
                ..Default::default()
            }),
            phone: vec![Phone {
                number: "+33 6 00 00 00 00".to_string(),
                kind: Some("mobile".to_string()),
                primary: true,
            }],
            birthday: Some("1985-12-24".to_string()),
            note: Some("met at the conference".to_string()),
            ..Default::default()
        };
        contact.set_sync_entry(&"other".into(), SyncEntry::new("people/1"));

        let person = to_google(&contact);

        assert!(person.resource_name.is_none());
        assert!(person.etag.is_none());
        assert_eq!(person.names[0].given_name.as_deref(), Some("Reinhold"));
        assert_eq!(person.names[0].family_name.as_deref(), Some("Jenkins"));
        assert_eq!(person.phone_numbers[0].metadata, Some(FieldMetadata::primary()));
        assert_eq!(
            person.birthdays[0].date,
            Some(Date {
                year: Some(1985),
                month: Some(12),
                day: Some(24),
            })
        );
        assert_eq!(
            person.biographies[0].value.as_deref(),
            Some("met at the conference")
        );
        assert!(person.organizations.is_empty());
    }

    #[test]
    fn to_google_falls_back_to_fullname() {
        let contact = Contact {
            fullname: Some("Larue Cremin".to_string()),
            ..Default::default()
        };

        let person = to_google(&contact);
        assert_eq!(
            person.names[0].unstructured_name.as_deref(),
            Some("Larue Cremin")
        );
    }
}
