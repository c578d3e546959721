//! Tag-driven and name-driven application of the cipher to record fields.

use tracing::warn;

use super::{Direction, FieldMut, Protected};
use crate::error::CryptoError;
use crate::service::Service;

/// Depth-first, pre-order walk transforming every field flagged as protected.
///
/// Nested records are entered before later siblings are visited. The walk
/// aborts on the first cipher error and propagates it verbatim; fields
/// already transformed stay transformed (no rollback).
pub(crate) fn walk_tagged(
    service: &Service,
    record: &mut dyn Protected,
    direction: Direction,
) -> Result<(), CryptoError> {
    for field in record.fields_mut() {
        match field {
            FieldMut::Record { value, .. } => walk_tagged(service, value, direction)?,
            FieldMut::Text {
                name,
                protected: true,
                value,
            } => apply(service, direction, name, value)?,
            FieldMut::Text {
                protected: false, ..
            } => {}
        }
    }
    Ok(())
}

/// Transform the named top-level fields, in caller order, ignoring the
/// protected flag.
///
/// Names that do not resolve to a string member of the top-level record are
/// skipped silently; there is no recursion into nested records here. Aborts
/// on the first cipher error, leaving earlier fields transformed.
pub(crate) fn apply_named(
    service: &Service,
    record: &mut dyn Protected,
    direction: Direction,
    names: &[&str],
) -> Result<(), CryptoError> {
    let mut fields = record.fields_mut();
    for requested in names {
        let Some(field) = fields.iter_mut().find(|f| f.name() == *requested) else {
            continue;
        };
        if let FieldMut::Text { name, value, .. } = field {
            apply(service, direction, *name, &mut **value)?;
        }
    }
    Ok(())
}

fn apply(
    service: &Service,
    direction: Direction,
    name: &str,
    value: &mut String,
) -> Result<(), CryptoError> {
    // Empty fields mean "nothing to protect", not corrupt data.
    if value.is_empty() {
        return Ok(());
    }
    let transformed = match direction {
        Direction::Encrypt => service.encrypt(value.as_str()),
        Direction::Decrypt => service.decrypt(value.as_str()),
    };
    match transformed {
        Ok(output) => {
            *value = output;
            Ok(())
        }
        Err(e) => {
            warn!(field = name, error = %e, "record field transform failed; aborting walk");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{impl_protected, CryptoError, Service};

    struct Address {
        street: String,
        zip: String,
    }

    impl_protected!(Address {
        street: plain,
        zip: protected,
    });

    struct User {
        email: String,
        name: String,
        address: Address,
    }

    impl_protected!(User {
        email: protected,
        name: plain,
        address: nested,
    });

    struct Account {
        label: String,
        user: User,
    }

    impl_protected!(Account {
        label: plain,
        user: nested,
    });

    fn service() -> Service {
        Service::new(&[0x42; 32]).unwrap()
    }

    fn sample_user() -> User {
        User {
            email: "a@b.com".into(),
            name: "Alice".into(),
            address: Address {
                street: "Main St 1".into(),
                zip: "90210".into(),
            },
        }
    }

    #[test]
    fn tagged_transform_is_selective() {
        let svc = service();
        let mut user = sample_user();
        svc.encrypt_record(&mut user).unwrap();

        assert_ne!(user.email, "a@b.com");
        assert_eq!(user.name, "Alice");
        // The ciphertext round-trips through the plain text-mode API.
        assert_eq!(svc.decrypt(&user.email).unwrap(), "a@b.com");
    }

    #[test]
    fn nesting_depth_does_not_change_behaviour() {
        let svc = service();

        // One level deep.
        let mut user = sample_user();
        svc.encrypt_record(&mut user).unwrap();
        assert_ne!(user.address.zip, "90210");
        assert_eq!(user.address.street, "Main St 1");

        // Two levels deep: identical effect on the same member.
        let mut account = Account {
            label: "primary".into(),
            user: sample_user(),
        };
        svc.encrypt_record(&mut account).unwrap();
        assert_ne!(account.user.address.zip, "90210");
        assert_eq!(account.label, "primary");

        svc.decrypt_record(&mut account).unwrap();
        assert_eq!(account.user.address.zip, "90210");
        assert_eq!(account.user.email, "a@b.com");
    }

    #[test]
    fn empty_protected_field_is_untouched() {
        let svc = service();
        let mut user = sample_user();
        user.email.clear();
        svc.encrypt_record(&mut user).unwrap();
        assert_eq!(user.email, "");
    }

    #[test]
    fn named_mode_ignores_protection_flag() {
        let svc = service();
        let mut user = sample_user();
        svc.encrypt_fields(&mut user, &["name"]).unwrap();

        assert_ne!(user.name, "Alice");
        assert_eq!(user.email, "a@b.com");
        svc.decrypt_fields(&mut user, &["name"]).unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn named_mode_skips_unknown_names() {
        let svc = service();
        let mut user = sample_user();
        svc.encrypt_fields(&mut user, &["no_such_field"]).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn named_mode_does_not_recurse_into_nested_records() {
        let svc = service();
        let mut user = sample_user();
        // "address" resolves to a nested record, "zip" only exists below the
        // top level; both are silent no-ops.
        svc.encrypt_fields(&mut user, &["address", "zip"]).unwrap();
        assert_eq!(user.address.zip, "90210");
    }

    #[test]
    fn tagged_decrypt_aborts_on_first_bad_field() {
        struct Pair {
            first: String,
            second: String,
        }
        impl_protected!(Pair {
            first: protected,
            second: protected,
        });

        let svc = service();
        let mut pair = Pair {
            first: svc.encrypt("one").unwrap(),
            second: "!!!not-base64".into(),
        };

        let err = svc.decrypt_record(&mut pair).unwrap_err();
        assert_eq!(err, CryptoError::InvalidData);
        // Fields before the failure stay transformed — no rollback.
        assert_eq!(pair.first, "one");
        assert_eq!(pair.second, "!!!not-base64");
    }

    #[test]
    fn named_abort_respects_caller_order() {
        struct Pair {
            first: String,
            second: String,
        }
        impl_protected!(Pair {
            first: protected,
            second: protected,
        });

        let svc = service();
        let mut pair = Pair {
            first: svc.encrypt("one").unwrap(),
            second: "!!!not-base64".into(),
        };

        // "second" is requested first, so "first" is never reached.
        let err = svc
            .decrypt_fields(&mut pair, &["second", "first"])
            .unwrap_err();
        assert_eq!(err, CryptoError::InvalidData);
        assert_eq!(svc.decrypt(&pair.first).unwrap(), "one");
    }
}
